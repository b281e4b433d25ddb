use super::Action;
use crate::{check, report};
use std::process::ExitCode;

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<ExitCode> {
    match action {
        Action::Check {
            settings,
            timeout,
            format,
            strict,
        } => {
            let outcome = check::run(&settings, timeout).await;

            println!("{}", report::render(&outcome, format)?);

            Ok(ExitCode::from(exit_status(outcome.is_ok(), strict)))
        }
    }
}

/// Failures only change the exit status in strict mode
#[must_use]
pub fn exit_status(success: bool, strict: bool) -> u8 {
    u8::from(strict && !success)
}
