mod run;

use crate::{config::Settings, report::OutputFormat};
use std::{process::ExitCode, time::Duration};

/// Action enum representing each possible command
#[derive(Debug)]
pub enum Action {
    Check {
        settings: Settings,
        timeout: Option<Duration>,
        format: OutputFormat,
        strict: bool,
    },
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the action fails to execute
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    fn settings() -> Settings {
        Settings {
            user: Some("alice".into()),
            password: Some("secret".into()),
            host: Some("example.com".into()),
            port: Some("5432".into()),
            dbname: Some("app".into()),
        }
    }

    #[test]
    fn test_action_debug_hides_password() {
        let action = Action::Check {
            settings: settings(),
            timeout: Some(Duration::from_secs(5)),
            format: OutputFormat::Json,
            strict: false,
        };

        let debug_str = format!("{action:?}");
        assert!(debug_str.contains("Check"));
        assert!(debug_str.contains("example.com"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_exit_status() {
        assert_eq!(run::exit_status(true, false), 0);
        assert_eq!(run::exit_status(false, false), 0);
        assert_eq!(run::exit_status(true, true), 0);
        assert_eq!(run::exit_status(false, true), 1);
    }
}
