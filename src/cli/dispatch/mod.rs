use crate::{cli::actions::Action, config::Settings, report::OutputFormat};
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use std::{path::PathBuf, time::Duration};

/// Convert `ArgMatches` into typed Action enum, resolving the connection
/// settings once
///
/// # Errors
///
/// Returns an error if a parameter holds an unexpected value
pub fn dispatch(matches: &ArgMatches) -> Result<Action> {
    let env_file = matches
        .get_one::<PathBuf>("env-file")
        .context("env file path is required")?;

    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .map(Duration::from_secs);

    let format = matches
        .get_one::<String>("format")
        .map(|f| f.parse::<OutputFormat>().map_err(|e| anyhow!(e)))
        .transpose()?
        .unwrap_or_default();

    let strict = matches.get_flag("strict");

    let settings = Settings::load(Some(env_file.as_path()));

    Ok(Action::Check {
        settings,
        timeout,
        format,
        strict,
    })
}
