use crate::{
    check::CheckReport,
    error::{CheckError, FailureKind},
};
use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::str::FromStr;

pub const SUCCESS_MESSAGE: &str = "Connection successful!";

/// How the outcome line is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}")),
        }
    }
}

#[derive(Serialize, Debug)]
struct Report {
    status: &'static str,
    time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    missing: Vec<&'static str>,
}

impl Report {
    fn new(outcome: &Result<CheckReport, CheckError>) -> Self {
        let time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        match outcome {
            Ok(report) => Self {
                status: "ok",
                time,
                elapsed_ms: Some(report.elapsed_ms()),
                kind: None,
                error: None,
                missing: Vec::new(),
            },
            Err(err) => Self {
                status: "error",
                time,
                elapsed_ms: None,
                kind: Some(err.kind()),
                error: Some(err.to_string()),
                missing: err.missing().to_vec(),
            },
        }
    }
}

/// Render the single line printed to stdout
///
/// # Errors
///
/// Returns an error if the JSON report cannot be serialized
pub fn render(
    outcome: &Result<CheckReport, CheckError>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            Ok(_) => SUCCESS_MESSAGE.to_string(),
            Err(err) => format!("Failed to connect: {err}"),
        }),
        OutputFormat::Json => {
            serde_json::to_string(&Report::new(outcome)).context("Failed to serialize report")
        }
    }
}
