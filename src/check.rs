use crate::{
    config::Settings,
    error::CheckError,
    tls::{SSL_MODE, ensure_crypto_provider},
    uri::ConnectionUri,
};
use sqlx::{Connection, PgConnection};
use std::time::{Duration, Instant};
use tokio::time;
use tracing::{debug, info, warn};

/// Outcome of a successful connectivity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    /// Time spent establishing the connection
    pub elapsed: Duration,
}

impl CheckReport {
    #[must_use]
    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Open a single connection using `settings` and close it right away
///
/// There is exactly one attempt, nothing is retried. The connection is only
/// used to confirm the session could be established.
///
/// # Errors
///
/// Returns a classified [`CheckError`] if the URI is malformed, the attempt
/// fails, or `timeout` expires first
pub async fn run(
    settings: &Settings,
    timeout: Option<Duration>,
) -> Result<CheckReport, CheckError> {
    let missing = settings.missing();
    if !missing.is_empty() {
        warn!(keys = ?missing, "settings without a value, rendered as None");
    }

    let uri = ConnectionUri::new(settings);
    debug!(
        uri = uri.redacted(),
        sslmode = SSL_MODE,
        "connecting"
    );

    connect(&uri, timeout)
        .await
        .map_err(|err| err.with_missing(missing))
}

async fn connect(
    uri: &ConnectionUri,
    timeout: Option<Duration>,
) -> Result<CheckReport, CheckError> {
    ensure_crypto_provider();

    let options = uri.connect_options()?;

    let start = Instant::now();
    let attempt = PgConnection::connect_with(&options);
    let conn = match timeout {
        Some(limit) => time::timeout(limit, attempt)
            .await
            .map_err(|_| CheckError::Timeout(limit))??,
        None => attempt.await?,
    };
    let report = CheckReport {
        elapsed: start.elapsed(),
    };

    info!(elapsed_ms = report.elapsed_ms(), "connection established");

    // a failed close does not fail the check
    if let Err(err) = conn.close().await {
        warn!("failed to close connection: {err}");
    }

    Ok(report)
}
