use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// SQLSTATE codes reported for bad credentials
const AUTH_CODES: [&str; 2] = ["28P01", "28000"];

/// SQLSTATE `invalid_catalog_name`, the database does not exist
const UNKNOWN_DATABASE: &str = "3D000";

/// Protocol errors raised before the server ever answered the TLS negotiation,
/// the peer closed the socket or is not speaking the `PostgreSQL` protocol
const SSL_REQUEST: &str = "SSLRequest";

/// Why a connection attempt failed
///
/// `Display` is the text of the underlying driver error so callers can report
/// it verbatim.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("{source}")]
    MissingConfig {
        keys: Vec<&'static str>,
        #[source]
        source: Box<CheckError>,
    },

    #[error("{0}")]
    Configuration(#[source] sqlx::Error),

    #[error("{0}")]
    Network(#[source] sqlx::Error),

    #[error("{0}")]
    Authentication(#[source] sqlx::Error),

    #[error("connection attempt timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("{0}")]
    Unknown(#[source] sqlx::Error),
}

/// Stable, serializable name of a [`CheckError`] variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    MissingConfig,
    Configuration,
    Network,
    Authentication,
    Timeout,
    Unknown,
}

impl CheckError {
    /// Attach the settings that had no value, if any
    #[must_use]
    pub fn with_missing(self, keys: Vec<&'static str>) -> Self {
        if keys.is_empty() || matches!(self, Self::MissingConfig { .. }) {
            self
        } else {
            Self::MissingConfig {
                keys,
                source: Box::new(self),
            }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::MissingConfig { .. } => FailureKind::MissingConfig,
            Self::Configuration(_) => FailureKind::Configuration,
            Self::Network(_) => FailureKind::Network,
            Self::Authentication(_) => FailureKind::Authentication,
            Self::Timeout(_) => FailureKind::Timeout,
            Self::Unknown(_) => FailureKind::Unknown,
        }
    }

    /// Settings that had no value when the attempt was made
    #[must_use]
    pub fn missing(&self) -> &[&'static str] {
        match self {
            Self::MissingConfig { keys, .. } => keys.as_slice(),
            _ => &[],
        }
    }
}

impl From<sqlx::Error> for CheckError {
    fn from(err: sqlx::Error) -> Self {
        match classify(&err) {
            FailureKind::Configuration => Self::Configuration(err),
            FailureKind::Network => Self::Network(err),
            FailureKind::Authentication => Self::Authentication(err),
            _ => Self::Unknown(err),
        }
    }
}

fn classify(err: &sqlx::Error) -> FailureKind {
    match err {
        sqlx::Error::Configuration(_) => FailureKind::Configuration,
        sqlx::Error::Io(_) | sqlx::Error::Tls(_) => FailureKind::Network,
        sqlx::Error::Protocol(msg) if msg.contains(SSL_REQUEST) => FailureKind::Network,
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some(code) if AUTH_CODES.contains(&code) => FailureKind::Authentication,
            Some(UNKNOWN_DATABASE) => FailureKind::Configuration,
            _ => FailureKind::Unknown,
        },
        _ => FailureKind::Unknown,
    }
}
