use crate::{config::Settings, tls::SSL_MODE};
use sqlx::postgres::PgConnectOptions;
use std::{fmt, str::FromStr};

/// Scheme of every generated URI
pub const SCHEME: &str = "postgresql+psycopg2";

/// Placeholder rendered for an absent setting
const ABSENT: &str = "None";

/// Connection URI assembled from [`Settings`]
///
/// Values are substituted verbatim, nothing is escaped or validated.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUri {
    uri: String,
    redacted: String,
}

impl ConnectionUri {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let render = |password: &str| {
            format!(
                "{SCHEME}://{}:{}@{}:{}/{}?sslmode={SSL_MODE}",
                value(settings.user.as_deref()),
                password,
                value(settings.host.as_deref()),
                value(settings.port.as_deref()),
                value(settings.dbname.as_deref()),
            )
        };

        Self {
            uri: render(value(settings.password.as_deref())),
            redacted: render("***"),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// URI with the password masked, safe for logs
    #[must_use]
    pub fn redacted(&self) -> &str {
        &self.redacted
    }

    /// Translate the URI into driver options
    ///
    /// sqlx does not know the `+psycopg2` driver suffix, so the scheme is
    /// swapped for plain `postgresql`. The `sslmode` query parameter is kept.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::Configuration` if the URI cannot be parsed
    /// (e.g. a non numeric port)
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        PgConnectOptions::from_str(&self.uri.replacen(SCHEME, "postgresql", 1))
    }
}

impl fmt::Display for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

impl fmt::Debug for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUri").field(&self.redacted).finish()
    }
}

fn value(setting: Option<&str>) -> &str {
    setting.unwrap_or(ABSENT)
}
