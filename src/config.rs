use std::{collections::HashMap, env, ffi::OsString, fmt, path::Path};
use tracing::{debug, info, warn};

/// Keys resolved from the environment, in URI order
pub const KEYS: [&str; 5] = ["user", "password", "host", "port", "dbname"];

/// Connection settings resolved once at startup
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<String>,
    pub dbname: Option<String>,
}

impl Settings {
    /// Resolve settings from the process environment, falling back to the
    /// values of the env file (if any). Variables already present in the
    /// environment win over the file, the process environment is never modified.
    #[must_use]
    pub fn load(env_file: Option<&Path>) -> Self {
        let file = env_file.map(read_env_file).unwrap_or_default();
        Self::from_lookup(|key| env_value(key).or_else(|| file.get(key).cloned()))
    }

    /// Resolve settings using `lookup`, checking the lowercase key first and
    /// then the uppercase one. An empty lowercase value falls through.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .or_else(|| lookup(&key.to_uppercase()))
        };

        Self {
            user: resolve("user"),
            password: resolve("password"),
            host: resolve("host"),
            port: resolve("port"),
            dbname: resolve("dbname"),
        }
    }

    /// Keys with no value in either case
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        KEYS.iter()
            .zip(self.values())
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect()
    }

    fn values(&self) -> [Option<&String>; 5] {
        [
            self.user.as_ref(),
            self.password.as_ref(),
            self.host.as_ref(),
            self.port.as_ref(),
            self.dbname.as_ref(),
        ]
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .finish()
    }
}

fn env_value(key: &str) -> Option<String> {
    env::var_os(key).map(|raw| lossy(key, raw))
}

/// Non UTF-8 values are kept, invalid sequences become U+FFFD
fn lossy(key: &str, raw: OsString) -> String {
    raw.into_string().unwrap_or_else(|raw| {
        debug!(key, "environment value is not valid UTF-8, converting lossily");
        raw.to_string_lossy().into_owned()
    })
}

/// Read `KEY=VALUE` pairs from a dotenv file
///
/// A missing file yields an empty map, malformed lines are skipped.
#[must_use]
pub fn read_env_file(path: &Path) -> HashMap<String, String> {
    let mut vars = HashMap::new();

    if !path.is_file() {
        debug!(path = %path.display(), "no env file found");
        return vars;
    }

    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) => {
            warn!(path = %path.display(), "could not read env file: {err}");
            return vars;
        }
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                vars.insert(key, value);
            }
            Err(err) => warn!(path = %path.display(), "skipping env file entry: {err}"),
        }
    }

    info!(path = %path.display(), entries = vars.len(), "loaded env file");

    vars
}
