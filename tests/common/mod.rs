#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use dbcheck::config::Settings;
use std::{
    collections::HashMap,
    env,
    path::PathBuf,
    process::{Command, Output},
};

pub const POSTGRES_HOST: &str = "localhost";
pub const POSTGRES_PORT: &str = "5432";
pub const POSTGRES_USER: &str = "postgres";
pub const POSTGRES_PASSWORD: &str = "secret";
pub const POSTGRES_DBNAME: &str = "testdb";

pub fn skip_if_no_postgres() -> bool {
    env::var("SKIP_POSTGRES_TESTS").is_ok()
}

/// Settings for the test container, `TEST_POSTGRES_*` variables override them
pub fn postgres_settings() -> Settings {
    let var = |key: &str, default: &str| {
        env::var(format!("TEST_POSTGRES_{}", key.to_uppercase()))
            .unwrap_or_else(|_| default.to_string())
    };

    let map = HashMap::from([
        ("user", var("user", POSTGRES_USER)),
        ("password", var("password", POSTGRES_PASSWORD)),
        ("host", var("host", POSTGRES_HOST)),
        ("port", var("port", POSTGRES_PORT)),
        ("dbname", var("dbname", POSTGRES_DBNAME)),
    ]);

    Settings::from_lookup(|key| map.get(key).cloned())
}

pub fn pick_free_port() -> u16 {
    std::net::TcpListener::bind(("127.0.0.1", 0))
        .expect("failed to bind random local port")
        .local_addr()
        .expect("failed to read local addr")
        .port()
}

pub fn dbcheck_binary_path() -> PathBuf {
    env::var_os("CARGO_BIN_EXE_dbcheck")
        .map_or_else(|| PathBuf::from("target/debug/dbcheck"), PathBuf::from)
}

/// Run the binary with a clean environment holding only `vars`
///
/// The working directory is the temp dir so no stray `.env` is picked up.
pub fn run_dbcheck(vars: &[(&str, &str)], args: &[&str]) -> Output {
    Command::new(dbcheck_binary_path())
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(env::temp_dir())
        .args(args)
        .output()
        .expect("failed to run dbcheck")
}

/// Write an env file to the temp dir, unique per test name and process
pub fn write_env_file(test_name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!(
        "dbcheck-{test_name}-{}.env",
        std::process::id()
    ));
    std::fs::write(&path, contents).expect("failed to write env file");
    path
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(ToString::to_string)
        .collect()
}
