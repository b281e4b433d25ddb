use clap::{
    Arg, ArgAction, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

/// Pure clap command definitions with zero business logic
#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .after_help(
            "Connection settings are read from the environment (lowercase name first, \
            then uppercase): user, password, host, port, dbname",
        )
        .arg(
            Arg::new("env-file")
                .default_value(".env")
                .env("DBCHECK_ENV_FILE")
                .help("dotenv file merged into the environment if present")
                .long("env-file")
                .short('e')
                .value_name("PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new("timeout")
                .env("DBCHECK_TIMEOUT")
                .help("max number of seconds to wait for the connection (default: no limit)")
                .long("timeout")
                .short('t')
                .value_name("SECS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new("format")
                .default_value("text")
                .env("DBCHECK_FORMAT")
                .help("output format")
                .long("format")
                .short('f')
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new("strict")
                .action(ArgAction::SetTrue)
                .env("DBCHECK_STRICT")
                .help("exit with status 1 when the connection fails")
                .long("strict")
                .long_help(
                    "Exit with status 1 when the connection fails.\n\
                    Without it the exit status is always 0 and only the printed \
                    message tells success from failure.",
                ),
        )
        .arg(
            Arg::new("verbose")
                .action(ArgAction::Count)
                .help("increase diagnostics written to stderr (-v info, -vv debug, -vvv trace)")
                .long("verbose")
                .short('v'),
        )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_new() {
        let cmd = new();
        assert_eq!(cmd.get_name(), "dbcheck");
        assert_eq!(
            cmd.get_about().unwrap().to_string(),
            env!("CARGO_PKG_DESCRIPTION")
        );
        assert_eq!(
            cmd.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_new_debug_assert() {
        new().debug_assert();
    }

    #[test]
    fn test_new_defaults() {
        let m = new().try_get_matches_from(vec!["dbcheck"]).unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("env-file"),
            Some(&PathBuf::from(".env"))
        );
        assert_eq!(m.get_one::<String>("format"), Some(&String::from("text")));
        assert_eq!(m.get_count("verbose"), 0);
    }

    #[test]
    fn test_new_args() {
        let m = new()
            .try_get_matches_from(vec![
                "dbcheck",
                "--env-file",
                "/etc/dbcheck/env",
                "--timeout",
                "5",
                "--format",
                "json",
                "--strict",
                "-vv",
            ])
            .unwrap();
        assert_eq!(
            m.get_one::<PathBuf>("env-file"),
            Some(&PathBuf::from("/etc/dbcheck/env"))
        );
        assert_eq!(m.get_one::<u64>("timeout").copied(), Some(5));
        assert_eq!(m.get_one::<String>("format"), Some(&String::from("json")));
        assert!(m.get_flag("strict"));
        assert_eq!(m.get_count("verbose"), 2);
    }

    #[test]
    fn test_new_rejects_zero_timeout() {
        let matches = new().try_get_matches_from(vec!["dbcheck", "--timeout", "0"]);
        assert!(matches.is_err());
    }

    #[test]
    fn test_new_rejects_unknown_format() {
        let matches = new().try_get_matches_from(vec!["dbcheck", "--format", "yaml"]);
        assert!(matches.is_err());
    }
}
