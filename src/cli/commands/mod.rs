pub mod logging;
pub mod store;

use clap::{
    Arg, ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

pub const ARG_PORT: &str = "port";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("doorman")
        .about("Minimal web login service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8000")
                .env("DOORMAN_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = store::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn with_cleared_env<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        temp_env::with_vars(
            [
                ("DOORMAN_PORT", None::<&str>),
                ("DOORMAN_STORE_URL", None::<&str>),
                ("DOORMAN_STORE_USERNAME", None::<&str>),
                ("DOORMAN_STORE_PASSWORD", None::<&str>),
                ("DOORMAN_LOG_LEVEL", None::<&str>),
            ],
            f,
        )
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "doorman");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Minimal web login service".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec!["doorman"]);
            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(8000));
            assert_eq!(matches.get_one::<String>(store::ARG_STORE_URL), None);
            assert_eq!(
                matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                Some(0)
            );
        });
    }

    #[test]
    fn test_check_port_and_store() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec![
                "doorman",
                "--port",
                "9090",
                "--store-url",
                "postgres://localhost:5432/login_app",
                "--store-username",
                "doorman",
                "--store-password",
                "secret",
            ]);

            assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(9090));
            assert_eq!(
                matches.get_one::<String>(store::ARG_STORE_URL).cloned(),
                Some("postgres://localhost:5432/login_app".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(store::ARG_STORE_USERNAME).cloned(),
                Some("doorman".to_string())
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("DOORMAN_PORT", Some("443")),
                ("DOORMAN_STORE_URL", Some("db.internal")),
                ("DOORMAN_STORE_USERNAME", Some("doorman")),
                ("DOORMAN_STORE_PASSWORD", Some("secret")),
                ("DOORMAN_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["doorman"]);
                assert_eq!(matches.get_one::<u16>(ARG_PORT).copied(), Some(443));
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );

                let options = store::Options::parse(&matches);
                assert!(options.is_ok());
                if let Ok(options) = options {
                    assert_eq!(options.url.as_deref(), Some("db.internal"));
                    assert_eq!(options.username.as_deref(), Some("doorman"));
                    assert_eq!(
                        options.password.as_ref().map(|p| p.expose_secret().to_string()),
                        Some("secret".to_string())
                    );
                }
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("DOORMAN_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["doorman"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5usize {
            with_cleared_env(|| {
                let mut args = vec!["doorman".to_string()];
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_store_credentials_require_url() {
        with_cleared_env(|| {
            let result = new().try_get_matches_from(vec!["doorman", "--store-username", "doorman"]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::MissingRequiredArgument)
            );
        });
    }

    #[test]
    fn test_blank_store_url_rejected() {
        with_cleared_env(|| {
            let matches = new().get_matches_from(vec!["doorman", "--store-url", " "]);
            assert!(store::Options::parse(&matches).is_err());
        });
    }

    #[test]
    fn test_invalid_port_rejected() {
        with_cleared_env(|| {
            let result = new().try_get_matches_from(vec!["doorman", "--port", "70000"]);
            assert_eq!(
                result.map(|_| ()).map_err(|e| e.kind()),
                Err(clap::error::ErrorKind::ValueValidation)
            );
        });
    }
}
