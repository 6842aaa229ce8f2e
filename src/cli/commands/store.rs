use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const ARG_STORE_URL: &str = "store-url";
pub const ARG_STORE_USERNAME: &str = "store-username";
pub const ARG_STORE_PASSWORD: &str = "store-password";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_STORE_URL)
                .long(ARG_STORE_URL)
                .help("Credential store DSN or bare host; without it logins use the built-in account")
                .long_help(
                    "Credential store DSN (postgres://host:port/db) or a bare host, which expands to postgres://<host>:5432/login_app. When unset or unreachable, only the built-in fallback account can log in.",
                )
                .env("DOORMAN_STORE_URL"),
        )
        .arg(
            Arg::new(ARG_STORE_USERNAME)
                .long(ARG_STORE_USERNAME)
                .help("Credential store username, injected into the DSN")
                .env("DOORMAN_STORE_USERNAME")
                .requires(ARG_STORE_URL),
        )
        .arg(
            Arg::new(ARG_STORE_PASSWORD)
                .long(ARG_STORE_PASSWORD)
                .help("Credential store password, injected into the DSN")
                .env("DOORMAN_STORE_PASSWORD")
                .hide_env_values(true)
                .requires(ARG_STORE_URL),
        )
}

#[derive(Debug)]
pub struct Options {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl Options {
    /// Parse store options from validated CLI matches.
    ///
    /// # Errors
    /// Returns an error if the store URL is present but blank.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        let url = matches.get_one::<String>(ARG_STORE_URL).cloned();
        if url.as_deref().is_some_and(|url| url.trim().is_empty()) {
            anyhow::bail!("--{ARG_STORE_URL} must not be empty");
        }

        Ok(Self {
            url,
            username: matches.get_one::<String>(ARG_STORE_USERNAME).cloned(),
            password: matches
                .get_one::<String>(ARG_STORE_PASSWORD)
                .map(|password| SecretString::from(password.clone())),
        })
    }
}
