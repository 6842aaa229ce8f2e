//! Map validated CLI arguments to the action the binary runs.

use crate::cli::actions::{Action, server::Args};
use crate::cli::commands::{ARG_PORT, store};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if the store options are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(8000);
    let store_opts = store::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        store_url: store_opts.url,
        store_username: store_opts.username,
        store_password: store_opts.password,
    }))
}
