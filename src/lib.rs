//! # Doorman (minimal web login service)
//!
//! `doorman` serves a login form, checks a username/password pair against a
//! credential store (or a single hardcoded fallback identity when no store is
//! reachable), issues a signed and encrypted `session` cookie, and gates the
//! `/internal` page behind that cookie.
//!
//! ## Sessions
//!
//! Session cookies embed `{"name": <username>}`, encrypted with
//! ChaCha20-Poly1305 and signed with HMAC-SHA256. Both keys are generated
//! from the OS RNG once at startup, so cookies from a previous run stop
//! verifying after a restart. Any cookie that fails to verify is treated as
//! "no session".
//!
//! ## Credentials
//!
//! Credentials are stored and compared in clear text. This is the behaviour
//! the login flow is tested against; a hardened deployment should hash stored
//! passwords and compare in constant time.

pub mod api;
pub mod auth;
pub mod cli;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }
}
