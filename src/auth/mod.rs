//! Session and credential checks shared by the page handlers.

pub mod codec;
pub mod credentials;
pub mod session;

pub use codec::{SessionCodec, SessionError, SessionKeys};
pub use credentials::{FALLBACK_PASSWORD, FALLBACK_USERNAME, Verifier, fallback_credential};
pub use session::{SESSION_COOKIE_NAME, clear_session, current_user, issue_session};

use crate::store::StoreHandle;

/// Everything a request needs to authenticate, built once before serving.
#[derive(Debug, Clone)]
pub struct AuthState {
    verifier: Verifier,
    codec: SessionCodec,
}

impl AuthState {
    #[must_use]
    pub fn new(store: StoreHandle, keys: SessionKeys) -> Self {
        Self::from_parts(
            Verifier::new(store),
            SessionCodec::new(SESSION_COOKIE_NAME, keys),
        )
    }

    #[must_use]
    pub fn from_parts(verifier: Verifier, codec: SessionCodec) -> Self {
        Self { verifier, codec }
    }

    #[must_use]
    pub fn verifier(&self) -> &Verifier {
        &self.verifier
    }

    #[must_use]
    pub fn codec(&self) -> &SessionCodec {
        &self.codec
    }

    #[must_use]
    pub fn store(&self) -> &StoreHandle {
        self.verifier.store()
    }
}
