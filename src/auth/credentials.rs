use crate::store::{Credential, StoreHandle};
use tracing::{debug, warn};

pub const FALLBACK_USERNAME: &str = "Ahmad";
pub const FALLBACK_PASSWORD: &str = "Pass123";

/// The identity accepted when no credential store is configured.
#[must_use]
pub fn fallback_credential() -> Credential {
    Credential::new(FALLBACK_USERNAME, FALLBACK_PASSWORD)
}

/// Decides whether a username/password pair is valid.
///
/// With a store, the pair must exist there; store errors count as "not
/// found". Without one, only the fallback pair is accepted. Comparison is
/// exact and in clear text.
#[derive(Clone)]
pub struct Verifier {
    store: StoreHandle,
    fallback: Credential,
}

impl Verifier {
    #[must_use]
    pub fn new(store: StoreHandle) -> Self {
        Self::with_fallback(store, fallback_credential())
    }

    #[must_use]
    pub fn with_fallback(store: StoreHandle, fallback: Credential) -> Self {
        Self { store, fallback }
    }

    #[must_use]
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    pub async fn verify(&self, username: &str, password: &str) -> bool {
        let Some(store) = &self.store else {
            debug!("Using fallback credentials, no credential store");
            return username == self.fallback.username && password == self.fallback.password;
        };

        match store.lookup(username, password).await {
            Ok(found) => found,
            Err(err) => {
                warn!("Credential lookup failed: {err}");
                false
            }
        }
    }
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("store", &self.store.as_ref().map(|_| "configured"))
            .field("fallback", &self.fallback)
            .finish()
    }
}
