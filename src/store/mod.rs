//! Credential store adapter.
//!
//! A store answers one question: does a record with exactly this username and
//! password exist? Implementations report failures as [`StoreError`]; callers
//! in the auth path collapse every error to "not found".

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

/// Optional store reference shared by every request. `None` means fallback mode.
pub type StoreHandle = Option<Arc<dyn CredentialStore>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential store unavailable: {0}")]
    Unavailable(String),
    #[error("credential query failed: {0}")]
    Query(#[from] sqlx::Error),
    #[error("credential already exists")]
    Duplicate,
}

/// A username/password record, compared byte-for-byte.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// True iff at least one record matches both fields exactly.
    async fn lookup(&self, username: &str, password: &str) -> Result<bool, StoreError>;

    /// Insert a record. Stores with a uniqueness constraint report
    /// [`StoreError::Duplicate`] on conflict.
    async fn insert(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Cheap liveness probe used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Insert the default credential so a fresh store accepts it.
///
/// No-op without a store. A duplicate is treated as success; other failures
/// are logged and startup continues.
pub async fn seed(store: Option<&dyn CredentialStore>, credential: &Credential) {
    let Some(store) = store else {
        info!("Skipping user creation, no credential store");
        return;
    };

    match store.insert(credential).await {
        Ok(()) => info!(username = %credential.username, "Default user created"),
        Err(StoreError::Duplicate) => {
            info!(username = %credential.username, "Default user already exists");
        }
        Err(err) => warn!("Failed to create default user: {err}"),
    }
}
