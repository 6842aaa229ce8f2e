use super::{Credential, CredentialStore, StoreError};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process credential store.
///
/// Mirrors the Postgres store: no uniqueness by default, so repeated inserts
/// keep every copy. [`MemoryCredentialStore::with_unique_usernames`] enables a
/// username uniqueness constraint.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: RwLock<Vec<Credential>>,
    unique_usernames: bool,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unique_usernames() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
            unique_usernames: true,
        }
    }

    #[must_use]
    pub fn from_records(records: Vec<Credential>) -> Self {
        Self {
            records: RwLock::new(records),
            unique_usernames: false,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn lookup(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .any(|record| record.username == username && record.password == password))
    }

    async fn insert(&self, credential: &Credential) -> Result<(), StoreError> {
        let mut records = self.records.write().await;
        if self.unique_usernames
            && records
                .iter()
                .any(|record| record.username == credential.username)
        {
            return Err(StoreError::Duplicate);
        }
        records.push(credential.clone());
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
