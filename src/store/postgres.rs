use super::{Credential, CredentialStore, StoreError};
use async_trait::async_trait;
use sqlx::{Connection, PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use tracing::{Instrument, info, info_span};

const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));

/// Credential store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    /// Connect, ping, and make sure the `users` table exists.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] if the database cannot be reached,
    /// or [`StoreError::Query`] if the schema cannot be applied.
    pub async fn connect(dsn: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .min_connections(1)
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(5))
            .max_lifetime(Duration::from_secs(60 * 2))
            .test_before_acquire(true)
            .connect(dsn)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let store = Self::from_pool(pool);
        store.ping().await?;
        store.ensure_schema().await?;

        info!("Connected to credential store");

        Ok(store)
    }

    #[must_use]
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// # Errors
    /// Returns an error if the schema statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(SCHEMA_SQL).execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn lookup(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "SELECT",
            db.sql.table = "users"
        );
        let found = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE username = $1 AND password = $2)",
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .instrument(span)
        .await?;
        Ok(found)
    }

    async fn insert(&self, credential: &Credential) -> Result<(), StoreError> {
        let span = info_span!(
            "db.query",
            db.system = "postgresql",
            db.operation = "INSERT",
            db.sql.table = "users"
        );
        sqlx::query("INSERT INTO users (username, password) VALUES ($1, $2)")
            .bind(&credential.username)
            .bind(&credential.password)
            .execute(&self.pool)
            .instrument(span)
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    StoreError::Duplicate
                } else {
                    StoreError::Query(err)
                }
            })?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        let acquire_span = info_span!(
            "db.acquire",
            db.system = "postgresql",
            db.operation = "ACQUIRE"
        );
        let mut conn = self
            .pool
            .acquire()
            .instrument(acquire_span)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))?;

        let ping_span = info_span!("db.ping", db.system = "postgresql", db.operation = "PING");
        conn.ping()
            .instrument(ping_span)
            .await
            .map_err(|err| StoreError::Unavailable(err.to_string()))
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code == "23505"),
        _ => false,
    }
}
