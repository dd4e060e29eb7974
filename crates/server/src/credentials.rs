//! Tenant credential lookup from the MySQL store registry.
//!
//! Each tenant row in `app_stores` maps a numeric store ID to the store hash
//! and access token needed to call the platform API on that store's behalf.
//! Lookups open a short-lived connection per call rather than holding a pool;
//! resolution is an infrequent, session-scoped event.

use secrecy::SecretString;
use sqlx::mysql::MySqlConnectOptions;
use sqlx::{ConnectOptions, Connection};
use thiserror::Error;

use crate::config::DbConfig;

/// Errors that can occur during credential resolution.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// Database connection or query failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// API credentials for a single store.
///
/// Implements `Debug` manually to redact the access token.
#[derive(Clone)]
pub struct StoreCredentials {
    /// Store hash identifying the tenant on the platform.
    pub store_hash: String,
    /// API access token for the store.
    pub access_token: SecretString,
}

impl StoreCredentials {
    /// Create credentials from a store hash and access token.
    #[must_use]
    pub fn new(store_hash: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_hash: store_hash.into(),
            access_token: SecretString::from(access_token.into()),
        }
    }
}

impl std::fmt::Debug for StoreCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreCredentials")
            .field("store_hash", &self.store_hash)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Looks up per-tenant API credentials by numeric store ID.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    db: DbConfig,
}

impl CredentialStore {
    /// Create a credential store backed by the given MySQL configuration.
    #[must_use]
    pub const fn new(db: DbConfig) -> Self {
        Self { db }
    }

    /// Resolve credentials for a store ID.
    ///
    /// Opens a scoped connection, runs a single lookup, and closes the
    /// connection before returning. Returns `Ok(None)` when no row matches.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::Database` if the connection or query fails.
    pub async fn resolve(&self, store_id: i64) -> Result<Option<StoreCredentials>, CredentialError> {
        use secrecy::ExposeSecret;

        let options = MySqlConnectOptions::new()
            .host(&self.db.host)
            .port(self.db.port)
            .username(&self.db.user)
            .password(self.db.password.expose_secret())
            .database(&self.db.database);

        let mut conn = options.connect().await?;

        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT store_hash, access_token FROM app_stores WHERE id = ?",
        )
        .bind(store_id)
        .fetch_optional(&mut conn)
        .await?;

        conn.close().await?;

        Ok(row.map(|(store_hash, access_token)| StoreCredentials {
            store_hash,
            access_token: SecretString::from(access_token),
        }))
    }
}
