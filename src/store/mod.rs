//! # Secret Stores
//!
//! The store trait the reconciler drives, plus the GitHub implementation.
//!
//! Stored values are write-only: the listing endpoint returns names only,
//! because the provider keeps values encrypted at rest. The diff therefore
//! operates on names, and every computed secret is re-uploaded on every run.

use crate::error::SyncError;
use async_trait::async_trait;
use serde::Deserialize;

pub mod github;

/// Sealed-box public key material for one environment
///
/// `key` is the base64-encoded public key; `key_id` is an opaque identifier
/// the provider requires alongside every upload encrypted under that key.
#[derive(Debug, Clone, Deserialize)]
pub struct PublicKeyInfo {
    pub key: String,
    pub key_id: String,
}

/// Environment-scoped secret store operations
///
/// Implemented by [`github::GithubEnvStore`]; tests substitute an in-memory
/// implementation.
#[async_trait]
pub trait EnvironmentSecretStore: Send + Sync {
    /// List the names of all secrets currently stored for the environment
    async fn list_secret_names(&self, environment: &str) -> Result<Vec<String>, SyncError>;

    /// Fetch the environment's sealed-box public key
    async fn get_public_key(&self, environment: &str) -> Result<PublicKeyInfo, SyncError>;

    /// Create or update one secret, sealing the plaintext client-side
    async fn put_secret(
        &self,
        environment: &str,
        name: &str,
        value: &str,
        public_key: &PublicKeyInfo,
    ) -> Result<(), SyncError>;

    /// Delete one secret
    async fn delete_secret(&self, environment: &str, name: &str) -> Result<(), SyncError>;
}
