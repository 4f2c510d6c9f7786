//! # Error Types
//!
//! Typed errors for the sync run. Variants map one-to-one onto the failure
//! policies the reconciler applies: configuration, environment, dependency
//! and pre-flight fetch errors always abort the run; export and per-secret
//! mutation errors abort only in strict mode and are otherwise logged and
//! skipped.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Configuration file missing, unreadable, malformed, or semantically invalid
    #[error("configuration error: {0}")]
    Config(String),

    /// Target environment not set, not configured, or required process env missing
    #[error("environment error: {0}")]
    Environment(String),

    /// A required external runtime dependency is unavailable
    #[error("missing runtime dependency: {0}")]
    Dependency(String),

    /// Infisical export failed or produced unusable output for one folder
    #[error("export failed for folder {folder}: {message}")]
    Export { folder: String, message: String },

    /// Listing secrets or fetching the public key from GitHub failed
    #[error("fetch from GitHub failed: {0}")]
    Fetch(String),

    /// Setting one secret on GitHub failed
    #[error("failed to set secret {name} on GitHub: {message}")]
    Upsert { name: String, message: String },

    /// Removing one secret from GitHub failed
    #[error("failed to remove secret {name} from GitHub: {message}")]
    Delete { name: String, message: String },
}
