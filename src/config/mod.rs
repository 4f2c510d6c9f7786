//! # Sync Configuration
//!
//! Declarative configuration for the sync run: which Infisical folders feed
//! which target environments, and the global `strict`/`clean` policies.
//!
//! The file is YAML, loaded once at startup and immutable afterwards.
//! Field names are camelCase on the wire:
//!
//! ```yaml
//! commonFolders:
//!   - /
//! environments:
//!   staging:
//!     infisicalEnvName: staging
//!     variableName: ""
//!     folders:
//!       - /frontend
//!       - /backend
//! strict: false
//! clean: true
//! ```

mod validation;

use crate::error::SyncError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

pub use validation::validate_sync_config;

/// Top-level sync configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// Folders pulled for every environment, ahead of the per-environment list
    pub common_folders: Vec<String>,
    /// Per-environment configuration, keyed by the local environment name
    pub environments: HashMap<String, EnvironmentConfig>,
    /// Abort the whole run on the first export or per-secret failure
    #[serde(default)]
    pub strict: bool,
    /// Delete GitHub secrets that no resolved folder produces anymore
    #[serde(default)]
    pub clean: bool,
}

/// Configuration for one target environment
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// Environment identifier on the Infisical side; may differ from the local key
    pub infisical_env_name: String,
    /// Name template with one `{}` placeholder; blank means use the computed name
    pub variable_name: String,
    /// Folders pulled for this environment, in declaration order
    pub folders: Vec<String>,
}

impl SyncConfig {
    /// Load and validate the configuration file
    ///
    /// Fails when the file is missing or unreadable, when the document does
    /// not deserialize into the declared shape (missing keys, wrong field
    /// types), or when semantic validation rejects it.
    pub fn load(path: &Path) -> Result<Self, SyncError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SyncError::Config(format!(
                "cannot read configuration file {}: {e}",
                path.display()
            ))
        })?;

        let config: SyncConfig = serde_yaml::from_str(&raw).map_err(|e| {
            SyncError::Config(format!(
                "invalid configuration file {}: {e}",
                path.display()
            ))
        })?;

        validate_sync_config(&config)?;

        Ok(config)
    }
}
