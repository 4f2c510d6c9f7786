//! # Configuration Validation
//!
//! Semantic checks that the serde shape cannot express.

use super::SyncConfig;
use crate::error::SyncError;

/// Validate a deserialized [`SyncConfig`]
///
/// Rejects name templates with more than one placeholder and blank folder
/// entries; everything structural is already enforced by deserialization.
pub fn validate_sync_config(config: &SyncConfig) -> Result<(), SyncError> {
    for folder in &config.common_folders {
        validate_folder_entry(folder, "commonFolders")?;
    }

    for (env_key, env_config) in &config.environments {
        let placeholders = env_config.variable_name.matches("{}").count();
        if placeholders > 1 {
            return Err(SyncError::Config(format!(
                "environments.{env_key}.variableName '{}' has {placeholders} placeholders, at most one is allowed",
                env_config.variable_name
            )));
        }

        for folder in &env_config.folders {
            validate_folder_entry(folder, &format!("environments.{env_key}.folders"))?;
        }
    }

    Ok(())
}

fn validate_folder_entry(folder: &str, field: &str) -> Result<(), SyncError> {
    if folder.trim().is_empty() {
        return Err(SyncError::Config(format!(
            "{field} contains a blank folder entry"
        )));
    }
    Ok(())
}
