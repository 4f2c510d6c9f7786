//! Pure planning helpers: folder resolution and the name diff.

use crate::naming::normalize_folder;
use std::collections::HashSet;

/// Names to add and names to remove, derived from one diff pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPlan {
    /// Computed entries whose name GitHub does not know yet (duplicates kept,
    /// they upload more than once just like updates do)
    pub to_add: Vec<String>,
    /// GitHub names no resolved folder produces anymore; only acted on under `clean`
    pub to_remove: Vec<String>,
}

/// Resolve the folder list for one environment
///
/// Union of the common folders and the environment's folders in declaration
/// order, each normalized to a single leading separator, de-duplicated on
/// the normalized form.
#[must_use]
pub fn resolve_folders(common_folders: &[String], env_folders: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    common_folders
        .iter()
        .chain(env_folders.iter())
        .map(|folder| normalize_folder(folder))
        .filter(|folder| seen.insert(folder.clone()))
        .collect()
}

/// Diff computed secret names against what the store currently holds
#[must_use]
pub fn diff_secret_names(computed_names: &[String], existing_names: &[String]) -> SyncPlan {
    let existing: HashSet<&str> = existing_names.iter().map(String::as_str).collect();
    let computed: HashSet<&str> = computed_names.iter().map(String::as_str).collect();

    SyncPlan {
        to_add: computed_names
            .iter()
            .filter(|name| !existing.contains(name.as_str()))
            .cloned()
            .collect(),
        to_remove: existing_names
            .iter()
            .filter(|name| !computed.contains(name.as_str()))
            .cloned()
            .collect(),
    }
}
