//! # Secret Naming
//!
//! Pure helpers deriving the canonical GitHub secret name from an Infisical
//! key and its originating folder, plus the per-environment name template.

/// Normalize a folder path so it carries exactly one leading separator
///
/// `"frontend"`, `"/frontend"` and `"///frontend"` all normalize to
/// `"/frontend"`; the empty string normalizes to `"/"`.
#[must_use]
pub fn normalize_folder(folder: &str) -> String {
    format!("/{}", folder.trim_start_matches('/'))
}

/// Compute the environment-agnostic secret name for one exported key
///
/// The folder component is stripped of its leading separator; spaces and
/// hyphens become underscores in both parts (separators too, for nested
/// folders); both parts are upper-cased. A root folder contributes nothing:
///
/// Format: `{FOLDER}_{KEY}` (non-root folder)
///         `{KEY}` (root folder)
#[must_use]
pub fn compute_secret_name(base_key: &str, folder: &str) -> String {
    let folder = folder.trim_start_matches('/');
    let base_key = base_key.replace([' ', '-'], "_");
    let folder = folder.replace([' ', '-', '/'], "_");

    if folder.is_empty() {
        return base_key.to_uppercase();
    }

    format!("{}_{}", folder.to_uppercase(), base_key.to_uppercase())
}

/// Per-environment name template
///
/// A blank `variableName` in the configuration means the computed name is
/// used verbatim; anything else is a pattern with a single `{}` placeholder
/// that receives the computed name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameTemplate {
    Verbatim,
    Templated(String),
}

impl NameTemplate {
    /// Parse the raw `variableName` configuration value
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            NameTemplate::Verbatim
        } else {
            NameTemplate::Templated(raw.to_string())
        }
    }

    /// Resolve the final secret name from a computed base name
    #[must_use]
    pub fn resolve(&self, computed: &str) -> String {
        match self {
            NameTemplate::Verbatim => computed.to_string(),
            NameTemplate::Templated(pattern) => pattern.replacen("{}", computed, 1),
        }
    }
}
