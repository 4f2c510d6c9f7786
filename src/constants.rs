//! # Constants
//!
//! Shared constants used throughout the sync binary.
//!
//! These values encode the GitHub REST API surface and the process
//! environment contract of the action; tests override the API base via the
//! store constructor rather than through these.

/// Base URL of the GitHub REST API
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// API version `Accept` header sent on every GitHub request
pub const GITHUB_API_ACCEPT: &str = "application/vnd.github.v3+json";

/// Page size used when listing environment secrets
pub const SECRETS_PAGE_SIZE: usize = 100;

/// Name of the Infisical CLI binary looked up on `PATH`
pub const INFISICAL_BINARY: &str = "infisical";

/// Environment variable holding the configuration file path
pub const ENV_CONFIG_PATH: &str = "INPUT_CONFIG_PATH";

/// Environment variable holding the target environment key
pub const ENV_TARGET_ENVIRONMENT: &str = "TARGET_ENVIRONMENT";

/// Environment variable holding `owner/name` of the repository
pub const ENV_GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";

/// Environment variable holding the opaque numeric repository id
pub const ENV_GITHUB_REPOSITORY_ID: &str = "GITHUB_REPOSITORY_ID";

/// Environment variable holding the GitHub API token
pub const ENV_GITHUB_TOKEN: &str = "REST_GITHUB_TOKEN";
