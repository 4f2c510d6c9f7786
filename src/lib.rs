//! # Infisical Secrets Sync Library
//!
//! Core functionality for the Infisical → GitHub environment secrets sync:
//! configuration loading, folder export through the Infisical CLI, secret
//! name computation, the GitHub secret store client, and the reconciler
//! that diffs and applies changes.
//!
//! The binary in `main.rs` wires these together; tests drive the reconciler
//! against in-memory store/exporter implementations and the GitHub client
//! against Pact mock servers.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod infisical;
pub mod naming;
pub mod reconciler;
pub mod store;

pub use config::{EnvironmentConfig, SyncConfig};
pub use error::SyncError;
pub use reconciler::SyncReport;
