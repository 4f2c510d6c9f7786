//! # Command Line Interface
//!
//! Flags for the sync binary. Every flag has a process-environment
//! fallback so the binary keeps working as a CI action step with no
//! arguments at all.

use clap::Parser;
use std::path::PathBuf;

/// Sync Infisical folder secrets into GitHub Actions environment secrets
#[derive(Debug, Parser)]
#[command(
    name = "infisical-secrets-sync",
    version,
    about = "Sync Infisical folder secrets into GitHub Actions environment secrets",
    after_help = "\
Process environment fallbacks:
  INPUT_CONFIG_PATH      configuration file path (--config)
  TARGET_ENVIRONMENT     target environment key (--environment)
  GITHUB_REPOSITORY      owner/name of the repository
  GITHUB_REPOSITORY_ID   numeric repository id
  REST_GITHUB_TOKEN      GitHub API token
"
)]
pub struct Cli {
    /// Path to the sync configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target environment key
    #[arg(short, long, value_name = "NAME")]
    pub environment: Option<String>,

    /// Compute and report the plan without changing anything on GitHub
    #[arg(long)]
    pub dry_run: bool,
}
