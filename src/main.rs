//! # Infisical Secrets Sync
//!
//! One-shot CLI that mirrors Infisical folder secrets into GitHub Actions
//! environment secrets:
//!
//! 1. **Load configuration** - folders per environment, `strict`/`clean` policies
//! 2. **Export folders** - `infisical export` per folder, JSON output
//! 3. **Compute names** - folder-prefixed, upper-cased, per-environment template
//! 4. **Diff** - against the names GitHub already stores for the environment
//! 5. **Apply** - sealed-box encrypted upserts, plus deletions under `clean`
//!
//! Exit code 0 means the run completed, even when individual secrets failed
//! in non-strict mode; any fatal error logs its cause and exits 1.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

use infisical_secrets_sync::cli::Cli;
use infisical_secrets_sync::config::SyncConfig;
use infisical_secrets_sync::constants::{ENV_CONFIG_PATH, ENV_TARGET_ENVIRONMENT};
use infisical_secrets_sync::error::SyncError;
use infisical_secrets_sync::infisical::{self, InfisicalCli};
use infisical_secrets_sync::reconciler;
use infisical_secrets_sync::store::github::GithubEnvStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "infisical_secrets_sync=info".into()),
        )
        .init();

    info!(
        "Starting infisical-secrets-sync (built {} {})",
        env!("BUILD_DATETIME"),
        env!("BUILD_GIT_HASH")
    );

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), SyncError> {
    let config_path = cli
        .config
        .or_else(|| std::env::var(ENV_CONFIG_PATH).ok().map(PathBuf::from))
        .ok_or_else(|| {
            SyncError::Config(format!(
                "no configuration file given; pass --config or set {ENV_CONFIG_PATH}"
            ))
        })?;
    let config = SyncConfig::load(&config_path)?;
    info!("Configuration file loaded successfully");

    let environment = cli
        .environment
        .or_else(|| std::env::var(ENV_TARGET_ENVIRONMENT).ok())
        .ok_or_else(|| {
            SyncError::Environment(format!(
                "no environment detected; pass --environment or set {ENV_TARGET_ENVIRONMENT}"
            ))
        })?;
    info!("Detected environment: {environment}");

    let exporter = InfisicalCli::new(infisical::locate_binary()?);
    let store = GithubEnvStore::from_env()?;

    let report = reconciler::run_sync(&config, &environment, &exporter, &store, cli.dry_run).await?;

    info!(
        "Done ({} uploaded, {} removed, {} failed)",
        report.uploaded,
        report.removed,
        report.failed_upserts + report.failed_deletes
    );
    Ok(())
}
