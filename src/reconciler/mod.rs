//! # Reconciler
//!
//! Orchestrates one sync run: resolve folders, export them, compute the
//! desired secret set, diff it against the store, apply upserts and (under
//! `clean`) deletions.
//!
//! Everything before the apply phase is read-only; listing and public-key
//! failures abort unconditionally because there is nothing to reconcile
//! without them. From the apply phase on, failures are contained to the
//! individual secret unless `strict` is set.

mod plan;

pub use plan::{diff_secret_names, resolve_folders, SyncPlan};

use crate::config::SyncConfig;
use crate::error::SyncError;
use crate::infisical::{ExportOutcome, SecretExporter};
use crate::naming::{compute_secret_name, NameTemplate};
use crate::store::EnvironmentSecretStore;
use tracing::{error, info, warn};
use zeroize::Zeroizing;

/// One secret ready for upload
pub struct ComputedSecret {
    pub name: String,
    pub value: Zeroizing<String>,
}

impl std::fmt::Debug for ComputedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputedSecret")
            .field("name", &self.name)
            .field("value", &"***")
            .finish()
    }
}

/// Per-phase counts of one completed run
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Secrets computed from all exported folders (duplicates included)
    pub computed: usize,
    /// Computed entries GitHub did not know yet
    pub to_add: usize,
    /// Computed entries that overwrite an existing secret
    pub to_update: usize,
    /// Upserts that succeeded
    pub uploaded: usize,
    /// Deletions that succeeded
    pub removed: usize,
    pub failed_upserts: usize,
    pub failed_deletes: usize,
    /// True when the run stopped after the plan stage
    pub dry_run: bool,
}

/// Run one reconciliation for `environment`
///
/// `environment` is the local environment key: it selects the environment
/// configuration and names the GitHub environment. The Infisical side uses
/// the configured `infisicalEnvName`.
pub async fn run_sync(
    config: &SyncConfig,
    environment: &str,
    exporter: &dyn SecretExporter,
    store: &dyn EnvironmentSecretStore,
    dry_run: bool,
) -> Result<SyncReport, SyncError> {
    let env_config = config.environments.get(environment).ok_or_else(|| {
        SyncError::Environment(format!("no configuration found for environment: {environment}"))
    })?;
    info!("Configuration found for environment {environment}");

    let folders = resolve_folders(&config.common_folders, &env_config.folders);
    if folders.is_empty() {
        return Err(SyncError::Config(format!(
            "no folders to check for secrets for environment: {environment}"
        )));
    }
    info!("Folders to check for secrets:");
    for folder in &folders {
        info!("  - {folder}");
    }

    let existing_names = store.list_secret_names(environment).await?;
    info!("Found {} secrets on GitHub", existing_names.len());

    info!("Fetching environment public key");
    let public_key = store.get_public_key(environment).await?;

    let template = NameTemplate::parse(&env_config.variable_name);
    let mut computed_secrets: Vec<ComputedSecret> = Vec::new();
    let mut computed_names: Vec<String> = Vec::new();

    for folder in &folders {
        match exporter
            .export_folder(&env_config.infisical_env_name, folder)
            .await
        {
            ExportOutcome::Secrets(secrets) => {
                for secret in secrets {
                    let name = template.resolve(&compute_secret_name(&secret.key, folder));
                    computed_names.push(name.clone());
                    computed_secrets.push(ComputedSecret {
                        name,
                        value: Zeroizing::new(secret.value),
                    });
                }
            }
            ExportOutcome::Empty => {
                warn!("No secrets found for folder: {folder}");
                if config.strict {
                    return Err(SyncError::Export {
                        folder: folder.clone(),
                        message: "no secrets found".to_string(),
                    });
                }
            }
            ExportOutcome::Malformed { command, output } => {
                error!("Export command failed: {command}");
                error!("{output}");
                if config.strict {
                    return Err(SyncError::Export {
                        folder: folder.clone(),
                        message: format!("unusable export output from: {command}"),
                    });
                }
            }
        }
    }
    info!("Found {} secrets on Infisical", computed_secrets.len());

    info!("Diffing secrets between GitHub and computed Infisical secrets");
    let plan = diff_secret_names(&computed_names, &existing_names);

    let mut report = SyncReport {
        computed: computed_secrets.len(),
        to_add: plan.to_add.len(),
        to_update: computed_secrets.len() - plan.to_add.len(),
        dry_run,
        ..SyncReport::default()
    };

    info!(
        "Secrets to add: {} ({})",
        plan.to_add.len(),
        plan.to_add.join(", ")
    );
    info!(
        "Secrets to update: {} ({})",
        report.to_update,
        computed_names.join(", ")
    );
    if config.clean {
        info!(
            "Secrets to remove: {} ({})",
            plan.to_remove.len(),
            plan.to_remove.join(", ")
        );
    }

    if dry_run {
        info!("Dry run, stopping before any change is applied");
        return Ok(report);
    }

    for secret in &computed_secrets {
        match store
            .put_secret(environment, &secret.name, &secret.value, &public_key)
            .await
        {
            Ok(()) => report.uploaded += 1,
            Err(e) => {
                error!("{e}");
                if config.strict {
                    return Err(e);
                }
                report.failed_upserts += 1;
            }
        }
    }
    info!(
        "Secrets updated: {}/{}",
        report.uploaded, report.computed
    );

    if config.clean {
        info!("Cleaning {} secrets", plan.to_remove.len());
        for name in &plan.to_remove {
            match store.delete_secret(environment, name).await {
                Ok(()) => report.removed += 1,
                Err(e) => {
                    error!("{e}");
                    if config.strict {
                        return Err(e);
                    }
                    report.failed_deletes += 1;
                }
            }
        }
    }

    Ok(report)
}
