//! # Infisical Export
//!
//! Drives the Infisical CLI in export mode, one invocation per folder, and
//! parses its JSON output into key/value pairs.
//!
//! The exporter deliberately ignores the process exit status: whatever the
//! CLI printed (stdout and stderr combined) either parses as a JSON secret
//! list or it does not, and an unparseable export carries the captured
//! output so the operator can read the CLI's own complaint.

use crate::constants::INFISICAL_BINARY;
use crate::error::SyncError;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// One secret as reported by the Infisical CLI for a single folder
#[derive(Debug, Clone, Deserialize)]
pub struct RawSecret {
    pub key: String,
    pub value: String,
}

/// Typed result of exporting one folder
///
/// `Empty` and `Malformed` receive identical treatment under the
/// strict/skip policy; they are distinct variants so the log lines can say
/// which one happened.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The folder exported at least one secret
    Secrets(Vec<RawSecret>),
    /// The export parsed but contained no secrets
    Empty,
    /// The CLI could not be run or its output was not a JSON secret list
    Malformed { command: String, output: String },
}

/// Locate the Infisical CLI on `PATH`
///
/// Checked once at startup, before any network traffic, so a missing CLI
/// fails the run immediately.
pub fn locate_binary() -> Result<PathBuf, SyncError> {
    which::which(INFISICAL_BINARY).map_err(|e| {
        SyncError::Dependency(format!(
            "{INFISICAL_BINARY} binary not found in PATH ({e}); install the Infisical CLI before running the sync"
        ))
    })
}

/// Folder export seam
///
/// The reconciler drives exports through this trait so tests can substitute
/// an in-memory exporter for the real CLI.
#[async_trait]
pub trait SecretExporter: Send + Sync {
    async fn export_folder(&self, environment: &str, folder: &str) -> ExportOutcome;
}

/// Real exporter backed by the `infisical` binary
#[derive(Debug)]
pub struct InfisicalCli {
    binary: PathBuf,
}

impl InfisicalCli {
    #[must_use]
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }
}

#[async_trait]
impl SecretExporter for InfisicalCli {
    async fn export_folder(&self, environment: &str, folder: &str) -> ExportOutcome {
        let args = [
            "export".to_string(),
            format!("--env={environment}"),
            "--format=json".to_string(),
            format!("--path={folder}"),
        ];
        let command = format!("{} {}", self.binary.display(), args.join(" "));
        debug!("Running export: {command}");

        let output = match tokio::process::Command::new(&self.binary)
            .args(&args)
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                return ExportOutcome::Malformed {
                    command,
                    output: format!("failed to run export command: {e}"),
                }
            }
        };

        // Combined capture: the CLI reports errors on stderr, and an error
        // report is exactly what the Malformed variant should carry.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        parse_export_output(&command, &combined)
    }
}

/// Parse the combined output of one export invocation
pub(crate) fn parse_export_output(command: &str, combined: &str) -> ExportOutcome {
    match serde_json::from_str::<Vec<RawSecret>>(combined.trim()) {
        Ok(secrets) if secrets.is_empty() => ExportOutcome::Empty,
        Ok(secrets) => ExportOutcome::Secrets(secrets),
        Err(_) => ExportOutcome::Malformed {
            command: command.to_string(),
            output: combined.to_string(),
        },
    }
}
