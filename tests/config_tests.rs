//! # Configuration Loading Tests
//!
//! Exercise `SyncConfig::load` against real files on disk: the happy path
//! plus every rejection case the loader promises.

use infisical_secrets_sync::config::SyncConfig;
use infisical_secrets_sync::error::SyncError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_load_valid_config() {
    let file = write_config(
        r"
commonFolders:
  - /
environments:
  staging:
    infisicalEnvName: stage
    variableName: 'STAGING_{}'
    folders:
      - /frontend
      - backend
clean: true
",
    );

    let config = SyncConfig::load(file.path()).expect("config should load");

    assert_eq!(config.common_folders, vec!["/"]);
    assert!(config.clean);
    assert!(!config.strict);
    let staging = &config.environments["staging"];
    assert_eq!(staging.infisical_env_name, "stage");
    assert_eq!(staging.variable_name, "STAGING_{}");
    assert_eq!(staging.folders, vec!["/frontend", "backend"]);
}

#[test]
fn test_missing_file_is_config_error() {
    let result = SyncConfig::load(Path::new("/nonexistent/sync-config.yaml"));

    match result {
        Err(SyncError::Config(message)) => {
            assert!(message.contains("cannot read configuration file"))
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn test_non_mapping_document_is_rejected() {
    let file = write_config("- just\n- a\n- list\n");

    assert!(matches!(
        SyncConfig::load(file.path()),
        Err(SyncError::Config(_))
    ));
}

#[test]
fn test_missing_required_keys_are_rejected() {
    let cases = [
        // no environments
        "commonFolders: []\n",
        // no commonFolders
        "environments: {}\n",
        // environment missing variableName
        r"
commonFolders: []
environments:
  staging:
    infisicalEnvName: staging
    folders: []
",
        // environment missing infisicalEnvName
        r"
commonFolders: []
environments:
  staging:
    variableName: ''
    folders: []
",
        // environment missing folders
        r"
commonFolders: []
environments:
  staging:
    infisicalEnvName: staging
    variableName: ''
",
    ];

    for contents in cases {
        let file = write_config(contents);
        assert!(
            matches!(SyncConfig::load(file.path()), Err(SyncError::Config(_))),
            "config should be rejected:\n{contents}"
        );
    }
}

#[test]
fn test_wrong_field_types_are_rejected() {
    let cases = [
        // commonFolders must be a sequence
        "commonFolders: yes\nenvironments: {}\n",
        // folders must be a sequence
        r"
commonFolders: []
environments:
  staging:
    infisicalEnvName: staging
    variableName: ''
    folders: frontend
",
        // infisicalEnvName must be a string
        r"
commonFolders: []
environments:
  staging:
    infisicalEnvName: [staging]
    variableName: ''
    folders: []
",
    ];

    for contents in cases {
        let file = write_config(contents);
        assert!(
            matches!(SyncConfig::load(file.path()), Err(SyncError::Config(_))),
            "config should be rejected:\n{contents}"
        );
    }
}

#[test]
fn test_template_with_two_placeholders_is_rejected() {
    let file = write_config(
        r"
commonFolders: []
environments:
  staging:
    infisicalEnvName: staging
    variableName: '{}_{}'
    folders:
      - /
",
    );

    match SyncConfig::load(file.path()) {
        Err(SyncError::Config(message)) => assert!(message.contains("at most one")),
        other => panic!("expected Config error, got {other:?}"),
    }
}
