//! Tests for schema and filesystem validation.

use sitepack_config::{
    ConfigError, ConfigValidator, FsValidator, SchemaValidator, SiteConfig, validate_fs,
    validate_schema,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn scaffold(root: &Path) {
    fs::create_dir_all(root.join("src/js")).unwrap();
    fs::create_dir_all(root.join("src/assets/icons")).unwrap();
    fs::write(root.join("src/js/main.js"), "console.log('hi');").unwrap();
    fs::write(root.join("src/assets/icons/favicon.svg"), "<svg/>").unwrap();
}

#[test]
fn schema_validation_skips_filesystem() {
    // Nothing exists on disk, schema checks still pass
    let config = SiteConfig::default();
    assert!(validate_schema(&config).is_ok());
}

#[test]
fn fs_validation_passes_for_scaffolded_project() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    assert!(validate_fs(&SiteConfig::default(), dir.path()).is_ok());
}

#[test]
fn fs_validation_reports_missing_entry() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());

    let config = SiteConfig {
        paths: SiteConfig::default()
            .paths
            .with_entry("admin", "src/js/admin.js"),
        ..SiteConfig::default()
    };

    match FsValidator::new(dir.path()).validate(&config) {
        Err(ConfigError::EntryNotFound { path }) => {
            assert!(path.ends_with("src/js/admin.js"));
        }
        other => panic!("expected EntryNotFound, got {other:?}"),
    }
}

#[test]
fn fs_validation_reports_missing_favicon() {
    let dir = TempDir::new().unwrap();
    scaffold(dir.path());
    fs::remove_file(dir.path().join("src/assets/icons/favicon.svg")).unwrap();

    let err = validate_fs(&SiteConfig::default(), dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::FaviconNotFound { .. }));
}

#[test]
fn fs_validation_runs_schema_checks_first() {
    let dir = TempDir::new().unwrap();
    let mut config = SiteConfig::default();
    config.paths.entries.clear();

    let err = FsValidator::new(dir.path()).validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::NoEntries));
}

#[test]
fn schema_errors_carry_hints() {
    let mut config = SiteConfig::default();
    config.paths.template_extension = String::new();

    let err = SchemaValidator.validate(&config).unwrap_err();
    assert!(err.to_string().contains("template extension"));
    assert!(err.hint().is_some());
}
