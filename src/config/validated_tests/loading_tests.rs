//! Tests for scenario loading and template generation.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::config::{field, write_default_config};

#[test]
fn load_requires_scenario() {
    let result = ValidatedConfig::load(&cli(&[]));

    assert!(matches!(
        result,
        Err(ConfigError::MissingRequired { field: f, .. }) if f == field::SCENARIO
    ));
}

#[test]
fn load_reads_scenario_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [host]
        width = 120
        height = 80

        [[steps]]
        action = "mount"
        "#
    )
    .unwrap();

    let path = file.path().to_str().unwrap();
    let config = ValidatedConfig::load(&cli(&["--scenario", path])).unwrap();

    assert_eq!(config.scenario.steps.len(), 1);
    assert_eq!(config.scenario.host_size.width, 120.0);
}

#[test]
fn load_missing_file_reports_read_error() {
    let result = ValidatedConfig::load(&cli(&["--scenario", "/nonexistent/scenario.toml"]));
    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn load_invalid_toml_reports_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[[steps]\naction =").unwrap();

    let path = file.path().to_str().unwrap();
    let result = ValidatedConfig::load(&cli(&["--scenario", path]));

    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}

#[test]
fn written_template_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.toml");

    write_default_config(&path).unwrap();

    let config = ValidatedConfig::load(&cli(&["--scenario", path.to_str().unwrap()])).unwrap();
    assert!(!config.scenario.steps.is_empty());
    assert_eq!(config.scenario.elements.len(), 1);
}

#[test]
fn write_to_missing_directory_fails() {
    let result = write_default_config(std::path::Path::new("/nonexistent/dir/scenario.toml"));
    assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
}
