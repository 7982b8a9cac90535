//! Configuration file support for env2reqs.
//!
//! Provides YAML-based configuration through `env2reqs.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::application::dto::ScannerKind;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "env2reqs.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub environment_file: Option<PathBuf>,
    pub source_dirs: Option<Vec<String>>,
    pub output: Option<String>,
    pub scanner: Option<String>,
    pub index_url: Option<String>,
    pub normalize_names: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Scanner kind parsed from the `scanner` field, if set.
    pub fn scanner_kind(&self) -> Result<Option<ScannerKind>> {
        self.scanner
            .as_deref()
            .map(|s| s.parse::<ScannerKind>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid config with nothing set
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref source_dirs) = config.source_dirs {
        for (i, dir) in source_dirs.iter().enumerate() {
            if dir.trim().is_empty() {
                bail!(
                    "Invalid config: source_dirs[{}] must not be empty.\n\n\
                     💡 Hint: Each source_dirs entry must name a directory (e.g., \"src\").",
                    i
                );
            }
        }
    }

    if let Some(ref index_url) = config.index_url {
        validate_index_url(index_url).context("Invalid config: index_url")?;
    }

    config
        .scanner_kind()
        .context("Invalid config: unknown scanner")?;

    Ok(())
}

/// Checks that an index URL uses http or https, wherever it came from.
pub fn validate_index_url(index_url: &str) -> Result<()> {
    if !index_url.starts_with("http://") && !index_url.starts_with("https://") {
        bail!(
            "Index URL '{}' must start with http:// or https://.\n\n\
             💡 Hint: Use the base URL of a PyPI-compatible JSON API (e.g., \"https://pypi.org/pypi\").",
            index_url
        );
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, content).unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
environment_file: envs/dev.yml
source_dirs:
  - src
  - notebooks
  - scripts
output: reqs/requirements.txt
scanner: pipreqs
index_url: https://mirror.example.com/pypi
normalize_names: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(
            config.environment_file.as_deref(),
            Some(Path::new("envs/dev.yml"))
        );
        assert_eq!(
            config.source_dirs.as_deref(),
            Some(&["src".to_string(), "notebooks".to_string(), "scripts".to_string()][..])
        );
        assert_eq!(config.output.as_deref(), Some("reqs/requirements.txt"));
        assert_eq!(config.scanner_kind().unwrap(), Some(ScannerKind::Pipreqs));
        assert_eq!(
            config.index_url.as_deref(),
            Some("https://mirror.example.com/pypi")
        );
        assert_eq!(config.normalize_names, Some(true));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "output: \"-\"\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.output.as_deref(), Some("-"));
        assert!(config.source_dirs.is_none());
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "invalid: yaml: [[[broken");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert!(config.environment_file.is_none());
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_empty_source_dir_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "source_dirs:\n  - src\n  - \"  \"\n");

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("source_dirs[1] must not be empty"));
    }

    #[test]
    fn test_index_url_scheme_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "index_url: ftp://example.com/pypi\n");

        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid config: index_url"));
        assert!(err.contains("must start with http:// or https://"));
    }

    #[test]
    fn test_validate_index_url() {
        assert!(validate_index_url("https://pypi.org/pypi").is_ok());
        assert!(validate_index_url("http://localhost:8080/pypi").is_ok());
        assert!(validate_index_url("pypi.org/pypi").is_err());
        assert!(validate_index_url("file:///srv/pypi").is_err());
    }

    #[test]
    fn test_unknown_scanner_validation_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "scanner: pigar\n");

        let err = format!("{:#}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("unknown scanner"));
        assert!(err.contains("pigar"));
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            r#"
output: requirements.txt
format: json
exclude_packages: [pip]
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("exclude_packages"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.environment_file.is_none());
        assert!(config.source_dirs.is_none());
        assert!(config.output.is_none());
        assert!(config.scanner_kind().unwrap().is_none());
        assert!(config.index_url.is_none());
        assert!(config.normalize_names.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
