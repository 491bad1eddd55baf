//! Configuration file support for dockerfile-build-helper.
//!
//! Provides YAML-based configuration through `dockerfile-build-helper.config.yml`
//! files, including data structures, file loading, validation, and discovery of
//! the default fragment directory.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::BuildHelperError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "dockerfile-build-helper.config.yml";

/// Name of the ancestor directory the default fragment directory hangs off
const ROOT_DIRECTORY_NAME: &str = "contrib";

/// How many parent directories are searched for [`ROOT_DIRECTORY_NAME`]
const MAX_ROOT_SEARCH_DEPTH: usize = 10;

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub fragments_dir: Option<PathBuf>,
    pub script_output: Option<PathBuf>,
    pub markdown_output: Option<PathBuf>,
    pub max_concurrent_checks: Option<usize>,
    pub link_check_timeout_secs: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty configuration
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
    if config.max_concurrent_checks == Some(0) {
        return Err(BuildHelperError::InvalidConfig {
            message: "max_concurrent_checks must be at least 1.\n\n\
                      💡 Hint: Remove the field to use the default of 32 concurrent checks."
                .to_string(),
        }
        .into());
    }
    if config.link_check_timeout_secs == Some(0) {
        return Err(BuildHelperError::InvalidConfig {
            message: "link_check_timeout_secs must be at least 1.\n\n\
                      💡 Hint: Remove the field to wait for each link check without a time limit."
                .to_string(),
        }
        .into());
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Finds the default fragment directory starting from `start`.
///
/// `start` and up to ten of its parents are searched for a directory named
/// `contrib`; the fragments live in `docker-compose-generator/docker-fragments`
/// next to it.
pub fn discover_fragments_dir(start: &Path) -> Result<PathBuf> {
    start
        .ancestors()
        .take(MAX_ROOT_SEARCH_DEPTH + 1)
        .find(|dir| dir.file_name().is_some_and(|name| name == ROOT_DIRECTORY_NAME))
        .map(|contrib| {
            contrib
                .parent()
                .unwrap_or(contrib)
                .join("docker-compose-generator")
                .join("docker-fragments")
        })
        .ok_or_else(|| {
            BuildHelperError::FragmentDirectoryNotFound {
                path: start.to_path_buf(),
                reason: format!(
                    "No '{}' directory found in this directory or its {} parent directories",
                    ROOT_DIRECTORY_NAME, MAX_ROOT_SEARCH_DEPTH
                ),
            }
            .into()
        })
}
