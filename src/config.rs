//! Configuration file support for pom-resolve.
//!
//! Provides YAML-based configuration through `pom-resolve.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use pom_resolve::resolution::domain::BucketNames;
use pom_resolve::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "pom-resolve.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub pom_root: Option<PathBuf>,
    pub artifact_root: Option<PathBuf>,
    pub exclude_dependencies: Option<Vec<String>>,
    pub verify_artifacts: Option<bool>,
    pub strict: Option<bool>,
    pub bucket_names: Option<BucketNames>,
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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref patterns) = config.exclude_dependencies {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_dependencies[{}] must not be empty.\n\n\
                     💡 Hint: Use a 'group:artifact' pattern such as \"org.junit*:*\".",
                    i
                );
            }
        }
    }

    if let Some(ref names) = config.bucket_names {
        let fields = [
            ("api", &names.api),
            ("implementation", &names.implementation),
            ("runtime_only", &names.runtime_only),
            ("compile_only", &names.compile_only),
            ("test", &names.test),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: bucket_names.{} must not be empty.\n\n\
                     💡 Hint: Remove the entry to use the default name.",
                    field
                );
            }
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
