use crate::ports::outbound::{
    BuildUnit, DeclaredDependency, PluginRequest, ProjectManifest, ProjectManifestReader,
};
use crate::resolution::domain::{Coordinate, DeclaredType, DependencyKey, Scope};
use crate::shared::error::ResolveError;
use crate::shared::security::read_guarded;
use crate::shared::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Name of the build unit declaration inside a project directory
pub const MANIFEST_FILENAME: &str = "pom-resolve.toml";

/// FileSystemReader adapter for reading the project manifest
///
/// Reads `pom-resolve.toml` with the shared security checks and turns the
/// raw TOML tables into a validated `ProjectManifest`.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    unit: RawUnit,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
    #[serde(default)]
    declared_types: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    plugins: Vec<RawPlugin>,
}

#[derive(Debug, Deserialize)]
struct RawUnit {
    group: String,
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawDependency {
    notation: String,
    #[serde(default)]
    buckets: Vec<String>,
    #[serde(default)]
    test: bool,
    scope: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawPlugin {
    id: String,
    version: Option<String>,
}

impl RawManifest {
    fn into_manifest(self) -> Result<ProjectManifest> {
        if self.unit.group.trim().is_empty() || self.unit.name.trim().is_empty() {
            anyhow::bail!("[unit] group and name must not be empty");
        }

        let aliases = self
            .unit
            .aliases
            .iter()
            .map(|alias| alias.parse::<DependencyKey>())
            .collect::<Result<Vec<_>>>()?;

        let dependencies = self
            .dependencies
            .into_iter()
            .map(|raw| {
                let scope = match raw.scope.as_deref() {
                    Some(value) => Some(Scope::parse(value).ok_or_else(|| {
                        anyhow::anyhow!(
                            "Unknown scope '{}' on dependency '{}' (expected compile, runtime, provided or test)",
                            value,
                            raw.notation
                        )
                    })?),
                    None => None,
                };
                Ok(DeclaredDependency {
                    coordinate: Coordinate::parse_notation(&raw.notation)?,
                    buckets: raw.buckets,
                    test: raw.test,
                    scope,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut declared_types = HashMap::new();
        for (key, types) in self.declared_types {
            let parsed = types
                .iter()
                .map(|t| {
                    DeclaredType::parse(t).ok_or_else(|| {
                        anyhow::anyhow!("Unknown declared type '{}' for '{}'", t, key)
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            declared_types.insert(key.parse::<DependencyKey>()?, parsed);
        }

        let plugins = self
            .plugins
            .into_iter()
            .map(|p| PluginRequest {
                id: p.id,
                version: p.version,
            })
            .collect();

        Ok(ProjectManifest {
            unit: BuildUnit {
                group: self.unit.group,
                name: self.unit.name,
                aliases,
            },
            dependencies,
            declared_types,
            plugins,
        })
    }
}

impl ProjectManifestReader for FileSystemReader {
    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest> {
        let manifest_path = project_path.join(MANIFEST_FILENAME);

        if !manifest_path.exists() {
            return Err(ResolveError::ManifestNotFound {
                path: manifest_path,
                suggestion: format!(
                    "{} does not exist in project directory \"{}\".\n   \
                     Create one describing the build unit, or specify the correct path with the --path option.",
                    MANIFEST_FILENAME,
                    project_path.display()
                ),
            }
            .into());
        }

        let content = read_guarded(&manifest_path, MANIFEST_FILENAME).map_err(|e| {
            ResolveError::FileReadError {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        let raw: RawManifest =
            toml::from_str(&content).map_err(|e| ResolveError::ManifestParseError {
                path: manifest_path.clone(),
                details: e.to_string(),
            })?;

        raw.into_manifest().map_err(|e| {
            ResolveError::ManifestParseError {
                path: manifest_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
