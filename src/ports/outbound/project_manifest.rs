use crate::resolution::domain::{Coordinate, DeclaredType, DependencyKey, Scope};
use std::collections::HashMap;

/// ProjectManifest describes the build unit being resolved and what it declares
#[derive(Debug, Clone, Default)]
pub struct ProjectManifest {
    pub unit: BuildUnit,
    pub dependencies: Vec<DeclaredDependency>,
    pub declared_types: HashMap<DependencyKey, Vec<DeclaredType>>,
    pub plugins: Vec<PluginRequest>,
}

/// Identity of the consuming build unit
#[derive(Debug, Clone, Default)]
pub struct BuildUnit {
    pub group: String,
    pub name: String,
    /// Additional identities the unit publishes under
    pub aliases: Vec<DependencyKey>,
}

impl BuildUnit {
    /// Every key that refers to this unit itself
    pub fn self_keys(&self) -> Vec<DependencyKey> {
        let mut keys = vec![DependencyKey::new(self.group.clone(), self.name.clone())];
        keys.extend(self.aliases.iter().cloned());
        keys
    }
}

/// One dependency declaration from the build file
#[derive(Debug, Clone)]
pub struct DeclaredDependency {
    /// Requested coordinate; the version may be empty when left to a BOM
    pub coordinate: Coordinate,
    /// Bucket names written on the declaration
    pub buckets: Vec<String>,
    /// Explicit test designation
    pub test: bool,
    pub scope: Option<Scope>,
}

impl DeclaredDependency {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            buckets: Vec::new(),
            test: false,
            scope: None,
        }
    }

    pub fn key(&self) -> DependencyKey {
        self.coordinate.key()
    }
}

/// A build plugin requested by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginRequest {
    pub id: String,
    pub version: Option<String>,
}
