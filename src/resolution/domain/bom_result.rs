use super::{DependencyKey, PomFailure};
use indexmap::{IndexMap, IndexSet};

/// Outcome of expanding the BOMs reachable from a set of seed dependencies.
///
/// Built once per resolution run by `BomExpander` and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct BomResult {
    managed_versions: IndexMap<DependencyKey, String>,
    bom_managed_deps: IndexMap<DependencyKey, Vec<String>>,
    processed_boms: IndexSet<DependencyKey>,
    failures: Vec<PomFailure>,
}

impl BomResult {
    pub fn new(
        managed_versions: IndexMap<DependencyKey, String>,
        bom_managed_deps: IndexMap<DependencyKey, Vec<String>>,
        processed_boms: IndexSet<DependencyKey>,
        failures: Vec<PomFailure>,
    ) -> Self {
        Self {
            managed_versions,
            bom_managed_deps,
            processed_boms,
            failures,
        }
    }

    /// Managed version per dependency; the last BOM expanded wins
    pub fn managed_versions(&self) -> &IndexMap<DependencyKey, String> {
        &self.managed_versions
    }

    pub fn managed_version(&self, key: &DependencyKey) -> Option<&str> {
        self.managed_versions.get(key).map(String::as_str)
    }

    /// Managed `group:artifact:version` entries attributed to each BOM
    pub fn bom_managed_deps(&self) -> &IndexMap<DependencyKey, Vec<String>> {
        &self.bom_managed_deps
    }

    /// BOMs expanded, in expansion order
    pub fn processed_boms(&self) -> &IndexSet<DependencyKey> {
        &self.processed_boms
    }

    pub fn is_processed(&self, key: &DependencyKey) -> bool {
        self.processed_boms.contains(key)
    }

    pub fn failures(&self) -> &[PomFailure] {
        &self.failures
    }
}
