use super::{Coordinate, DependencyKey, PomFailure};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Resolved artifact set: every dependency discovered so far, keyed by identity.
/// Insertion order follows discovery order.
pub type ResolvedArtifacts = IndexMap<DependencyKey, Coordinate>;

/// Partition of a finished transitive walk.
///
/// Every resolved key sits in exactly one of `main` or `test`; `skipped`
/// holds keys whose POM could not be found and is disjoint from both.
#[derive(Debug, Clone, Default)]
pub struct TransitiveResult {
    main_dependencies: BTreeSet<DependencyKey>,
    test_dependencies: BTreeSet<DependencyKey>,
    skipped_dependencies: BTreeSet<DependencyKey>,
    failures: Vec<PomFailure>,
}

impl TransitiveResult {
    /// Splits the resolved set by test context and attaches the skipped keys
    pub fn from_resolved(
        resolved: &ResolvedArtifacts,
        skipped_dependencies: BTreeSet<DependencyKey>,
        failures: Vec<PomFailure>,
    ) -> Self {
        let (test, main): (Vec<_>, Vec<_>) = resolved
            .iter()
            .partition(|(_, coordinate)| coordinate.is_test_context());

        Self {
            main_dependencies: main.into_iter().map(|(key, _)| key.clone()).collect(),
            test_dependencies: test.into_iter().map(|(key, _)| key.clone()).collect(),
            skipped_dependencies,
            failures,
        }
    }

    pub fn main_dependencies(&self) -> &BTreeSet<DependencyKey> {
        &self.main_dependencies
    }

    pub fn test_dependencies(&self) -> &BTreeSet<DependencyKey> {
        &self.test_dependencies
    }

    pub fn skipped_dependencies(&self) -> &BTreeSet<DependencyKey> {
        &self.skipped_dependencies
    }

    /// POM files that could not be read while walking the graph
    pub fn failures(&self) -> &[PomFailure] {
        &self.failures
    }

    pub fn resolved_count(&self) -> usize {
        self.main_dependencies.len() + self.test_dependencies.len()
    }
}
