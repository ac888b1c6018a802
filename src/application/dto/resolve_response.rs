use crate::ports::outbound::BuildUnit;
use crate::resolution::domain::{
    BomResult, BucketNames, DependencyKey, PomFailure, Reconciliation, ResolutionMetadata,
    ResolvedArtifacts, TransitiveResult,
};
use crate::resolution::services::{BucketAssignment, PluginResolution, SkipReason};
use std::collections::BTreeSet;

/// ResolveResponse - Response DTO from the dependency resolution use case
///
/// Carries the domain results of one run; formatters read it through the
/// `ResolutionReport` read model.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    /// Build unit that was resolved
    pub unit: BuildUnit,
    /// Final resolved artifact set after verification and exclusion
    pub resolved: ResolvedArtifacts,
    /// Classified artifacts in resolution order
    pub assignments: Vec<BucketAssignment>,
    /// Resolved artifacts left out of classification
    pub skipped_assignments: Vec<(DependencyKey, SkipReason)>,
    /// Version decisions for every declared or resolved key, sorted by key
    pub reconciliations: Vec<Reconciliation>,
    pub bom_result: BomResult,
    pub transitive_result: TransitiveResult,
    /// Declared or resolved keys with no usable artifact in the repository
    pub not_found: BTreeSet<DependencyKey>,
    /// Keys removed by exclusion patterns
    pub excluded: Vec<DependencyKey>,
    pub plugins: Vec<PluginResolution>,
    /// Every POM that was skipped during the run
    pub failures: Vec<PomFailure>,
    pub bucket_names: BucketNames,
    pub metadata: ResolutionMetadata,
}

impl ResolveResponse {
    /// True when any dependency or plugin was left behind
    ///
    /// Used to determine the exit code in strict mode.
    pub fn has_unresolved(&self) -> bool {
        !self.not_found.is_empty()
            || !self.transitive_result.skipped_dependencies().is_empty()
            || self.plugins.iter().any(|p| !p.is_resolved())
    }
}
