//! Resolution report read model
//!
//! Everything here is already sorted and stringified so formatters only
//! decide layout.

/// Main read model for one resolution run
#[derive(Debug, Clone)]
pub struct ResolutionReport {
    pub metadata: ReportMetadataView,
    pub summary: SummaryView,
    /// Non-empty buckets, standard buckets first in their configured order
    pub buckets: Vec<BucketView>,
    pub decisions: Vec<DecisionView>,
    /// BOMs in expansion order
    pub boms: Vec<BomView>,
    pub managed_versions: Vec<ManagedVersionView>,
    pub skipped: Vec<SkippedView>,
    pub not_found: Vec<String>,
    pub excluded: Vec<String>,
    pub plugins: Vec<PluginView>,
    pub failures: Vec<FailureView>,
}

#[derive(Debug, Clone)]
pub struct ReportMetadataView {
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub run_id: String,
    /// `group:name` of the resolved build unit
    pub unit: String,
}

/// Counts shown at the top of every report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryView {
    pub resolved: usize,
    pub main: usize,
    pub test: usize,
    pub assigned: usize,
    pub skipped: usize,
    pub not_found: usize,
    pub excluded: usize,
    pub boms: usize,
    /// Decisions other than no-change
    pub version_changes: usize,
    pub unresolved_plugins: usize,
}

#[derive(Debug, Clone)]
pub struct BucketView {
    pub name: String,
    pub artifacts: Vec<ArtifactView>,
}

#[derive(Debug, Clone)]
pub struct ArtifactView {
    /// `group:artifact:version`
    pub notation: String,
    pub scope: String,
}

#[derive(Debug, Clone)]
pub struct DecisionView {
    pub dependency: String,
    pub requested: String,
    /// `no-change`, `override` or `apply-managed`
    pub decision: String,
    pub final_version: String,
    pub audit: String,
}

#[derive(Debug, Clone)]
pub struct BomView {
    pub bom: String,
    pub managed: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ManagedVersionView {
    pub dependency: String,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct SkippedView {
    pub dependency: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct PluginView {
    pub id: String,
    /// Resolved notation, `None` when no candidate matched
    pub resolved: Option<String>,
    pub attempted: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FailureView {
    pub path: String,
    pub reason: String,
}
