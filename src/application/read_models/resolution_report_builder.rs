//! Builder for constructing ResolutionReport from a use case response

use super::resolution_report::{
    ArtifactView, BomView, BucketView, DecisionView, FailureView, ManagedVersionView,
    PluginView, ReportMetadataView, ResolutionReport, SkippedView, SummaryView,
};
use crate::application::dto::ResolveResponse;
use crate::resolution::domain::VersionDecision;
use indexmap::IndexMap;

/// Reason shown for keys the transitive walk could not locate
const NOT_IN_REPOSITORY: &str = "POM not found in local repository";

/// Builder for constructing ResolutionReport from domain results
pub struct ResolutionReportBuilder;

impl ResolutionReportBuilder {
    /// Builds the report for one resolution run
    ///
    /// # Arguments
    /// * `response` - Response returned by `ResolveDependenciesUseCase::execute`
    ///
    /// # Returns
    /// A fully constructed ResolutionReport
    pub fn build(response: &ResolveResponse) -> ResolutionReport {
        let buckets = Self::build_buckets(response);
        let skipped = Self::build_skipped(response);

        let summary = SummaryView {
            resolved: response.resolved.len(),
            main: response.transitive_result.main_dependencies().len(),
            test: response.transitive_result.test_dependencies().len(),
            assigned: response.assignments.len(),
            skipped: skipped.len(),
            not_found: response.not_found.len(),
            excluded: response.excluded.len(),
            boms: response.bom_result.processed_boms().len(),
            version_changes: response
                .reconciliations
                .iter()
                .filter(|r| r.decision != VersionDecision::NoChange)
                .count(),
            unresolved_plugins: response.plugins.iter().filter(|p| !p.is_resolved()).count(),
        };

        ResolutionReport {
            metadata: ReportMetadataView {
                timestamp: response.metadata.timestamp().to_string(),
                tool_name: response.metadata.tool_name().to_string(),
                tool_version: response.metadata.tool_version().to_string(),
                run_id: response.metadata.run_id().to_string(),
                unit: format!("{}:{}", response.unit.group, response.unit.name),
            },
            summary,
            buckets,
            decisions: Self::build_decisions(response),
            boms: response
                .bom_result
                .processed_boms()
                .iter()
                .map(|bom| BomView {
                    bom: bom.to_string(),
                    managed: response
                        .bom_result
                        .bom_managed_deps()
                        .get(bom)
                        .cloned()
                        .unwrap_or_default(),
                })
                .collect(),
            managed_versions: response
                .bom_result
                .managed_versions()
                .iter()
                .map(|(key, version)| ManagedVersionView {
                    dependency: key.to_string(),
                    version: version.clone(),
                })
                .collect(),
            skipped,
            not_found: response.not_found.iter().map(|k| k.to_string()).collect(),
            excluded: response.excluded.iter().map(|k| k.to_string()).collect(),
            plugins: response
                .plugins
                .iter()
                .map(|p| PluginView {
                    id: p.id.clone(),
                    resolved: p.resolved.as_ref().map(|c| c.notation()),
                    attempted: p.attempted.clone(),
                })
                .collect(),
            failures: response
                .failures
                .iter()
                .map(|f| FailureView {
                    path: f.path.display().to_string(),
                    reason: f.reason.clone(),
                })
                .collect(),
        }
    }

    /// Groups assignments by configured bucket name
    ///
    /// Standard buckets come first in configuration order; custom buckets
    /// follow in the order they were first assigned. Empty buckets are dropped.
    fn build_buckets(response: &ResolveResponse) -> Vec<BucketView> {
        let mut grouped: IndexMap<String, Vec<ArtifactView>> = response
            .bucket_names
            .all()
            .iter()
            .map(|name| (name.to_string(), Vec::new()))
            .collect();

        for assignment in &response.assignments {
            let scope = response
                .resolved
                .get(&assignment.key)
                .and_then(|c| c.scope())
                .map(|s| s.to_string())
                .unwrap_or_default();

            for bucket in &assignment.buckets {
                let name = response.bucket_names.name_of(bucket).to_string();
                grouped.entry(name).or_default().push(ArtifactView {
                    notation: assignment.notation.clone(),
                    scope: scope.clone(),
                });
            }
        }

        grouped
            .into_iter()
            .filter(|(_, artifacts)| !artifacts.is_empty())
            .map(|(name, artifacts)| BucketView { name, artifacts })
            .collect()
    }

    fn build_decisions(response: &ResolveResponse) -> Vec<DecisionView> {
        response
            .reconciliations
            .iter()
            .map(|r| DecisionView {
                dependency: r.key.to_string(),
                requested: r.original_requested.clone(),
                decision: r.decision.label().to_string(),
                final_version: r.final_version().to_string(),
                audit: r.audit_line.clone(),
            })
            .collect()
    }

    /// Classification skips first, then keys the walk could not locate
    fn build_skipped(response: &ResolveResponse) -> Vec<SkippedView> {
        let classified = response
            .skipped_assignments
            .iter()
            .map(|(key, reason)| SkippedView {
                dependency: key.to_string(),
                reason: reason.to_string(),
            });

        let unlocated = response
            .transitive_result
            .skipped_dependencies()
            .iter()
            .map(|key| SkippedView {
                dependency: key.to_string(),
                reason: NOT_IN_REPOSITORY.to_string(),
            });

        classified.chain(unlocated).collect()
    }
}
