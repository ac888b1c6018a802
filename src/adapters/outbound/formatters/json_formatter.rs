use crate::application::read_models::{
    BucketView, DecisionView, PluginView, ReportMetadataView, ResolutionReport, SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Document<'a> {
    metadata: Metadata<'a>,
    summary: Summary,
    buckets: Vec<Bucket<'a>>,
    decisions: Vec<Decision<'a>>,
    boms: Vec<Bom<'a>>,
    managed_versions: BTreeMap<&'a str, &'a str>,
    skipped: Vec<Skipped<'a>>,
    not_found: &'a [String],
    excluded: &'a [String],
    plugins: Vec<Plugin<'a>>,
    failures: Vec<Failure<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    timestamp: &'a str,
    run_id: &'a str,
    unit: &'a str,
    tool: Tool<'a>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    resolved: usize,
    main: usize,
    test: usize,
    assigned: usize,
    skipped: usize,
    not_found: usize,
    excluded: usize,
    boms: usize,
    version_changes: usize,
    unresolved_plugins: usize,
}

#[derive(Debug, Serialize)]
struct Bucket<'a> {
    name: &'a str,
    artifacts: Vec<Artifact<'a>>,
}

#[derive(Debug, Serialize)]
struct Artifact<'a> {
    notation: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    scope: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Decision<'a> {
    dependency: &'a str,
    requested: &'a str,
    decision: &'a str,
    final_version: &'a str,
    audit: &'a str,
}

#[derive(Debug, Serialize)]
struct Bom<'a> {
    bom: &'a str,
    managed: &'a [String],
}

#[derive(Debug, Serialize)]
struct Skipped<'a> {
    dependency: &'a str,
    reason: &'a str,
}

#[derive(Debug, Serialize)]
struct Plugin<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    resolved: Option<&'a str>,
    attempted: &'a [String],
}

#[derive(Debug, Serialize)]
struct Failure<'a> {
    path: &'a str,
    reason: &'a str,
}

/// JsonReportFormatter adapter for rendering the report as pretty JSON
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn metadata(view: &ReportMetadataView) -> Metadata<'_> {
        Metadata {
            timestamp: &view.timestamp,
            run_id: &view.run_id,
            unit: &view.unit,
            tool: Tool {
                name: &view.tool_name,
                version: &view.tool_version,
            },
        }
    }

    fn summary(view: &SummaryView) -> Summary {
        Summary {
            resolved: view.resolved,
            main: view.main,
            test: view.test,
            assigned: view.assigned,
            skipped: view.skipped,
            not_found: view.not_found,
            excluded: view.excluded,
            boms: view.boms,
            version_changes: view.version_changes,
            unresolved_plugins: view.unresolved_plugins,
        }
    }

    fn buckets(views: &[BucketView]) -> Vec<Bucket<'_>> {
        views
            .iter()
            .map(|b| Bucket {
                name: &b.name,
                artifacts: b
                    .artifacts
                    .iter()
                    .map(|a| Artifact {
                        notation: &a.notation,
                        scope: &a.scope,
                    })
                    .collect(),
            })
            .collect()
    }

    fn decisions(views: &[DecisionView]) -> Vec<Decision<'_>> {
        views
            .iter()
            .map(|d| Decision {
                dependency: &d.dependency,
                requested: &d.requested,
                decision: &d.decision,
                final_version: &d.final_version,
                audit: &d.audit,
            })
            .collect()
    }

    fn plugins(views: &[PluginView]) -> Vec<Plugin<'_>> {
        views
            .iter()
            .map(|p| Plugin {
                id: &p.id,
                resolved: p.resolved.as_deref(),
                attempted: &p.attempted,
            })
            .collect()
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let document = Document {
            metadata: Self::metadata(&report.metadata),
            summary: Self::summary(&report.summary),
            buckets: Self::buckets(&report.buckets),
            decisions: Self::decisions(&report.decisions),
            boms: report
                .boms
                .iter()
                .map(|b| Bom {
                    bom: &b.bom,
                    managed: &b.managed,
                })
                .collect(),
            managed_versions: report
                .managed_versions
                .iter()
                .map(|m| (m.dependency.as_str(), m.version.as_str()))
                .collect(),
            skipped: report
                .skipped
                .iter()
                .map(|s| Skipped {
                    dependency: &s.dependency,
                    reason: &s.reason,
                })
                .collect(),
            not_found: &report.not_found,
            excluded: &report.excluded,
            plugins: Self::plugins(&report.plugins),
            failures: report
                .failures
                .iter()
                .map(|f| Failure {
                    path: &f.path,
                    reason: &f.reason,
                })
                .collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{ArtifactView, ManagedVersionView, SkippedView};
    use serde_json::Value;

    fn create_test_report() -> ResolutionReport {
        ResolutionReport {
            metadata: ReportMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "pom-resolve".to_string(),
                tool_version: "0.1.0".to_string(),
                run_id: "urn:uuid:test-123".to_string(),
                unit: "com.example:app".to_string(),
            },
            summary: SummaryView {
                resolved: 2,
                main: 2,
                assigned: 1,
                skipped: 1,
                ..SummaryView::default()
            },
            buckets: vec![BucketView {
                name: "api".to_string(),
                artifacts: vec![ArtifactView {
                    notation: "com.google.guava:guava:31.1-jre".to_string(),
                    scope: "compile".to_string(),
                }],
            }],
            decisions: vec![],
            boms: vec![],
            managed_versions: vec![ManagedVersionView {
                dependency: "org.acme:widget".to_string(),
                version: "2.0".to_string(),
            }],
            skipped: vec![SkippedView {
                dependency: "org.acme:acme-bom".to_string(),
                reason: "metadata-only (pom packaging)".to_string(),
            }],
            not_found: vec![],
            excluded: vec![],
            plugins: vec![PluginView {
                id: "org.none.thing".to_string(),
                resolved: None,
                attempted: vec!["org.none.thing:thing".to_string()],
            }],
            failures: vec![],
        }
    }

    #[test]
    fn test_format_is_valid_json() {
        let json = JsonReportFormatter::new()
            .format(&create_test_report())
            .unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["metadata"]["runId"], "urn:uuid:test-123");
        assert_eq!(parsed["metadata"]["tool"]["name"], "pom-resolve");
        assert_eq!(parsed["summary"]["resolved"], 2);
        assert_eq!(parsed["summary"]["notFound"], 0);
        assert_eq!(parsed["buckets"][0]["name"], "api");
        assert_eq!(
            parsed["buckets"][0]["artifacts"][0]["notation"],
            "com.google.guava:guava:31.1-jre"
        );
        assert_eq!(parsed["managedVersions"]["org.acme:widget"], "2.0");
        assert_eq!(parsed["skipped"][0]["dependency"], "org.acme:acme-bom");
    }

    #[test]
    fn test_unresolved_plugin_omits_resolved_field() {
        let json = JsonReportFormatter::new()
            .format(&create_test_report())
            .unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["plugins"][0].get("resolved").is_none());
        assert_eq!(parsed["plugins"][0]["attempted"][0], "org.none.thing:thing");
    }
}
