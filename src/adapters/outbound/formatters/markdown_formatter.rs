use crate::application::read_models::{
    BucketView, DecisionView, PluginView, ResolutionReport, SummaryView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Markdown table header for bucket contents
const ARTIFACT_TABLE_HEADER: &str = "| Artifact | Scope |\n";

/// Markdown table separator line for bucket contents
const ARTIFACT_TABLE_SEPARATOR: &str = "|----------|-------|\n";

/// Markdown table header for version decisions
const DECISION_TABLE_HEADER: &str = "| Dependency | Requested | Decision | Final Version |\n";

/// Markdown table separator line for version decisions
const DECISION_TABLE_SEPARATOR: &str = "|------------|-----------|----------|---------------|\n";

/// MarkdownReportFormatter adapter for generating a human-readable resolution report
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Renders a bullet list, or a placeholder line when empty
    fn render_list(output: &mut String, items: &[String]) {
        if items.is_empty() {
            output.push_str("_None._\n\n");
            return;
        }
        for item in items {
            output.push_str(&format!("- `{}`\n", item));
        }
        output.push('\n');
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownReportFormatter {
    fn render_header(&self, output: &mut String, report: &ResolutionReport) {
        output.push_str(&format!(
            "# Dependency Resolution Report: {}\n\n",
            report.metadata.unit
        ));
        output.push_str(&format!(
            "Generated by {} {} at {} ({})\n\n",
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.timestamp,
            report.metadata.run_id
        ));
    }

    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Count |\n");
        output.push_str("|--------|-------|\n");
        for (label, count) in [
            ("Resolved artifacts", summary.resolved),
            ("Main dependencies", summary.main),
            ("Test dependencies", summary.test),
            ("Assigned to buckets", summary.assigned),
            ("Skipped", summary.skipped),
            ("Not found", summary.not_found),
            ("Excluded", summary.excluded),
            ("BOMs expanded", summary.boms),
            ("Version changes", summary.version_changes),
            ("Unresolved plugins", summary.unresolved_plugins),
        ] {
            output.push_str(&format!("| {} | {} |\n", label, count));
        }
        output.push('\n');
    }

    fn render_buckets(&self, output: &mut String, buckets: &[BucketView]) {
        output.push_str("## Bucket Assignments\n\n");
        if buckets.is_empty() {
            output.push_str("_No artifacts were assigned._\n\n");
            return;
        }

        for bucket in buckets {
            output.push_str(&format!(
                "### {} ({})\n\n",
                bucket.name,
                bucket.artifacts.len()
            ));
            output.push_str(ARTIFACT_TABLE_HEADER);
            output.push_str(ARTIFACT_TABLE_SEPARATOR);
            for artifact in &bucket.artifacts {
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::escape_markdown_table_cell(&artifact.notation),
                    Self::escape_markdown_table_cell(&artifact.scope)
                ));
            }
            output.push('\n');
        }
    }

    fn render_decisions(&self, output: &mut String, decisions: &[DecisionView]) {
        output.push_str("## Version Decisions\n\n");
        if decisions.is_empty() {
            output.push_str("_None._\n\n");
            return;
        }

        output.push_str(DECISION_TABLE_HEADER);
        output.push_str(DECISION_TABLE_SEPARATOR);
        for decision in decisions {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&decision.dependency),
                Self::escape_markdown_table_cell(&decision.requested),
                decision.decision,
                Self::escape_markdown_table_cell(&decision.final_version)
            ));
        }
        output.push('\n');
    }

    fn render_boms(&self, output: &mut String, report: &ResolutionReport) {
        if report.boms.is_empty() {
            return;
        }

        output.push_str("## Bills of Materials\n\n");
        for bom in &report.boms {
            output.push_str(&format!(
                "### {} ({} managed)\n\n",
                bom.bom,
                bom.managed.len()
            ));
            Self::render_list(output, &bom.managed);
        }
    }

    fn render_problems(&self, output: &mut String, report: &ResolutionReport) {
        output.push_str("## Skipped\n\n");
        if report.skipped.is_empty() {
            output.push_str("_None._\n\n");
        } else {
            for s in &report.skipped {
                output.push_str(&format!("- `{}`: {}\n", s.dependency, s.reason));
            }
            output.push('\n');
        }

        output.push_str("## Not Found\n\n");
        Self::render_list(output, &report.not_found);

        if !report.excluded.is_empty() {
            output.push_str("## Excluded\n\n");
            Self::render_list(output, &report.excluded);
        }
    }

    fn render_plugins(&self, output: &mut String, plugins: &[PluginView]) {
        if plugins.is_empty() {
            return;
        }

        output.push_str("## Plugins\n\n");
        for plugin in plugins {
            match &plugin.resolved {
                Some(notation) => {
                    output.push_str(&format!("- `{}` → `{}`\n", plugin.id, notation));
                }
                None => output.push_str(&format!(
                    "- `{}`: unresolved (tried {})\n",
                    plugin.id,
                    plugin.attempted.join(", ")
                )),
            }
        }
        output.push('\n');
    }

    fn render_failures(&self, output: &mut String, report: &ResolutionReport) {
        if report.failures.is_empty() {
            return;
        }

        output.push_str("## Unreadable POM Files\n\n");
        for failure in &report.failures {
            output.push_str(&format!("- `{}`: {}\n", failure.path, failure.reason));
        }
        output.push('\n');
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, report: &ResolutionReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_summary(&mut output, &report.summary);
        self.render_buckets(&mut output, &report.buckets);
        self.render_decisions(&mut output, &report.decisions);
        self.render_boms(&mut output, report);
        self.render_problems(&mut output, report);
        self.render_plugins(&mut output, &report.plugins);
        self.render_failures(&mut output, report);

        Ok(output)
    }
}
