use crate::application::read_models::ResolutionReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a resolution report
///
/// This port abstracts the output format (JSON, Markdown).
pub trait ReportFormatter {
    /// Renders the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ResolutionReport) -> Result<String>;
}
