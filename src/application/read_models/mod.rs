//! Read models for CQRS-lite pattern
//!
//! View-optimized structs giving formatters a flat, ordered picture of a
//! resolution run without exposing the domain types.

mod resolution_report;
mod resolution_report_builder;

pub use resolution_report::{
    ArtifactView, BomView, BucketView, DecisionView, FailureView, ManagedVersionView,
    PluginView, ReportMetadataView, ResolutionReport, SkippedView, SummaryView,
};
pub use resolution_report_builder::ResolutionReportBuilder;
