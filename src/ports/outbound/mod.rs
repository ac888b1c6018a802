/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the resolution engine uses
/// to reach its collaborators (POM files on disk, console, output).
pub mod artifact_lookup;
pub mod artifact_verifier;
pub mod formatter;
pub mod output_presenter;
pub mod pom_parser;
pub mod pom_repository;
pub mod progress_reporter;
pub mod project_manifest;
pub mod project_manifest_reader;

pub use artifact_lookup::ArtifactLookup;
pub use artifact_verifier::ArtifactVerifier;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use pom_parser::PomParser;
pub use pom_repository::PomRepository;
pub use progress_reporter::ProgressReporter;
pub use project_manifest::{BuildUnit, DeclaredDependency, PluginRequest, ProjectManifest};
pub use project_manifest_reader::ProjectManifestReader;
