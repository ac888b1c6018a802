//! pom-resolve - offline dependency resolution against a local Maven repository
//!
//! This library resolves the dependencies a build unit declares against POM
//! files installed on disk: it expands BOMs, walks the transitive graph,
//! merges scopes, reconciles versions and classifies every artifact into the
//! consuming build's dependency buckets.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Value types and the pure resolution algorithms
//! - **Application Layer** (`application`): Use case, DTOs, read models and the resolution log
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pom_resolve::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let pom_root = PathBuf::from("/home/dev/.m2/repository");
//!
//! // Create adapters
//! let use_case = ResolveDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     LocalPomRepository::new(&pom_root),
//!     XmlPomParser::with_repository_root(&pom_root),
//!     LocalArtifactVerifier::new(Some(pom_root.clone())),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case.execute(ResolveRequest::for_project("."))?;
//!
//! // Format output
//! let report = ResolutionReportBuilder::build(&response);
//! println!("{}", JsonReportFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, LocalArtifactVerifier, LocalPomRepository,
        StdoutPresenter, XmlPomParser,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonReportFormatter, MarkdownReportFormatter,
    };
    pub use crate::application::dto::{OutputFormat, ResolveRequest, ResolveResponse};
    pub use crate::application::read_models::{ResolutionReport, ResolutionReportBuilder};
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::application::ResolutionLog;
    pub use crate::ports::outbound::{
        ArtifactLookup, ArtifactVerifier, BuildUnit, DeclaredDependency, OutputPresenter,
        PluginRequest, PomParser, PomRepository, ProgressReporter, ProjectManifest,
        ProjectManifestReader, ReportFormatter,
    };
    pub use crate::resolution::domain::{
        BomResult, Bucket, BucketNames, Coordinate, DeclaredType, DependencyKey, PomFailure,
        Reconciliation, ResolvedArtifacts, Scope, ScopeMap, TransitiveResult, VersionDecision,
    };
    pub use crate::resolution::services::{
        ArtifactIndex, BomExpander, BucketAssignment, BucketClassifier, ClassificationContext,
        DependencyFilter, PluginResolver, ScopeMerger, TransitiveResolver, VersionReconciler,
    };
    pub use crate::shared::Result;
}
