use crate::resolution::domain::BucketNames;
use std::path::PathBuf;

/// ResolveRequest - Request DTO for the dependency resolution use case
///
/// Where POM files and artifacts live is a property of the adapters the use
/// case is built with, so it does not appear here.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Directory holding `pom-resolve.toml`
    pub project_path: PathBuf,
    /// Patterns for excluding dependencies from the result
    pub exclude_patterns: Vec<String>,
    /// Whether resolved artifacts must have a binary on disk
    pub verify_artifacts: bool,
    /// Bucket names of the consuming build
    pub bucket_names: BucketNames,
}

impl ResolveRequest {
    pub fn new(
        project_path: PathBuf,
        exclude_patterns: Vec<String>,
        verify_artifacts: bool,
        bucket_names: BucketNames,
    ) -> Self {
        Self {
            project_path,
            exclude_patterns,
            verify_artifacts,
            bucket_names,
        }
    }

    /// Request with default buckets, no exclusions and verification enabled
    pub fn for_project(project_path: impl Into<PathBuf>) -> Self {
        Self::new(project_path.into(), Vec::new(), true, BucketNames::default())
    }
}
