use super::ProjectManifest;
use crate::shared::Result;
use std::path::Path;

/// ProjectManifestReader port for reading the build unit declaration
pub trait ProjectManifestReader {
    /// Reads `pom-resolve.toml` from the project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist
    /// - The manifest cannot be parsed
    /// - A dependency notation or key is malformed
    fn read_manifest(&self, project_path: &Path) -> Result<ProjectManifest>;
}
