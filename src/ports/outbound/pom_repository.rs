use crate::shared::Result;
use std::path::PathBuf;

/// PomRepository port for discovering installed POM files
pub trait PomRepository {
    /// Lists every candidate POM file below the configured root, in a stable order
    ///
    /// # Errors
    /// Returns an error if the root directory is missing or unreadable
    fn discover_pom_files(&self) -> Result<Vec<PathBuf>>;
}
