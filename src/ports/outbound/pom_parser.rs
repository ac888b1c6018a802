use crate::resolution::domain::Coordinate;
use crate::shared::Result;
use std::path::Path;

/// PomParser port for reading POM metadata
///
/// Implementations hand back an effective model: parent inheritance for
/// missing groupId/version is already applied. Every returned coordinate
/// carries the POM path it came from where one is known.
pub trait PomParser {
    /// Parses the coordinate the POM itself describes
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a POM
    fn parse_coordinate(&self, pom_path: &Path) -> Result<Coordinate>;

    /// Parses the direct `<dependencies>` section
    ///
    /// Declared scopes are carried on each coordinate; a dependency without
    /// `<scope>` is compile-scoped.
    fn parse_dependencies(&self, pom_path: &Path) -> Result<Vec<Coordinate>>;

    /// Parses the `<dependencyManagement>` section only
    ///
    /// Entries declared with `<type>pom</type>` come back with `pom` packaging.
    fn parse_dependency_management(&self, pom_path: &Path) -> Result<Vec<Coordinate>>;
}
