use super::Scope;
use crate::shared::Result;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Packaging value marking an artifact as metadata-only (BOM or parent POM)
pub const POM_PACKAGING: &str = "pom";

/// Packaging assumed when a POM does not declare one
pub const DEFAULT_PACKAGING: &str = "jar";

/// `groupId:artifactId` identity of a dependency, independent of its version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyKey {
    group_id: String,
    artifact_id: String,
}

impl DependencyKey {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }
}

impl fmt::Display for DependencyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)
    }
}

impl FromStr for DependencyKey {
    type Err = anyhow::Error;

    /// Accepts `group:artifact` and also full notations (`group:artifact:version`),
    /// of which only the first two segments are kept.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().split(':');
        match (parts.next(), parts.next()) {
            (Some(group), Some(artifact)) if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(group, artifact))
            }
            _ => anyhow::bail!(
                "Invalid dependency key '{}'. Expected the form group:artifact",
                s
            ),
        }
    }
}

/// Maven-style artifact coordinate.
///
/// Equality and hashing only look at `groupId` and `artifactId`, so two
/// coordinates of the same library with different versions collide as map
/// keys. Coordinates are never mutated after construction; the `with_*`
/// methods consume the value and hand back a modified copy.
#[derive(Debug, Clone)]
pub struct Coordinate {
    group_id: String,
    artifact_id: String,
    version: String,
    packaging: String,
    scope: Option<Scope>,
    pom_path: Option<PathBuf>,
    test_context: bool,
}

impl Coordinate {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            packaging: DEFAULT_PACKAGING.to_string(),
            scope: None,
            pom_path: None,
            test_context: false,
        }
    }

    /// Parses a `group:artifact[:version]` notation. A missing version
    /// yields an empty version string, which makes the coordinate invalid
    /// but still usable as a declaration.
    pub fn parse_notation(notation: &str) -> Result<Self> {
        let parts: Vec<&str> = notation.trim().split(':').collect();
        match parts.as_slice() {
            [group, artifact] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact, ""))
            }
            [group, artifact, version, ..] if !group.is_empty() && !artifact.is_empty() => {
                Ok(Self::new(*group, *artifact, *version))
            }
            _ => anyhow::bail!(
                "Invalid dependency notation '{}'. Expected group:artifact[:version]",
                notation
            ),
        }
    }

    pub fn with_packaging(mut self, packaging: impl Into<String>) -> Self {
        self.packaging = packaging.into();
        self
    }

    pub fn with_scope(mut self, scope: Option<Scope>) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_pom_path(mut self, pom_path: impl Into<PathBuf>) -> Self {
        self.pom_path = Some(pom_path.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_test_context(mut self, test_context: bool) -> Self {
        self.test_context = test_context;
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn packaging(&self) -> &str {
        &self.packaging
    }

    pub fn scope(&self) -> Option<Scope> {
        self.scope
    }

    pub fn pom_path(&self) -> Option<&Path> {
        self.pom_path.as_deref()
    }

    pub fn is_test_context(&self) -> bool {
        self.test_context
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey::new(self.group_id.clone(), self.artifact_id.clone())
    }

    /// A coordinate is valid once group, artifact and version are all known
    pub fn is_valid(&self) -> bool {
        !self.group_id.trim().is_empty()
            && !self.artifact_id.trim().is_empty()
            && !self.version.trim().is_empty()
    }

    /// BOM and other metadata-only artifacts ship no binary
    pub fn is_bom(&self) -> bool {
        self.packaging.eq_ignore_ascii_case(POM_PACKAGING)
    }

    /// `group:artifact:version`
    pub fn notation(&self) -> String {
        format!("{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.group_id == other.group_id && self.artifact_id == other.artifact_id
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.group_id.hash(state);
        self.artifact_id.hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_version() {
        let a = Coordinate::new("org.example", "lib", "1.0");
        let b = Coordinate::new("org.example", "lib", "2.0");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new("g", "a", "1.0").is_valid());
        assert!(!Coordinate::new("g", "a", "").is_valid());
        assert!(!Coordinate::new("", "a", "1.0").is_valid());
        assert!(!Coordinate::new("g", " ", "1.0").is_valid());
    }

    #[test]
    fn test_is_bom() {
        let bom = Coordinate::new("g", "bom", "1.0").with_packaging("pom");
        assert!(bom.is_bom());
        assert!(!Coordinate::new("g", "lib", "1.0").is_bom());
        assert_eq!(Coordinate::new("g", "lib", "1.0").packaging(), "jar");
    }

    #[test]
    fn test_with_test_context_produces_new_value() {
        let original = Coordinate::new("g", "a", "1.0");
        let stamped = original.clone().with_test_context(true);
        assert!(!original.is_test_context());
        assert!(stamped.is_test_context());
        assert_eq!(stamped.version(), "1.0");
    }

    #[test]
    fn test_parse_notation() {
        let full = Coordinate::parse_notation("com.google.guava:guava:31.1-jre").unwrap();
        assert_eq!(full.group_id(), "com.google.guava");
        assert_eq!(full.artifact_id(), "guava");
        assert_eq!(full.version(), "31.1-jre");

        let versionless = Coordinate::parse_notation("org.slf4j:slf4j-api").unwrap();
        assert_eq!(versionless.version(), "");
        assert!(!versionless.is_valid());

        assert!(Coordinate::parse_notation("guava").is_err());
        assert!(Coordinate::parse_notation(":guava:1.0").is_err());
    }

    #[test]
    fn test_dependency_key_from_str() {
        let key: DependencyKey = "org.slf4j:slf4j-api:2.0.9".parse().unwrap();
        assert_eq!(key.to_string(), "org.slf4j:slf4j-api");
        assert!("slf4j".parse::<DependencyKey>().is_err());
    }

    #[test]
    fn test_key_and_notation() {
        let coordinate = Coordinate::new("g", "a", "1.2");
        assert_eq!(coordinate.key(), DependencyKey::new("g", "a"));
        assert_eq!(coordinate.notation(), "g:a:1.2");
        assert_eq!(coordinate.to_string(), "g:a:1.2");
    }
}
