use pom_resolve::prelude::*;
use std::collections::HashSet;

/// Mock ArtifactVerifier: every binary exists unless its key was marked missing
#[derive(Default, Clone)]
pub struct MockArtifactVerifier {
    pub missing: HashSet<String>,
}

impl MockArtifactVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(keys: &[&str]) -> Self {
        Self {
            missing: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl ArtifactVerifier for MockArtifactVerifier {
    fn exists(&self, coordinate: &Coordinate) -> bool {
        coordinate.is_bom() || !self.missing.contains(&coordinate.key().to_string())
    }
}
