use crate::resolution::domain::{Coordinate, DependencyKey};

/// ArtifactLookup port: find the installed coordinate for a dependency
pub trait ArtifactLookup {
    /// Best installed coordinate for `groupId:artifactId`
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<&Coordinate>;

    /// Every installed coordinate of a group, ordered by artifactId
    fn find_all_for_group(&self, group_id: &str) -> &[Coordinate];

    fn find_key(&self, key: &DependencyKey) -> Option<&Coordinate> {
        self.find(key.group_id(), key.artifact_id())
    }
}
