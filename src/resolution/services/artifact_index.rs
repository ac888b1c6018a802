use crate::ports::outbound::{ArtifactLookup, PomParser};
use crate::resolution::domain::{compare_versions, Coordinate, DependencyKey, PomFailure};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory lookup from `groupId:artifactId` to the newest installed coordinate.
///
/// Build exactly once per resolution run. `build` always starts from an
/// empty index: calling it again with different input replaces the previous
/// snapshot, it does not merge into it.
#[derive(Debug, Clone, Default)]
pub struct ArtifactIndex {
    by_key: HashMap<DependencyKey, Coordinate>,
    by_group: HashMap<String, Vec<Coordinate>>,
    rejected: Vec<PomFailure>,
}

impl ArtifactIndex {
    /// Parses every candidate POM and indexes the valid ones
    ///
    /// Files that fail to parse, or that describe an incomplete coordinate,
    /// are recorded in `rejected()` and otherwise ignored.
    pub fn build<P: PomParser + ?Sized>(pom_files: &[PathBuf], parser: &P) -> Self {
        Self::build_with_progress(pom_files, parser, |_, _| {})
    }

    /// Same as `build`, calling `on_progress(done, total)` after each file
    pub fn build_with_progress<P, F>(pom_files: &[PathBuf], parser: &P, mut on_progress: F) -> Self
    where
        P: PomParser + ?Sized,
        F: FnMut(usize, usize),
    {
        let total = pom_files.len();
        let mut coordinates = Vec::with_capacity(total);
        let mut rejected = Vec::new();

        for (idx, path) in pom_files.iter().enumerate() {
            match parser.parse_coordinate(path) {
                Ok(coordinate) if coordinate.is_valid() => coordinates.push(coordinate),
                Ok(coordinate) => rejected.push(PomFailure::new(
                    path.clone(),
                    format!(
                        "incomplete coordinate '{}' (groupId, artifactId and version are required)",
                        coordinate.notation()
                    ),
                )),
                Err(e) => rejected.push(PomFailure::new(path.clone(), e.to_string())),
            }
            on_progress(idx + 1, total);
        }

        let mut index = Self::from_coordinates(coordinates);
        index.rejected = rejected;
        index
    }

    /// Indexes already-parsed coordinates. Invalid ones are dropped.
    ///
    /// When two coordinates share a key the higher version wins; on a tie
    /// the one seen first stays.
    pub fn from_coordinates<I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut by_key: HashMap<DependencyKey, Coordinate> = HashMap::new();

        for coordinate in coordinates.into_iter().filter(Coordinate::is_valid) {
            let key = coordinate.key();
            let replace = match by_key.get(&key) {
                None => true,
                Some(existing) => {
                    compare_versions(coordinate.version(), existing.version()) == Ordering::Greater
                }
            };
            if replace {
                by_key.insert(key, coordinate);
            }
        }

        // Group listing comes from the final snapshot, not the scan order
        let mut by_group: HashMap<String, Vec<Coordinate>> = HashMap::new();
        for coordinate in by_key.values() {
            by_group
                .entry(coordinate.group_id().to_string())
                .or_default()
                .push(coordinate.clone());
        }
        for members in by_group.values_mut() {
            members.sort_by(|a, b| a.artifact_id().cmp(b.artifact_id()));
        }

        Self {
            by_key,
            by_group,
            rejected: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.by_group.len()
    }

    /// POM files left out of the index
    pub fn rejected(&self) -> &[PomFailure] {
        &self.rejected
    }

    pub fn contains(&self, key: &DependencyKey) -> bool {
        self.by_key.contains_key(key)
    }
}

impl ArtifactLookup for ArtifactIndex {
    fn find(&self, group_id: &str, artifact_id: &str) -> Option<&Coordinate> {
        self.by_key
            .get(&DependencyKey::new(group_id, artifact_id))
    }

    fn find_all_for_group(&self, group_id: &str) -> &[Coordinate] {
        self.by_group
            .get(group_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
