use crate::ports::outbound::{ArtifactLookup, PomParser};
use crate::resolution::domain::{BomResult, Coordinate, DependencyKey, PomFailure};
use indexmap::{IndexMap, IndexSet};
use std::collections::VecDeque;

/// BomExpander turns the BOMs among a set of dependencies into a managed-version table
///
/// Expansion is a FIFO breadth-first walk: seeds in the order given, then
/// nested BOMs in discovery order. When two BOMs manage the same dependency,
/// the one expanded last wins. Keep the queue FIFO, the result depends on it.
pub struct BomExpander;

impl BomExpander {
    /// Expands every BOM reachable from `seeds`
    ///
    /// # Arguments
    /// * `seeds` - Dependency keys declared by the project, in declaration order
    /// * `lookup` - Index of installed POMs
    /// * `parser` - Reads the `<dependencyManagement>` section of a BOM
    ///
    /// # Returns
    /// BomResult with managed versions, per-BOM managed entries and the
    /// expanded BOMs. A BOM whose POM cannot be read is recorded as a failure
    /// and contributes nothing.
    pub fn process<'a, I, L, P>(seeds: I, lookup: &L, parser: &P) -> BomResult
    where
        I: IntoIterator<Item = &'a DependencyKey>,
        L: ArtifactLookup + ?Sized,
        P: PomParser + ?Sized,
    {
        let mut queue: VecDeque<Coordinate> = VecDeque::new();
        let mut processed: IndexSet<DependencyKey> = IndexSet::new();

        for seed in seeds {
            if let Some(coordinate) = lookup.find_key(seed) {
                if coordinate.is_bom() && processed.insert(seed.clone()) {
                    queue.push_back(coordinate.clone());
                }
            }
        }

        let mut managed_versions: IndexMap<DependencyKey, String> = IndexMap::new();
        let mut bom_managed_deps: IndexMap<DependencyKey, Vec<String>> = IndexMap::new();
        let mut failures = Vec::new();

        while let Some(bom) = queue.pop_front() {
            let bom_key = bom.key();
            let Some(pom_path) = bom.pom_path() else {
                continue;
            };

            let managed = match parser.parse_dependency_management(pom_path) {
                Ok(managed) => managed,
                Err(e) => {
                    failures.push(PomFailure::new(pom_path.to_path_buf(), e.to_string()));
                    continue;
                }
            };

            let attributed = bom_managed_deps.entry(bom_key).or_default();
            for entry in managed {
                if entry.version().trim().is_empty() {
                    continue;
                }
                let key = entry.key();
                attributed.push(entry.notation());
                // Re-inserting keeps the original position but takes the new version
                managed_versions.insert(key.clone(), entry.version().to_string());

                let nested = entry.is_bom()
                    || lookup.find_key(&key).is_some_and(Coordinate::is_bom);
                if nested && !processed.contains(&key) {
                    if let Some(found) = lookup.find_key(&key) {
                        processed.insert(key);
                        queue.push_back(found.clone());
                    }
                }
            }
        }

        BomResult::new(managed_versions, bom_managed_deps, processed, failures)
    }
}
