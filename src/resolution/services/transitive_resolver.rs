use super::ScopeMerger;
use crate::ports::outbound::{ArtifactLookup, PomParser};
use crate::resolution::domain::{
    DependencyKey, PomFailure, ResolvedArtifacts, Scope, ScopeMap, TransitiveResult,
};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// TransitiveResolver walks the dependency graph breadth-first from the roots
///
/// Test-context propagation is last-writer-wins: a child takes the flag of
/// whichever parent visits it last in FIFO order, even if an earlier parent
/// already marked it differently. This ordering is part of the contract.
pub struct TransitiveResolver;

impl TransitiveResolver {
    /// Resolves the transitive closure of `resolved` in place
    ///
    /// # Arguments
    /// * `resolved` - Root artifacts on entry; every discovered artifact on return
    /// * `scopes` - Scope map updated with every declared dependency scope
    /// * `lookup` - Index used to locate the POM of each new dependency
    /// * `parser` - Reads the direct dependencies of a POM
    ///
    /// # Returns
    /// TransitiveResult partitioning the final set into main and test
    /// dependencies, plus the keys that could not be located. Unreadable POMs
    /// are recorded as failures and treated as leaves.
    pub fn resolve<L, P>(
        resolved: &mut ResolvedArtifacts,
        scopes: &mut ScopeMap,
        lookup: &L,
        parser: &P,
    ) -> TransitiveResult
    where
        L: ArtifactLookup + ?Sized,
        P: PomParser + ?Sized,
    {
        let mut queue: VecDeque<DependencyKey> = resolved.keys().cloned().collect();
        let mut enqueued: HashSet<DependencyKey> = queue.iter().cloned().collect();
        let mut skipped: BTreeSet<DependencyKey> = BTreeSet::new();
        let mut failures = Vec::new();

        while let Some(parent_key) = queue.pop_front() {
            // Read the current entry so a flag rewritten after enqueueing is honoured
            let Some(parent) = resolved.get(&parent_key) else {
                continue;
            };
            let parent_test_context = parent.is_test_context();
            let Some(pom_path) = parent.pom_path().map(|p| p.to_path_buf()) else {
                continue;
            };

            let declared = match parser.parse_dependencies(&pom_path) {
                Ok(declared) => declared,
                Err(e) => {
                    failures.push(PomFailure::new(pom_path, e.to_string()));
                    continue;
                }
            };

            for dependency in declared {
                let key = dependency.key();
                ScopeMerger::update_scope(scopes, &key, dependency.scope());

                if dependency.scope() == Some(Scope::Test) {
                    continue;
                }

                let child = match resolved.get(&key) {
                    Some(existing) => existing.clone(),
                    None => match lookup.find_key(&key) {
                        Some(found) => found.clone(),
                        None => {
                            skipped.insert(key);
                            continue;
                        }
                    },
                };

                let child = child
                    .with_test_context(parent_test_context)
                    .with_scope(Some(ScopeMerger::get_scope(scopes, &key)));
                resolved.insert(key.clone(), child);

                if enqueued.insert(key.clone()) {
                    queue.push_back(key);
                }
            }
        }

        TransitiveResult::from_resolved(resolved, skipped, failures)
    }
}
