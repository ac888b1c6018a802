use super::ScopeMerger;
use crate::resolution::domain::{
    Bucket, Coordinate, DeclaredType, DependencyKey, ResolvedArtifacts, Scope, ScopeMap,
};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Everything the classifier knows about the consuming build unit
#[derive(Debug, Clone, Default)]
pub struct ClassificationContext {
    /// Buckets written on the original declarations
    pub explicit_buckets: HashMap<DependencyKey, Vec<Bucket>>,
    /// Keys explicitly designated as test dependencies
    pub test_context_keys: HashSet<DependencyKey>,
    pub declared_types: HashMap<DependencyKey, Vec<DeclaredType>>,
    pub scopes: ScopeMap,
    /// Identities of the consuming unit itself
    pub self_keys: HashSet<DependencyKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Bom,
    SelfDependency,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Bom => write!(f, "metadata-only (pom packaging)"),
            SkipReason::SelfDependency => write!(f, "self-dependency"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Assign(Vec<Bucket>),
    Skip(SkipReason),
}

/// One artifact placed into one or more buckets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketAssignment {
    pub key: DependencyKey,
    pub notation: String,
    pub buckets: Vec<Bucket>,
}

/// BucketClassifier maps resolved artifacts onto the consuming build's buckets
///
/// Rules, first match wins: BOM and self-dependencies are skipped, explicit
/// buckets, test context, first non-test declared type, then the scope.
pub struct BucketClassifier;

impl BucketClassifier {
    pub fn classify(
        key: &DependencyKey,
        coordinate: &Coordinate,
        context: &ClassificationContext,
    ) -> Classification {
        if coordinate.is_bom() {
            return Classification::Skip(SkipReason::Bom);
        }
        if context.self_keys.contains(key) {
            return Classification::Skip(SkipReason::SelfDependency);
        }

        if let Some(explicit) = context.explicit_buckets.get(key) {
            if !explicit.is_empty() {
                return Classification::Assign(explicit.clone());
            }
        }

        if context.test_context_keys.contains(key) || coordinate.is_test_context() {
            return Classification::Assign(vec![Bucket::Test]);
        }

        let declared = context
            .declared_types
            .get(key)
            .and_then(|types| types.iter().find(|t| !t.is_test()))
            .and_then(|t| t.bucket());
        if let Some(bucket) = declared {
            return Classification::Assign(vec![bucket]);
        }

        let bucket = match ScopeMerger::get_scope(&context.scopes, key) {
            Scope::Provided => Bucket::CompileOnly,
            Scope::Runtime => Bucket::RuntimeOnly,
            Scope::Test => Bucket::Test,
            Scope::Compile => Bucket::Implementation,
        };
        Classification::Assign(vec![bucket])
    }

    /// Classifies every resolved artifact in insertion order
    ///
    /// # Returns
    /// Assignments for the classified artifacts and the skipped keys with reasons
    pub fn classify_all(
        resolved: &ResolvedArtifacts,
        context: &ClassificationContext,
    ) -> (Vec<BucketAssignment>, Vec<(DependencyKey, SkipReason)>) {
        let mut assignments = Vec::new();
        let mut skipped = Vec::new();

        for (key, coordinate) in resolved {
            match Self::classify(key, coordinate, context) {
                Classification::Assign(buckets) => assignments.push(BucketAssignment {
                    key: key.clone(),
                    notation: coordinate.notation(),
                    buckets,
                }),
                Classification::Skip(reason) => skipped.push((key.clone(), reason)),
            }
        }

        (assignments, skipped)
    }
}
