use crate::resolution::domain::{DependencyKey, Reconciliation};
use dashmap::DashMap;
use indexmap::IndexSet;

/// ResolutionLog collects version decisions and bucket assignments
///
/// The log is safe to share through `Arc` so several build units can be
/// resolved in parallel into the same record. Readers get sorted snapshots,
/// never live references into the maps.
#[derive(Debug, Default)]
pub struct ResolutionLog {
    decisions: DashMap<DependencyKey, Reconciliation>,
    assignments: DashMap<String, IndexSet<String>>,
}

impl ResolutionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a reconciliation, replacing an earlier one for the same key
    pub fn record_decision(&self, reconciliation: Reconciliation) {
        self.decisions
            .insert(reconciliation.key.clone(), reconciliation);
    }

    /// Records `notation` under `bucket`
    ///
    /// # Returns
    /// `false` when the notation was already recorded for that bucket
    pub fn record_assignment(&self, bucket: &str, notation: impl Into<String>) -> bool {
        self.assignments
            .entry(bucket.to_string())
            .or_default()
            .insert(notation.into())
    }

    pub fn decision(&self, key: &DependencyKey) -> Option<Reconciliation> {
        self.decisions.get(key).map(|entry| entry.value().clone())
    }

    /// Every recorded decision, ordered by key
    pub fn decisions(&self) -> Vec<Reconciliation> {
        let mut decisions: Vec<Reconciliation> = self
            .decisions
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        decisions.sort_by(|a, b| a.key.cmp(&b.key));
        decisions
    }

    /// Notations recorded for one bucket, in insertion order
    pub fn assignments_for(&self, bucket: &str) -> Vec<String> {
        self.assignments
            .get(bucket)
            .map(|entry| entry.value().iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `(bucket, notations)` pairs ordered by bucket name
    pub fn bucket_summary(&self) -> Vec<(String, Vec<String>)> {
        let mut summary: Vec<(String, Vec<String>)> = self
            .assignments
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().iter().cloned().collect()))
            .collect();
        summary.sort_by(|a, b| a.0.cmp(&b.0));
        summary
    }

    pub fn decision_count(&self) -> usize {
        self.decisions.len()
    }

    pub fn assignment_count(&self) -> usize {
        self.assignments.iter().map(|entry| entry.value().len()).sum()
    }
}
