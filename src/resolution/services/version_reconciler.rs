use crate::resolution::domain::{
    max_version, Coordinate, DependencyKey, Reconciliation, VersionDecision, UNSPECIFIED_VERSION,
};

/// VersionReconciler decides the final version of a dependency
///
/// A locally resolved artifact always takes precedence over a BOM-managed
/// version; the managed version only applies when nothing was resolved.
pub struct VersionReconciler;

impl VersionReconciler {
    /// Reconciles the versions requested for one dependency
    ///
    /// # Arguments
    /// * `key` - Dependency being reconciled
    /// * `requested` - Every version string explicitly requested for it
    /// * `system` - Coordinate resolved from the local repository, if any
    /// * `managed` - Version managed by an expanded BOM, if any
    ///
    /// # Returns
    /// Reconciliation carrying the highest requested version (or
    /// `(unspecified)`), the decision and an audit line
    pub fn reconcile<'a, I>(
        key: &DependencyKey,
        requested: I,
        system: Option<&Coordinate>,
        managed: Option<&str>,
    ) -> Reconciliation
    where
        I: IntoIterator<Item = &'a str>,
    {
        let original = max_version(requested.into_iter().filter(|v| !v.trim().is_empty()))
            .unwrap_or(UNSPECIFIED_VERSION)
            .to_string();

        let decision = match (system, managed) {
            (Some(resolved), _) if resolved.version() != original => VersionDecision::Override {
                to: resolved.version().to_string(),
            },
            (Some(_), _) => VersionDecision::NoChange,
            (None, Some(managed)) if managed != original => VersionDecision::ApplyManaged {
                to: managed.to_string(),
            },
            (None, _) => VersionDecision::NoChange,
        };

        let audit_line = match &decision {
            VersionDecision::NoChange => format!("{}: keeping {}", key, original),
            VersionDecision::Override { to } => {
                format!("{}: {} -> {} (resolved from local repository)", key, original, to)
            }
            VersionDecision::ApplyManaged { to } => {
                format!("{}: {} -> {} (managed by BOM)", key, original, to)
            }
        };

        Reconciliation {
            key: key.clone(),
            original_requested: original,
            decision,
            audit_line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> DependencyKey {
        DependencyKey::new("g", "b")
    }

    #[test]
    fn test_system_coordinate_overrides() {
        let system = Coordinate::new("g", "b", "2.0");
        let result = VersionReconciler::reconcile(&key(), ["1.0", "1.2"], Some(&system), None);

        assert_eq!(result.original_requested, "1.2");
        assert_eq!(
            result.decision,
            VersionDecision::Override {
                to: "2.0".to_string()
            }
        );
        assert_eq!(result.final_version(), "2.0");
        assert!(result.audit_line.contains("1.2 -> 2.0"));
    }

    #[test]
    fn test_system_beats_managed() {
        let system = Coordinate::new("g", "b", "2.0");
        let result = VersionReconciler::reconcile(&key(), ["1.0"], Some(&system), Some("3.0"));
        assert_eq!(
            result.decision,
            VersionDecision::Override {
                to: "2.0".to_string()
            }
        );
    }

    #[test]
    fn test_system_matching_request_is_no_change_even_with_managed() {
        let system = Coordinate::new("g", "b", "1.5");
        let result = VersionReconciler::reconcile(&key(), ["1.5"], Some(&system), Some("2.0"));
        assert_eq!(result.decision, VersionDecision::NoChange);
        assert_eq!(result.final_version(), "1.5");
    }

    #[test]
    fn test_managed_applies_without_system() {
        let result = VersionReconciler::reconcile(&key(), ["1.5"], None, Some("2.0"));
        assert_eq!(
            result.decision,
            VersionDecision::ApplyManaged {
                to: "2.0".to_string()
            }
        );
    }

    #[test]
    fn test_managed_equal_to_request_is_no_change() {
        let result = VersionReconciler::reconcile(&key(), ["2.0"], None, Some("2.0"));
        assert_eq!(result.decision, VersionDecision::NoChange);
    }

    #[test]
    fn test_nothing_requested_uses_placeholder() {
        let result = VersionReconciler::reconcile(&key(), Vec::<&str>::new(), None, None);
        assert_eq!(result.original_requested, UNSPECIFIED_VERSION);
        assert_eq!(result.decision, VersionDecision::NoChange);

        let empty_only = VersionReconciler::reconcile(&key(), [""], None, Some("2.0"));
        assert_eq!(empty_only.original_requested, UNSPECIFIED_VERSION);
        assert_eq!(empty_only.final_version(), "2.0");
    }
}
