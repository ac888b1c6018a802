use super::DependencyKey;
use std::fmt;

/// Placeholder used as the original version when nothing was requested explicitly
pub const UNSPECIFIED_VERSION: &str = "(unspecified)";

/// What to do with the version of one dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionDecision {
    NoChange,
    /// The locally resolved artifact replaces the requested version
    Override { to: String },
    /// A BOM-managed version replaces the requested version
    ApplyManaged { to: String },
}

impl VersionDecision {
    /// Target version, if the decision changes anything
    pub fn target(&self) -> Option<&str> {
        match self {
            VersionDecision::NoChange => None,
            VersionDecision::Override { to } | VersionDecision::ApplyManaged { to } => Some(to),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VersionDecision::NoChange => "no-change",
            VersionDecision::Override { .. } => "override",
            VersionDecision::ApplyManaged { .. } => "apply-managed",
        }
    }
}

/// Auditable reconciliation result for a single dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub key: DependencyKey,
    pub original_requested: String,
    pub decision: VersionDecision,
    pub audit_line: String,
}

impl Reconciliation {
    /// Version the consuming build should end up with
    pub fn final_version(&self) -> &str {
        self.decision
            .target()
            .unwrap_or(self.original_requested.as_str())
    }
}

impl fmt::Display for Reconciliation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.audit_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_version() {
        let key = DependencyKey::new("g", "a");
        let kept = Reconciliation {
            key: key.clone(),
            original_requested: "1.0".to_string(),
            decision: VersionDecision::NoChange,
            audit_line: String::new(),
        };
        assert_eq!(kept.final_version(), "1.0");

        let overridden = Reconciliation {
            key,
            original_requested: "1.0".to_string(),
            decision: VersionDecision::Override {
                to: "2.0".to_string(),
            },
            audit_line: String::new(),
        };
        assert_eq!(overridden.final_version(), "2.0");
        assert_eq!(overridden.decision.label(), "override");
    }
}
