use crate::resolution::domain::{DependencyKey, Scope, ScopeMap};

/// ScopeMerger keeps the strongest scope seen for each dependency
///
/// Priority: compile (0) > runtime (1) > provided (2) > test (3). A stored
/// scope is only replaced by one with a strictly lower priority number, so
/// once a dependency is needed at compile time no later sighting demotes it.
pub struct ScopeMerger;

impl ScopeMerger {
    /// Merges a newly seen scope for `key` into `scopes`
    ///
    /// # Arguments
    /// * `scopes` - Scope map of the current resolution run
    /// * `key` - Dependency the scope was seen for
    /// * `new_scope` - Scope of the sighting; `None` (unknown) is ignored
    ///
    /// # Returns
    /// `true` when the stored scope changed
    pub fn update_scope(scopes: &mut ScopeMap, key: &DependencyKey, new_scope: Option<Scope>) -> bool {
        let Some(new_scope) = new_scope else {
            return false;
        };

        match scopes.get(key) {
            Some(current) if new_scope.priority() >= current.priority() => false,
            _ => {
                scopes.insert(key.clone(), new_scope);
                true
            }
        }
    }

    /// Effective scope of `key`, `compile` when nothing was recorded
    pub fn get_scope(scopes: &ScopeMap, key: &DependencyKey) -> Scope {
        scopes.get(key).unwrap_or(Scope::Compile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> DependencyKey {
        DependencyKey::new("org.example", "lib")
    }

    #[test]
    fn test_absent_key_is_inserted() {
        let mut scopes = ScopeMap::new();
        assert!(ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Test)));
        assert_eq!(scopes.get(&key()), Some(Scope::Test));
    }

    #[test]
    fn test_stronger_scope_replaces_weaker() {
        let mut scopes = ScopeMap::new();
        ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Provided));
        assert!(ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Runtime)));
        assert_eq!(ScopeMerger::get_scope(&scopes, &key()), Scope::Runtime);
    }

    #[test]
    fn test_weaker_or_equal_scope_is_ignored() {
        let mut scopes = ScopeMap::new();
        ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Compile));
        assert!(!ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Test)));
        assert!(!ScopeMerger::update_scope(&mut scopes, &key(), Some(Scope::Compile)));
        assert_eq!(scopes.get(&key()), Some(Scope::Compile));
    }

    #[test]
    fn test_unknown_scope_is_noop() {
        let mut scopes = ScopeMap::new();
        assert!(!ScopeMerger::update_scope(&mut scopes, &key(), None));
        assert!(scopes.is_empty());
    }

    #[test]
    fn test_get_scope_defaults_to_compile() {
        let scopes = ScopeMap::new();
        assert_eq!(ScopeMerger::get_scope(&scopes, &key()), Scope::Compile);
    }

    #[test]
    fn test_priority_never_weakens_over_sequence() {
        let sequence = [
            Scope::Test,
            Scope::Provided,
            Scope::Test,
            Scope::Runtime,
            Scope::Provided,
            Scope::Compile,
            Scope::Test,
        ];
        let mut scopes = ScopeMap::new();
        let mut last_priority = u8::MAX;
        for scope in sequence {
            ScopeMerger::update_scope(&mut scopes, &key(), Some(scope));
            let priority = ScopeMerger::get_scope(&scopes, &key()).priority();
            assert!(priority <= last_priority);
            last_priority = priority;
        }
        assert_eq!(scopes.get(&key()), Some(Scope::Compile));
    }
}
