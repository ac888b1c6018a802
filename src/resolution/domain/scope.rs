use super::DependencyKey;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Lifecycle stage at which a dependency is needed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Compile,
    Runtime,
    Provided,
    Test,
}

impl Scope {
    /// Lower number wins when two sightings of a dependency disagree
    pub fn priority(self) -> u8 {
        match self {
            Scope::Compile => 0,
            Scope::Runtime => 1,
            Scope::Provided => 2,
            Scope::Test => 3,
        }
    }

    /// Parses a Maven `<scope>` value. `system`, `import` and anything else
    /// unknown yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compile" => Some(Scope::Compile),
            "runtime" => Some(Scope::Runtime),
            "provided" => Some(Scope::Provided),
            "test" => Some(Scope::Test),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Runtime => "runtime",
            Scope::Provided => "provided",
            Scope::Test => "test",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strongest scope seen so far for every dependency of a resolution run.
///
/// Only `ScopeMerger` writes to it, so stored scopes can only get stronger.
#[derive(Debug, Clone, Default)]
pub struct ScopeMap {
    scopes: HashMap<DependencyKey, Scope>,
}

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DependencyKey) -> Option<Scope> {
        self.scopes.get(key).copied()
    }

    pub(crate) fn insert(&mut self, key: DependencyKey, scope: Scope) {
        self.scopes.insert(key, scope);
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DependencyKey, &Scope)> {
        self.scopes.iter()
    }
}
