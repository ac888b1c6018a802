use std::fmt;
use std::path::PathBuf;

/// A POM file that could not be read or parsed and was left out of the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomFailure {
    pub path: PathBuf,
    pub reason: String,
}

impl PomFailure {
    pub fn new(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PomFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.reason)
    }
}
