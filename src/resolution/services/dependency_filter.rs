use crate::resolution::domain::{DependencyKey, ResolvedArtifacts};
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns accepted
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// DependencyFilter - Removes dependencies matching exclusion patterns
///
/// Patterns are matched against `groupId:artifactId`. A `*` matches zero or
/// more characters; a pattern without `:` is matched against the artifactId
/// alone, so `*-test` excludes any artifact ending in `-test`.
#[derive(Debug)]
pub struct DependencyFilter {
    patterns: Vec<ExcludePattern>,
}

impl DependencyFilter {
    /// Creates a filter from raw pattern strings
    ///
    /// # Errors
    /// - More than 64 patterns
    /// - A pattern that is empty, too long, only wildcards, or contains
    ///   characters outside `[A-Za-z0-9._-:*]`
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Checks a key against every pattern, remembering which ones matched
    pub fn is_excluded(&self, key: &DependencyKey) -> bool {
        let full = key.to_string();
        // Evaluate all patterns so the unmatched report stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(&full, key.artifact_id()) || hit)
    }

    /// Drops excluded entries from a resolved artifact set, keeping order
    ///
    /// # Returns
    /// Keys that were removed
    pub fn filter_resolved(&self, resolved: &mut ResolvedArtifacts) -> Vec<DependencyKey> {
        let mut removed = Vec::new();
        resolved.retain(|key, _| {
            let excluded = self.is_excluded(key);
            if excluded {
                removed.push(key.clone());
            }
            !excluded
        });
        removed
    }

    /// Returns the patterns that have not matched anything so far
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    /// Literal pieces between wildcards
    pieces: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    qualified: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let pieces = pattern
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !pattern.starts_with('*'),
            anchored_end: !pattern.ends_with('*'),
            qualified: pattern.contains(':'),
            pieces,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, full: &str, artifact_id: &str) -> bool {
        let subject = if self.qualified { full } else { artifact_id };
        let is_match = self.match_pieces(subject);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn match_pieces(&self, subject: &str) -> bool {
        let mut rest = subject;
        let last = self.pieces.len().saturating_sub(1);

        for (idx, piece) in self.pieces.iter().enumerate() {
            if idx == 0 && self.anchored_start {
                match rest.strip_prefix(piece.as_str()) {
                    Some(tail) => rest = tail,
                    None => return false,
                }
                if idx == last && self.anchored_end {
                    return rest.is_empty();
                }
                continue;
            }
            if idx == last && self.anchored_end {
                return rest.ends_with(piece.as_str());
            }
            match rest.find(piece.as_str()) {
                Some(pos) => rest = &rest[pos + piece.len()..],
                None => return false,
            }
        }
        true
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|c| !is_valid_pattern_char(*c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only alphanumeric, hyphens, underscores, dots, colons and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    if pattern.matches(':').count() > 1 {
        anyhow::bail!(
            "Exclusion pattern '{}' must have the form group:artifact or artifact",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '*')
}
