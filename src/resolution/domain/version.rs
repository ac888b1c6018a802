use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Digits with leading zeros stripped, so `0` is the empty string
    Numeric(String),
    Text(String),
}

impl Segment {
    fn parse(part: &str) -> Self {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            Segment::Numeric(part.trim_start_matches('0').to_string())
        } else {
            Segment::Text(part.to_ascii_lowercase())
        }
    }
}

/// Version string ordered segment by segment.
///
/// The string is split on `.` and `-`. Numeric segments compare as numbers of
/// any length, textual segments compare case-insensitively, and a numeric
/// segment outranks a textual one at the same position (`1.0.1` > `1.0-beta`). A missing
/// segment counts as `0` against a number and outranks a qualifier, so
/// `1.0` == `1.0.0` and `1.0` > `1.0-SNAPSHOT`.
#[derive(Debug, Clone)]
pub struct ComparableVersion {
    raw: String,
    segments: Vec<Segment>,
}

impl ComparableVersion {
    pub fn new(raw: &str) -> Self {
        let segments = raw
            .trim()
            .split(['.', '-'])
            .filter(|part| !part.is_empty())
            .map(Segment::parse)
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl PartialEq for ComparableVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ComparableVersion {}

impl PartialOrd for ComparableVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ComparableVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        for i in 0..len {
            let ordering = match (self.segments.get(i), other.segments.get(i)) {
                (Some(left), Some(right)) => compare_segments(left, right),
                (Some(left), None) => compare_to_missing(left),
                (None, Some(right)) => compare_to_missing(right).reverse(),
                (None, None) => Ordering::Equal,
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn compare_segments(left: &Segment, right: &Segment) -> Ordering {
    match (left, right) {
        (Segment::Numeric(a), Segment::Numeric(b)) => {
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        }
        (Segment::Text(a), Segment::Text(b)) => a.cmp(b),
        (Segment::Numeric(_), Segment::Text(_)) => Ordering::Greater,
        (Segment::Text(_), Segment::Numeric(_)) => Ordering::Less,
    }
}

/// Orders a present segment against an absent one
fn compare_to_missing(present: &Segment) -> Ordering {
    match present {
        Segment::Numeric(digits) if digits.is_empty() => Ordering::Equal,
        Segment::Numeric(_) => Ordering::Greater,
        Segment::Text(_) => Ordering::Less,
    }
}

/// Compares two raw version strings
pub fn compare_versions(left: &str, right: &str) -> Ordering {
    ComparableVersion::new(left).cmp(&ComparableVersion::new(right))
}

/// Returns the highest of the given versions. Among versions comparing equal
/// the first one seen is kept.
pub fn max_version<'a, I>(versions: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<&'a str> = None;
    for candidate in versions {
        match best {
            Some(current) if compare_versions(candidate, current) != Ordering::Greater => {}
            _ => best = Some(candidate),
        }
    }
    best
}
