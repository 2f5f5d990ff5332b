//! Key Pattern Module
//!
//! Glob matching used by pattern invalidation.
//!
//! A pattern always matches the whole key. Each `*` stands for zero or more
//! characters and every other character is literal, so `token:SOL.native:*`
//! never treats the `.` as a wildcard.

// == Key Pattern ==
/// A compiled glob pattern over cache keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    /// Literal pieces between wildcards
    segments: Vec<String>,
    /// True when the pattern contains at least one `*`
    has_wildcard: bool,
}

impl KeyPattern {
    // == Constructor ==
    /// Compiles a pattern. Every string is a valid pattern.
    pub fn new(pattern: &str) -> Self {
        Self {
            segments: pattern.split('*').map(str::to_string).collect(),
            has_wildcard: pattern.contains('*'),
        }
    }

    // == Matches ==
    /// Returns true if `key` matches the pattern in full.
    pub fn matches(&self, key: &str) -> bool {
        if !self.has_wildcard {
            return self.segments[0] == key;
        }

        let (first, rest) = match self.segments.split_first() {
            Some(split) => split,
            None => return false,
        };
        let (last, middle) = match rest.split_last() {
            Some(split) => split,
            None => return false,
        };

        if key.len() < first.len() + last.len()
            || !key.starts_with(first.as_str())
            || !key.ends_with(last.as_str())
        {
            return false;
        }

        // Middle segments are matched leftmost-first inside the region the
        // anchored prefix and suffix leave free.
        let mut remaining = &key[first.len()..key.len() - last.len()];
        for segment in middle {
            match remaining.find(segment.as_str()) {
                Some(idx) => remaining = &remaining[idx + segment.len()..],
                None => return false,
            }
        }
        true
    }
}

impl From<&str> for KeyPattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}
