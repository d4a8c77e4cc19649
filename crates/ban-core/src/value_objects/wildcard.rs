//! Wildcard patterns for ban items
//!
//! A ban item may contain `*`, which matches any substring. Everything else
//! is matched literally and case-insensitively.

/// A compiled `*`-wildcard pattern.
///
/// Matching is unanchored: the literal segments between wildcards must appear
/// in the value in order, but the value may carry arbitrary text before the
/// first and after the last segment. The SQL rendering via
/// [`to_like_pattern`](Self::to_like_pattern) is anchored, because `LIKE` is;
/// the two uses are intentionally distinct (see DESIGN.md).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardPattern {
    raw: String,
    segments: Vec<String>,
}

impl WildcardPattern {
    pub fn new(pattern: &str) -> Self {
        let segments = pattern
            .split('*')
            .filter(|segment| !segment.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self {
            raw: pattern.to_string(),
            segments,
        }
    }

    /// Whether an item needs wildcard matching at all
    #[inline]
    pub fn is_wildcard(item: &str) -> bool {
        item.contains('*')
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive unanchored match of the literal segments in order
    pub fn matches(&self, value: &str) -> bool {
        let value = value.to_lowercase();
        let mut position = 0;
        for segment in &self.segments {
            match value[position..].find(segment.as_str()) {
                Some(found) => position += found + segment.len(),
                None => return false,
            }
        }
        true
    }

    /// Render the pattern for a SQL `LIKE` predicate.
    ///
    /// `%` / `_` / `\` in the literal parts are escaped with a backslash;
    /// each `*` becomes `%`. Callers must bind the result as a parameter,
    /// never splice it into the statement text.
    pub fn to_like_pattern(&self) -> String {
        let mut out = String::with_capacity(self.raw.len());
        for ch in self.raw.to_lowercase().chars() {
            match ch {
                '*' => out.push('%'),
                '%' | '_' | '\\' => {
                    out.push('\\');
                    out.push(ch);
                }
                other => out.push(other),
            }
        }
        out
    }
}
