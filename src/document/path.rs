//! Path addressing for report documents
//!
//! Paths are dotted/bracketed strings: `a.b[2].c` and `a.b.2.c` address the
//! same location. Segments composed entirely of digits address list slots;
//! every other segment is a mapping key.

use std::fmt;

/// A parsed document path.
///
/// Parsing never fails; an empty or separator-only string is the empty path,
/// which addresses the document root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parse a path string by splitting on `.`, `[` and `]` and discarding
    /// empty tokens.
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(['.', '[', ']'])
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    /// Build a path from pre-split segments.
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// Returns true when a segment addresses a list slot (all ASCII digits).
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a segment as a list index; non-digit segments (and digit runs too
/// large for an index) yield `None`.
pub fn parse_index(segment: &str) -> Option<usize> {
    if is_index_segment(segment) {
        segment.parse().ok()
    } else {
        None
    }
}
