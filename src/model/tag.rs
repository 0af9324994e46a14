//! Tag kinds and matched ranges.
//!
//! Offsets throughout are byte offsets into the source text, always on
//! `char` boundaries. This is the same index space the layout collaborator
//! reports for a pointer position, so ranges and glyph indices compare
//! directly.

use std::fmt;

/// The kind of a detected tag.
///
/// A closed set of built-ins plus a custom variant carrying the
/// caller-supplied pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// A `#hashtag`.
    Hashtag,
    /// An `@mention`.
    Mention,
    /// A URL (`http://`, `https://`, `www.` or `pic.` scheme marker).
    Url,
    /// A caller-supplied regular expression, matched case-insensitively
    /// like the built-ins.
    Custom(String),
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKind::Hashtag => write!(f, "hashtag"),
            TagKind::Mention => write!(f, "mention"),
            TagKind::Url => write!(f, "url"),
            TagKind::Custom(pattern) => write!(f, "custom({pattern})"),
        }
    }
}

/// A classified sub-range of the label text.
///
/// Never outlives a text assignment: a new text rebuilds the whole
/// [`crate::index::TagIndex`] and all of its ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRange {
    /// Start byte offset into the source text.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// The kind this range was classified as.
    pub kind: TagKind,
}

impl MatchRange {
    /// Create a new range.
    pub fn new(start: usize, len: usize, kind: TagKind) -> Self {
        Self { start, len, kind }
    }

    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Containment test used for tap resolution.
    ///
    /// The upper bound is inclusive: the glyph immediately after the tag's
    /// last character still counts as inside it. Preserved historical
    /// behavior, pinned by a boundary test in the index module.
    pub fn contains(&self, glyph: usize) -> bool {
        glyph >= self.start && glyph <= self.end()
    }

    /// Exclusive containment test, used for styling.
    ///
    /// Rendering must not spill the tag style onto the following glyph,
    /// so this deliberately differs from [`MatchRange::contains`].
    pub fn covers(&self, byte: usize) -> bool {
        byte >= self.start && byte < self.end()
    }
}

/// A resolved tap: the winning range plus its reported text.
///
/// For pattern matches the text is the substring the range spans; for
/// attachment spans it is the span's payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHit {
    /// The range that won resolution.
    pub range: MatchRange,
    /// The text reported to the caller.
    pub text: String,
}

impl TagHit {
    /// The kind of the hit tag.
    pub fn kind(&self) -> &TagKind {
        &self.range.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_of_the_boundary_glyph() {
        let range = MatchRange::new(6, 6, TagKind::Hashtag);
        assert!(!range.contains(5), "glyph before start is outside");
        assert!(range.contains(6), "first glyph is inside");
        assert!(range.contains(12), "boundary glyph is inside");
        assert!(!range.contains(13), "glyph past the boundary is outside");
    }

    #[test]
    fn covers_is_exclusive_of_the_boundary_glyph() {
        let range = MatchRange::new(6, 6, TagKind::Hashtag);
        assert!(range.covers(6));
        assert!(range.covers(11));
        assert!(!range.covers(12), "styling must stop at the tag end");
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(TagKind::Hashtag.to_string(), "hashtag");
        assert_eq!(TagKind::Mention.to_string(), "mention");
        assert_eq!(TagKind::Url.to_string(), "url");
        assert_eq!(
            TagKind::Custom(r"\bit\b".to_string()).to_string(),
            r"custom(\bit\b)"
        );
    }

    #[test]
    fn hit_reports_kind_of_winning_range() {
        let hit = TagHit {
            range: MatchRange::new(0, 6, TagKind::Mention),
            text: "@alice".to_string(),
        };
        assert_eq!(hit.kind(), &TagKind::Mention);
    }
}
