//! The tag index: classified ranges for one text assignment.
//!
//! Built once per text assignment and rebuilt wholesale on the next one;
//! never partially updated. Resolution queries are linear scans over each
//! range sequence, which is cheap at the scale of one label's text.

use tracing::warn;

use crate::layout::TextLayout;
use crate::matcher::{self, PatternRule};
use crate::model::{AttachmentSpan, MatchRange, StyledText, TagHit, TagKind};
use ratatui::layout::Position;

/// Classified ranges for one text assignment.
///
/// Ranges within each sequence are non-overlapping and sorted by start
/// offset. The scan order guarantees this for a single rule, but the build
/// sorts defensively since custom rules may contribute unordered results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    hashtags: Vec<MatchRange>,
    mentions: Vec<MatchRange>,
    urls: Vec<MatchRange>,
    customs: Vec<MatchRange>,
    attachments: Vec<AttachmentSpan>,
}

impl TagIndex {
    /// Scan `styled` once per enabled kind and collect attachment spans.
    ///
    /// A malformed custom pattern contributes an empty sequence and a
    /// logged diagnostic; it never aborts the pipeline.
    pub fn build(styled: &StyledText, kinds: &[TagKind]) -> Self {
        let mut index = TagIndex::default();
        for kind in kinds {
            let rule = PatternRule::new(kind.clone());
            let ranges = match matcher::find_matches(styled.text(), &rule) {
                Ok(ranges) => ranges,
                Err(err) => {
                    warn!(%err, kind = %kind, "pattern skipped during index build");
                    Vec::new()
                }
            };
            match kind {
                TagKind::Hashtag => index.hashtags = ranges,
                TagKind::Mention => index.mentions = ranges,
                TagKind::Url => index.urls = ranges,
                TagKind::Custom(_) => index.customs.extend(ranges),
            }
        }
        index.attachments = styled.attachments().to_vec();

        index.hashtags.sort_by_key(|r| r.start);
        index.mentions.sort_by_key(|r| r.start);
        index.urls.sort_by_key(|r| r.start);
        index.customs.sort_by_key(|r| r.start);
        index.attachments.sort_by_key(|a| a.start);
        index
    }

    /// Resolve a glyph index to the tag containing it, if any.
    ///
    /// Priority when sequences overlap: mentions, then hashtags, then URLs,
    /// then custom matches, then attachment spans. First containing match
    /// wins. Attachment hits are reported as mentions, matching how
    /// embedded usernames behave.
    pub fn resolve(&self, glyph: usize) -> Option<MatchRange> {
        for sequence in [&self.mentions, &self.hashtags, &self.urls, &self.customs] {
            if let Some(range) = sequence.iter().find(|r| r.contains(glyph)) {
                return Some(range.clone());
            }
        }
        self.attachments
            .iter()
            .find(|a| a.contains(glyph))
            .map(|a| MatchRange::new(a.start, a.len, TagKind::Mention))
    }

    /// Resolve a screen point to the tag under it, if any.
    ///
    /// Points outside the layout's occupied bounding rect are empty taps.
    /// Pattern hits report the substring the range spans; attachment hits
    /// report the span's payload.
    pub fn resolve_at<L: TextLayout>(&self, point: Position, layout: &L) -> Option<TagHit> {
        if !layout.bounding_rect().contains(point) {
            return None;
        }
        let glyph = layout.glyph_index_at(point)?;
        let range = self.resolve(glyph)?;
        let text = self
            .attachment_payload(&range)
            .unwrap_or_else(|| layout.substring(range.start, range.len).to_string());
        Some(TagHit { range, text })
    }

    /// The payload of the attachment span the resolved range came from.
    ///
    /// Pattern sequences take priority over attachments in [`Self::resolve`],
    /// so a range is an attachment hit only when no pattern sequence
    /// contains its start.
    fn attachment_payload(&self, range: &MatchRange) -> Option<String> {
        if range.kind != TagKind::Mention {
            return None;
        }
        if self.mentions.iter().any(|m| m.start == range.start && m.len == range.len) {
            return None;
        }
        self.attachments
            .iter()
            .find(|a| a.start == range.start && a.len == range.len)
            .map(|a| a.payload.clone())
    }

    /// Detected hashtag ranges, sorted by start offset.
    pub fn hashtags(&self) -> &[MatchRange] {
        &self.hashtags
    }

    /// Detected mention ranges, sorted by start offset.
    pub fn mentions(&self) -> &[MatchRange] {
        &self.mentions
    }

    /// Detected URL ranges, sorted by start offset.
    pub fn urls(&self) -> &[MatchRange] {
        &self.urls
    }

    /// Custom pattern ranges, sorted by start offset.
    pub fn customs(&self) -> &[MatchRange] {
        &self.customs
    }

    /// Attachment spans, sorted by start offset.
    pub fn attachments(&self) -> &[AttachmentSpan] {
        &self.attachments
    }

    /// The kind whose range covers a byte of text, for styling.
    ///
    /// Uses exclusive containment so the boundary glyph after a tag keeps
    /// the default style; only tap resolution is boundary-inclusive.
    /// Attachment spans are not considered here; see
    /// [`Self::attachment_covers`].
    pub fn kind_covering(&self, byte: usize) -> Option<TagKind> {
        for sequence in [&self.mentions, &self.hashtags, &self.urls, &self.customs] {
            if let Some(range) = sequence.iter().find(|r| r.covers(byte)) {
                return Some(range.kind.clone());
            }
        }
        None
    }

    /// Whether an attachment span covers a byte of text, for styling.
    pub fn attachment_covers(&self, byte: usize) -> bool {
        self.attachments.iter().any(|a| a.covers(byte))
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
