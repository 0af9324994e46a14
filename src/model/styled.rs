//! Styled label text: plain text plus pre-declared tappable spans.

use tracing::warn;

/// A sub-range explicitly flagged as tappable, independent of pattern
/// matching. Used for programmatically embedded content such as inserted
/// usernames; the payload is what a tap on the span reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentSpan {
    /// Start byte offset into the text.
    pub start: usize,
    /// Length in bytes.
    pub len: usize,
    /// The text reported when the span is tapped.
    pub payload: String,
}

impl AttachmentSpan {
    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Inclusive containment test, mirroring
    /// [`crate::model::MatchRange::contains`].
    pub fn contains(&self, glyph: usize) -> bool {
        glyph >= self.start && glyph <= self.end()
    }

    /// Exclusive containment test, used for styling.
    pub fn covers(&self, byte: usize) -> bool {
        byte >= self.start && byte < self.end()
    }
}

/// The input to a text assignment: the plain text and any attachment spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    attachments: Vec<AttachmentSpan>,
}

impl StyledText {
    /// Plain text with no attachment spans.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    /// The underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The declared attachment spans, in declaration order.
    pub fn attachments(&self) -> &[AttachmentSpan] {
        &self.attachments
    }

    /// Declare a sub-range as a tappable attachment span.
    ///
    /// Spans that fall outside the text or cut a `char` in half are
    /// dropped with a diagnostic rather than poisoning later resolution.
    pub fn push_attachment(&mut self, start: usize, len: usize, payload: impl Into<String>) {
        let end = start.saturating_add(len);
        if end > self.text.len()
            || !self.text.is_char_boundary(start)
            || !self.text.is_char_boundary(end)
        {
            warn!(start, len, "dropping attachment span outside text bounds");
            return;
        }
        self.attachments.push(AttachmentSpan {
            start,
            len,
            payload: payload.into(),
        });
    }

    /// Builder-style variant of [`StyledText::push_attachment`].
    pub fn with_attachment(mut self, start: usize, len: usize, payload: impl Into<String>) -> Self {
        self.push_attachment(start, len, payload);
        self
    }
}
