//! The tappable tag label.
//!
//! Owns one text assignment, its tag index, the press state machine, and
//! the embedder's callbacks. The host event loop feeds it pointer events
//! and a periodic tick, and asks it for styled lines each frame.

use std::time::Instant;

use ratatui::layout::Position;
use ratatui::text::Line;

use crate::config::{LabelConfig, TagStyles};
use crate::index::TagIndex;
use crate::layout::{GridLayout, TextLayout};
use crate::model::{StyledText, TagKind};
use crate::state::{TapEvent, TouchPhase, TouchState};
use crate::view;

/// Callback invoked when a tap lands on a tag.
pub type TagCallback = Box<dyn FnMut(&str, &TagKind)>;

/// Callback invoked when a tap lands on no tag.
pub type EmptyCallback = Box<dyn FnMut(Option<usize>)>;

/// A text label whose hashtags, mentions, URLs, custom matches, and
/// attachments respond to taps.
pub struct TagLabel {
    styled: StyledText,
    kinds: Vec<TagKind>,
    index: TagIndex,
    touch: TouchState,
    styles: TagStyles,
    context: Option<usize>,
    on_tag: Option<TagCallback>,
    on_empty: Option<EmptyCallback>,
}

impl TagLabel {
    /// A label with no text that detects the given kinds.
    pub fn new(kinds: Vec<TagKind>, config: &LabelConfig) -> Self {
        Self {
            styled: StyledText::new(""),
            kinds,
            index: TagIndex::default(),
            touch: TouchState::with_clear_delay(config.highlight_clear),
            styles: config.styles,
            context: None,
            on_tag: None,
            on_empty: None,
        }
    }

    /// Assign new text, rebuilding the index wholesale.
    ///
    /// Press and highlight state from the previous text is dropped so no
    /// stale range can be resolved or drawn against the new assignment.
    pub fn set_text(&mut self, styled: StyledText) {
        self.index = TagIndex::build(&styled, &self.kinds);
        self.styled = styled;
        self.touch.reset();
    }

    /// The current text.
    pub fn text(&self) -> &str {
        self.styled.text()
    }

    /// The current tag index.
    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    /// The kinds this label detects.
    pub fn kinds(&self) -> &[TagKind] {
        &self.kinds
    }

    /// Register the callback for taps that land on a tag.
    pub fn on_tag_tapped(&mut self, callback: impl FnMut(&str, &TagKind) + 'static) {
        self.on_tag = Some(Box::new(callback));
    }

    /// Register the callback for taps that land on no tag.
    pub fn on_empty_tapped(&mut self, callback: impl FnMut(Option<usize>) + 'static) {
        self.on_empty = Some(Box::new(callback));
    }

    /// Set the context value reported with empty taps, e.g. a row index.
    pub fn set_context(&mut self, context: Option<usize>) {
        self.context = context;
    }

    /// Feed one pointer event through the label.
    ///
    /// Returns the handled flag: whether the embedder should suppress its
    /// own handling of this gesture. Callbacks fire from inside this call
    /// when the event is a release.
    pub fn touch<L: TextLayout>(
        &mut self,
        phase: TouchPhase,
        point: Position,
        layout: &L,
        now: Instant,
    ) -> bool {
        let outcome = self
            .touch
            .on_touch(phase, point, &self.index, layout, self.context, now);

        match outcome.event {
            Some(TapEvent::Tag { text, kind }) => {
                if let Some(callback) = self.on_tag.as_mut() {
                    callback(&text, &kind);
                }
            }
            Some(TapEvent::Empty { context }) => {
                if let Some(callback) = self.on_empty.as_mut() {
                    callback(context);
                }
            }
            None => {}
        }
        outcome.handled
    }

    /// Service the deferred highlight clear. Returns true when the
    /// highlight was cleared this tick, so the host knows to redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.touch.tick(now)
    }

    /// Render the label into one styled line per grid row.
    pub fn render_lines(&self, layout: &GridLayout) -> Vec<Line<'static>> {
        view::styled_lines(layout, &self.index, self.touch.highlight(), &self.styles)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "widget_tests.rs"]
mod tests;
