//! Touch/press state machine.
//!
//! Idle → Pressing on down; back to Idle on up (which triggers resolution
//! and notification) or on cancel/stationary (which only clears the
//! highlight). Down and move compute the resolution for highlight
//! feedback but never notify.
//!
//! The highlight clear after release is a deadline serviced by the host
//! event loop's tick, not a detached timer: a new press or a new text
//! assignment drops the pending clear, and servicing it twice is a no-op.

use std::time::{Duration, Instant};

use ratatui::layout::Position;

use crate::index::TagIndex;
use crate::layout::TextLayout;
use crate::model::{MatchRange, TagKind};

/// Default linger time for a selection highlight after release.
pub const HIGHLIGHT_CLEAR_DELAY: Duration = Duration::from_millis(250);

/// The phase of a pointer/touch event, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// Pointer went down.
    Began,
    /// Pointer moved while down.
    Moved,
    /// Pointer is down and not moving.
    Stationary,
    /// Pointer went up.
    Ended,
    /// The gesture was cancelled by the host.
    Cancelled,
}

/// Press progress. Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressState {
    /// No press in progress.
    #[default]
    Idle,
    /// Pointer is down.
    Pressing {
        /// Whether the press began inside the text's occupied bounds.
        /// Drives the handled flag for the whole gesture.
        began_inside: bool,
    },
}

/// Ephemeral visual feedback for the range under a press.
///
/// Cosmetic only; tap resolution never depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionHighlight {
    /// The highlighted range.
    pub range: MatchRange,
}

/// What a touch resolved to, reported on release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapEvent {
    /// The press ended on a tag.
    Tag {
        /// The tag's reported text.
        text: String,
        /// The tag's kind.
        kind: TagKind,
    },
    /// The press ended on no tag.
    Empty {
        /// Embedder-supplied context, e.g. a row identifier.
        context: Option<usize>,
    },
}

/// Result of feeding one touch event through the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchOutcome {
    /// Whether the embedder should suppress default gesture handling for
    /// this event. True whenever the press began inside the text's
    /// bounds, independent of whether a tag was hit.
    pub handled: bool,
    /// The notification to deliver, if any. Only release produces one.
    pub event: Option<TapEvent>,
}

impl TouchOutcome {
    fn quiet(handled: bool) -> Self {
        Self {
            handled,
            event: None,
        }
    }
}

/// The press state machine plus its highlight bookkeeping.
#[derive(Debug, Clone)]
pub struct TouchState {
    press: PressState,
    highlight: Option<SelectionHighlight>,
    clear_deadline: Option<Instant>,
    clear_delay: Duration,
}

impl Default for TouchState {
    fn default() -> Self {
        Self {
            press: PressState::Idle,
            highlight: None,
            clear_deadline: None,
            clear_delay: HIGHLIGHT_CLEAR_DELAY,
        }
    }
}

impl TouchState {
    /// Fresh state: idle, no highlight, the default clear delay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with a configured highlight clear delay.
    pub fn with_clear_delay(delay: Duration) -> Self {
        Self {
            clear_delay: delay,
            ..Self::default()
        }
    }

    /// How long the highlight lingers after release.
    pub fn clear_delay(&self) -> Duration {
        self.clear_delay
    }

    /// The current press state.
    pub fn press(&self) -> PressState {
        self.press
    }

    /// The active highlight, if one is showing.
    pub fn highlight(&self) -> Option<&SelectionHighlight> {
        self.highlight.as_ref()
    }

    /// Feed one touch event through the machine.
    pub fn on_touch<L: TextLayout>(
        &mut self,
        phase: TouchPhase,
        point: Position,
        index: &TagIndex,
        layout: &L,
        context: Option<usize>,
        now: Instant,
    ) -> TouchOutcome {
        match phase {
            TouchPhase::Began => {
                let inside = layout.bounding_rect().contains(point);
                self.press = PressState::Pressing {
                    began_inside: inside,
                };
                // A new press cancels any pending clear from the last one.
                self.clear_deadline = None;
                self.update_highlight(point, index, layout);
                TouchOutcome::quiet(inside)
            }
            TouchPhase::Moved => {
                self.update_highlight(point, index, layout);
                TouchOutcome::quiet(self.began_inside())
            }
            TouchPhase::Ended => {
                let handled = match self.press {
                    PressState::Pressing { began_inside } => began_inside,
                    PressState::Idle => layout.bounding_rect().contains(point),
                };
                self.press = PressState::Idle;
                self.clear_deadline = Some(now + self.clear_delay);

                let event = match index.resolve_at(point, layout) {
                    Some(hit) => TapEvent::Tag {
                        kind: hit.kind().clone(),
                        text: hit.text,
                    },
                    None => TapEvent::Empty { context },
                };
                TouchOutcome {
                    handled,
                    event: Some(event),
                }
            }
            TouchPhase::Cancelled | TouchPhase::Stationary => {
                self.press = PressState::Idle;
                self.highlight = None;
                self.clear_deadline = None;
                TouchOutcome::quiet(false)
            }
        }
    }

    /// Service the deferred highlight clear. Returns true when the
    /// highlight was cleared this tick. Idempotent.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_deadline {
            Some(deadline) if now >= deadline => {
                self.clear_deadline = None;
                let had_highlight = self.highlight.take().is_some();
                had_highlight
            }
            _ => false,
        }
    }

    /// Drop all press and highlight state. Called on text assignment so
    /// nothing from the previous index survives. The configured clear
    /// delay is kept.
    pub fn reset(&mut self) {
        *self = Self {
            clear_delay: self.clear_delay,
            ..Self::default()
        };
    }

    fn began_inside(&self) -> bool {
        matches!(
            self.press,
            PressState::Pressing { began_inside: true }
        )
    }

    fn update_highlight<L: TextLayout>(&mut self, point: Position, index: &TagIndex, layout: &L) {
        self.highlight = index
            .resolve_at(point, layout)
            .map(|hit| SelectionHighlight { range: hit.range });
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "touch_tests.rs"]
mod tests;
