//! Press/release state machine and the transient selection highlight.

pub mod touch;

pub use touch::{
    PressState, SelectionHighlight, TapEvent, TouchOutcome, TouchPhase, TouchState,
    HIGHLIGHT_CLEAR_DELAY,
};
