//! taglabel
//!
//! Tappable tag label core for terminal UIs.
//!
//! Detects hashtags, mentions, URLs and custom patterns in label text, and
//! resolves pointer events to the tag (if any) under the cursor. The text
//! layout engine is a trait seam ([`layout::TextLayout`]); a monospaced grid
//! implementation backs the ratatui demo and the tests.

pub mod config;
pub mod index;
pub mod layout;
pub mod logging;
pub mod matcher;
pub mod model;
pub mod state;
pub mod view;
pub mod widget;
