//! Domain types for the tag label core.

pub mod error;
pub mod styled;
pub mod tag;

pub use error::PatternError;
pub use styled::{AttachmentSpan, StyledText};
pub use tag::{MatchRange, TagHit, TagKind};
