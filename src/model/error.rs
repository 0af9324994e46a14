//! Error taxonomy for the tag label core.
//!
//! There are no fatal paths here: a malformed custom pattern degrades to
//! "no tag detected" and is surfaced as a logged diagnostic. Empty input
//! text and out-of-range glyph indices are normal no-match outcomes, not
//! errors.

use thiserror::Error;

/// A pattern that could not be used for matching.
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// The caller-supplied custom pattern failed to compile.
    ///
    /// Recovery: the rule contributes an empty match sequence and the
    /// tagging pipeline continues with the remaining kinds.
    #[error("invalid tag pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern text as supplied by the caller.
        pattern: String,
        /// The regex compiler's error message.
        message: String,
    },
}
