//! Pattern matching over label text.
//!
//! Pure leaf component: maps a string plus a pattern rule to an ordered set
//! of matched ranges. Built-in patterns are compiled once into `Lazy`
//! statics; custom patterns are compiled per scan, which is cheap at the
//! scale of one label's text.
//!
//! All matching is case-insensitive. Matching is independent per kind:
//! mention scanning does not exclude text already matched as a hashtag, so
//! ranges across kinds may overlap. Resolution order in the index settles
//! ties.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::model::{MatchRange, PatternError, TagKind};

/// A `#` preceded by start-of-string or whitespace, followed by zero or
/// more letters/digits/underscore. Group 1 is the tag itself, excluding the
/// leading boundary character.
pub const HASHTAG_PATTERN: &str = r"(?:^|\s)(#[\p{L}0-9_]*)";

/// An `@` preceded by start-of-string or whitespace, followed by zero or
/// more letters/digits/`.`/`_`/`-`. Group 1 is the tag itself.
pub const MENTION_PATTERN: &str = r"(?:^|\s)(@[\p{L}0-9._-]*)";

/// An optional leading boundary character, then a scheme marker followed by
/// URL-body characters ending in a word character or `/`, optionally
/// followed by `()`. Group 1 is the URL itself. The trailing boundary
/// requirement is enforced by [`url_boundary_follows`] after the match.
pub const URL_PATTERN: &str = r"(?:^|[\s.:;?\-\]<(])((?:https?://|www\.|pic\.)[-\w;/?:@&=+$|_.!~*'()\[\]%#,☺]+[\w/#](?:\(\))?)";

static HASHTAG_RE: Lazy<Regex> =
    Lazy::new(|| compile(HASHTAG_PATTERN).expect("built-in hashtag pattern is valid"));

static MENTION_RE: Lazy<Regex> =
    Lazy::new(|| compile(MENTION_PATTERN).expect("built-in mention pattern is valid"));

static URL_RE: Lazy<Regex> =
    Lazy::new(|| compile(URL_PATTERN).expect("built-in url pattern is valid"));

/// One active pattern: a kind plus its pattern text.
///
/// The pattern is derived from the kind for built-ins and supplied
/// literally for [`TagKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRule {
    kind: TagKind,
}

impl PatternRule {
    /// Rule for the given kind.
    pub fn new(kind: TagKind) -> Self {
        Self { kind }
    }

    /// The kind this rule matches.
    pub fn kind(&self) -> &TagKind {
        &self.kind
    }

    /// The pattern text this rule scans with.
    pub fn pattern(&self) -> &str {
        match &self.kind {
            TagKind::Hashtag => HASHTAG_PATTERN,
            TagKind::Mention => MENTION_PATTERN,
            TagKind::Url => URL_PATTERN,
            TagKind::Custom(pattern) => pattern,
        }
    }
}

/// Scan `text` with one rule, returning ranges ordered by start offset.
///
/// Empty input short-circuits to an empty set. A malformed custom pattern
/// is an `Err`, never a panic; the caller treats it as matching nothing
/// and reports the diagnostic.
pub fn find_matches(text: &str, rule: &PatternRule) -> Result<Vec<MatchRange>, PatternError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    match rule.kind() {
        TagKind::Hashtag => Ok(captured_ranges(&HASHTAG_RE, text, TagKind::Hashtag)),
        TagKind::Mention => Ok(captured_ranges(&MENTION_RE, text, TagKind::Mention)),
        TagKind::Url => Ok(url_ranges(text)),
        TagKind::Custom(pattern) => {
            let re = compile(pattern).map_err(|err| PatternError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;
            Ok(re
                .find_iter(text)
                .map(|m| MatchRange::new(m.start(), m.len(), rule.kind().clone()))
                .collect())
        }
    }
}

/// Compile a pattern the way all rules are matched: case-insensitive.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Ranges of capture group 1 for every match of `re`.
fn captured_ranges(re: &Regex, text: &str, kind: TagKind) -> Vec<MatchRange> {
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| MatchRange::new(m.start(), m.len(), kind.clone()))
        .collect()
}

/// URL matches whose following character satisfies the boundary rule.
fn url_ranges(text: &str) -> Vec<MatchRange> {
    URL_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter(|m| url_boundary_follows(text, m.end()))
        .map(|m| MatchRange::new(m.start(), m.len(), TagKind::Url))
        .collect()
}

/// A URL match must be followed by end-of-string or a boundary/punctuation
/// character. Stands in for the original pattern's trailing lookahead.
fn url_boundary_follows(text: &str, end: usize) -> bool {
    match text[end..].chars().next() {
        None => true,
        Some(c) => c.is_whitespace() || matches!(c, '\'' | ',' | '|' | '(' | ')' | '.' | ':' | ';' | '?' | '-' | '[' | ']' | '>'),
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
