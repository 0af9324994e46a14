//! Appearance and behavior configuration.

pub mod loader;

pub use loader::{default_config_path, default_log_path, load_config, ConfigError, ConfigFile};

use std::time::Duration;

use ratatui::style::{Color, Modifier, Style};

use crate::model::TagKind;

/// Per-kind styles for rendering tagged text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagStyles {
    /// Style for untagged text.
    pub default_style: Style,
    /// Style for hashtags.
    pub hashtag: Style,
    /// Style for mentions.
    pub mention: Style,
    /// Style for URLs.
    pub url: Style,
    /// Style for custom pattern matches.
    pub custom: Style,
    /// Style for attachment spans.
    pub attachment: Style,
    /// Style for the transient selection highlight.
    pub highlight: Style,
}

impl TagStyles {
    /// The style for a tag kind.
    pub fn for_kind(&self, kind: &TagKind) -> Style {
        match kind {
            TagKind::Hashtag => self.hashtag,
            TagKind::Mention => self.mention,
            TagKind::Url => self.url,
            TagKind::Custom(_) => self.custom,
        }
    }
}

impl Default for TagStyles {
    fn default() -> Self {
        Self {
            default_style: Style::default(),
            hashtag: Style::default().fg(Color::Cyan),
            mention: Style::default().fg(Color::Magenta),
            url: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            custom: Style::default().fg(Color::Yellow),
            attachment: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            highlight: Style::default().bg(Color::DarkGray),
        }
    }
}

/// Resolved label configuration: defaults overridden by the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelConfig {
    /// Rendering styles.
    pub styles: TagStyles,
    /// How long the selection highlight lingers after release.
    pub highlight_clear: Duration,
    /// Where tracing output goes.
    pub log_file: std::path::PathBuf,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            styles: TagStyles::default(),
            highlight_clear: crate::state::touch::HIGHLIGHT_CLEAR_DELAY,
            log_file: default_log_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_highlight_clear_is_250ms() {
        assert_eq!(
            LabelConfig::default().highlight_clear,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn for_kind_covers_every_variant() {
        let styles = TagStyles::default();
        assert_eq!(styles.for_kind(&TagKind::Hashtag), styles.hashtag);
        assert_eq!(styles.for_kind(&TagKind::Mention), styles.mention);
        assert_eq!(styles.for_kind(&TagKind::Url), styles.url);
        assert_eq!(
            styles.for_kind(&TagKind::Custom("p".to_string())),
            styles.custom
        );
    }
}
