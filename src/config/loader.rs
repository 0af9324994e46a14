//! Configuration file loading.
//!
//! A missing file is not an error; defaults apply. A file that exists but
//! cannot be read or parsed is an error so typos don't silently revert
//! the label to default colors.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

use super::LabelConfig;

/// Errors that can occur during config loading.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read an existing config file.
    #[error("failed to read config file at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// Config file contains invalid TOML.
    #[error("invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A color value could not be parsed.
    #[error("invalid color '{value}' for {field}")]
    InvalidColor {
        /// Which field held the bad value.
        field: &'static str,
        /// The offending value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unspecified fields keep their defaults.
/// Corresponds to `~/.config/taglabel/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Foreground color for hashtags.
    #[serde(default)]
    pub hashtag_color: Option<String>,

    /// Foreground color for mentions.
    #[serde(default)]
    pub mention_color: Option<String>,

    /// Foreground color for URLs.
    #[serde(default)]
    pub url_color: Option<String>,

    /// Foreground color for custom pattern matches.
    #[serde(default)]
    pub custom_color: Option<String>,

    /// Foreground color for attachment spans.
    #[serde(default)]
    pub attachment_color: Option<String>,

    /// Background color for the selection highlight.
    #[serde(default)]
    pub highlight_color: Option<String>,

    /// Highlight linger time after release, in milliseconds.
    #[serde(default)]
    pub highlight_clear_ms: Option<u64>,

    /// Path to the log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Default config file path: `<config dir>/taglabel/config.toml`, or the
/// current directory when no config dir can be determined.
pub fn default_config_path() -> PathBuf {
    match dirs::config_dir() {
        Some(dir) => dir.join("taglabel").join("config.toml"),
        None => PathBuf::from("taglabel.toml"),
    }
}

/// Default log file path: `<state dir>/taglabel/taglabel.log`, or the
/// current directory when no state dir can be determined.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(dir) => dir.join("taglabel").join("taglabel.log"),
        None => PathBuf::from("taglabel.log"),
    }
}

/// Load and resolve configuration: defaults, then the file at `path` (or
/// the default location when `path` is `None`).
pub fn load_config(path: Option<PathBuf>) -> Result<LabelConfig, ConfigError> {
    let path = path.unwrap_or_else(default_config_path);
    match load_config_file(path)? {
        Some(file) => resolve(file),
        None => Ok(LabelConfig::default()),
    }
}

/// Read one config file. `Ok(None)` when the file does not exist.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(&path).map_err(|err| ConfigError::Read {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|err| ConfigError::Parse {
        path: path.clone(),
        reason: err.to_string(),
    })?;
    Ok(Some(file))
}

/// Apply file overrides on top of the defaults.
fn resolve(file: ConfigFile) -> Result<LabelConfig, ConfigError> {
    let mut config = LabelConfig::default();

    if let Some(color) = parse_color("hashtag_color", file.hashtag_color)? {
        config.styles.hashtag = config.styles.hashtag.fg(color);
    }
    if let Some(color) = parse_color("mention_color", file.mention_color)? {
        config.styles.mention = config.styles.mention.fg(color);
    }
    if let Some(color) = parse_color("url_color", file.url_color)? {
        config.styles.url = config.styles.url.fg(color);
    }
    if let Some(color) = parse_color("custom_color", file.custom_color)? {
        config.styles.custom = config.styles.custom.fg(color);
    }
    if let Some(color) = parse_color("attachment_color", file.attachment_color)? {
        config.styles.attachment = config.styles.attachment.fg(color);
    }
    if let Some(color) = parse_color("highlight_color", file.highlight_color)? {
        config.styles.highlight = config.styles.highlight.bg(color);
    }
    if let Some(ms) = file.highlight_clear_ms {
        config.highlight_clear = Duration::from_millis(ms);
    }
    if let Some(path) = file.log_file_path {
        config.log_file = path;
    }
    Ok(config)
}

fn parse_color(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<Color>, ConfigError> {
    match value {
        None => Ok(None),
        Some(raw) => Color::from_str(&raw)
            .map(Some)
            .map_err(|_| ConfigError::InvalidColor { field, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_an_error() {
        let loaded = load_config_file("/nonexistent/taglabel/config.toml");
        assert_eq!(loaded, Ok(None));
    }

    #[test]
    fn empty_file_resolves_to_defaults() {
        let config = resolve(ConfigFile::default()).expect("empty overrides are valid");
        assert_eq!(config, LabelConfig::default());
    }

    #[test]
    fn color_overrides_apply_to_styles() {
        let file = ConfigFile {
            hashtag_color: Some("green".to_string()),
            highlight_clear_ms: Some(100),
            ..ConfigFile::default()
        };

        let config = resolve(file).expect("valid overrides");

        assert_eq!(config.styles.hashtag.fg, Some(Color::Green));
        assert_eq!(config.highlight_clear, Duration::from_millis(100));
    }

    #[test]
    fn invalid_color_is_reported_with_its_field() {
        let file = ConfigFile {
            mention_color: Some("not-a-color".to_string()),
            ..ConfigFile::default()
        };

        let err = resolve(file).expect_err("bad color must not pass");
        assert_eq!(
            err,
            ConfigError::InvalidColor {
                field: "mention_color",
                value: "not-a-color".to_string(),
            }
        );
    }

    #[test]
    fn url_color_override_keeps_the_underline() {
        let file = ConfigFile {
            url_color: Some("red".to_string()),
            ..ConfigFile::default()
        };

        let config = resolve(file).expect("valid overrides");

        assert_eq!(config.styles.url.fg, Some(Color::Red));
        assert!(config
            .styles
            .url
            .add_modifier
            .contains(ratatui::style::Modifier::UNDERLINED));
    }

    #[test]
    fn toml_file_round_trips_through_the_loader() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(file, "hashtag_color = \"cyan\"\nhighlight_clear_ms = 500").expect("write");

        let config = load_config(Some(path)).expect("valid file loads");

        assert_eq!(config.highlight_clear, Duration::from_millis(500));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "hashtag_color = [broken").expect("write");

        let err = load_config(Some(path)).expect_err("bad TOML must not pass");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
