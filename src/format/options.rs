//! Format configuration and per-call overrides.

use serde::{Deserialize, Serialize};

/// Narrowest width the logger will ever lay text out at.
pub const MIN_WIDTH: usize = 60;

/// Widest width the logger will ever lay text out at.
pub const MAX_WIDTH: usize = 120;

/// Width assumed when the terminal size cannot be determined.
pub const FALLBACK_WIDTH: usize = 80;

/// Clamp a terminal width into the supported range.
pub fn clamp_width(columns: usize) -> usize {
    columns.clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Rendering options controlling how text is wrapped and padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Total line width, padding included.
    pub width: usize,

    /// Character used to pad every line to the full width. Empty disables filling.
    pub filler: String,

    /// Keep ANSI escape sequences found in the input.
    pub ansi: bool,

    /// Stretch inter-word gaps so wrapped lines end flush.
    pub justify: bool,

    pub padding_left: String,
    pub padding_right: String,

    /// Prefix for continuation lines of a wrapped paragraph.
    pub hanging_indent: String,

    pub trim_start_of_line: bool,
    pub trim_end_of_line: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            width: FALLBACK_WIDTH,
            filler: " ".to_string(),
            ansi: false,
            justify: false,
            padding_left: " ".to_string(),
            padding_right: " ".to_string(),
            hanging_indent: String::new(),
            trim_start_of_line: true,
            trim_end_of_line: true,
        }
    }
}

impl FormatConfig {
    /// Default configuration for a terminal `columns` wide.
    pub fn for_terminal_width(columns: usize) -> Self {
        Self {
            width: clamp_width(columns),
            ..Self::default()
        }
    }

    /// Width left for text once both paddings are taken out. Never zero.
    pub fn content_width(&self) -> usize {
        let padding = console::measure_text_width(&self.padding_left)
            + console::measure_text_width(&self.padding_right);
        self.width.saturating_sub(padding).max(1)
    }

    /// Copy of this configuration with every field present in `opts` overwritten.
    ///
    /// Keys that are not part of the configuration (such as `style`) are ignored.
    /// The width is taken as given so that callers can lay out narrow columns.
    pub fn merged(&self, opts: &FormatOptions) -> FormatConfig {
        let mut config = self.clone();
        if let Some(width) = opts.width {
            config.width = width;
        }
        if let Some(filler) = &opts.filler {
            config.filler = filler.clone();
        }
        if let Some(ansi) = opts.ansi {
            config.ansi = ansi;
        }
        if let Some(justify) = opts.justify {
            config.justify = justify;
        }
        if let Some(padding) = &opts.padding_left {
            config.padding_left = padding.clone();
        }
        if let Some(padding) = &opts.padding_right {
            config.padding_right = padding.clone();
        }
        if let Some(indent) = &opts.hanging_indent {
            config.hanging_indent = indent.clone();
        }
        if let Some(trim) = opts.trim_start_of_line {
            config.trim_start_of_line = trim;
        }
        if let Some(trim) = opts.trim_end_of_line {
            config.trim_end_of_line = trim;
        }
        config
    }
}

/// Partial override of a [`FormatConfig`] plus the style to render with.
///
/// Deserialization silently drops unknown keys, so a configuration table
/// can never introduce fields the logger does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ansi: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hanging_indent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_start_of_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_end_of_line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl FormatOptions {
    /// Options that only select a style.
    pub fn styled(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = Some(filler.into());
        self
    }

    pub fn with_padding(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.padding_left = Some(left.into());
        self.padding_right = Some(right.into());
        self
    }

    pub fn with_justify(mut self, justify: bool) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn with_hanging_indent(mut self, indent: impl Into<String>) -> Self {
        self.hanging_indent = Some(indent.into());
        self
    }

    pub fn with_trim_start(mut self, trim: bool) -> Self {
        self.trim_start_of_line = Some(trim);
        self
    }

    /// Fill in every field that is unset here from `base`.
    pub fn or(mut self, base: &FormatOptions) -> Self {
        self.width = self.width.or(base.width);
        self.filler = self.filler.or_else(|| base.filler.clone());
        self.ansi = self.ansi.or(base.ansi);
        self.justify = self.justify.or(base.justify);
        self.padding_left = self.padding_left.or_else(|| base.padding_left.clone());
        self.padding_right = self.padding_right.or_else(|| base.padding_right.clone());
        self.hanging_indent = self.hanging_indent.or_else(|| base.hanging_indent.clone());
        self.trim_start_of_line = self.trim_start_of_line.or(base.trim_start_of_line);
        self.trim_end_of_line = self.trim_end_of_line.or(base.trim_end_of_line);
        self.style = self.style.or_else(|| base.style.clone());
        self
    }
}

impl From<&str> for FormatOptions {
    fn from(style: &str) -> Self {
        Self::styled(style)
    }
}

impl From<String> for FormatOptions {
    fn from(style: String) -> Self {
        Self::styled(style)
    }
}

impl From<Option<&str>> for FormatOptions {
    fn from(style: Option<&str>) -> Self {
        style.map(Self::styled).unwrap_or_default()
    }
}

impl From<&FormatOptions> for FormatOptions {
    fn from(opts: &FormatOptions) -> Self {
        opts.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_width_is_clamped() {
        for columns in [0, 20, 59, 60, 61, 100, 119, 120, 121, 400] {
            let config = FormatConfig::for_terminal_width(columns);
            assert_eq!(config.width, columns.clamp(60, 120), "columns = {}", columns);
        }
    }

    #[test]
    fn test_content_width_excludes_padding() {
        let config = FormatConfig::for_terminal_width(80);
        assert_eq!(config.content_width(), 78);

        let narrow = FormatConfig {
            width: 2,
            padding_left: "* ".to_string(),
            padding_right: "*".to_string(),
            ..FormatConfig::default()
        };
        assert_eq!(narrow.content_width(), 1);
    }

    #[test]
    fn test_merged_overrides_present_fields_only() {
        let base = FormatConfig::for_terminal_width(100);
        let merged = base.merged(&FormatOptions::default().with_filler("*").with_style("muted"));

        assert_eq!(merged.filler, "*");
        assert_eq!(merged.width, 100);
        assert_eq!(merged.padding_left, " ");
        assert!(merged.trim_start_of_line);
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let opts: FormatOptions =
            serde_json::from_value(serde_json::json!({ "unknownKey": true, "width": 80 }))
                .unwrap();

        assert_eq!(opts, FormatOptions::default().with_width(80));
    }

    #[test]
    fn test_style_name_normalizes_to_options() {
        assert_eq!(FormatOptions::from("muted").style.as_deref(), Some("muted"));
        assert_eq!(FormatOptions::from(None::<&str>), FormatOptions::default());
    }

    #[test]
    fn test_or_prefers_own_values() {
        let column = FormatOptions::default().with_width(20);
        let shared = FormatOptions::styled("primary").with_width(90);
        let combined = column.or(&shared);

        assert_eq!(combined.width, Some(20));
        assert_eq!(combined.style.as_deref(), Some("primary"));
    }
}
