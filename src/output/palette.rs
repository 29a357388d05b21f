//! Named colors shared by the logger styles and the progress bar.

use console::Style;
use serde::{Deserialize, Serialize};

/// Color palette, each entry a `console` dotted style string such as
/// `"cyan.bold"` or `"244"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub muted: String,
    pub primary: String,
    pub secondary: String,
    pub highlight: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            muted: "black.bright".to_string(),
            primary: "cyan".to_string(),
            secondary: "magenta".to_string(),
            highlight: "yellow".to_string(),
            info: "white".to_string(),
            success: "green".to_string(),
            warning: "yellow".to_string(),
            error: "white.on_red.bold".to_string(),
        }
    }
}

impl Palette {
    /// All entries with their names, in declaration order.
    pub fn entries(&self) -> [(&'static str, &str); 8] {
        [
            ("muted", self.muted.as_str()),
            ("primary", self.primary.as_str()),
            ("secondary", self.secondary.as_str()),
            ("highlight", self.highlight.as_str()),
            ("info", self.info.as_str()),
            ("success", self.success.as_str()),
            ("warning", self.warning.as_str()),
            ("error", self.error.as_str()),
        ]
    }

    /// Parse an entry into a terminal style.
    pub fn style(spec: &str) -> Style {
        Style::from_dotted_str(spec)
    }

    /// Parse an entry and add extra dotted attributes, e.g. `"bold"`.
    pub fn style_with(spec: &str, extra: &str) -> Style {
        Style::from_dotted_str(&format!("{}.{}", spec, extra))
    }
}
