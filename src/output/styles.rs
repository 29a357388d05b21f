//! Style registry.
//!
//! A style is either a pure transform that paints already wrapped text, or a
//! layout routine that prints through a [`Renderer`]. Layout routines never see
//! the logger itself, only the capability, so they can be exercised against any
//! renderer.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::format::{FormatConfig, FormatOptions};
use crate::output::palette::Palette;

/// What a layout style needs from whoever prints it.
pub trait Renderer {
    /// Current format configuration.
    fn format(&self) -> &FormatConfig;

    /// Format `text` with `opts` and print it.
    fn render(&mut self, text: &str, opts: &FormatOptions) -> Result<()>;

    /// Print `lines` blank lines.
    fn space(&mut self, lines: usize) -> Result<()>;
}

/// Layout routine printing through a renderer.
pub type RenderFn = fn(&mut dyn Renderer, &str) -> Result<()>;

/// A named rendering behavior.
#[derive(Clone)]
pub enum Style {
    /// Leaves text untouched.
    Identity,
    /// Paints every line with a terminal style.
    Paint(console::Style),
    /// Takes over layout and printing.
    Render(RenderFn),
}

impl Style {
    /// Apply a transform style line by line. Layout styles return the text as is.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Style::Paint(style) => text
                .split('\n')
                .map(|line| style.apply_to(line).to_string())
                .collect::<Vec<_>>()
                .join("\n"),
            Style::Identity | Style::Render(_) => text.to_string(),
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Style::Identity)
    }
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Identity => write!(f, "Identity"),
            Style::Paint(style) => f.debug_tuple("Paint").field(style).finish(),
            Style::Render(_) => write!(f, "Render(..)"),
        }
    }
}

/// Mapping from style name to style.
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    styles: HashMap<String, Style>,
}

impl StyleRegistry {
    /// Built-in styles painted with `palette`, plus the layout styles.
    pub fn new(palette: &Palette) -> Self {
        let mut styles = HashMap::new();

        let paint = [
            ("muted", Palette::style(&palette.muted)),
            ("primary", Palette::style(&palette.primary)),
            ("secondary", Palette::style(&palette.secondary)),
            ("highlight", Palette::style(&palette.highlight)),
            ("bold", console::Style::new().bold()),
            ("_emphasis", Palette::style_with(&palette.primary, "bold")),
            ("_emphasis_less", Palette::style_with(&palette.secondary, "italic")),
            ("_status_info", Palette::style(&palette.info)),
            ("_status_success", Palette::style(&palette.success)),
            ("_status_warning", Palette::style_with(&palette.warning, "bold")),
            ("_status_error", Palette::style(&palette.error)),
        ];
        for (name, style) in paint {
            styles.insert(name.to_string(), Style::Paint(style));
        }

        let layouts: [(&str, RenderFn); 5] = [
            ("banner", banner as RenderFn),
            ("h1", h1 as RenderFn),
            ("h2", h2 as RenderFn),
            ("h3", h3 as RenderFn),
            ("bullet", bullet as RenderFn),
        ];
        for (name, render) in layouts {
            styles.insert(name.to_string(), Style::Render(render));
        }

        Self { styles }
    }

    /// Add or replace a style.
    pub fn register(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Look up a style. Missing or unknown names resolve to [`Style::Identity`].
    pub fn get(&self, name: Option<&str>) -> Style {
        match name {
            Some(name) if !name.is_empty() => match self.styles.get(name) {
                Some(style) => style.clone(),
                None => {
                    debug!("Unknown style '{}', using identity", name);
                    Style::Identity
                }
            },
            _ => Style::Identity,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Registered style names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Unpadded, unjustified and untrimmed block in the primary color.
fn banner(r: &mut dyn Renderer, text: &str) -> Result<()> {
    let opts = FormatOptions::styled("primary")
        .with_trim_start(false)
        .with_padding("", "")
        .with_justify(false)
        .with_filler("");
    r.render(text, &opts)
}

/// Five-line frame of stars around the message.
fn h1(r: &mut dyn Renderer, text: &str) -> Result<()> {
    let rule = "*".repeat(r.format().width.saturating_sub(3));
    let outer = FormatOptions::styled("primary");
    let inner = FormatOptions::styled("primary")
        .with_padding("* ", "*")
        .with_justify(false)
        .with_filler(" ");

    r.render(&rule, &outer)?;
    r.render(" ", &inner)?;
    r.render(text, &inner)?;
    r.render(" ", &inner)?;
    r.render(&rule, &outer)
}

fn h2(r: &mut dyn Renderer, text: &str) -> Result<()> {
    r.space(1)?;
    r.render(&format!("\n{}\n\n", text), &FormatOptions::styled("_emphasis"))
}

fn h3(r: &mut dyn Renderer, text: &str) -> Result<()> {
    r.render(&format!("\n{}\n", text), &FormatOptions::styled("_emphasis_less"))
}

fn bullet(r: &mut dyn Renderer, text: &str) -> Result<()> {
    let opts = FormatOptions::default()
        .with_trim_start(false)
        .with_hanging_indent("    ");
    r.render(&format!("  - {}", text), &opts)
}
