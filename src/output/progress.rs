//! Progress bar facade.

use console::Term;
use indicatif::{ProgressDrawTarget, ProgressStyle};
use tracing::debug;

use crate::error::Result;
use crate::output::palette::Palette;

/// Units in a bar created without an explicit length.
pub const DEFAULT_LENGTH: u64 = 100;

/// Filled and empty bar glyphs.
const BAR_CHARS: &str = "█░";

/// Single determinate progress bar drawn on stderr.
pub struct ProgressBar {
    bar: indicatif::ProgressBar,
    visible: bool,
}

impl ProgressBar {
    /// Bar of [`DEFAULT_LENGTH`] units painted with the palette's muted color.
    pub fn new(palette: &Palette) -> Result<Self> {
        Self::with_length(DEFAULT_LENGTH, palette)
    }

    pub fn with_length(length: u64, palette: &Palette) -> Result<Self> {
        Self::build(length, palette, true)
    }

    /// Bar that tracks progress without ever drawing.
    pub fn hidden(length: u64, palette: &Palette) -> Result<Self> {
        Self::build(length, palette, false)
    }

    fn build(length: u64, palette: &Palette, visible: bool) -> Result<Self> {
        let bar =
            indicatif::ProgressBar::with_draw_target(Some(length), ProgressDrawTarget::hidden());
        bar.set_style(
            ProgressStyle::with_template(&template(&palette.muted))?.progress_chars(BAR_CHARS),
        );
        Ok(Self { bar, visible })
    }

    /// Start drawing at zero.
    pub fn start(&self) -> Result<()> {
        debug!("Starting progress bar of {:?} units", self.bar.length());
        self.bar.reset();
        if self.visible {
            Term::stderr().hide_cursor()?;
            self.bar.set_draw_target(ProgressDrawTarget::stderr());
        }
        self.bar.set_position(0);
        Ok(())
    }

    pub fn increment(&self) {
        self.bar.inc(1);
    }

    pub fn update(&self, position: u64) {
        self.bar.set_position(position);
    }

    /// Stop drawing, leaving the bar where it is, and give the cursor back.
    pub fn stop(&self) -> Result<()> {
        self.bar.abandon();
        if self.visible {
            Term::stderr().show_cursor()?;
        }
        debug!("Stopped progress bar at {}", self.bar.position());
        Ok(())
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    pub fn is_stopped(&self) -> bool {
        self.bar.is_finished()
    }
}

fn template(color: &str) -> String {
    format!("{{bar:40.{}}} | {{percent}}%", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar() -> ProgressBar {
        ProgressBar::hidden(DEFAULT_LENGTH, &Palette::default()).unwrap()
    }

    #[test]
    fn test_default_length() {
        assert_eq!(bar().length(), Some(DEFAULT_LENGTH));
    }

    #[test]
    fn test_start_increment_update_stop() {
        let bar = bar();
        bar.start().unwrap();
        assert_eq!(bar.position(), 0);

        bar.increment();
        bar.increment();
        assert_eq!(bar.position(), 2);

        bar.update(40);
        assert_eq!(bar.position(), 40);
        bar.increment();
        assert_eq!(bar.position(), 41);

        bar.stop().unwrap();
        assert!(bar.is_stopped());
        assert_eq!(bar.position(), 41);
    }

    #[test]
    fn test_restart_resets_position() {
        let bar = bar();
        bar.start().unwrap();
        bar.update(70);
        bar.start().unwrap();
        assert_eq!(bar.position(), 0);
    }

    #[test]
    fn test_template_uses_palette_color() {
        assert_eq!(template("black.bright"), "{bar:40.black.bright} | {percent}%");
        assert!(ProgressStyle::with_template(&template(&Palette::default().muted)).is_ok());
    }
}
