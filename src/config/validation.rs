//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use crate::format::{FormatOptions, MAX_WIDTH, MIN_WIDTH};
use crate::output::Palette;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_format(&config.format)?;
    validate_palette(&config.palette)?;

    Ok(())
}

/// Validate format overrides.
pub fn validate_format(format: &FormatOptions) -> Result<()> {
    if let Some(width) = format.width {
        validate_width(width)?;
    }

    if let Some(filler) = &format.filler {
        validate_filler(filler)?;
    }

    Ok(())
}

/// Validate a line width.
pub fn validate_width(width: usize) -> Result<()> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return Err(Error::ConfigValidation {
            field: "format.width".to_string(),
            message: format!(
                "Width must be between {} and {} (got {})",
                MIN_WIDTH, MAX_WIDTH, width
            ),
        });
    }

    Ok(())
}

/// Validate the filler: empty, or a single character.
pub fn validate_filler(filler: &str) -> Result<()> {
    if filler.chars().count() > 1 {
        return Err(Error::ConfigValidation {
            field: "format.filler".to_string(),
            message: format!("Filler must be at most one character (got '{}')", filler),
        });
    }

    Ok(())
}

/// Validate palette entries.
pub fn validate_palette(palette: &Palette) -> Result<()> {
    for (name, spec) in palette.entries() {
        if spec.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: format!("palette.{}", name),
                message: "Color must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
