//! Configuration structures and loading logic.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::format::FormatOptions;
use crate::output::Palette;
use crate::prompt::PromptTheme;

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Overrides merged into the logger's format configuration.
    #[serde(default)]
    pub format: FormatOptions,

    #[serde(default)]
    pub palette: Palette,

    /// Decoration around prompt questions.
    #[serde(default)]
    pub prompt: PromptTheme,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "Configuration file not found: {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_partial_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[format]
width = 90
justify = true
no_such_option = "dropped"

[palette]
primary = "blue.bold"

[prompt]
message = "? "
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.format.width, Some(90));
        assert_eq!(config.format.justify, Some(true));
        assert_eq!(config.format.filler, None);
        assert_eq!(config.palette.primary, "blue.bold");
        assert_eq!(config.palette.muted, Palette::default().muted);
        assert_eq!(config.prompt.message, "? ");
        assert_eq!(config.prompt.delimiter, "");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        assert!(matches!(Config::load(&path), Err(Error::Config(_))));
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[format\nwidth = ").unwrap();
        assert!(matches!(Config::load(file.path()), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_serialized_config_reloads() {
        let config = Config {
            format: FormatOptions::default().with_width(100).with_filler("."),
            ..Config::default()
        };

        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", toml::to_string(&config).unwrap()).unwrap();
        assert_eq!(Config::load(file.path()).unwrap(), config);
    }
}
