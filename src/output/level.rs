//! Status line levels.

use std::fmt;

/// Severity of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    /// Marker printed in front of the message.
    pub fn symbol(self) -> char {
        match self {
            Level::Info | Level::Success => '✓',
            Level::Warning => '!',
            Level::Error => 'X',
        }
    }

    /// Name of the style used to render lines of this level.
    pub fn style_name(self) -> String {
        format!("_status_{}", self)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "info"),
            Level::Success => write!(f, "success"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Level::Info.symbol(), '✓');
        assert_eq!(Level::Success.symbol(), '✓');
        assert_eq!(Level::Warning.symbol(), '!');
        assert_eq!(Level::Error.symbol(), 'X');
    }

    #[test]
    fn test_style_names() {
        assert_eq!(Level::Warning.style_name(), "_status_warning");
        assert_eq!(Level::Error.style_name(), "_status_error");
    }
}
