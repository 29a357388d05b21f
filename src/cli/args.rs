//! Command-line argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// Styled console output demo.
#[derive(Parser, Debug)]
#[command(
    name = "rc-logger",
    version,
    about = "Print styled console output from the command line",
    long_about = "Renders banners, headings, status lines, columns, prompts and progress bars \
                  with the rc-logger styles.\n\n\
                  Useful for shell scripts and for previewing a configuration."
)]
pub struct Args {
    /// Path to configuration file.
    #[arg(short, long, default_value = "rc-logger.toml", env = "RC_LOGGER_CONFIG")]
    pub config: PathBuf,

    /// Line width (clamped to 60..=120).
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Justify wrapped lines.
    #[arg(long)]
    pub justify: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to print.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the logo.
    Logo,
    /// Print a banner for a title.
    Banner { title: String },
    /// Print a message followed by a blank line.
    Message {
        text: String,
        /// Style name, e.g. primary, muted, h1, bullet.
        #[arg(short, long)]
        style: Option<String>,
    },
    /// Print a heading.
    Heading {
        /// Heading level (1-3).
        #[arg(value_parser = clap::value_parser!(u8).range(1..=3))]
        level: u8,
        text: String,
    },
    /// Print one bullet per item.
    Bullet {
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Print an info status line.
    Status { text: String },
    /// Print a success status line.
    Success { text: String },
    /// Print a warning status line.
    Warning { text: String },
    /// Print an error block.
    Error { text: String },
    /// Print a divider line.
    Divider {
        /// Character to fill the line with.
        #[arg(long = "char", default_value_t = '*')]
        fill: char,
        #[arg(short, long, default_value = "muted")]
        style: String,
    },
    /// Print texts side by side.
    Columns {
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// Ask a question and print the answer as JSON.
    Ask { question: String },
    /// Ask a yes/no question; exits with status 1 on "no".
    Confirm { message: Option<String> },
    /// Run a progress bar.
    Progress {
        #[arg(long, default_value_t = 100)]
        steps: u64,
        #[arg(long = "delay-ms", default_value_t = 20)]
        delay_ms: u64,
    },
    /// Print one of everything.
    Showcase,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(width) = self.width {
            config.format.width = Some(width);
        }

        // Boolean flags (only override if set to non-default)
        if self.justify {
            config.format.justify = Some(true);
        }
    }
}
