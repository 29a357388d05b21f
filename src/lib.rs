//! rc-logger - styled console output for command-line tools
//!
//! This library provides a `Logger` that prints consistently styled text blocks
//! and asks interactive questions, plus a small `ProgressBar` facade.
//!
//! # Features
//!
//! - Word wrapping with padding, filling, justification and hanging indents
//! - Banners, logos, headings and bullets
//! - Status, success, warning and error lines
//! - Multi-column rows
//! - Validated prompts and yes/no confirmations
//! - Progress bars
//!
//! # Example
//!
//! ```no_run
//! use rc_logger::{FormatOptions, Logger};
//!
//! #[tokio::main]
//! async fn main() -> rc_logger::Result<()> {
//!     let mut logger = Logger::new();
//!     logger.print_banner("deploy").await?;
//!     logger.heading(2, "Checks")?;
//!     logger.status("configuration loaded")?;
//!     logger.message("All services are healthy.", FormatOptions::styled("primary"))?;
//!
//!     if logger.prompt_yn(Some("Continue?")).await? {
//!         logger.success("done")?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod prompt;

// Re-exports for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use format::{Column, FormatConfig, FormatOptions};
pub use output::{Level, Logger, Palette, ProgressBar, Style};
pub use prompt::{PromptField, PromptResponse, PromptSchema, PromptValue};
