//! Configuration module for rc-logger.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::Config;
pub use validation::{validate_config, validate_filler, validate_palette, validate_width};
