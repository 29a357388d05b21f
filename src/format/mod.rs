//! Text layout primitives.
//!
//! Provides:
//! - Format configuration and per-call overrides
//! - Word wrapping with padding, filling and justification
//! - Column layout

pub mod columns;
pub mod options;
pub mod wrap;

pub use columns::{layout, share_width, Cell, Column};
pub use options::{
    clamp_width, FormatConfig, FormatOptions, FALLBACK_WIDTH, MAX_WIDTH, MIN_WIDTH,
};
pub use wrap::{justify_line, wrap};
