//! Output module for console output and progress.
//!
//! Provides:
//! - The `Logger` print facade
//! - Named styles and color palettes
//! - Logo and banner artwork
//! - Progress bars

pub mod capture;
pub mod level;
pub mod logger;
pub mod palette;
pub mod progress;
pub mod resources;
pub mod styles;

pub use capture::Capture;
pub use level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use palette::Palette;
pub use progress::ProgressBar;
pub use resources::{BuiltinResources, Resources, StaticResources};
pub use styles::{RenderFn, Renderer, Style, StyleRegistry};
