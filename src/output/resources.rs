//! Logo and banner artwork.

use async_trait::async_trait;
use console::measure_text_width;

use crate::error::{Error, Result};

/// Source of the decorative text printed by the logger.
#[async_trait]
pub trait Resources: Send + Sync {
    /// Logo printed by `Logger::print_logo`.
    async fn logo(&self) -> Result<String>;

    /// Banner artwork for `title`.
    async fn banner(&self, title: &str) -> Result<String>;
}

const LOGO: &str = r#"
   ██████╗  ██████╗
   ██╔══██╗██╔════╝
   ██████╔╝██║
   ██╔══██╗██║
   ██║  ██║╚██████╗
   ╚═╝  ╚═╝ ╚═════╝"#;

/// Artwork bundled with the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinResources;

#[async_trait]
impl Resources for BuiltinResources {
    async fn logo(&self) -> Result<String> {
        Ok(LOGO.trim_start_matches('\n').to_string())
    }

    async fn banner(&self, title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(Error::Resource("banner title is empty".to_string()));
        }
        Ok(boxed_title(title))
    }
}

/// Spaced-out upper-case title inside a double-line box.
fn boxed_title(title: &str) -> String {
    let spaced = title
        .to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    let inner = measure_text_width(&spaced) + 6;

    format!(
        "╔{rule}╗\n║   {spaced}   ║\n╚{rule}╝",
        rule = "═".repeat(inner),
        spaced = spaced
    )
}

/// Fixed artwork, for callers that ship their own.
#[derive(Debug, Clone, Default)]
pub struct StaticResources {
    pub logo: String,
    pub banner: String,
}

#[async_trait]
impl Resources for StaticResources {
    async fn logo(&self) -> Result<String> {
        Ok(self.logo.clone())
    }

    async fn banner(&self, _title: &str) -> Result<String> {
        Ok(self.banner.clone())
    }
}
