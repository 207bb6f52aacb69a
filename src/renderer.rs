use serde::{Deserialize, Serialize};

use crate::source::ContentItem;

/// Which pipeline will process a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Renderer {
    Markdown,
    Html,
    /// Not renderable; the item is published as-is
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl Renderer {
    /// Select a renderer from a source extension. Total: unrecognized
    /// extensions degrade to `NotApplicable`, never an error.
    pub fn for_extension(ext: Option<&str>) -> Renderer {
        match ext.map(|e| e.to_ascii_lowercase()).as_deref() {
            Some("md" | "markdown" | "mdown" | "mmark") => Renderer::Markdown,
            Some("html" | "htm") => Renderer::Html,
            _ => Renderer::NotApplicable,
        }
    }
}

impl std::fmt::Display for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Renderer::Markdown => write!(f, "markdown"),
            Renderer::Html => write!(f, "html"),
            Renderer::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// Renderer for a content item. Static assets (no front matter, not
/// markdown) are `n/a` even when their extension is recognized.
pub fn select(item: &ContentItem) -> Renderer {
    if !item.is_renderable() {
        return Renderer::NotApplicable;
    }
    Renderer::for_extension(item.extension())
}
