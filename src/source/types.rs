use serde::Deserialize;

use crate::renderer::Renderer;

/// Parsed YAML front matter for a content file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontMatter {
    #[serde(default)]
    pub title: Option<String>,

    /// Secondary URLs that must redirect to the canonical target,
    /// kept in declaration order
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Language tag; items of other languages are filtered out before
    /// planning in multilingual builds
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub draft: bool,

    /// Output-extension override; the configured default applies otherwise
    #[serde(default)]
    pub extension: Option<String>,
}

/// A single content file, identified by its content-root-relative path.
/// Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ContentItem {
    /// Slash-normalized logical path, relative to the content root
    pub path: String,
    pub front: FrontMatter,
    pub body: String,
    renderable: bool,
}

impl ContentItem {
    /// `front` is `None` when the file carried no front-matter block.
    /// HTML files without front matter are static assets: published
    /// verbatim, never rendered.
    pub fn new(path: impl Into<String>, front: Option<FrontMatter>, body: impl Into<String>) -> Self {
        let path = path.into();
        let renderable = front.is_some()
            || Renderer::for_extension(extension_of(&path)) == Renderer::Markdown;
        Self {
            path,
            front: front.unwrap_or_default(),
            body: body.into(),
            renderable,
        }
    }

    /// Source extension, without the dot
    pub fn extension(&self) -> Option<&str> {
        extension_of(&self.path)
    }

    /// Logical path with the source extension removed
    pub fn stem(&self) -> &str {
        match self.extension() {
            Some(ext) => &self.path[..self.path.len() - ext.len() - 1],
            None => &self.path,
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.renderable
    }
}

fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}
