use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::source::ContentItem;

/// Immutable path-construction policy for one build.
///
/// Constructed once from config and shared read-only by all planning.
/// There is no ambient/global configuration: every consumer receives
/// this value explicitly.
#[derive(Debug, Clone)]
pub struct TargetPolicy {
    publish_dir: PathBuf,
    ugly_urls: bool,
    default_extension: String,
    language: String,
    multilingual: bool,
}

impl TargetPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            publish_dir: config.publish_dir.clone(),
            ugly_urls: config.ugly_urls,
            default_extension: config.default_extension.clone(),
            language: config.default_language.clone(),
            multilingual: config.multilingual,
        }
    }

    pub fn new(
        publish_dir: impl Into<PathBuf>,
        ugly_urls: bool,
        default_extension: impl Into<String>,
    ) -> Self {
        Self {
            publish_dir: publish_dir.into(),
            ugly_urls,
            default_extension: default_extension.into(),
            language: Config::default().default_language,
            multilingual: false,
        }
    }

    /// Configured publish directory, verbatim. May be relative or walk
    /// upward via `..`; callers resolve it against their own working
    /// directory.
    pub fn publish_root(&self) -> &Path {
        &self.publish_dir
    }

    /// Output extension for an item: front-matter override if declared,
    /// else the configured default. A leading dot on the override is
    /// tolerated.
    pub fn extension_for<'a>(&'a self, item: &'a ContentItem) -> &'a str {
        item.front
            .extension
            .as_deref()
            .map(|e| e.trim_start_matches('.'))
            .filter(|e| !e.is_empty())
            .unwrap_or(&self.default_extension)
    }

    pub fn is_pretty(&self) -> bool {
        !self.ugly_urls
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_multilingual(&self) -> bool {
        self.multilingual
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FrontMatter;

    #[test]
    fn test_extension_default() {
        let policy = TargetPolicy::new("public", false, "html");
        let item = ContentItem::new("foo/bar/file.md", Some(FrontMatter::default()), "");
        assert_eq!(policy.extension_for(&item), "html");
    }

    #[test]
    fn test_extension_override() {
        let policy = TargetPolicy::new("public", false, "html");
        let front = FrontMatter {
            extension: Some("xml".to_string()),
            ..FrontMatter::default()
        };
        let item = ContentItem::new("feed.md", Some(front), "");
        assert_eq!(policy.extension_for(&item), "xml");
    }

    #[test]
    fn test_extension_override_leading_dot() {
        let policy = TargetPolicy::new("public", false, "html");
        let front = FrontMatter {
            extension: Some(".xml".to_string()),
            ..FrontMatter::default()
        };
        let item = ContentItem::new("feed.md", Some(front), "");
        assert_eq!(policy.extension_for(&item), "xml");
    }

    #[test]
    fn test_pretty_flag() {
        assert!(TargetPolicy::new("public", false, "html").is_pretty());
        assert!(!TargetPolicy::new("public", true, "html").is_pretty());
    }

    #[test]
    fn test_publish_root_verbatim() {
        let policy = TargetPolicy::new("../public", false, "html");
        assert_eq!(policy.publish_root(), Path::new("../public"));
    }
}
