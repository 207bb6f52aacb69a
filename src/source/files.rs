use crate::config::Config;
use crate::error::SourceError;
use crate::source::{frontmatter, ContentItem};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load all plannable content under the configured content directory.
///
/// Items come back sorted by logical path so repeated runs plan in the
/// same order. Drafts and other-language items are filtered here; the
/// planner never sees them.
pub fn load_content(config: &Config) -> Result<Vec<ContentItem>, SourceError> {
    let root = &config.content_dir;
    if !root.is_dir() {
        return Err(SourceError::MissingContentDir(root.clone()));
    }

    let ignore_set = build_ignore_set(&config.ignore_files)?;
    let mut items = Vec::new();

    // Use ignore crate to respect .gitignore
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .build();

    for entry in walker {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if ignore_set.is_match(rel) {
            debug!("Ignoring {} (ignore_files match)", rel.display());
            continue;
        }

        let raw = fs::read_to_string(path).map_err(|e| SourceError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (front, body) = frontmatter::parse(&raw).map_err(|e| SourceError::FrontMatter {
            path: path.to_path_buf(),
            source: e,
        })?;

        let item = ContentItem::new(slash_path(rel), front, body);

        if item.front.draft && !config.build_drafts {
            debug!("Skipping draft {}", item.path);
            continue;
        }
        if !language_matches(config, item.front.language.as_deref()) {
            debug!("Skipping {} (language mismatch)", item.path);
            continue;
        }

        items.push(item);
    }

    items.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(items)
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, SourceError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| SourceError::IgnorePattern {
            pattern: pattern.clone(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| SourceError::IgnorePattern {
        pattern: "ignore set".to_string(),
        source: e,
    })
}

/// Logical paths are slash-separated regardless of platform
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Language filtering happens here, before planning. Items without a
/// language tag belong to every build.
fn language_matches(config: &Config, item_language: Option<&str>) -> bool {
    if !config.multilingual {
        return true;
    }
    match item_language {
        Some(lang) => lang == config.default_language,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn config_for(dir: &TempDir) -> Config {
        Config {
            content_dir: dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_load_sorted_logical_paths() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "zeta/post.md", "---\ntitle: z\n---\nbody\n");
        write_file(dir.path(), "alpha/post.md", "---\ntitle: a\n---\nbody\n");
        write_file(dir.path(), "section/somecontent.html", "<h1>static</h1>");

        let items = load_content(&config_for(&dir)).unwrap();
        let paths: Vec<_> = items.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["alpha/post.md", "section/somecontent.html", "zeta/post.md"]
        );
    }

    #[test]
    fn test_drafts_filtered_unless_enabled() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "live.md", "---\ntitle: live\n---\n");
        write_file(dir.path(), "wip.md", "---\ntitle: wip\ndraft: true\n---\n");

        let config = config_for(&dir);
        let items = load_content(&config).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "live.md");

        let config = Config {
            build_drafts: true,
            ..config
        };
        let items = load_content(&config).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_language_filtered_in_multilingual_builds() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "en.md", "---\nlanguage: en\n---\n");
        write_file(dir.path(), "fr.md", "---\nlanguage: fr\n---\n");
        write_file(dir.path(), "untagged.md", "---\ntitle: any\n---\n");

        let config = Config {
            multilingual: true,
            ..config_for(&dir)
        };
        let items = load_content(&config).unwrap();
        let paths: Vec<_> = items.iter().map(|i| i.path.as_str()).collect();
        assert_eq!(paths, vec!["en.md", "untagged.md"]);

        // Monolingual builds take everything
        let config = Config {
            multilingual: false,
            ..config
        };
        assert_eq!(load_content(&config).unwrap().len(), 3);
    }

    #[test]
    fn test_ignore_files_patterns() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "post.md", "---\ntitle: keep\n---\n");
        write_file(dir.path(), "notes/scratch.txt", "scratch");

        let config = Config {
            ignore_files: vec!["**/*.txt".to_string()],
            ..config_for(&dir)
        };
        let items = load_content(&config).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "post.md");
    }

    #[test]
    fn test_missing_content_dir() {
        let config = Config {
            content_dir: std::path::PathBuf::from("/nonexistent/content"),
            ..Config::default()
        };
        assert!(matches!(
            load_content(&config),
            Err(SourceError::MissingContentDir(_))
        ));
    }

    #[test]
    fn test_malformed_front_matter_is_source_error() {
        let dir = TempDir::new().unwrap();
        write_file(dir.path(), "bad.md", "---\ntitle: [unclosed\n---\n");

        assert!(matches!(
            load_content(&config_for(&dir)),
            Err(SourceError::FrontMatter { .. })
        ));
    }
}
