use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::renderer::Renderer;

/// A resolved output location, or the marker for a build that has no
/// target policy configured. The sentinel is a variant, never a magic
/// string; only the printer knows its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "snake_case")]
pub enum Target {
    Path(PathBuf),
    Unconfigured,
}

impl Target {
    #[allow(dead_code)]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Target::Path(path) => Some(path),
            Target::Unconfigured => None,
        }
    }

    pub fn is_unconfigured(&self) -> bool {
        matches!(self, Target::Unconfigured)
    }
}

/// An alias redirect artifact derived from front matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasTarget {
    /// The alias URL exactly as declared
    pub url: String,
    pub target: Target,
}

/// Renderer and output decisions for one content item. Created in a
/// single planning pass, never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    /// Logical source path, for diagnostics
    pub source_path: String,
    pub renderer: Renderer,
    pub canonical: Target,
    /// Alias targets in front-matter declaration order
    pub aliases: Vec<AliasTarget>,
}

/// Per-item decisions for one build pass, in content-source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuildPlan {
    pub entries: Vec<PlanEntry>,
}

impl BuildPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_as_path() {
        let target = Target::Path(PathBuf::from("public/index.html"));
        assert_eq!(target.as_path(), Some(Path::new("public/index.html")));
        assert!(Target::Unconfigured.as_path().is_none());
        assert!(Target::Unconfigured.is_unconfigured());
    }

    #[test]
    fn test_target_serializes_tagged() {
        let json = serde_json::to_value(Target::Unconfigured).unwrap();
        assert_eq!(json["kind"], "unconfigured");

        let json = serde_json::to_value(Target::Path(PathBuf::from("public/a"))).unwrap();
        assert_eq!(json["kind"], "path");
    }
}
