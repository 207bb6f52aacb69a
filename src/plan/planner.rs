use std::path::{Path, PathBuf};

use super::policy::TargetPolicy;
use super::types::{AliasTarget, BuildPlan, PlanEntry, Target};
use crate::renderer::{self, Renderer};
use crate::source::ContentItem;
use tracing::debug;

/// Computes canonical and alias targets for content items.
///
/// Pure path arithmetic: no I/O, no shared mutable state, one pass,
/// output order equals input order. A planner without a policy still
/// plans; every target comes out `Unconfigured` so a partially
/// configured build can still print a full diagnostic plan.
#[derive(Debug, Default)]
pub struct PathPlanner {
    policy: Option<TargetPolicy>,
}

impl PathPlanner {
    pub fn new(policy: TargetPolicy) -> Self {
        Self {
            policy: Some(policy),
        }
    }

    pub fn unconfigured() -> Self {
        Self { policy: None }
    }

    /// Plan every item, preserving source order.
    pub fn plan(&self, items: &[ContentItem]) -> BuildPlan {
        let entries = items.iter().map(|item| self.plan_item(item)).collect();
        BuildPlan { entries }
    }

    /// Renderer, canonical target, and alias targets for one item.
    pub fn plan_item(&self, item: &ContentItem) -> PlanEntry {
        let renderer = renderer::select(item);
        let canonical = self.canonical_target(item, renderer);
        let aliases = item
            .front
            .aliases
            .iter()
            .map(|alias| AliasTarget {
                url: alias.clone(),
                target: self.alias_target(item, alias),
            })
            .collect();

        debug!("Planned {} => {:?}", item.path, canonical);

        PlanEntry {
            source_path: item.path.clone(),
            renderer,
            canonical,
            aliases,
        }
    }

    fn canonical_target(&self, item: &ContentItem, renderer: Renderer) -> Target {
        let Some(policy) = &self.policy else {
            return Target::Unconfigured;
        };

        // Static assets publish verbatim under the publish root: no
        // extension rewrite, no index rewrite, in either URL style.
        if renderer == Renderer::NotApplicable {
            return Target::Path(join_logical(policy.publish_root(), &item.path));
        }

        let ext = policy.extension_for(item);
        let rel = if policy.is_pretty() {
            format!("{}/index.{}", item.stem(), ext)
        } else {
            format!("{}.{}", item.stem(), ext)
        };
        Target::Path(join_logical(policy.publish_root(), &rel))
    }

    /// Aliases are logical URLs: forward-slash separated, trailing
    /// slash insignificant, always directory+index form regardless of
    /// the pretty/ugly setting.
    fn alias_target(&self, item: &ContentItem, alias: &str) -> Target {
        let Some(policy) = &self.policy else {
            return Target::Unconfigured;
        };

        let trimmed = alias.strip_suffix('/').unwrap_or(alias);
        let ext = policy.extension_for(item);
        Target::Path(join_logical(
            policy.publish_root(),
            &format!("{}/index.{}", trimmed, ext),
        ))
    }
}

/// Join a slash-separated logical path onto the publish root. The root
/// is taken verbatim; the logical path is split into components so the
/// platform separator is used from here on.
fn join_logical(root: &Path, logical: &str) -> PathBuf {
    let mut out = root.to_path_buf();
    for part in logical.split('/').filter(|p| !p.is_empty()) {
        out.push(part);
    }
    out
}
