use crate::error::OutputError;
use crate::plan::{BuildPlan, PlanEntry, TargetPolicy};
use chrono::Utc;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::show::slash_display;

/// Machine-readable plan report, written next to the printed plan when
/// requested.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub timestamp: String,
    pub publish_dir: Option<String>,
    pub language: Option<String>,
    pub multilingual: bool,
    pub total: usize,
    pub by_renderer: HashMap<String, usize>,
    pub alias_count: usize,
    pub unconfigured: bool,
    pub entries: &'a [PlanEntry],
}

pub fn write_plan_report(
    path: &Path,
    plan: &BuildPlan,
    policy: Option<&TargetPolicy>,
) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
        }
    }

    let report = build_report(plan, policy);
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json).map_err(OutputError::WriteReport)?;

    Ok(())
}

fn build_report<'a>(plan: &'a BuildPlan, policy: Option<&TargetPolicy>) -> PlanReport<'a> {
    let mut by_renderer = HashMap::new();
    let mut alias_count = 0;
    for entry in plan.iter() {
        *by_renderer.entry(entry.renderer.to_string()).or_insert(0) += 1;
        alias_count += entry.aliases.len();
    }

    let unconfigured = plan.iter().any(|e| e.canonical.is_unconfigured());

    PlanReport {
        timestamp: Utc::now().to_rfc3339(),
        publish_dir: policy.map(|p| slash_display(p.publish_root())),
        language: policy.map(|p| p.language().to_string()),
        multilingual: policy.is_some_and(|p| p.is_multilingual()),
        total: plan.len(),
        by_renderer,
        alias_count,
        unconfigured,
        entries: &plan.entries,
    }
}
