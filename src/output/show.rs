//! Diagnostic plan printer.
//!
//! Formats a BuildPlan for inspection; performs no path computation of
//! its own. Output is stable across runs and platforms: entries appear
//! in plan order and separators are normalized to `/` here, at the
//! formatting boundary only.

use crate::plan::{BuildPlan, Target};
use std::io::{self, Write};
use std::path::Path;

/// Render the human-readable plan, one block per entry.
pub fn render_plan(plan: &BuildPlan) -> String {
    if plan.is_empty() {
        return "No source files provided.\n".to_string();
    }

    let mut out = String::new();
    for entry in plan.iter() {
        out.push_str(&format!(
            "{} (renderer: {})\n",
            entry.source_path, entry.renderer
        ));
        out.push_str(&format!(
            " canonical => {}\n",
            display_target(&entry.canonical)
        ));
        for alias in &entry.aliases {
            out.push_str(&format!(
                " {} => {}\n",
                alias.url,
                display_target(&alias.target)
            ));
        }
        out.push('\n');
    }
    out
}

/// Write the rendered plan to a writer.
pub fn write_plan<W: Write>(out: &mut W, plan: &BuildPlan) -> io::Result<()> {
    out.write_all(render_plan(plan).as_bytes())
}

/// The sentinel's textual form lives here and nowhere else.
fn display_target(target: &Target) -> String {
    match target {
        Target::Path(path) => slash_display(path),
        Target::Unconfigured => "!no target specified!".to_string(),
    }
}

/// Platform separator differences are cosmetic; normalize for display.
pub(crate) fn slash_display(path: &Path) -> String {
    let s = path.to_string_lossy();
    if std::path::MAIN_SEPARATOR == '/' {
        s.into_owned()
    } else {
        s.replace(std::path::MAIN_SEPARATOR, "/")
    }
}
