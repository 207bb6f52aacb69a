mod report;
mod show;

pub use report::{write_plan_report, PlanReport};
pub use show::{render_plan, write_plan};
