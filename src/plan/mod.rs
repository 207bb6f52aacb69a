//! Target-resolution planning: one pass over the content items,
//! producing renderer and output-path decisions per item.

mod planner;
mod policy;
mod types;

pub use planner::PathPlanner;
pub use policy::TargetPolicy;
pub use types::{AliasTarget, BuildPlan, PlanEntry, Target};
