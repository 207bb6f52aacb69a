//! CLI handler for the `plan` subcommand
//!
//! Loads config and content, resolves every item's renderer and output
//! targets, and prints the plan for inspection. Nothing is rendered or
//! written to the publish directory.

use crate::cli::PlanArgs;
use crate::config::Config;
use crate::output::{write_plan, write_plan_report};
use crate::plan::{PathPlanner, TargetPolicy};
use crate::source;
use std::io;
use tracing::info;

pub fn execute(args: PlanArgs) -> anyhow::Result<()> {
    info!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(dir) = args.content_dir {
        config.content_dir = dir;
    }
    if let Some(dir) = args.publish_dir {
        config.publish_dir = dir;
    }
    if args.ugly_urls {
        config.ugly_urls = true;
    }
    if args.drafts {
        config.build_drafts = true;
    }

    config.validate()?;

    let items = source::load_content(&config)?;
    info!("Planning {} content files", items.len());

    let policy = TargetPolicy::from_config(&config);
    let planner = PathPlanner::new(policy.clone());
    let plan = planner.plan(&items);

    let mut stdout = io::stdout().lock();
    write_plan(&mut stdout, &plan)?;

    if let Some(path) = args.json {
        write_plan_report(&path, &plan, Some(&policy))?;
        info!("Wrote plan report to {:?}", path);
    }

    Ok(())
}
