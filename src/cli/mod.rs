pub mod plan;
pub mod schema;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "siteplan")]
#[command(
    author,
    version,
    about = "Target-resolution planner for static-site builds"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve renderers and output targets and print the plan
    Plan(PlanArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct PlanArgs {
    /// Path to config file
    #[arg(short, long, default_value = "siteplan.yaml")]
    pub config: PathBuf,

    /// Override content directory
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Override publish directory
    #[arg(long)]
    pub publish_dir: Option<PathBuf>,

    /// Force flat <name>.<ext> output naming
    #[arg(long)]
    pub ugly_urls: bool,

    /// Include draft content
    #[arg(long)]
    pub drafts: bool,

    /// Also write a JSON plan report to this path
    #[arg(long)]
    pub json: Option<PathBuf>,
}
