use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Directory walked for content files
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Root prepended to every planned output path; may be relative,
    /// absolute, or walk upward via `..`
    #[serde(default = "default_publish_dir")]
    pub publish_dir: PathBuf,

    /// Flat `<name>.<ext>` output instead of `<name>/index.<ext>`
    #[serde(default)]
    pub ugly_urls: bool,

    /// Output extension for items that do not declare their own
    #[serde(default = "default_extension")]
    pub default_extension: String,

    /// Language of the current build
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Whether content is split per language
    #[serde(default)]
    pub multilingual: bool,

    /// Include content marked draft
    #[serde(default)]
    pub build_drafts: bool,

    /// Glob patterns excluded from the content walk
    #[serde(default)]
    pub ignore_files: Vec<String>,
}
