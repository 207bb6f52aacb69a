//! Content sources: the ordered collection of items fed to the planner.
//!
//! The filesystem source walks the configured content directory, parses
//! front matter, and applies draft/language/ignore filtering so the
//! planner only ever sees items of the current build.

pub mod frontmatter;
mod files;
mod types;

pub use files::load_content;
pub use types::{ContentItem, FrontMatter};
