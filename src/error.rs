use std::path::PathBuf;
use thiserror::Error;

#[allow(dead_code)]
#[derive(Error, Debug)]
pub enum SiteplanError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid default extension '{0}'")]
    InvalidExtension(String),

    #[error("Publish directory must not be empty")]
    EmptyPublishDir,
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Content directory '{0}' does not exist")]
    MissingContentDir(PathBuf),

    #[error("Failed to build ignore pattern '{pattern}': {source}")]
    IgnorePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed front matter in '{path}': {source}")]
    FrontMatter {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write plan report: {0}")]
    WriteReport(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
