mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;
use tracing::debug;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            content_dir: default_content_dir(),
            publish_dir: default_publish_dir(),
            ugly_urls: false,
            default_extension: default_extension(),
            default_language: default_language(),
            multilingual: false,
            build_drafts: false,
            ignore_files: Vec::new(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from a YAML file, or fall back to defaults when the
    /// file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config file at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The default extension is appended after a dot; it must not
        // carry its own dot or separator
        if self.default_extension.is_empty()
            || self.default_extension.starts_with('.')
            || self.default_extension.contains('/')
        {
            return Err(ConfigError::InvalidExtension(
                self.default_extension.clone(),
            ));
        }

        if self.publish_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyPublishDir);
        }

        Ok(())
    }
}
