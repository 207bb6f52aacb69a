use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

pub fn default_publish_dir() -> PathBuf {
    PathBuf::from("public")
}

pub fn default_extension() -> String {
    "html".to_string()
}

pub fn default_language() -> String {
    "en".to_string()
}
