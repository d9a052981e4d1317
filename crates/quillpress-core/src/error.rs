use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuillpressError {
    #[error("Content directory does not exist: {path}")]
    ContentDirNotFound { path: PathBuf },

    #[error("No front matter block found in {path}")]
    FrontMatterMissing { path: PathBuf },

    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Missing title in {path} - posts are sorted by title within each category")]
    MissingTitle { path: PathBuf },

    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuillpressError>;

impl QuillpressError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ContentDirNotFound { .. } => 2,
            Self::FrontMatterMissing { .. } | Self::FrontMatter { .. } => 3,
            Self::MissingTitle { .. } => 4,
            Self::ConfigParse { .. } => 5,
            _ => 1,
        }
    }
}
