use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    #[error("Invalid manifest '{path}': {message}")]
    InvalidManifest { path: PathBuf, message: String },

    #[error("Invalid image item at position {position}: {message}")]
    InvalidItem { position: usize, message: String },

    #[error("Duplicate image id '{id}'")]
    DuplicateId { id: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Failed to scan folder '{path}': {message}")]
    FolderScan { path: PathBuf, message: String },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

impl ViewerError {
    /// Returns true if the user can fix the input and retry
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ViewerError::ManifestNotFound { .. }
                | ViewerError::NotADirectory { .. }
                | ViewerError::FolderScan { .. }
                | ViewerError::IoError { .. }
        )
    }

    /// Returns a user-friendly error message with recovery suggestions
    pub fn user_message(&self) -> String {
        let suggestion = match self {
            ViewerError::ManifestNotFound { .. } => {
                "Check the manifest path or open an image folder instead."
            }
            ViewerError::InvalidManifest { .. } | ViewerError::JsonError { .. } => {
                "The manifest must be JSON with an \"items\" array of {\"url\", \"height\"} entries."
            }
            ViewerError::InvalidItem { .. } => "Every image item needs a non-empty url.",
            ViewerError::DuplicateId { .. } => "Image ids must be unique within a collection.",
            ViewerError::NotADirectory { .. } | ViewerError::FolderScan { .. } => {
                "Pick a folder that contains jpg, png or webp images."
            }
            ViewerError::SettingsError { .. } => "Settings were reset to their defaults.",
            ViewerError::IoError { .. } => "File system error occurred. Check permissions.",
        };

        format!("{}\n\n{}", self, suggestion)
    }

    /// Returns an error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ViewerError::ManifestNotFound { .. } => "MANIFEST_NOT_FOUND",
            ViewerError::InvalidManifest { .. } => "INVALID_MANIFEST",
            ViewerError::InvalidItem { .. } => "INVALID_ITEM",
            ViewerError::DuplicateId { .. } => "DUPLICATE_ID",
            ViewerError::NotADirectory { .. } => "NOT_A_DIRECTORY",
            ViewerError::FolderScan { .. } => "FOLDER_SCAN_ERROR",
            ViewerError::SettingsError { .. } => "SETTINGS_ERROR",
            ViewerError::IoError { .. } => "IO_ERROR",
            ViewerError::JsonError { .. } => "JSON_ERROR",
        }
    }

    pub fn log(&self) {
        tracing::error!(code = self.error_code(), "{}", self);
    }
}
