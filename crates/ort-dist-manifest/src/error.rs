//! Error types for manifest generation.

use thiserror::Error;

/// Errors that can occur while inspecting archives and building manifests.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Archive contains none of the recognized library directories.
    #[error("No library directories found")]
    NoLibraryDirs,

    /// Library directories exist but hold no library files.
    #[error("No library files found")]
    NoLibraryFiles,

    /// Library files exist but none is a main ONNX Runtime library.
    #[error("No ONNX Runtime library found")]
    NoMainLibrary,
}

impl ManifestError {
    /// Whether this error describes archive contents rather than a failed
    /// read or write.
    ///
    /// Classification errors mean the archive was opened and listed fine
    /// but its layout is not a recognizable ONNX Runtime build. Callers
    /// typically report these as warnings and keep going.
    #[must_use]
    pub fn is_classification(&self) -> bool {
        matches!(
            self,
            Self::NoLibraryDirs | Self::NoLibraryFiles | Self::NoMainLibrary
        )
    }
}
