//! Error types for the aizine core.
//!
//! The taxonomy is deliberately small: hard failures (missing job, missing
//! brief, unresolved template, zero photos, no layouts) stop a run, while
//! degraded reads (an unreadable photo, a malformed geometry string) are
//! handled locally by the component that hit them and never reach here.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AizineError>;

#[derive(Debug, Error)]
pub enum AizineError {
    /// Job directory does not exist
    #[error("job not found: {0}")]
    JobNotFound(PathBuf),

    /// Neither meta.json nor the legacy job.json exists for the job
    #[error("brief not found: {0}")]
    BriefNotFound(PathBuf),

    /// Template resolution came up empty for the requested brief
    #[error("template not found for theme={theme}, category={category:?}, pages={pages}")]
    TemplateNotFound {
        theme: String,
        category: Option<String>,
        pages: u32,
    },

    /// Input directory scanned clean but produced zero usable photos
    #[error("no photos found in input folder: {0}")]
    NoPhotos(PathBuf),

    /// No extracted layout document matches the requested theme
    #[error("no layouts found for theme '{0}'")]
    NoLayouts(String),

    /// The renderer did not leave the expected output file
    #[error("output not found: {0}")]
    OutputMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("malformed spread XML: {0}")]
    Xml(#[from] roxmltree::Error),
}
