//! Photo discovery and orientation classification.
//!
//! Scans a job's input directory for raster files and classifies each one
//! by aspect ratio. Probing reads image headers only; a photo whose
//! dimensions cannot be read is kept with an unknown orientation rather
//! than dropped, since it still has to occupy a slot in the plan.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

/// Raster extensions accepted into a job (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tif", "tiff"];

/// Aspect-ratio orientation of one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
    Square,
    Unknown,
}

/// One discovered photo; immutable once analyzed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub path: PathBuf,
    pub filename: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    pub orientation: Orientation,
}

/// Classify orientation from pixel dimensions.
///
/// `ratio = height / width`: above 1.2 is vertical, below 0.8 horizontal,
/// anything between is treated as square.
pub fn classify(width: u32, height: u32) -> Orientation {
    let ratio = if width == 0 {
        1.0
    } else {
        height as f64 / width as f64
    };

    if ratio > 1.2 {
        Orientation::Vertical
    } else if ratio < 0.8 {
        Orientation::Horizontal
    } else {
        Orientation::Square
    }
}

/// Scan `input_dir` and return analyzed photos sorted by filename.
///
/// A missing directory yields an empty list; the caller decides whether
/// that is fatal.
pub fn analyze(input_dir: &Path) -> Vec<Photo> {
    let mut photos = Vec::new();

    if !input_dir.exists() {
        tracing::debug!(dir = %input_dir.display(), "input photo directory not found");
        return photos;
    }

    tracing::debug!(dir = %input_dir.display(), "scanning photos");

    for entry in WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || !is_supported(path) {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();

        let (width, height, orientation) = match image::image_dimensions(path) {
            Ok((w, h)) => (Some(w), Some(h), classify(w, h)),
            Err(err) => {
                tracing::warn!(file = %filename, error = %err, "could not read dimensions");
                (None, None, Orientation::Unknown)
            }
        };

        photos.push(Photo {
            path: path.to_path_buf(),
            filename,
            width,
            height,
            orientation,
        });
    }

    tracing::debug!(count = photos.len(), "photos found");
    photos
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}
