//! Job output handling: verification, packaging, and the result log.
//!
//! The external renderer consumes the compose plan and is expected to
//! leave `<job>/output/final.pdf`. Everything here is thin I/O around
//! that contract.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::AizineError;

const FINAL_PDF: &str = "final.pdf";
const DELIVERABLE_ZIP: &str = "magazine.zip";

/// Check that the renderer produced its PDF; returns its path
pub fn verify_output(job_dir: &Path) -> crate::Result<PathBuf> {
    let pdf = job_dir.join("output").join(FINAL_PDF);
    if !pdf.exists() {
        return Err(AizineError::OutputMissing(pdf));
    }
    tracing::debug!(pdf = %pdf.display(), "renderer output verified");
    Ok(pdf)
}

/// Package the final PDF into `<job>/output/magazine.zip`
pub fn package(job_dir: &Path) -> crate::Result<PathBuf> {
    let pdf = verify_output(job_dir)?;
    let zip_path = job_dir.join("output").join(DELIVERABLE_ZIP);

    let file = File::create(&zip_path)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file(FINAL_PDF, options)?;
    let mut pdf_file = File::open(&pdf)?;
    std::io::copy(&mut pdf_file, &mut writer)?;
    writer.finish()?;

    tracing::info!(zip = %zip_path.display(), "deliverable packaged");
    Ok(zip_path)
}

/// Per-job result record for the orchestration layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResult {
    pub job_id: String,
    pub pdf: PathBuf,
    pub zip: PathBuf,
    pub seconds: f64,
}

/// Persist `<job>/result.json` describing a finished run
pub fn write_result(job_dir: &Path, result: &JobResult) -> crate::Result<PathBuf> {
    let out_path = job_dir.join("result.json");
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&out_path, json)?;
    tracing::debug!(path = %out_path.display(), "result log saved");
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_missing_pdf_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = verify_output(dir.path());
        assert!(matches!(result, Err(AizineError::OutputMissing(_))));
    }

    #[test]
    fn test_package_includes_the_pdf() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("output");
        std::fs::create_dir_all(&out).unwrap();
        std::fs::write(out.join(FINAL_PDF), b"%PDF-1.4 fake").unwrap();

        let zip_path = package(dir.path()).expect("package");
        assert!(zip_path.exists());

        let file = File::open(&zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert_eq!(archive.len(), 1);
        assert_eq!(archive.by_index(0).unwrap().name(), FINAL_PDF);
    }

    #[test]
    fn test_result_log_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = JobResult {
            job_id: "job1".to_string(),
            pdf: PathBuf::from("/out/final.pdf"),
            zip: PathBuf::from("/out/magazine.zip"),
            seconds: 12.34,
        };

        let path = write_result(dir.path(), &result).expect("write");
        let content = std::fs::read_to_string(path).unwrap();
        let parsed: JobResult = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.job_id, "job1");
        assert_eq!(parsed.seconds, 12.34);
    }
}
