//! Package command: verify renderer output and zip the deliverable.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Result};
use console::style;

use crate::config::Settings;
use crate::output::{self, JobResult};
use crate::plan::JobRef;

/// Options for the package command
#[derive(Debug, Clone, Default)]
pub struct PackageOptions {
    pub job_id: Option<String>,
    pub job_path: Option<PathBuf>,
}

/// Execute the package command
pub fn execute_package(options: PackageOptions, settings: &Settings) -> Result<()> {
    let job = match (&options.job_id, &options.job_path) {
        (_, Some(path)) => JobRef::Path(path.clone()),
        (Some(id), None) => JobRef::Id(id.clone()),
        (None, None) => bail!("you must specify --job-id or --job-path"),
    };
    let (job_id, job_dir) = job.resolve(settings);

    let started = Instant::now();
    let pdf = output::verify_output(&job_dir)?;
    let zip = output::package(&job_dir)?;

    let result = JobResult {
        job_id,
        pdf: pdf.clone(),
        zip: zip.clone(),
        seconds: started.elapsed().as_secs_f64(),
    };
    output::write_result(&job_dir, &result)?;

    println!("{} PDF: {}", style("✓").green(), pdf.display());
    println!("{} ZIP: {}", style("✓").green(), zip.display());

    Ok(())
}
