//! Build command: compose plan for one job.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Settings;
use crate::plan::{build_plan, JobRef, PlannerOptions};

/// Options for the build command
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Job id under the configured jobs directory
    pub job_id: Option<String>,
    /// Explicit job directory, overrides the jobs-dir lookup
    pub job_path: Option<PathBuf>,
    /// Fixed planner seed for reproducible runs
    pub seed: Option<u64>,
    /// Keep interior photos in scan order instead of shuffling
    pub no_shuffle: bool,
    /// Print the finished plan to stdout
    pub print_plan: bool,
}

/// Execute the build command
pub fn execute_build(options: BuildOptions, settings: &Settings) -> Result<()> {
    let job = match (&options.job_id, &options.job_path) {
        (_, Some(path)) => JobRef::Path(path.clone()),
        (Some(id), None) => JobRef::Id(id.clone()),
        (None, None) => bail!("you must specify --job-id or --job-path"),
    };

    println!("{} Building compose plan...", style("→").cyan());

    let planner_options = PlannerOptions {
        seed: options.seed,
        shuffle_interior: !options.no_shuffle,
    };
    let plan = build_plan(settings, &job, planner_options)?;

    let (_, job_dir) = job.resolve(settings);
    println!(
        "{} Plan saved to {}",
        style("✓").green(),
        job_dir.join("meta").join("compose_plan.json").display()
    );
    println!("  Template: {}", plan.meta.template.display());
    println!("  Placements: {}", plan.placements.len());
    println!("  Pages: {}", plan.meta.pages);

    if options.print_plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    }

    Ok(())
}
