//! Extract command: IDML archives into layout documents.

use std::path::PathBuf;

use anyhow::{bail, Result};
use console::style;

use crate::config::Settings;
use crate::layout;

/// Options for the extract command
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// One archive to extract
    pub idml: Option<PathBuf>,
    /// Template key for a single extraction, e.g. "lavstory/vesilnyi"
    pub template: Option<String>,
    /// Output path for a single extraction
    pub out: Option<PathBuf>,
    /// Extract every archive under the templates directory instead
    pub all: bool,
}

/// Execute the extract command
pub fn execute_extract(options: ExtractOptions, settings: &Settings) -> Result<()> {
    if options.all {
        println!(
            "{} Extracting archives under {}...",
            style("→").cyan(),
            settings.templates_dir.display()
        );

        let written = layout::extract_all(&settings.templates_dir, &settings.layouts_dir)?;
        for path in &written {
            println!("{} {}", style("✓").green(), path.display());
        }
        println!("  Archives: {}", written.len());
        return Ok(());
    }

    let (idml, template) = match (&options.idml, &options.template) {
        (Some(idml), Some(template)) => (idml, template),
        _ => bail!("you must specify --idml and --template, or --all"),
    };

    let out = options
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from("layout.json"));

    let document = layout::extract(idml, template)?;
    layout::write_document(&document, &out)?;

    println!("{} Saved {}", style("✓").green(), out.display());
    println!("  Pages: {}", document.pages.len());

    Ok(())
}
