//! Layouts command: preview page selection for a theme and budget.

use anyhow::Result;
use console::style;

use crate::config::Settings;
use crate::layout;

/// Options for the layouts command
#[derive(Debug, Clone)]
pub struct LayoutsOptions {
    pub theme: String,
    /// Target page count
    pub pages: usize,
    /// Photo budget
    pub photos: usize,
    /// Output as JSON instead of a summary table
    pub json: bool,
}

/// Execute the layouts command
pub fn execute_layouts(options: LayoutsOptions, settings: &Settings) -> Result<()> {
    let chosen = layout::choose_pages(
        &settings.layouts_dir,
        &options.theme,
        options.pages,
        options.photos,
    )?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&chosen)?);
        return Ok(());
    }

    println!(
        "{} Selected {} page(s) for theme '{}'",
        style("✓").green(),
        chosen.len(),
        options.theme
    );
    for page in &chosen {
        println!(
            "  {:10} {:10} photo_slots={} text_slots={}",
            page.page_id.as_deref().unwrap_or("-"),
            page.page_type,
            page.photo_slots.len(),
            page.text_slots.len()
        );
    }

    let slots: usize = chosen.iter().map(|p| p.photo_slots.len()).sum();
    println!("  Photo slots: {} of {} photos", slots, options.photos);

    Ok(())
}
