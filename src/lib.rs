#![forbid(unsafe_code)]

//! # Aizine
//!
//! Photo-magazine planning toolkit: turns a folder of photos and a small
//! brief into a machine-readable compose plan for an external
//! page-composition renderer, and extracts IDML template archives into
//! normalized JSON layout documents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aizine::{build_plan, JobRef, PlannerOptions, Settings};
//!
//! fn main() -> aizine::Result<()> {
//!     let settings = Settings::load_or_default(".");
//!     let job = JobRef::Id("job42".to_string());
//!
//!     let plan = build_plan(&settings, &job, PlannerOptions::default())?;
//!     println!("{} placements, {} pages", plan.placements.len(), plan.meta.pages);
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod layout;
pub mod output;
pub mod photo;
pub mod plan;
pub mod template;

// Re-exports
pub use config::Settings;
pub use error::{AizineError, Result};
pub use layout::{
    build_page_plan, choose_pages, extract, extract_all, Bounds, LayoutDocument, LayoutPage,
    PagePlan, Slot,
};
pub use output::{package, verify_output, write_result, JobResult};
pub use photo::{analyze, classify, Orientation, Photo};
pub use plan::{
    build_plan, estimate, Brief, ComposePlan, Fit, JobRef, Placement, PlacementPlanner, PlanMeta,
    PlanTexts, PlannerOptions,
};
pub use template::{Candidate, TemplatesMap, ThemeTemplates};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
