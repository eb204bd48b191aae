//! Compose-plan building: page counting, placement planning, cover texts,
//! and final plan assembly.

pub mod assembler;
pub mod estimator;
pub mod placements;
pub mod texts;

pub use assembler::{build_plan, Brief, ComposePlan, JobRef, PlanMeta};
pub use estimator::estimate;
pub use placements::{Fit, Placement, PlacementPlanner, PlannerOptions};
pub use texts::{generate as generate_texts, PlanTexts};
