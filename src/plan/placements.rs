//! Placement planning: photos into labeled template slots.
//!
//! The output order is the renderer contract: cover first, interior pages
//! in assignment order, back cover last. Labels are keyed verbatim by the
//! renderer against frame names in the template, so their format is frozen.
//!
//! Cover and back cover prefer vertical photos, picked uniformly at random
//! from the candidates; interior photos are shuffled for layout variety.
//! All randomness flows through one injected generator so a seeded planner
//! is fully deterministic.

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::photo::{Orientation, Photo};

use super::estimator;

/// Frame label of the front-cover slot
pub const COVER_LABEL: &str = "COVER_IMAGE";

/// Frame label of the back-cover slot
pub const BACK_LABEL: &str = "BACK_IMAGE";

/// How a photo fills its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Fill,
    Proportional,
}

/// One photo assigned to one labeled slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Placement {
    pub label: String,

    #[serde(rename = "photo")]
    pub photo_path: PathBuf,

    pub filename: String,

    pub orientation: Orientation,

    pub fit: Fit,
}

/// Planner configuration
#[derive(Debug, Clone, Copy)]
pub struct PlannerOptions {
    /// Fixed seed for reproducible runs; None seeds from OS entropy
    pub seed: Option<u64>,
    /// Shuffle interior photos for layout variety
    pub shuffle_interior: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            seed: None,
            shuffle_interior: true,
        }
    }
}

/// Assigns photos to cover, interior, and back-cover slots
#[derive(Debug)]
pub struct PlacementPlanner {
    rng: StdRng,
    shuffle_interior: bool,
}

impl PlacementPlanner {
    pub fn new(options: PlannerOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            shuffle_interior: options.shuffle_interior,
        }
    }

    /// Plan placements for the given photos.
    ///
    /// Returns the placement list and the actual page count, which is
    /// always derived from the photo count; the page count requested in
    /// the brief is advisory only. For non-empty input every photo lands
    /// in exactly one placement.
    pub fn plan(&mut self, photos: &[Photo]) -> (Vec<Placement>, u32) {
        let mut placements = Vec::new();
        if photos.is_empty() {
            return (placements, estimator::estimate(0));
        }

        tracing::debug!(
            count = photos.len(),
            shuffle = self.shuffle_interior,
            "generating placements"
        );

        // Cover: a random vertical photo, or the first photo
        let vertical: Vec<&Photo> = photos
            .iter()
            .filter(|p| p.orientation == Orientation::Vertical)
            .collect();
        let cover = match vertical.choose(&mut self.rng) {
            Some(photo) => *photo,
            None => &photos[0],
        };
        placements.push(make_placement(COVER_LABEL.to_string(), cover));
        tracing::debug!(label = COVER_LABEL, file = %cover.filename, "placed");

        // Back cover: a random vertical among the rest, else the last one
        let remaining: Vec<&Photo> = photos
            .iter()
            .filter(|p| p.filename != cover.filename)
            .collect();
        let back_candidates: Vec<&Photo> = remaining
            .iter()
            .copied()
            .filter(|p| p.orientation == Orientation::Vertical)
            .collect();
        let back = match back_candidates.choose(&mut self.rng) {
            Some(photo) => Some(*photo),
            None => remaining.last().copied(),
        };

        // Interior: everything not used on a cover, one photo per page
        let mut interior: Vec<&Photo> = remaining
            .iter()
            .copied()
            .filter(|p| back.map_or(true, |b| p.filename != b.filename))
            .collect();

        if self.shuffle_interior && interior.len() > 1 {
            interior.shuffle(&mut self.rng);
            tracing::debug!(count = interior.len(), "shuffled interior photos");
        }

        for (idx, photo) in interior.iter().enumerate() {
            let label = format!("PAGE_{:02}_IMG_01", idx + 1);
            tracing::debug!(label = %label, file = %photo.filename, "placed");
            placements.push(make_placement(label, photo));
        }

        if let Some(photo) = back {
            placements.push(make_placement(BACK_LABEL.to_string(), photo));
            tracing::debug!(label = BACK_LABEL, file = %photo.filename, "placed");
        }

        let actual_pages = estimator::estimate(photos.len());
        tracing::debug!(
            placements = placements.len(),
            pages = actual_pages,
            "plan complete"
        );
        (placements, actual_pages)
    }
}

fn make_placement(label: String, photo: &Photo) -> Placement {
    Placement {
        label,
        photo_path: photo.path.clone(),
        filename: photo.filename.clone(),
        orientation: photo.orientation,
        fit: Fit::Fill,
    }
}
