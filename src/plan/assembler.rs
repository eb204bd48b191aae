//! Compose-plan assembly.
//!
//! Ties the whole pipeline together for one job: read the brief, resolve
//! the template, analyze the input photos, plan placements, generate cover
//! texts, and persist the finished plan. The written
//! `meta/compose_plan.json` is the sole handoff contract to the external
//! renderer and is overwritten wholesale on every run.

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::AizineError;
use crate::photo;
use crate::template::TemplatesMap;

use super::placements::{Placement, PlacementPlanner, PlannerOptions};
use super::texts::{self, PlanTexts};

/// A job addressed either by id under the jobs directory or by an
/// explicit path
#[derive(Debug, Clone)]
pub enum JobRef {
    Id(String),
    Path(PathBuf),
}

impl JobRef {
    /// Resolve to `(job_id, job_dir)` without touching the filesystem
    pub fn resolve(&self, settings: &Settings) -> (String, PathBuf) {
        match self {
            JobRef::Id(id) => (id.clone(), settings.job_dir(id)),
            JobRef::Path(path) => {
                let id = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                (id, path.clone())
            }
        }
    }
}

/// The brief a job was ordered with
#[derive(Debug, Clone)]
pub struct Brief {
    pub theme: String,
    pub category: Option<String>,
    pub pages: u32,
    pub client_name: String,
}

/// Raw on-disk brief shape: every field may sit at the top level or be
/// nested under a `brief` object, and all of them are optional
#[derive(Debug, Default, Deserialize)]
struct RawBrief {
    theme: Option<String>,
    category: Option<String>,
    pages: Option<u32>,
    client_name: Option<String>,

    #[serde(default)]
    brief: Option<RawBriefFields>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBriefFields {
    theme: Option<String>,
    category: Option<String>,
    pages: Option<u32>,
    client_name: Option<String>,
}

impl Brief {
    /// Read the brief from `<job>/meta/meta.json`, falling back to the
    /// legacy `<job>/meta/job.json`
    pub fn load(job_dir: &Path) -> crate::Result<Self> {
        let meta_path = job_dir.join("meta").join("meta.json");
        let path = if meta_path.exists() {
            meta_path
        } else {
            let legacy = job_dir.join("meta").join("job.json");
            if legacy.exists() {
                legacy
            } else {
                return Err(AizineError::BriefNotFound(meta_path));
            }
        };

        let content = std::fs::read_to_string(&path)?;
        let raw: RawBrief = serde_json::from_str(&content)?;
        let nested = raw.brief.unwrap_or_default();

        let brief = Self {
            theme: raw
                .theme
                .or(nested.theme)
                .unwrap_or_else(|| "custom".to_string()),
            category: raw.category.or(nested.category),
            pages: raw.pages.or(nested.pages).unwrap_or(16),
            client_name: raw.client_name.or(nested.client_name).unwrap_or_default(),
        };

        tracing::debug!(
            theme = %brief.theme,
            category = ?brief.category,
            pages = brief.pages,
            "brief loaded"
        );
        Ok(brief)
    }
}

/// Plan header consumed by the renderer and the orchestration layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanMeta {
    pub job_id: String,
    pub generated_at: String,
    pub theme: String,
    pub category: Option<String>,
    pub pages: u32,
    pub client_name: String,
    pub template: PathBuf,
    pub output_dir: PathBuf,
}

/// The finished compose plan for one job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposePlan {
    pub meta: PlanMeta,
    pub placements: Vec<Placement>,
    pub texts: PlanTexts,
}

impl ComposePlan {
    /// Persist as pretty JSON
    pub fn write_json(&self, path: &Path) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a previously written plan
    pub fn from_json(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Build and persist the compose plan for one job.
///
/// Hard failures: missing job directory, missing brief, unresolvable
/// template, and an input folder with zero usable photos.
pub fn build_plan(
    settings: &Settings,
    job: &JobRef,
    planner_options: PlannerOptions,
) -> crate::Result<ComposePlan> {
    let (job_id, job_dir) = job.resolve(settings);

    if !job_dir.exists() {
        return Err(AizineError::JobNotFound(job_dir));
    }

    let brief = Brief::load(&job_dir)?;

    let templates = TemplatesMap::load_or_default(settings);
    let template_path = templates
        .resolve(settings, &brief.theme, brief.category.as_deref(), brief.pages)
        .ok_or_else(|| AizineError::TemplateNotFound {
            theme: brief.theme.clone(),
            category: brief.category.clone(),
            pages: brief.pages,
        })?;

    let input_dir = job_dir.join("input");
    let photos = photo::analyze(&input_dir);
    if photos.is_empty() {
        return Err(AizineError::NoPhotos(input_dir));
    }

    let mut planner = PlacementPlanner::new(planner_options);
    let (placements, actual_pages) = planner.plan(&photos);
    let texts = texts::generate(&brief.theme, &brief.client_name);

    tracing::info!(
        job_id = %job_id,
        photos = photos.len(),
        pages = actual_pages,
        "plan built"
    );

    let plan = ComposePlan {
        meta: PlanMeta {
            job_id,
            generated_at: Local::now().to_rfc3339(),
            theme: brief.theme,
            category: brief.category,
            pages: actual_pages,
            client_name: brief.client_name,
            template: std::path::absolute(&template_path)?,
            output_dir: std::path::absolute(job_dir.join("output"))?,
        },
        placements,
        texts,
    };

    let out_path = job_dir.join("meta").join("compose_plan.json");
    plan.write_json(&out_path)?;
    tracing::info!(path = %out_path.display(), "plan saved");

    Ok(plan)
}
