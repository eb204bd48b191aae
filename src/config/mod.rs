//! Settings loading and defaults.
//!
//! All filesystem roots live in one `Settings` value constructed at process
//! start and passed by reference into every component. Nothing in the
//! library reads environment state on its own.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Process-wide filesystem layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Project root; relative template paths resolve against this
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Per-job directory trees live here, one subdirectory per job id
    #[serde(default = "default_jobs_dir")]
    pub jobs_dir: PathBuf,

    /// Source template archives (IDML), organized as `<theme>/<category>/`
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Extracted layout documents, one JSON file per template archive
    #[serde(default = "default_layouts_dir")]
    pub layouts_dir: PathBuf,

    /// Mapping files, notably templates_map.json
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_base(default_base_dir())
    }
}

impl Settings {
    /// Conventional directory tree rooted at `base`
    pub fn from_base<P: Into<PathBuf>>(base: P) -> Self {
        let base_dir = base.into();
        Self {
            jobs_dir: base_dir.join("jobs"),
            templates_dir: base_dir.join("data").join("templates"),
            layouts_dir: base_dir.join("data").join("layouts"),
            config_dir: base_dir.join("data").join("config"),
            base_dir,
        }
    }

    /// Load settings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load from `aizine.config.json` under `base`, or fall back to the
    /// conventional tree when no settings file exists
    pub fn load_or_default<P: Into<PathBuf>>(base: P) -> Self {
        let base_dir: PathBuf = base.into();
        let path = base_dir.join("aizine.config.json");
        Self::load(&path).unwrap_or_else(|_| Self::from_base(base_dir))
    }

    /// Save settings to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to the theme -> template mapping file
    pub fn templates_map_path(&self) -> PathBuf {
        self.config_dir.join("templates_map.json")
    }

    /// Directory tree for one job id
    pub fn job_dir(&self, job_id: &str) -> PathBuf {
        self.jobs_dir.join(job_id)
    }
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_jobs_dir() -> PathBuf {
    default_base_dir().join("jobs")
}

fn default_templates_dir() -> PathBuf {
    default_base_dir().join("data").join("templates")
}

fn default_layouts_dir() -> PathBuf {
    default_base_dir().join("data").join("layouts")
}

fn default_config_dir() -> PathBuf {
    default_base_dir().join("data").join("config")
}
