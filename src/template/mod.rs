//! Template resolution.
//!
//! A theme maps either to one default template or to a list of candidates
//! narrowed by category and page count. The mapping file is optional; a
//! built-in default keeps the resolver answering when it is absent.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::Settings;

/// One candidate template within a theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub pages: u32,
    pub path: String,
}

/// How a theme resolves: a single default path, or a candidate list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeTemplates {
    Default { default: String },
    Candidates(Vec<Candidate>),
}

/// The full theme -> template mapping
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplatesMap {
    pub themes: HashMap<String, ThemeTemplates>,
}

impl TemplatesMap {
    /// Load the mapping file, or fall back to the built-in default.
    ///
    /// Absence of the file never fails; it only narrows what the resolver
    /// can answer.
    pub fn load_or_default(settings: &Settings) -> Self {
        let path = settings.templates_map_path();
        tracing::debug!(path = %path.display(), "loading templates map");

        match Self::load(&path) {
            Ok(map) => {
                tracing::debug!(themes = ?map.themes.keys().collect::<Vec<_>>(), "templates map loaded");
                map
            }
            Err(err) => {
                tracing::debug!(error = %err, "templates_map.json not usable, using default");
                Self::builtin_default()
            }
        }
    }

    /// Load a mapping from an explicit file
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Hard-coded fallback used when no mapping file exists
    pub fn builtin_default() -> Self {
        let mut themes = HashMap::new();
        themes.insert(
            "custom".to_string(),
            ThemeTemplates::Default {
                default: "data/templates/adult18/adult18.indd".to_string(),
            },
        );
        Self { themes }
    }

    /// Resolve a template path for the requested brief.
    ///
    /// Precedence, first match wins: theme default; exact (category, pages)
    /// candidate; pages-only candidate; first candidate; otherwise None.
    /// Relative paths resolve against the configured base directory.
    pub fn resolve(
        &self,
        settings: &Settings,
        theme: &str,
        category: Option<&str>,
        pages: u32,
    ) -> Option<PathBuf> {
        tracing::debug!(theme, ?category, pages, "resolving template");

        let block = match self.themes.get(theme) {
            Some(block) => block,
            None => {
                tracing::debug!(theme, "theme not present in templates map");
                return None;
            }
        };

        let candidates = match block {
            ThemeTemplates::Default { default } => {
                return Some(settings.base_dir.join(default));
            }
            ThemeTemplates::Candidates(list) => list,
        };

        if let Some(category) = category {
            if let Some(item) = candidates
                .iter()
                .find(|c| c.name == category && c.pages == pages)
            {
                tracing::debug!(path = %item.path, "matched exact category-pages template");
                return Some(settings.base_dir.join(&item.path));
            }
        }

        if let Some(item) = candidates.iter().find(|c| c.pages == pages) {
            tracing::debug!(path = %item.path, "matched pages-only template");
            return Some(settings.base_dir.join(&item.path));
        }

        if let Some(item) = candidates.first() {
            tracing::debug!(path = %item.path, "falling back to first template");
            return Some(settings.base_dir.join(&item.path));
        }

        tracing::debug!(theme, "no matching template found");
        None
    }
}
