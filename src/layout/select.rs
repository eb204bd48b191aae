//! Layout page selection and slot filling.
//!
//! Works on extracted layout documents: pick pages for a target page and
//! photo budget, then map photos onto photo slots in order. The fill is a
//! greedy forward walk with no backtracking; a theme whose document lacks
//! enough interior pages simply under-fills the target, and callers must
//! not assume the result reaches `target_pages`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AizineError;

use super::extract::{LayoutDocument, LayoutPage, Slot};

/// Load every extracted layout document, keyed by file stem.
///
/// BTreeMap keeps iteration order stable across filesystems.
pub fn load_documents(layouts_dir: &Path) -> crate::Result<BTreeMap<String, LayoutDocument>> {
    let mut documents = BTreeMap::new();

    if !layouts_dir.exists() {
        return Ok(documents);
    }

    for entry in std::fs::read_dir(layouts_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }

        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let content = std::fs::read_to_string(&path)?;
        let document: LayoutDocument = serde_json::from_str(&content)?;
        documents.insert(stem, document);
    }

    Ok(documents)
}

/// Choose pages from the first layout document matching `theme`.
///
/// The first cover-typed page always leads and its photo slots count
/// against the budget. Remaining pages are appended in document order,
/// skipping further covers, until `target_pages` pages are chosen or the
/// photo budget is exhausted.
pub fn choose_pages(
    layouts_dir: &Path,
    theme: &str,
    target_pages: usize,
    photo_count: usize,
) -> crate::Result<Vec<LayoutPage>> {
    let documents = load_documents(layouts_dir)?;

    let document = documents
        .iter()
        .find(|(name, _)| name.starts_with(theme))
        .map(|(_, doc)| doc)
        .ok_or_else(|| AizineError::NoLayouts(theme.to_string()))?;

    tracing::debug!(
        theme,
        template = %document.template,
        pages = document.pages.len(),
        "choosing layout pages"
    );

    let mut chosen: Vec<LayoutPage> = Vec::new();
    let mut remaining_photos = photo_count as i64;

    if let Some(cover) = document
        .pages
        .iter()
        .find(|p| p.page_type.to_lowercase().contains("cover"))
    {
        remaining_photos -= cover.photo_slots.len() as i64;
        chosen.push(cover.clone());
    }

    for page in &document.pages {
        if chosen.len() >= target_pages {
            break;
        }

        // never a second cover
        if page.page_type.to_lowercase().contains("cover") {
            continue;
        }

        remaining_photos -= page.photo_slots.len() as i64;
        chosen.push(page.clone());

        if remaining_photos <= 0 {
            break;
        }
    }

    tracing::debug!(chosen = chosen.len(), remaining_photos, "selection done");
    Ok(chosen)
}

/// One photo mapped into one slot of a chosen page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotFill {
    pub file: PathBuf,
    pub slot: Slot,
}

/// Fill plan for one chosen page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePlan {
    pub page_id: Option<String>,

    #[serde(rename = "type")]
    pub page_type: String,

    pub images: Vec<SlotFill>,

    pub texts: Vec<Slot>,
}

/// Assign photos to the chosen pages' slots, strictly in input order.
///
/// One photo per photo slot; when photos run out the remaining slots stay
/// unfilled rather than erroring. Text slots are carried through as-is.
pub fn build_page_plan(pages: &[LayoutPage], photos: &[PathBuf]) -> Vec<PagePlan> {
    let mut plan = Vec::new();
    let mut photo_index = 0;

    for page in pages {
        let mut images = Vec::new();

        for slot in &page.photo_slots {
            if photo_index >= photos.len() {
                break;
            }
            images.push(SlotFill {
                file: photos[photo_index].clone(),
                slot: slot.clone(),
            });
            photo_index += 1;
        }

        plan.push(PagePlan {
            page_id: page.page_id.clone(),
            page_type: page.page_type.clone(),
            images,
            texts: page.text_slots.clone(),
        });
    }

    plan
}
