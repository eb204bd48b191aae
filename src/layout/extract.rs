//! Layout extraction from IDML template archives.
//!
//! An IDML file is a zip container holding one XML document per spread.
//! Extraction walks every `Spreads/Spread*.xml` entry, collects page
//! elements with their photo and text frames, and writes the result as one
//! normalized JSON layout document per archive.
//!
//! Authoring-tool exports are messy: a frame without usable geometry is
//! skipped, an unparseable geometry string becomes a null bounds, and a
//! missing label stays null. Only structural problems (unreadable archive,
//! spread XML that does not parse) abort the extraction.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use zip::ZipArchive;

/// Rectangle geometry in page coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

/// One labeled frame on a page, photo or text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub bounds: Option<Bounds>,
    pub label: Option<String>,
}

/// One page extracted from a spread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPage {
    pub page_id: Option<String>,

    /// "cover" for the first page in the archive, "interior" otherwise
    #[serde(rename = "type")]
    pub page_type: String,

    /// Stem of the spread file this page came from
    pub spread: String,

    pub bounds: Option<Bounds>,

    #[serde(default)]
    pub photo_slots: Vec<Slot>,

    #[serde(default)]
    pub text_slots: Vec<Slot>,
}

/// Normalized layout for one template archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutDocument {
    pub template: String,
    pub pages: Vec<LayoutPage>,
}

/// Parse a "top left bottom right" geometry string.
///
/// Anything that is not exactly four numbers yields None.
pub fn parse_bounds(geometry: &str) -> Option<Bounds> {
    let parts: Vec<f64> = geometry
        .split_whitespace()
        .map(str::parse)
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    if parts.len() != 4 {
        return None;
    }

    let (top, left, bottom, right) = (parts[0], parts[1], parts[2], parts[3]);
    Some(Bounds {
        top,
        left,
        bottom,
        right,
        width: right - left,
        height: bottom - top,
    })
}

/// Extract one archive into a layout document keyed by `template_key`
pub fn extract(archive_path: &Path, template_key: &str) -> crate::Result<LayoutDocument> {
    tracing::debug!(archive = %archive_path.display(), key = template_key, "extracting layout");

    let file = File::open(archive_path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut pages = Vec::new();

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;
        let name = entry.name().to_string();
        if !name.contains("Spreads/Spread") || !name.ends_with(".xml") {
            continue;
        }

        let mut xml = String::new();
        entry.read_to_string(&mut xml)?;

        let spread_id = Path::new(&name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        collect_spread_pages(&xml, &spread_id, &mut pages)?;
    }

    tracing::debug!(pages = pages.len(), "extraction complete");
    Ok(LayoutDocument {
        template: template_key.to_string(),
        pages,
    })
}

/// Parse one spread document and append its pages
fn collect_spread_pages(
    xml: &str,
    spread_id: &str,
    pages: &mut Vec<LayoutPage>,
) -> crate::Result<()> {
    let doc = roxmltree::Document::parse(xml)?;

    for page in doc
        .descendants()
        .filter(|n| n.has_tag_name("Page"))
    {
        let page_id = page.attribute("Self").map(str::to_string);
        let bounds = page.attribute("GeometricBounds").and_then(parse_bounds);

        let mut photo_slots = Vec::new();
        let mut text_slots = Vec::new();

        for rect in page.descendants().filter(|n| n.has_tag_name("Rectangle")) {
            let geometry = match rect.attribute("GeometricBounds") {
                Some(g) => g,
                None => continue,
            };

            // Only rectangles that actually hold a placed image are slots
            let has_graphic = rect
                .descendants()
                .any(|n| n.has_tag_name("Image") || n.has_tag_name("Graphic"));
            if !has_graphic {
                continue;
            }

            photo_slots.push(Slot {
                bounds: parse_bounds(geometry),
                label: frame_label(&rect),
            });
        }

        for frame in page.descendants().filter(|n| n.has_tag_name("TextFrame")) {
            let geometry = match frame.attribute("GeometricBounds") {
                Some(g) => g,
                None => continue,
            };

            text_slots.push(Slot {
                bounds: parse_bounds(geometry),
                label: frame.attribute("XMLContent").map(str::to_string),
            });
        }

        let page_type = if pages.is_empty() {
            "cover".to_string()
        } else {
            "interior".to_string()
        };

        pages.push(LayoutPage {
            page_id,
            page_type,
            spread: spread_id.to_string(),
            bounds,
            photo_slots,
            text_slots,
        });
    }

    Ok(())
}

/// Label of a photo frame: the XMLContent reference, else a nested
/// Properties/Label text, else null
fn frame_label(rect: &roxmltree::Node) -> Option<String> {
    if let Some(label) = rect.attribute("XMLContent") {
        return Some(label.to_string());
    }

    rect.descendants()
        .find(|n| n.has_tag_name("Label"))
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Write a layout document as pretty JSON, creating parent directories
pub fn write_document(document: &LayoutDocument, out_path: &Path) -> crate::Result<()> {
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(out_path, json)?;
    tracing::info!(path = %out_path.display(), "layout document saved");
    Ok(())
}

/// Extract every `*.idml` archive under `templates_dir`.
///
/// Archives are keyed `theme/category` from their first two path
/// components below the templates root and written to
/// `layouts_dir/{theme}_{category}.json`. Returns the written paths.
pub fn extract_all(templates_dir: &Path, layouts_dir: &Path) -> crate::Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for entry in WalkDir::new(templates_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_idml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("idml"))
            .unwrap_or(false);
        if !path.is_file() || !is_idml {
            continue;
        }

        let rel = path.strip_prefix(templates_dir).unwrap_or(path);
        let mut components = rel.components().map(|c| c.as_os_str().to_string_lossy());
        let (theme, category) = match (components.next(), components.next()) {
            (Some(theme), Some(category)) => (theme.into_owned(), category.into_owned()),
            _ => {
                tracing::warn!(path = %path.display(), "archive not under <theme>/<category>, skipping");
                continue;
            }
        };

        let template_key = format!("{theme}/{category}");
        let out_path = layouts_dir.join(format!("{theme}_{category}.json"));

        let document = extract(path, &template_key)?;
        write_document(&document, &out_path)?;
        written.push(out_path);
    }

    tracing::info!(count = written.len(), "archives extracted");
    Ok(written)
}
