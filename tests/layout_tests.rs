//! Extraction and selection tests over generated IDML-style archives.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use aizine::{build_page_plan, choose_pages, extract, extract_all, AizineError, LayoutDocument};

/// One page element with `slots` image-bearing rectangles and one text frame
fn page_xml(page_id: &str, slots: usize) -> String {
    let mut rects = String::new();
    for i in 0..slots {
        rects.push_str(&format!(
            r#"<Rectangle Self="{page_id}_r{i}" GeometricBounds="0 {left} 100 {right}" XMLContent="IMG_{i}">
                 <Image Self="{page_id}_i{i}"/>
               </Rectangle>"#,
            left = i * 100,
            right = (i + 1) * 100,
        ));
    }
    format!(
        r#"<Page Self="{page_id}" GeometricBounds="0 0 200 400">
             {rects}
             <TextFrame Self="{page_id}_t" GeometricBounds="150 0 180 200" XMLContent="CAPTION"/>
           </Page>"#
    )
}

/// Build an archive with a 2-slot cover page and four 3-slot interior pages
fn write_archive(path: &Path) {
    let file = File::create(path).expect("create archive");
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    writer
        .start_file("Spreads/Spread_u100.xml", options)
        .unwrap();
    let cover_spread = format!(r#"<Spread Self="u100">{}</Spread>"#, page_xml("cov", 2));
    writer.write_all(cover_spread.as_bytes()).unwrap();

    writer
        .start_file("Spreads/Spread_u200.xml", options)
        .unwrap();
    let interior_spread = format!(
        r#"<Spread Self="u200">{}{}{}{}</Spread>"#,
        page_xml("p1", 3),
        page_xml("p2", 3),
        page_xml("p3", 3),
        page_xml("p4", 3),
    );
    writer.write_all(interior_spread.as_bytes()).unwrap();

    // non-spread entries must be ignored
    writer.start_file("designmap.xml", options).unwrap();
    writer.write_all(b"<Document/>").unwrap();

    writer.finish().unwrap();
}

mod extract_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_collects_pages_and_slots() {
        let tmp = TempDir::new().unwrap();
        let idml = tmp.path().join("vesilnyi.idml");
        write_archive(&idml);

        let document = extract(&idml, "lavstory/vesilnyi").expect("extract");

        assert_eq!(document.template, "lavstory/vesilnyi");
        assert_eq!(document.pages.len(), 5);
        assert_eq!(document.pages[0].page_type, "cover");
        assert_eq!(document.pages[0].photo_slots.len(), 2);
        assert_eq!(document.pages[0].spread, "Spread_u100");

        for page in &document.pages[1..] {
            assert_eq!(page.page_type, "interior");
            assert_eq!(page.photo_slots.len(), 3);
            assert_eq!(page.text_slots.len(), 1);
        }

        let bounds = document.pages[0].bounds.as_ref().expect("page bounds");
        assert_eq!(bounds.width, 400.0);
        assert_eq!(bounds.height, 200.0);
    }

    #[test]
    fn test_extract_all_names_documents_by_theme_category() {
        let tmp = TempDir::new().unwrap();
        let templates = tmp.path().join("templates");
        let layouts = tmp.path().join("layouts");

        let archive_dir = templates.join("lavstory").join("vesilnyi");
        fs::create_dir_all(&archive_dir).unwrap();
        write_archive(&archive_dir.join("vesilnyi.idml"));

        let written = extract_all(&templates, &layouts).expect("extract all");

        assert_eq!(written, vec![layouts.join("lavstory_vesilnyi.json")]);

        let content = fs::read_to_string(&written[0]).unwrap();
        let document: LayoutDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(document.template, "lavstory/vesilnyi");
        assert_eq!(document.pages.len(), 5);
    }
}

mod select_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extracted_layouts(tmp: &TempDir) -> PathBuf {
        let idml = tmp.path().join("vesilnyi.idml");
        write_archive(&idml);

        let layouts = tmp.path().join("layouts");
        let document = extract(&idml, "lavstory/vesilnyi").unwrap();
        aizine::layout::write_document(&document, &layouts.join("lavstory_vesilnyi.json"))
            .unwrap();
        layouts
    }

    #[test]
    fn test_choose_stops_at_target_pages() {
        let tmp = TempDir::new().unwrap();
        let layouts = extracted_layouts(&tmp);

        // cover (2 slots) + two interiors (3 each) = 8 slots <= 10 photos;
        // the page target is hit before the photo budget
        let chosen = choose_pages(&layouts, "lavstory", 3, 10).expect("choose");

        assert_eq!(chosen.len(), 3);
        assert_eq!(chosen[0].page_type, "cover");
        let slots: Vec<usize> = chosen.iter().map(|p| p.photo_slots.len()).collect();
        assert_eq!(slots, vec![2, 3, 3]);
    }

    #[test]
    fn test_choose_stops_when_photo_budget_runs_out() {
        let tmp = TempDir::new().unwrap();
        let layouts = extracted_layouts(&tmp);

        // 4 photos: cover eats 2, the first interior page overshoots
        let chosen = choose_pages(&layouts, "lavstory", 10, 4).expect("choose");

        assert_eq!(chosen.len(), 2);
        assert_eq!(chosen[0].page_type, "cover");
        assert_eq!(chosen[1].page_type, "interior");
    }

    #[test]
    fn test_unknown_theme_is_no_layouts() {
        let tmp = TempDir::new().unwrap();
        let layouts = extracted_layouts(&tmp);

        let result = choose_pages(&layouts, "family", 3, 10);
        assert!(matches!(result, Err(AizineError::NoLayouts(_))));
    }

    #[test]
    fn test_page_plan_fills_slots_in_photo_order() {
        let tmp = TempDir::new().unwrap();
        let layouts = extracted_layouts(&tmp);
        let chosen = choose_pages(&layouts, "lavstory", 3, 10).unwrap();

        let photos: Vec<PathBuf> = (0..10)
            .map(|i| PathBuf::from(format!("/in/{i:02}.jpg")))
            .collect();
        let plan = build_page_plan(&chosen, &photos);

        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].images.len(), 2);
        assert_eq!(plan[1].images.len(), 3);
        assert_eq!(plan[2].images.len(), 3);
        assert_eq!(plan[0].images[0].file, PathBuf::from("/in/00.jpg"));
        assert_eq!(plan[2].images[2].file, PathBuf::from("/in/07.jpg"));
        // every chosen page keeps its text slots
        assert!(plan.iter().all(|p| p.texts.len() == 1));
    }
}
