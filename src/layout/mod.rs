//! Layout documents: extraction from template archives and page selection.

pub mod extract;
pub mod select;

pub use extract::{
    extract, extract_all, parse_bounds, write_document, Bounds, LayoutDocument, LayoutPage, Slot,
};
pub use select::{build_page_plan, choose_pages, load_documents, PagePlan, SlotFill};
