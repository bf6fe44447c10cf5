//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every helper

use folio::config::MemoryStore;
use folio::dom::{Document, NodeId};
use folio::page::{self, markers, CardManifest, PageManifest, ProjectGroup};
use folio::runtime::Runtime;

/// Builds a manifest with a single project group holding the given cards.
pub fn manifest_with_cards(cards: &[(&str, Option<&str>)]) -> PageManifest {
    PageManifest {
        title: "Test Page".to_string(),
        tagline: String::new(),
        nav: Vec::new(),
        sections: Vec::new(),
        projects: vec![ProjectGroup {
            heading: "Work".to_string(),
            cards: cards
                .iter()
                .map(|(title, category)| CardManifest {
                    title: (*title).to_string(),
                    summary: String::new(),
                    category: category.map(String::from),
                })
                .collect(),
        }],
    }
}

/// Builds a runtime over the given manifest with an in-memory preference
/// store and a dark system appearance.
pub fn runtime_for(manifest: &PageManifest) -> Runtime {
    Runtime::new(
        page::build(manifest),
        Box::new(MemoryStore::new()),
        false,
        None,
    )
}

/// Finds the filter button carrying the given `data-filter` value.
pub fn filter_button(doc: &Document, filter: &str) -> NodeId {
    doc.select_class(doc.root(), markers::FILTER_BTN_CLASS)
        .into_iter()
        .find(|&b| doc.attr(b, markers::DATA_FILTER_ATTR) == Some(filter))
        .unwrap_or_else(|| panic!("no filter button for '{filter}'"))
}

/// The painted count text of a filter button.
pub fn button_count(doc: &Document, filter: &str) -> String {
    let btn = filter_button(doc, filter);
    let count_el = doc.select_class(btn, markers::FILTER_COUNT_CLASS)[0];
    doc.node(count_el).text.clone()
}

/// The filter status line text.
pub fn status_text(doc: &Document) -> String {
    let status = doc.select_class(doc.root(), markers::FILTERS_STATUS_CLASS)[0];
    doc.node(status).text.clone()
}

/// Titles of all currently visible cards, in document order.
pub fn visible_card_titles(doc: &Document) -> Vec<String> {
    doc.select_class(doc.root(), markers::CARD_CLASS)
        .into_iter()
        .filter(|&c| !doc.node(c).has_class(markers::IS_HIDDEN_CLASS))
        .map(|c| {
            doc.select_tag(c, "h4")
                .first()
                .map(|&t| doc.node(t).text.clone())
                .unwrap_or_default()
        })
        .collect()
}
