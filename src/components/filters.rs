//! Client-side category filter for the project card grid.

use std::collections::BTreeMap;

use crate::dom::{Document, NodeId};
use crate::page::markers;

/// Filters the project card grid by category.
///
/// Visibility is always expressed through the `is-hidden` class, never by
/// removing elements, so the document structure stays intact for layout and
/// assistive technology. Category counts are computed once at init from the
/// cards' category attributes (missing attributes count as "other"); the
/// document remains the source of truth for everything else, re-read on
/// every application.
#[derive(Debug)]
pub struct ProjectFilterController {
    bar: Option<NodeId>,
    buttons: Vec<NodeId>,
    cards: Vec<NodeId>,
    headings: Vec<NodeId>,
    grids: Vec<NodeId>,
    status: Option<NodeId>,
    counts: BTreeMap<String, usize>,
}

impl ProjectFilterController {
    /// Wires the filter section up.
    ///
    /// When the `projects` section is absent the controller is inert: no
    /// counts, no initial application, clicks fall through. Otherwise the
    /// per-category counts are computed and painted into the buttons and
    /// the `all` filter is applied once to normalize the initial state.
    pub fn init(doc: &mut Document) -> Self {
        let Some(section) = doc.by_id(markers::PROJECTS_ID) else {
            return Self {
                bar: None,
                buttons: Vec::new(),
                cards: Vec::new(),
                headings: Vec::new(),
                grids: Vec::new(),
                status: None,
                counts: BTreeMap::new(),
            };
        };

        let buttons = doc.select_class(section, markers::FILTER_BTN_CLASS);
        let grids = doc.select_classes(section, &markers::GRID_CLASSES);
        let cards: Vec<NodeId> = grids
            .iter()
            .flat_map(|&grid| doc.select_class(grid, markers::CARD_CLASS))
            .collect();
        let headings = doc
            .select_tag(section, "h3")
            .into_iter()
            .filter(|&h| doc.closest(h, markers::CARD_CLASS).is_none())
            .collect();
        let status = doc
            .select_class(section, markers::FILTERS_STATUS_CLASS)
            .first()
            .copied();
        let bar = doc
            .select_class(section, markers::FILTERS_CLASS)
            .first()
            .copied();

        // One pass over the cards; the reserved "all" key tracks the total.
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        counts.insert(markers::ALL_FILTER.to_string(), 0);
        for &card in &cards {
            let category = doc
                .attr(card, markers::DATA_CATEGORY_ATTR)
                .unwrap_or(markers::DEFAULT_CATEGORY)
                .to_string();
            *counts.entry(category).or_insert(0) += 1;
            *counts.entry(markers::ALL_FILTER.to_string()).or_insert(0) += 1;
        }

        let controller = Self {
            bar,
            buttons,
            cards,
            headings,
            grids,
            status,
            counts,
        };
        controller.paint_counts(doc);
        controller.apply(doc, markers::ALL_FILTER, "All");
        controller
    }

    /// Per-category counts, including the reserved `all` total.
    #[must_use]
    pub fn counts(&self) -> &BTreeMap<String, usize> {
        &self.counts
    }

    /// Writes each button's count into its count sub-element (`0` for
    /// categories with no cards).
    fn paint_counts(&self, doc: &mut Document) {
        for &btn in &self.buttons {
            let count = doc
                .attr(btn, markers::DATA_FILTER_ATTR)
                .and_then(|key| self.counts.get(key))
                .copied()
                .unwrap_or(0);
            if let Some(count_el) = doc
                .select_class(btn, markers::FILTER_COUNT_CLASS)
                .first()
                .copied()
            {
                doc.set_text(count_el, count.to_string());
            }
        }
    }

    /// Applies a filter.
    ///
    /// - Every card is visible iff the filter is `all` or matches its
    ///   category.
    /// - Group headings are hidden for any non-`all` filter.
    /// - Each grid is hidden only when it has zero visible cards; the `all`
    ///   filter always shows every grid.
    /// - The status line, when present, reads
    ///   `"Showing {n} {label} project{s}"` with the plural suffix omitted
    ///   iff n is 1.
    ///
    /// Applying the same filter twice yields the same document state.
    pub fn apply(&self, doc: &mut Document, filter: &str, label: &str) {
        let show_all = filter == markers::ALL_FILTER;

        for &card in &self.cards {
            let matches =
                show_all || doc.attr(card, markers::DATA_CATEGORY_ATTR) == Some(filter);
            doc.set_class(card, markers::IS_HIDDEN_CLASS, !matches);
        }

        for &heading in &self.headings {
            doc.set_class(heading, markers::IS_HIDDEN_CLASS, !show_all);
        }

        for &grid in &self.grids {
            if show_all {
                doc.remove_class(grid, markers::IS_HIDDEN_CLASS);
            } else {
                let visible = doc
                    .select_class(grid, markers::CARD_CLASS)
                    .into_iter()
                    .filter(|&card| !doc.node(card).has_class(markers::IS_HIDDEN_CLASS))
                    .count();
                doc.set_class(grid, markers::IS_HIDDEN_CLASS, visible == 0);
            }
        }

        if let Some(status) = self.status {
            let total = if show_all {
                self.counts.get(markers::ALL_FILTER).copied().unwrap_or(0)
            } else {
                self.counts.get(filter).copied().unwrap_or(0)
            };
            let suffix = if total == 1 { "" } else { "s" };
            doc.set_text(status, format!("Showing {total} {label} project{suffix}"));
        }
    }

    /// Handles a click anywhere in the filter bar (delegated: the target
    /// may be a descendant of a button); returns true if a filter was
    /// applied.
    ///
    /// Clears the active/selected/pressed state from every button, marks
    /// the clicked one, derives its display label (label sub-element text,
    /// else the button's own text, else "All"), and applies its filter.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> bool {
        let Some(bar) = self.bar else {
            return false;
        };
        if !doc.contains(bar, target) {
            return false;
        }
        let Some(btn) = doc.closest(target, markers::FILTER_BTN_CLASS) else {
            return false;
        };

        for &other in &self.buttons {
            doc.remove_class(other, markers::ACTIVE_CLASS);
            doc.set_attr(other, markers::ARIA_SELECTED_ATTR, "false");
            doc.set_attr(other, markers::ARIA_PRESSED_ATTR, "false");
        }
        doc.add_class(btn, markers::ACTIVE_CLASS);
        doc.set_attr(btn, markers::ARIA_SELECTED_ATTR, "true");
        doc.set_attr(btn, markers::ARIA_PRESSED_ATTR, "true");

        let filter = doc
            .attr(btn, markers::DATA_FILTER_ATTR)
            .unwrap_or_default()
            .to_string();
        let label = self.derive_label(doc, btn);
        self.apply(doc, &filter, &label);
        true
    }

    fn derive_label(&self, doc: &Document, btn: NodeId) -> String {
        let raw = match doc
            .select_class(btn, markers::LABEL_CLASS)
            .first()
            .copied()
        {
            Some(label_el) => {
                let text = doc.text_content(label_el);
                if text.is_empty() {
                    doc.text_content(btn)
                } else {
                    text
                }
            }
            None => doc.text_content(btn),
        };

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            "All".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;
    use crate::page::{self, CardManifest, PageManifest, ProjectGroup};

    fn manifest(cards: &[(&str, Option<&str>)]) -> PageManifest {
        PageManifest {
            title: "Test".to_string(),
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

    fn filter_button(doc: &Document, filter: &str) -> NodeId {
        doc.select_class(doc.root(), markers::FILTER_BTN_CLASS)
            .into_iter()
            .find(|&b| doc.attr(b, markers::DATA_FILTER_ATTR) == Some(filter))
            .unwrap()
    }

    fn visible_cards(doc: &Document) -> usize {
        doc.select_class(doc.root(), markers::CARD_CLASS)
            .into_iter()
            .filter(|&c| !doc.node(c).has_class(markers::IS_HIDDEN_CLASS))
            .count()
    }

    fn status_text(doc: &Document) -> String {
        let status = doc
            .select_class(doc.root(), markers::FILTERS_STATUS_CLASS)[0];
        doc.node(status).text.clone()
    }

    #[test]
    fn test_counts_per_category() {
        let mut doc = page::build(&manifest(&[
            ("a", Some("web")),
            ("b", Some("web")),
            ("c", Some("design")),
            ("d", None),
        ]));
        let filters = ProjectFilterController::init(&mut doc);

        assert_eq!(filters.counts().get("all"), Some(&4));
        assert_eq!(filters.counts().get("web"), Some(&2));
        assert_eq!(filters.counts().get("design"), Some(&1));
        assert_eq!(filters.counts().get("other"), Some(&1));
    }

    #[test]
    fn test_counts_painted_into_buttons() {
        let mut doc = page::build(&manifest(&[
            ("a", Some("web")),
            ("b", Some("web")),
            ("c", Some("design")),
        ]));
        ProjectFilterController::init(&mut doc);

        for (filter, expected) in [("all", "3"), ("web", "2"), ("design", "1")] {
            let btn = filter_button(&doc, filter);
            let count_el = doc.select_class(btn, markers::FILTER_COUNT_CLASS)[0];
            assert_eq!(doc.node(count_el).text, expected, "count for {filter}");
        }
    }

    #[test]
    fn test_initial_apply_normalizes_state() {
        let mut doc = page::build(&manifest(&[("a", Some("web")), ("b", Some("design"))]));
        ProjectFilterController::init(&mut doc);

        assert_eq!(visible_cards(&doc), 2);
        assert_eq!(status_text(&doc), "Showing 2 All projects");
    }

    #[test]
    fn test_apply_specific_category() {
        let mut doc = page::build(&manifest(&[
            ("a", Some("web")),
            ("b", Some("web")),
            ("c", Some("design")),
        ]));
        let filters = ProjectFilterController::init(&mut doc);

        filters.apply(&mut doc, "design", "Design");
        assert_eq!(visible_cards(&doc), 1);
        assert_eq!(status_text(&doc), "Showing 1 Design project");

        // All headings hidden under a specific filter
        let section = doc.by_id(markers::PROJECTS_ID).unwrap();
        for h in doc.select_tag(section, "h3") {
            assert!(doc.node(h).has_class(markers::IS_HIDDEN_CLASS));
        }

        // Back to all: everything visible again, plural suffix restored
        filters.apply(&mut doc, "all", "All");
        assert_eq!(visible_cards(&doc), 3);
        assert_eq!(status_text(&doc), "Showing 3 All projects");
        for h in doc.select_tag(section, "h3") {
            assert!(!doc.node(h).has_class(markers::IS_HIDDEN_CLASS));
        }
    }

    #[test]
    fn test_empty_grids_are_hidden() {
        let mut doc = page::build(&PageManifest {
            projects: vec![
                ProjectGroup {
                    heading: "Web".to_string(),
                    cards: vec![CardManifest {
                        title: "a".to_string(),
                        summary: String::new(),
                        category: Some("web".to_string()),
                    }],
                },
                ProjectGroup {
                    heading: "Design".to_string(),
                    cards: vec![CardManifest {
                        title: "b".to_string(),
                        summary: String::new(),
                        category: Some("design".to_string()),
                    }],
                },
            ],
            ..manifest(&[])
        });
        let filters = ProjectFilterController::init(&mut doc);
        let grids = doc.select_classes(doc.root(), &markers::GRID_CLASSES);

        filters.apply(&mut doc, "web", "Web");
        assert!(!doc.node(grids[0]).has_class(markers::IS_HIDDEN_CLASS));
        assert!(doc.node(grids[1]).has_class(markers::IS_HIDDEN_CLASS));

        // "all" always shows every grid
        filters.apply(&mut doc, "all", "All");
        for &grid in &grids {
            assert!(!doc.node(grid).has_class(markers::IS_HIDDEN_CLASS));
        }
    }

    #[test]
    fn test_unknown_filter_hides_everything() {
        let mut doc = page::build(&manifest(&[("a", Some("web"))]));
        let filters = ProjectFilterController::init(&mut doc);

        filters.apply(&mut doc, "ml", "ML");
        assert_eq!(visible_cards(&doc), 0);
        let grids = doc.select_classes(doc.root(), &markers::GRID_CLASSES);
        assert!(doc.node(grids[0]).has_class(markers::IS_HIDDEN_CLASS));
        assert_eq!(status_text(&doc), "Showing 0 ML projects");
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut doc = page::build(&manifest(&[
            ("a", Some("web")),
            ("b", Some("design")),
        ]));
        let filters = ProjectFilterController::init(&mut doc);

        filters.apply(&mut doc, "web", "Web");
        let once = doc.clone();
        filters.apply(&mut doc, "web", "Web");
        assert_eq!(doc, once);
    }

    #[test]
    fn test_click_marks_one_button_active() {
        let mut doc = page::build(&manifest(&[
            ("a", Some("web")),
            ("b", Some("design")),
        ]));
        let filters = ProjectFilterController::init(&mut doc);

        let design = filter_button(&doc, "design");
        assert!(filters.handle_click(&mut doc, design));

        for btn in doc.select_class(doc.root(), markers::FILTER_BTN_CLASS) {
            let expect_active = btn == design;
            assert_eq!(doc.node(btn).has_class(markers::ACTIVE_CLASS), expect_active);
            let aria = if expect_active { "true" } else { "false" };
            assert_eq!(doc.attr(btn, markers::ARIA_SELECTED_ATTR), Some(aria));
            assert_eq!(doc.attr(btn, markers::ARIA_PRESSED_ATTR), Some(aria));
        }
        assert_eq!(status_text(&doc), "Showing 1 Design project");
    }

    #[test]
    fn test_click_is_delegated_from_button_descendants() {
        let mut doc = page::build(&manifest(&[("a", Some("web"))]));
        let filters = ProjectFilterController::init(&mut doc);

        let web = filter_button(&doc, "web");
        let label = doc.select_class(web, markers::LABEL_CLASS)[0];
        assert!(filters.handle_click(&mut doc, label));
        assert!(doc.node(web).has_class(markers::ACTIVE_CLASS));
    }

    #[test]
    fn test_click_outside_buttons_is_ignored() {
        let mut doc = page::build(&manifest(&[("a", Some("web"))]));
        let filters = ProjectFilterController::init(&mut doc);

        // On the bar but not on a button
        let bar = doc.select_class(doc.root(), markers::FILTERS_CLASS)[0];
        assert!(!filters.handle_click(&mut doc, bar));

        // Outside the bar entirely
        let section = doc.by_id(markers::PROJECTS_ID).unwrap();
        assert!(!filters.handle_click(&mut doc, section));
    }

    #[test]
    fn test_label_falls_back_to_button_text() {
        let mut doc = Document::new();
        let root = doc.root();
        let section = doc.append(root, Element::new("section").id(markers::PROJECTS_ID));
        let bar = doc.append(section, Element::new("div").class(markers::FILTERS_CLASS));
        let btn = doc.append(
            bar,
            Element::new("button")
                .class(markers::FILTER_BTN_CLASS)
                .attr(markers::DATA_FILTER_ATTR, "web")
                .text("Web work"),
        );
        let status = doc.append(
            section,
            Element::new("p").class(markers::FILTERS_STATUS_CLASS),
        );

        let filters = ProjectFilterController::init(&mut doc);
        filters.handle_click(&mut doc, btn);
        assert_eq!(doc.node(status).text, "Showing 0 Web work projects");
    }

    #[test]
    fn test_blank_button_falls_back_to_all_label() {
        let mut doc = Document::new();
        let root = doc.root();
        let section = doc.append(root, Element::new("section").id(markers::PROJECTS_ID));
        let bar = doc.append(section, Element::new("div").class(markers::FILTERS_CLASS));
        let btn = doc.append(
            bar,
            Element::new("button")
                .class(markers::FILTER_BTN_CLASS)
                .attr(markers::DATA_FILTER_ATTR, "web"),
        );
        let status = doc.append(
            section,
            Element::new("p").class(markers::FILTERS_STATUS_CLASS),
        );

        let filters = ProjectFilterController::init(&mut doc);
        filters.handle_click(&mut doc, btn);
        assert_eq!(doc.node(status).text, "Showing 0 All projects");
    }

    #[test]
    fn test_missing_section_is_noop() {
        let mut doc = Document::new();
        let target = doc.append(doc.root(), Element::new("div"));
        let filters = ProjectFilterController::init(&mut doc);

        assert!(filters.counts().is_empty());
        assert!(!filters.handle_click(&mut doc, target));
    }

    #[test]
    fn test_empty_section_counts_zero() {
        let mut doc = Document::new();
        let section = doc.append(
            doc.root(),
            Element::new("section").id(markers::PROJECTS_ID),
        );
        doc.append(section, Element::new("p").class(markers::FILTERS_STATUS_CLASS));
        let filters = ProjectFilterController::init(&mut doc);

        assert_eq!(filters.counts().get("all"), Some(&0));
        assert_eq!(status_text(&doc), "Showing 0 All projects");
    }
}
