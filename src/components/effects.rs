//! Scroll-driven effects: the back-to-top control, reveal animations, and
//! the footer year display.

use chrono::Datelike;

use crate::constants::{REVEAL_VISIBILITY_THRESHOLD, SCROLL_TOP_THRESHOLD};
use crate::dom::{Document, NodeId};
use crate::page::markers;

/// Scroll-offset and viewport-visibility effects.
///
/// The back-to-top control gets the `show` class while the scroll offset
/// exceeds the threshold, re-evaluated on every scroll event. Elements
/// marked `reveal` gain `visible` the first time at least 12% of them enters
/// the viewport; the class is never removed and the element stays observed
/// (re-reporting is harmless).
#[derive(Debug)]
pub struct ScrollEffects {
    to_top: Option<NodeId>,
    reveal: Vec<NodeId>,
}

impl ScrollEffects {
    /// Locates the back-to-top control and the reveal elements, and paints
    /// the current year into the year display when present.
    pub fn init(doc: &mut Document) -> Self {
        let to_top = doc.by_id(markers::TO_TOP_ID);

        if let Some(year) = doc.by_id(markers::YEAR_ID) {
            doc.set_text(year, chrono::Local::now().year().to_string());
        }

        let reveal = doc.select_class(doc.root(), markers::REVEAL_CLASS);
        Self { to_top, reveal }
    }

    /// Re-evaluates back-to-top visibility for a new scroll offset (in
    /// layout units).
    pub fn handle_scroll(&self, doc: &mut Document, offset: u32) {
        if let Some(to_top) = self.to_top {
            doc.set_class(to_top, markers::SHOW_CLASS, offset > SCROLL_TOP_THRESHOLD);
        }
    }

    /// Handles a click; returns true if it landed on the back-to-top
    /// control and the host should scroll smoothly to the origin.
    #[must_use]
    pub fn handle_click(&self, doc: &Document, target: NodeId) -> bool {
        self.to_top
            .is_some_and(|to_top| doc.contains(to_top, target))
    }

    /// Records a viewport-visibility report for an element.
    ///
    /// Only elements observed at init (marked `reveal`) react; others are
    /// ignored.
    pub fn handle_viewport(&self, doc: &mut Document, node: NodeId, ratio: f64) {
        if ratio >= REVEAL_VISIBILITY_THRESHOLD && self.reveal.contains(&node) {
            doc.add_class(node, markers::VISIBLE_CLASS);
        }
    }

    /// The elements observed for reveal, in document order.
    #[must_use]
    pub fn reveal_targets(&self) -> &[NodeId] {
        &self.reveal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn effects_doc() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let reveal = doc.append(root, Element::new("section").class(markers::REVEAL_CLASS));
        let year = doc.append(root, Element::new("span").id(markers::YEAR_ID));
        let to_top = doc.append(root, Element::new("button").id(markers::TO_TOP_ID));
        (doc, reveal, year, to_top)
    }

    #[test]
    fn test_init_paints_current_year() {
        let (mut doc, _, year, _) = effects_doc();
        ScrollEffects::init(&mut doc);
        let expected = chrono::Local::now().year().to_string();
        assert_eq!(doc.node(year).text, expected);
    }

    #[test]
    fn test_to_top_follows_threshold() {
        let (mut doc, _, _, to_top) = effects_doc();
        let effects = ScrollEffects::init(&mut doc);

        effects.handle_scroll(&mut doc, SCROLL_TOP_THRESHOLD);
        assert!(!doc.node(to_top).has_class(markers::SHOW_CLASS));

        effects.handle_scroll(&mut doc, SCROLL_TOP_THRESHOLD + 1);
        assert!(doc.node(to_top).has_class(markers::SHOW_CLASS));

        effects.handle_scroll(&mut doc, 0);
        assert!(!doc.node(to_top).has_class(markers::SHOW_CLASS));
    }

    #[test]
    fn test_to_top_click() {
        let (mut doc, reveal, _, to_top) = effects_doc();
        let effects = ScrollEffects::init(&mut doc);
        assert!(effects.handle_click(&doc, to_top));
        assert!(!effects.handle_click(&doc, reveal));
    }

    #[test]
    fn test_reveal_is_one_directional() {
        let (mut doc, reveal, _, _) = effects_doc();
        let effects = ScrollEffects::init(&mut doc);

        effects.handle_viewport(&mut doc, reveal, 0.05);
        assert!(!doc.node(reveal).has_class(markers::VISIBLE_CLASS));

        effects.handle_viewport(&mut doc, reveal, 0.12);
        assert!(doc.node(reveal).has_class(markers::VISIBLE_CLASS));

        // Scrolling the element back out never removes the class
        effects.handle_viewport(&mut doc, reveal, 0.0);
        assert!(doc.node(reveal).has_class(markers::VISIBLE_CLASS));
    }

    #[test]
    fn test_unobserved_elements_are_ignored() {
        let (mut doc, _, _, _) = effects_doc();
        let plain = doc.append(doc.root(), Element::new("div"));
        let effects = ScrollEffects::init(&mut doc);

        effects.handle_viewport(&mut doc, plain, 1.0);
        assert!(!doc.node(plain).has_class(markers::VISIBLE_CLASS));
    }

    #[test]
    fn test_missing_elements_degrade_silently() {
        let mut doc = Document::new();
        let target = doc.append(doc.root(), Element::new("div"));
        let effects = ScrollEffects::init(&mut doc);

        effects.handle_scroll(&mut doc, 10_000);
        assert!(!effects.handle_click(&doc, target));
        assert!(effects.reveal_targets().is_empty());
    }
}
