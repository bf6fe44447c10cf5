//! Collapsible navigation menu.

use crate::dom::{Document, NodeId};
use crate::page::markers;

/// Toggles the navigation menu open and closed.
///
/// The open state is a single `open` class on the menu container, mirrored
/// into `aria-expanded` on the toggle control. Clicking a link inside the
/// menu closes it (single-level, no nested menus). When either the toggle or
/// the menu is missing the controller is inert.
#[derive(Debug)]
pub struct NavController {
    toggle: Option<NodeId>,
    menu: Option<NodeId>,
    links: Vec<NodeId>,
}

impl NavController {
    /// Locates the nav toggle, the menu container, and the menu links.
    #[must_use]
    pub fn init(doc: &Document) -> Self {
        let toggle = doc
            .select_class(doc.root(), markers::NAV_TOGGLE_CLASS)
            .first()
            .copied();
        let menu = doc.by_id(markers::MENU_ID);
        let links = menu.map_or_else(Vec::new, |menu| doc.select_tag(menu, "a"));

        Self { toggle, menu, links }
    }

    /// Handles a click; returns true if the nav consumed it.
    pub fn handle_click(&self, doc: &mut Document, target: NodeId) -> bool {
        let (Some(toggle), Some(menu)) = (self.toggle, self.menu) else {
            return false;
        };

        if doc.contains(toggle, target) {
            let open = doc.toggle_class(menu, markers::OPEN_CLASS);
            doc.set_attr(
                toggle,
                markers::ARIA_EXPANDED_ATTR,
                if open { "true" } else { "false" },
            );
            return true;
        }

        if self.links.iter().any(|&link| doc.contains(link, target)) {
            doc.remove_class(menu, markers::OPEN_CLASS);
            return true;
        }

        false
    }
}
