//! Arena-backed document tree with query and mutation operations.

use super::node::{Element, Node};

/// Index handle to a node in a [`Document`].
///
/// Handles are only meaningful for the document that produced them and stay
/// valid for the document's lifetime (nodes are never removed, matching the
/// page model where visibility is expressed through classes, not removal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// The live element tree for one page.
///
/// Queries return `Option` or empty collections rather than erroring; the
/// behavior components are specified to degrade silently when a marker
/// element is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Creates a document containing only the root element.
    ///
    /// The root plays the role of the document element: the theme attribute
    /// is set and cleared on it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("page")],
        }
    }

    /// Returns the root element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new element built from `element` as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len());
        let mut node = Node::new(element.tag);
        node.id = element.id;
        for class in element.classes {
            if !node.classes.contains(&class) {
                node.classes.push(class);
            }
        }
        node.attrs.extend(element.attrs);
        node.text = element.text;
        node.parent = Some(parent);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Borrows a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Returns the parent of a node, if any.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Finds the element with the given id marker.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// Returns all descendants of `scope` in document order (excluding `scope` itself).
    #[must_use]
    pub fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.nodes[scope.0]
            .children
            .iter()
            .rev()
            .copied()
            .collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    /// Returns all descendants of `scope` carrying the given class.
    #[must_use]
    pub fn select_class(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.node(id).has_class(class))
            .collect()
    }

    /// Returns all descendants of `scope` carrying every one of the given classes.
    #[must_use]
    pub fn select_classes(&self, scope: NodeId, classes: &[&str]) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| classes.iter().all(|c| self.node(id).has_class(c)))
            .collect()
    }

    /// Returns all descendants of `scope` with the given tag name.
    #[must_use]
    pub fn select_tag(&self, scope: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(scope)
            .into_iter()
            .filter(|&id| self.node(id).tag == tag)
            .collect()
    }

    /// Walks ancestor-or-self from `id` and returns the first element carrying `class`.
    ///
    /// This is the delegation primitive: a click lands on an inner element
    /// and the handler resolves the enclosing control.
    #[must_use]
    pub fn closest(&self, id: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.node(node).has_class(class) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    /// Returns true if `id` is `ancestor` or one of its descendants.
    #[must_use]
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if node == ancestor {
                return true;
            }
            current = self.parent(node);
        }
        false
    }

    /// Concatenated text of the element and all of its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = self.node(id).text.clone();
        for child in self.descendants(id) {
            out.push_str(&self.node(child).text);
        }
        out
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Adds a class (no-op if already present).
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if !self.node(id).has_class(class) {
            self.node_mut(id).classes.push(class.to_string());
        }
    }

    /// Removes a class (no-op if absent).
    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.node_mut(id).classes.retain(|c| c != class);
    }

    /// Flips a class and returns whether it is now present.
    pub fn toggle_class(&mut self, id: NodeId, class: &str) -> bool {
        if self.node(id).has_class(class) {
            self.remove_class(id, class);
            false
        } else {
            self.add_class(id, class);
            true
        }
    }

    /// Forces a class on or off.
    pub fn set_class(&mut self, id: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    /// Returns an attribute value.
    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).attrs.get(name).map(String::as_str)
    }

    /// Sets an attribute value.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        self.node_mut(id)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    /// Removes an attribute (no-op if absent).
    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        self.node_mut(id).attrs.remove(name);
    }

    /// Replaces the element's direct text content.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        self.node_mut(id).text = text.into();
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Document, NodeId, NodeId, NodeId) {
        let mut doc = Document::new();
        let root = doc.root();
        let section = doc.append(root, Element::new("section").id("projects"));
        let grid = doc.append(section, Element::new("div").classes("grid three cards"));
        let card = doc.append(
            grid,
            Element::new("article")
                .class("card")
                .attr("data-category", "web"),
        );
        (doc, section, grid, card)
    }

    #[test]
    fn test_by_id() {
        let (doc, section, _, _) = sample();
        assert_eq!(doc.by_id("projects"), Some(section));
        assert_eq!(doc.by_id("missing"), None);
    }

    #[test]
    fn test_descendants_excludes_scope() {
        let (doc, section, grid, card) = sample();
        assert_eq!(doc.descendants(section), vec![grid, card]);
        assert_eq!(doc.descendants(card), Vec::<NodeId>::new());
    }

    #[test]
    fn test_select_classes_requires_all() {
        let (doc, _, grid, _) = sample();
        let root = doc.root();
        assert_eq!(doc.select_classes(root, &["grid", "cards"]), vec![grid]);
        assert!(doc.select_classes(root, &["grid", "missing"]).is_empty());
    }

    #[test]
    fn test_closest_walks_ancestors() {
        let (mut doc, _, _, card) = sample();
        let label = doc.append(card, Element::new("span").class("label").text("Site"));
        assert_eq!(doc.closest(label, "card"), Some(card));
        assert_eq!(doc.closest(card, "card"), Some(card));
        assert_eq!(doc.closest(label, "filters"), None);
    }

    #[test]
    fn test_contains() {
        let (doc, section, _, card) = sample();
        assert!(doc.contains(section, card));
        assert!(doc.contains(card, card));
        assert!(!doc.contains(card, section));
    }

    #[test]
    fn test_toggle_class_returns_new_state() {
        let (mut doc, _, _, card) = sample();
        assert!(doc.toggle_class(card, "is-hidden"));
        assert!(doc.node(card).has_class("is-hidden"));
        assert!(!doc.toggle_class(card, "is-hidden"));
        assert!(!doc.node(card).has_class("is-hidden"));
    }

    #[test]
    fn test_set_class_is_idempotent() {
        let (mut doc, _, _, card) = sample();
        doc.set_class(card, "is-hidden", true);
        doc.set_class(card, "is-hidden", true);
        assert_eq!(
            doc.node(card).classes.iter().filter(|c| *c == "is-hidden").count(),
            1
        );
        doc.set_class(card, "is-hidden", false);
        assert!(!doc.node(card).has_class("is-hidden"));
    }

    #[test]
    fn test_attributes() {
        let (mut doc, _, _, card) = sample();
        assert_eq!(doc.attr(card, "data-category"), Some("web"));
        doc.set_attr(card, "aria-pressed", "true");
        assert_eq!(doc.attr(card, "aria-pressed"), Some("true"));
        doc.remove_attr(card, "aria-pressed");
        assert_eq!(doc.attr(card, "aria-pressed"), None);
    }

    #[test]
    fn test_text_content_concatenates_descendants() {
        let (mut doc, _, _, card) = sample();
        let btn = doc.append(card, Element::new("button"));
        doc.append(btn, Element::new("span").class("label").text("Web"));
        doc.append(btn, Element::new("span").class("filter-count").text("3"));
        assert_eq!(doc.text_content(btn), "Web3");
    }
}
