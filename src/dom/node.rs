//! Element nodes and the builder used to construct them.

use std::collections::BTreeMap;

use super::NodeId;

/// A single element in the document tree.
///
/// Structural links (`children`, `parent`) are managed by
/// [`Document`](super::Document); everything else is plain element data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Tag name (e.g., "section", "button", "h3")
    pub tag: String,
    /// Optional unique id marker
    pub id: Option<String>,
    /// Class list, in insertion order, without duplicates
    pub classes: Vec<String>,
    /// Attribute map (data-* and ARIA attributes)
    pub attrs: BTreeMap<String, String>,
    /// Direct text content of this element (not including descendants)
    pub text: String,
    /// Child element ids, in document order
    pub children: Vec<NodeId>,
    /// Parent element id (`None` for the root)
    pub parent: Option<NodeId>,
}

impl Node {
    pub(super) fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            classes: Vec::new(),
            attrs: BTreeMap::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
        }
    }

    /// Returns true if the element carries the given class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Descriptor for a new element, consumed by [`Document::append`](super::Document::append).
///
/// # Examples
///
/// ```
/// use folio::dom::{Document, Element};
///
/// let mut doc = Document::new();
/// let root = doc.root();
/// let menu = doc.append(root, Element::new("nav").id("menu").class("open"));
/// assert!(doc.node(menu).has_class("open"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Element {
    pub(super) tag: String,
    pub(super) id: Option<String>,
    pub(super) classes: Vec<String>,
    pub(super) attrs: Vec<(String, String)>,
    pub(super) text: String,
}

impl Element {
    /// Creates a descriptor for an element with the given tag name.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Sets the element id marker.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds every class in a whitespace-separated list.
    #[must_use]
    pub fn classes(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(String::from));
        self
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Sets the direct text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
