//! Composition root and event dispatch.
//!
//! The runtime owns the document, the preference store, and the four
//! behavior components, constructed unconditionally and in fixed order at
//! startup. Events are dispatched serially to every component; all work is
//! synchronous document reads and writes, so re-dispatching the same event
//! is always safe.

use tracing::debug;

use crate::components::{NavController, ProjectFilterController, ScrollEffects, ThemeController};
use crate::config::{PreferenceStore, ThemePreference};
use crate::dom::{Document, NodeId};

/// An event produced by the host environment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// A click landed on an element (possibly a descendant of a control)
    Click(NodeId),
    /// The vertical scroll offset changed (in layout units)
    Scroll(u32),
    /// An element's visible fraction of the viewport was re-measured
    Viewport {
        /// The measured element
        node: NodeId,
        /// Fraction of the element inside the viewport (0.0 to 1.0)
        ratio: f64,
    },
}

/// An effect a component asks the host to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostCommand {
    /// Smoothly scroll back to the origin
    ScrollToTop,
}

/// Owns the page document and its behavior components.
pub struct Runtime {
    doc: Document,
    store: Box<dyn PreferenceStore>,
    theme: ThemeController,
    nav: NavController,
    effects: ScrollEffects,
    filters: ProjectFilterController,
}

impl Runtime {
    /// Builds the components against the document, in fixed order: theme,
    /// nav, scroll effects, project filters.
    pub fn new(
        mut doc: Document,
        store: Box<dyn PreferenceStore>,
        system_light: bool,
        theme_override: Option<ThemePreference>,
    ) -> Self {
        let theme = ThemeController::init(&mut doc, store.as_ref(), system_light, theme_override);
        let nav = NavController::init(&doc);
        let effects = ScrollEffects::init(&mut doc);
        let filters = ProjectFilterController::init(&mut doc);
        debug!(
            cards = filters.counts().get("all").copied().unwrap_or(0),
            "page components initialized"
        );

        Self {
            doc,
            store,
            theme,
            nav,
            effects,
            filters,
        }
    }

    /// The live document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// The theme currently applied to the document.
    #[must_use]
    pub fn current_theme(&self) -> ThemePreference {
        self.theme.current(&self.doc)
    }

    /// The filter component's category counts (empty when the page has no
    /// filter section).
    #[must_use]
    pub fn filter_counts(&self) -> &std::collections::BTreeMap<String, usize> {
        self.filters.counts()
    }

    /// Elements observed for reveal animations.
    #[must_use]
    pub fn reveal_targets(&self) -> &[NodeId] {
        self.effects.reveal_targets()
    }

    /// Routes one event through every component and collects host commands.
    pub fn dispatch(&mut self, event: PageEvent) -> Vec<HostCommand> {
        let mut commands = Vec::new();
        match event {
            PageEvent::Click(target) => {
                self.theme
                    .handle_click(&mut self.doc, self.store.as_mut(), target);
                self.nav.handle_click(&mut self.doc, target);
                if self.effects.handle_click(&self.doc, target) {
                    commands.push(HostCommand::ScrollToTop);
                }
                self.filters.handle_click(&mut self.doc, target);
            }
            PageEvent::Scroll(offset) => {
                self.effects.handle_scroll(&mut self.doc, offset);
            }
            PageEvent::Viewport { node, ratio } => {
                self.effects.handle_viewport(&mut self.doc, node, ratio);
            }
        }
        commands
    }
}
