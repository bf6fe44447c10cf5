//! Theme switching with a persisted preference.

use tracing::warn;

use crate::config::{PreferenceStore, ThemePreference};
use crate::dom::{Document, NodeId};
use crate::page::markers;

/// Glyph shown on the toggle in light mode.
const LIGHT_ICON: &str = "🌞";
/// Glyph shown on the toggle in dark mode.
const DARK_ICON: &str = "🌙";

/// Returns true if the OS reports a light appearance preference.
///
/// Uses the `dark-light` crate; unspecified or failed detection counts as
/// dark, which is the implicit default theme.
#[must_use]
pub fn system_prefers_light() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
}

/// Applies and toggles the presentation theme.
///
/// The effective theme lives on the root element as a `data-theme`
/// attribute: `"light"` for light mode, absent for dark. Initial resolution
/// is stored preference, else the OS light preference, else dark; only an
/// explicit toggle persists a value.
#[derive(Debug)]
pub struct ThemeController {
    root: NodeId,
    toggle: Option<NodeId>,
}

impl ThemeController {
    /// Resolves the initial theme, applies it to the document, and paints
    /// the toggle icon.
    ///
    /// `session_override` (from the command line) takes precedence over the
    /// stored preference for this session and is never persisted.
    pub fn init(
        doc: &mut Document,
        store: &dyn PreferenceStore,
        system_light: bool,
        session_override: Option<ThemePreference>,
    ) -> Self {
        let root = doc.root();
        let toggle = doc.by_id(markers::THEME_TOGGLE_ID);

        let initial = session_override.or_else(|| store.theme()).unwrap_or(if system_light {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        });
        if initial == ThemePreference::Light {
            doc.set_attr(root, markers::DATA_THEME_ATTR, markers::LIGHT_THEME_VALUE);
        }

        let controller = Self { root, toggle };
        controller.paint_icon(doc);
        controller
    }

    /// The theme currently applied to the document.
    #[must_use]
    pub fn current(&self, doc: &Document) -> ThemePreference {
        if doc.attr(self.root, markers::DATA_THEME_ATTR) == Some(markers::LIGHT_THEME_VALUE) {
            ThemePreference::Light
        } else {
            ThemePreference::Dark
        }
    }

    /// Handles a click; returns true if it landed on the toggle control.
    ///
    /// Flips the theme, persists the new value, and repaints the icon. A
    /// failed persist is logged and otherwise ignored; the in-document
    /// theme has already changed.
    pub fn handle_click(
        &self,
        doc: &mut Document,
        store: &mut dyn PreferenceStore,
        target: NodeId,
    ) -> bool {
        let Some(toggle) = self.toggle else {
            return false;
        };
        if !doc.contains(toggle, target) {
            return false;
        }

        let next = self.current(doc).flipped();
        match next {
            ThemePreference::Light => {
                doc.set_attr(self.root, markers::DATA_THEME_ATTR, markers::LIGHT_THEME_VALUE);
            }
            ThemePreference::Dark => doc.remove_attr(self.root, markers::DATA_THEME_ATTR),
        }
        if let Err(err) = store.set_theme(next) {
            warn!("Failed to persist theme preference: {err:#}");
        }
        self.paint_icon(doc);
        true
    }

    fn paint_icon(&self, doc: &mut Document) {
        if let Some(toggle) = self.toggle {
            let icon = if self.current(doc) == ThemePreference::Light {
                LIGHT_ICON
            } else {
                DARK_ICON
            };
            doc.set_text(toggle, icon);
        }
    }
}
