//! Theme system for consistent UI colors across dark and light modes.
//!
//! The palette is selected from the document's presentation attribute each
//! frame, so whatever the theme component decides is what gets rendered.

use ratatui::style::Color;

use crate::dom::Document;
use crate::page::markers;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across the rendered page with support for
/// both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary color for headings, borders, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and the active filter
    pub accent: Color,
    /// Primary text content color
    pub text: Color,
    /// Secondary text color for labels and less important content
    pub text_secondary: Color,
    /// Muted text color for help text and unrevealed content
    pub text_muted: Color,
    /// Main background color
    pub background: Color,
    /// Surface color for panels and the status bar
    pub surface: Color,
    /// Highlight/selection background color
    pub highlight_bg: Color,
}

impl Theme {
    /// Selects the palette matching the document's presentation attribute.
    ///
    /// `data-theme="light"` on the root selects the light palette; anything
    /// else (including the attribute being absent) selects dark.
    #[must_use]
    pub fn from_document(doc: &Document) -> Self {
        if doc.attr(doc.root(), markers::DATA_THEME_ATTR) == Some(markers::LIGHT_THEME_VALUE) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            text: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
            highlight_bg: Color::DarkGray,
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Uses darker colors for text and UI elements so everything stays
    /// readable on a white background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            text: Color::Black,
            text_secondary: Color::Rgb(60, 60, 60),
            text_muted: Color::Gray,
            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
            highlight_bg: Color::Rgb(230, 230, 230),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
