//! Behavior components.
//!
//! Four independent initializers attach to the page document: theme
//! switching, the collapsible navigation menu, scroll effects, and the
//! project category filter. Each one locates its marker elements once at
//! construction, tolerates any of them being absent (degrading to a no-op),
//! and mutates only classes, attributes, and text. They share no state with
//! each other; the document tree is the single source of truth.

pub mod effects;
pub mod filters;
pub mod nav;
pub mod theme;

pub use effects::ScrollEffects;
pub use filters::ProjectFilterController;
pub use nav::NavController;
pub use theme::{system_prefers_light, ThemeController};
