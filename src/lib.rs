//! Folio Library
//!
//! This library provides the core functionality for the Folio terminal
//! portfolio viewer: the in-memory document tree, page manifests, the
//! behavior components (theme, navigation, scroll effects, project filter),
//! and the event runtime that wires them together.

// Module declarations
pub mod components;
pub mod config;
pub mod constants;
pub mod dom;
pub mod page;
pub mod runtime;
pub mod tui;
