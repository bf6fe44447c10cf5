//! Page manifests and document construction.
//!
//! A page is described by a small manifest (TOML or JSON) and built into a
//! [`Document`](crate::dom::Document) carrying the fixed id/class marker
//! structure the behavior components are written against. The markers are
//! the effective interface of the crate: components tolerate any of them
//! being absent and degrade to no-ops.

pub mod builder;
pub mod manifest;
pub mod markers;

pub use builder::build;
pub use manifest::{CardManifest, NavLink, PageManifest, ProjectGroup, SectionManifest};
