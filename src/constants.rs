//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the tuning values shared by the
//! scroll-effect component and the terminal front end.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Folio";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "folio";

/// Scroll offset (in layout units) past which the "back to top" control is shown.
pub const SCROLL_TOP_THRESHOLD: u32 = 600;

/// Fraction of an element that must be inside the viewport before it is revealed.
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.12;

/// Layout units represented by one rendered text row.
///
/// Scroll offsets are measured in abstract layout units rather than rows so
/// the reveal and back-to-top thresholds stay independent of terminal size.
pub const UNITS_PER_ROW: u32 = 24;
