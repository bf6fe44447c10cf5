//! The fixed id/class/attribute markers shared by the page builder and the
//! behavior components.
//!
//! These are contract, not configuration: a document that wants a behavior
//! carries the corresponding marker.

// Element ids
/// Theme toggle control
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
/// Navigation menu container
pub const MENU_ID: &str = "menu";
/// "Back to top" control
pub const TO_TOP_ID: &str = "to-top";
/// Current-year display element
pub const YEAR_ID: &str = "year";
/// Project filter section
pub const PROJECTS_ID: &str = "projects";

// Structural classes
/// Navigation toggle control
pub const NAV_TOGGLE_CLASS: &str = "nav-toggle";
/// Filter button bar
pub const FILTERS_CLASS: &str = "filters";
/// Individual filter button
pub const FILTER_BTN_CLASS: &str = "filter-btn";
/// Count sub-element inside a filter button
pub const FILTER_COUNT_CLASS: &str = "filter-count";
/// Label sub-element inside a filter button
pub const LABEL_CLASS: &str = "label";
/// Filter result status line
pub const FILTERS_STATUS_CLASS: &str = "filters-status";
/// Project card
pub const CARD_CLASS: &str = "card";
/// Card grid (all three classes are required)
pub const GRID_CLASSES: [&str; 3] = ["grid", "three", "cards"];
/// Element that receives a reveal animation
pub const REVEAL_CLASS: &str = "reveal";

// State classes
/// Menu is open
pub const OPEN_CLASS: &str = "open";
/// Back-to-top control is shown
pub const SHOW_CLASS: &str = "show";
/// Reveal animation has fired
pub const VISIBLE_CLASS: &str = "visible";
/// Filter button is the active one
pub const ACTIVE_CLASS: &str = "active";
/// Element is hidden by the filter
pub const IS_HIDDEN_CLASS: &str = "is-hidden";

// Attributes
/// Presentation attribute on the root element ("light" or absent)
pub const DATA_THEME_ATTR: &str = "data-theme";
/// Category tag on a card
pub const DATA_CATEGORY_ATTR: &str = "data-category";
/// Category filter on a button
pub const DATA_FILTER_ATTR: &str = "data-filter";
/// Menu expanded state on the nav toggle
pub const ARIA_EXPANDED_ATTR: &str = "aria-expanded";
/// Filter button selected state
pub const ARIA_SELECTED_ATTR: &str = "aria-selected";
/// Filter button pressed state
pub const ARIA_PRESSED_ATTR: &str = "aria-pressed";

// Reserved values
/// Sentinel filter meaning "no filter"
pub const ALL_FILTER: &str = "all";
/// Category assigned to cards without a category attribute
pub const DEFAULT_CATEGORY: &str = "other";
/// Value of the theme attribute in light mode
pub const LIGHT_THEME_VALUE: &str = "light";
