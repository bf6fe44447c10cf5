//! Builds a [`Document`] carrying the marker structure from a [`PageManifest`].

use crate::dom::{Document, Element, NodeId};

use super::manifest::PageManifest;
use super::markers;

/// Capitalizes the first character of a category id for use as a button label.
fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Builds the page document.
///
/// The produced tree carries every marker the behavior components look for:
/// header with nav toggle, menu, and theme toggle; one section per manifest
/// section; the `projects` section with filter bar, status line, group
/// headings, and card grids; and a footer with year display and back-to-top
/// control. Pages without project groups simply omit the filter section, and
/// the filter component degrades to a no-op.
#[must_use]
pub fn build(manifest: &PageManifest) -> Document {
    let mut doc = Document::new();
    let root = doc.root();

    build_header(&mut doc, root, manifest);

    let main = doc.append(root, Element::new("main"));
    build_home(&mut doc, main, manifest);
    for section in &manifest.sections {
        let el = doc.append(
            main,
            Element::new("section")
                .id(&section.id)
                .class(markers::REVEAL_CLASS),
        );
        doc.append(el, Element::new("h2").text(&section.heading));
        doc.append(el, Element::new("p").text(&section.body));
    }
    if !manifest.projects.is_empty() {
        build_projects(&mut doc, main, manifest);
    }

    build_footer(&mut doc, root);
    doc
}

fn build_header(doc: &mut Document, root: NodeId, manifest: &PageManifest) {
    let header = doc.append(root, Element::new("header").class("site-header"));
    doc.append(
        header,
        Element::new("span").class("brand").text(&manifest.title),
    );
    doc.append(
        header,
        Element::new("button")
            .class(markers::NAV_TOGGLE_CLASS)
            .attr(markers::ARIA_EXPANDED_ATTR, "false")
            .text("Menu"),
    );
    let menu = doc.append(header, Element::new("nav").id(markers::MENU_ID));
    for link in &manifest.nav {
        doc.append(
            menu,
            Element::new("a")
                .attr("href", format!("#{}", link.target))
                .text(&link.label),
        );
    }
    doc.append(header, Element::new("button").id(markers::THEME_TOGGLE_ID));
}

fn build_home(doc: &mut Document, main: NodeId, manifest: &PageManifest) {
    let home = doc.append(
        main,
        Element::new("section").id("home").class(markers::REVEAL_CLASS),
    );
    doc.append(home, Element::new("h1").text(&manifest.title));
    if !manifest.tagline.is_empty() {
        doc.append(home, Element::new("p").text(&manifest.tagline));
    }
}

fn build_projects(doc: &mut Document, main: NodeId, manifest: &PageManifest) {
    let section = doc.append(
        main,
        Element::new("section")
            .id(markers::PROJECTS_ID)
            .class(markers::REVEAL_CLASS),
    );
    doc.append(section, Element::new("h2").text("Projects"));

    // Filter bar: the "all" button first and marked active, then one button
    // per category in first-appearance order. Counts are painted at init.
    let bar = doc.append(section, Element::new("div").class(markers::FILTERS_CLASS));
    append_filter_button(doc, bar, markers::ALL_FILTER, "All", true);
    for category in manifest.categories() {
        let label = title_case(&category);
        append_filter_button(doc, bar, &category, &label, false);
    }

    doc.append(
        section,
        Element::new("p")
            .class(markers::FILTERS_STATUS_CLASS)
            .attr("aria-live", "polite"),
    );

    for group in &manifest.projects {
        doc.append(section, Element::new("h3").text(&group.heading));
        let grid = doc.append(
            section,
            Element::new("div").classes(&markers::GRID_CLASSES.join(" ")),
        );
        for card in &group.cards {
            let mut el = Element::new("article").class(markers::CARD_CLASS);
            if let Some(category) = &card.category {
                el = el.attr(markers::DATA_CATEGORY_ATTR, category);
            }
            let card_el = doc.append(grid, el);
            doc.append(card_el, Element::new("h4").text(&card.title));
            doc.append(card_el, Element::new("p").text(&card.summary));
        }
    }
}

fn append_filter_button(doc: &mut Document, bar: NodeId, filter: &str, label: &str, active: bool) {
    let mut el = Element::new("button")
        .class(markers::FILTER_BTN_CLASS)
        .attr(markers::DATA_FILTER_ATTR, filter)
        .attr(markers::ARIA_SELECTED_ATTR, if active { "true" } else { "false" })
        .attr(markers::ARIA_PRESSED_ATTR, if active { "true" } else { "false" });
    if active {
        el = el.class(markers::ACTIVE_CLASS);
    }
    let btn = doc.append(bar, el);
    doc.append(btn, Element::new("span").class(markers::LABEL_CLASS).text(label));
    doc.append(btn, Element::new("span").class(markers::FILTER_COUNT_CLASS));
}

fn build_footer(doc: &mut Document, root: NodeId) {
    let footer = doc.append(root, Element::new("footer"));
    doc.append(footer, Element::new("span").id(markers::YEAR_ID));
    doc.append(
        footer,
        Element::new("button")
            .id(markers::TO_TOP_ID)
            .class("to-top")
            .text("↑ Top"),
    );
}
