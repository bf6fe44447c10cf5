//! Renders the page document into styled lines.
//!
//! The layout pass is pure: it walks the document, honors the state classes
//! the components maintain (`open`, `is-hidden`, `show`, `visible`), and
//! records the row extent of every reveal element so the event loop can
//! report viewport visibility back to the scroll-effects component.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use std::ops::Range;

use crate::dom::{Document, NodeId};
use crate::page::markers;

use super::theme::Theme;

/// Result of one layout pass over the document.
pub struct RenderedPage {
    /// Styled content lines, top to bottom
    pub lines: Vec<Line<'static>>,
    /// Row extent of every reveal element, in document order
    pub reveal_rows: Vec<(NodeId, Range<usize>)>,
}

/// Lays the document out as lines.
#[must_use]
pub fn layout_page(doc: &Document, theme: &Theme) -> RenderedPage {
    let mut page = RenderedPage {
        lines: Vec::new(),
        reveal_rows: Vec::new(),
    };

    let children = doc.node(doc.root()).children.clone();
    for child in children {
        match doc.node(child).tag.as_str() {
            "header" => push_header(doc, child, theme, &mut page),
            "main" => push_main(doc, child, theme, &mut page),
            "footer" => push_footer(doc, child, theme, &mut page),
            _ => {}
        }
    }

    page
}

/// Style for an element's body text, dimmed until its reveal has fired.
fn body_style(doc: &Document, el: NodeId, theme: &Theme) -> Style {
    if unrevealed(doc, el) {
        Style::default().fg(theme.text_muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(theme.text)
    }
}

fn heading_style(doc: &Document, el: NodeId, theme: &Theme) -> Style {
    if unrevealed(doc, el) {
        Style::default().fg(theme.text_muted).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
    }
}

fn unrevealed(doc: &Document, el: NodeId) -> bool {
    let node = doc.node(el);
    node.has_class(markers::REVEAL_CLASS) && !node.has_class(markers::VISIBLE_CLASS)
}

fn push_header(doc: &Document, header: NodeId, theme: &Theme, page: &mut RenderedPage) {
    let brand = doc
        .select_class(header, "brand")
        .first()
        .map(|&b| doc.node(b).text.clone())
        .unwrap_or_default();
    let icon = doc
        .by_id(markers::THEME_TOGGLE_ID)
        .map(|t| doc.node(t).text.clone())
        .unwrap_or_default();

    page.lines.push(Line::from(vec![
        Span::styled(
            brand,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[m] Menu", Style::default().fg(theme.text_secondary)),
        Span::raw("  "),
        Span::styled(icon, Style::default().fg(theme.accent)),
    ]));

    // Menu links are only laid out while the menu is open
    if let Some(menu) = doc.by_id(markers::MENU_ID) {
        if doc.node(menu).has_class(markers::OPEN_CLASS) {
            for link in doc.select_tag(menu, "a") {
                page.lines.push(Line::from(Span::styled(
                    format!("  ▸ {}", doc.node(link).text),
                    Style::default().fg(theme.text_secondary),
                )));
            }
        }
    }
}

fn push_main(doc: &Document, main: NodeId, theme: &Theme, page: &mut RenderedPage) {
    let sections = doc.node(main).children.clone();
    for section in sections {
        page.lines.push(Line::default());
        let start = page.lines.len();

        if doc.node(section).id.as_deref() == Some(markers::PROJECTS_ID) {
            push_projects(doc, section, theme, page);
        } else {
            push_section(doc, section, theme, page);
        }

        if doc.node(section).has_class(markers::REVEAL_CLASS) {
            page.reveal_rows.push((section, start..page.lines.len()));
        }
    }
}

fn push_section(doc: &Document, section: NodeId, theme: &Theme, page: &mut RenderedPage) {
    let heading = heading_style(doc, section, theme);
    let body = body_style(doc, section, theme);

    let children = doc.node(section).children.clone();
    for child in children {
        let node = doc.node(child);
        match node.tag.as_str() {
            "h1" | "h2" => page
                .lines
                .push(Line::from(Span::styled(node.text.clone(), heading))),
            "p" if !node.text.is_empty() => page
                .lines
                .push(Line::from(Span::styled(node.text.clone(), body))),
            _ => {}
        }
    }
}

fn push_projects(doc: &Document, section: NodeId, theme: &Theme, page: &mut RenderedPage) {
    let heading = heading_style(doc, section, theme);
    let body = body_style(doc, section, theme);

    let children = doc.node(section).children.clone();
    for child in children {
        let node = doc.node(child);
        match node.tag.as_str() {
            "h2" => page
                .lines
                .push(Line::from(Span::styled(node.text.clone(), heading))),
            "div" if node.has_class(markers::FILTERS_CLASS) => {
                page.lines.push(filter_bar_line(doc, child, theme));
            }
            "p" if node.has_class(markers::FILTERS_STATUS_CLASS) => {
                page.lines.push(Line::from(Span::styled(
                    node.text.clone(),
                    Style::default()
                        .fg(theme.text_muted)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
            "h3" if !node.has_class(markers::IS_HIDDEN_CLASS) => {
                page.lines.push(Line::default());
                page.lines.push(Line::from(Span::styled(
                    node.text.clone(),
                    Style::default()
                        .fg(theme.text_secondary)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            "div"
                if markers::GRID_CLASSES.iter().all(|c| node.has_class(c))
                    && !node.has_class(markers::IS_HIDDEN_CLASS) =>
            {
                for card in doc.select_class(child, markers::CARD_CLASS) {
                    if doc.node(card).has_class(markers::IS_HIDDEN_CLASS) {
                        continue;
                    }
                    page.lines.push(card_line(doc, card, theme, body));
                }
            }
            _ => {}
        }
    }
}

/// One line with every filter button: `[1] All 5   [2] Web 2 ...`, the
/// active one highlighted.
fn filter_bar_line(doc: &Document, bar: NodeId, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, btn) in doc
        .select_class(bar, markers::FILTER_BTN_CLASS)
        .into_iter()
        .enumerate()
    {
        let label = doc
            .select_class(btn, markers::LABEL_CLASS)
            .first()
            .map(|&l| doc.node(l).text.clone())
            .unwrap_or_default();
        let count = doc
            .select_class(btn, markers::FILTER_COUNT_CLASS)
            .first()
            .map(|&c| doc.node(c).text.clone())
            .unwrap_or_default();

        let style = if doc.node(btn).has_class(markers::ACTIVE_CLASS) {
            Style::default()
                .fg(theme.accent)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };

        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("[{}] {label} {count}", i + 1), style));
    }
    Line::from(spans)
}

fn card_line(doc: &Document, card: NodeId, theme: &Theme, body: Style) -> Line<'static> {
    let title = doc
        .select_tag(card, "h4")
        .first()
        .map(|&t| doc.node(t).text.clone())
        .unwrap_or_default();
    let summary = doc
        .select_tag(card, "p")
        .first()
        .map(|&p| doc.node(p).text.clone())
        .unwrap_or_default();
    let category = doc
        .attr(card, markers::DATA_CATEGORY_ATTR)
        .unwrap_or(markers::DEFAULT_CATEGORY);

    let mut spans = vec![
        Span::styled("  ▪ ".to_string(), body),
        Span::styled(title, body.add_modifier(Modifier::BOLD)),
    ];
    if !summary.is_empty() {
        spans.push(Span::styled(format!(" · {summary}"), body));
    }
    spans.push(Span::styled(
        format!(" ({category})"),
        Style::default().fg(theme.text_muted),
    ));
    Line::from(spans)
}

fn push_footer(doc: &Document, footer: NodeId, theme: &Theme, page: &mut RenderedPage) {
    let year = doc
        .descendants(footer)
        .into_iter()
        .find(|&n| doc.node(n).id.as_deref() == Some(markers::YEAR_ID))
        .map(|y| doc.node(y).text.clone())
        .unwrap_or_default();

    page.lines.push(Line::default());
    page.lines.push(Line::from(Span::styled(
        format!("© {year}"),
        Style::default().fg(theme.text_muted),
    )));
}
