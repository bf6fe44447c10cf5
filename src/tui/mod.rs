//! Terminal user interface and event loop.
//!
//! This module contains the main TUI loop, `AppState`, key handling, and
//! the rendering of the page document using Ratatui. Key input is
//! translated into page events (clicks on marker elements, scroll offset
//! changes, viewport visibility reports) and dispatched through the
//! runtime; rendering reads only the document.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]

pub mod theme;
pub mod view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout as RatatuiLayout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::constants::{APP_NAME, UNITS_PER_ROW};
use crate::page::markers;
use crate::runtime::{HostCommand, PageEvent, Runtime};

pub use theme::Theme;
pub use view::RenderedPage;

/// Application state - single source of truth besides the document itself.
///
/// Everything the page shows lives in the document; the state here is only
/// what the host environment owns: the scroll position and the loop flags.
pub struct AppState {
    /// Page runtime (document + behavior components)
    pub runtime: Runtime,
    /// Current scroll offset, in rows
    pub scroll_row: usize,
    /// Target row for an in-progress smooth scroll
    pub scroll_target: Option<usize>,
    /// Content viewport height measured at the last render
    pub viewport_rows: usize,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state around an initialized runtime.
    #[must_use]
    pub fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            scroll_row: 0,
            scroll_target: None,
            viewport_rows: 24,
            should_quit: false,
        }
    }

    /// Reports the current scroll offset and every reveal element's visible
    /// fraction to the components.
    ///
    /// Safe to call every frame: the scroll handler re-evaluates from
    /// scratch and reveal reports are one-directional.
    pub fn report_scroll(&mut self, page: &RenderedPage) {
        self.runtime
            .dispatch(PageEvent::Scroll(self.scroll_row as u32 * UNITS_PER_ROW));

        let top = self.scroll_row;
        let bottom = top + self.viewport_rows;
        for (node, range) in &page.reveal_rows {
            let len = range.len().max(1);
            let visible_start = range.start.max(top);
            let visible_end = range.end.min(bottom);
            let visible = visible_end.saturating_sub(visible_start);
            self.runtime.dispatch(PageEvent::Viewport {
                node: *node,
                ratio: visible as f64 / len as f64,
            });
        }
    }

    fn apply_commands(&mut self, commands: Vec<HostCommand>) {
        for command in commands {
            match command {
                HostCommand::ScrollToTop => self.scroll_target = Some(0),
            }
        }
    }

    /// Advances an in-progress smooth scroll by one frame; returns true if
    /// the offset changed.
    fn step_smooth_scroll(&mut self) -> bool {
        let Some(target) = self.scroll_target else {
            return false;
        };
        if self.scroll_row == target {
            self.scroll_target = None;
            return false;
        }
        let distance = self.scroll_row.abs_diff(target);
        let step = (distance / 3).max(1);
        if self.scroll_row > target {
            self.scroll_row -= step;
        } else {
            self.scroll_row += step;
        }
        true
    }

    fn click(&mut self, node: crate::dom::NodeId) {
        let commands = self.runtime.dispatch(PageEvent::Click(node));
        self.apply_commands(commands);
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Palette follows whatever theme the component applied to the document
        let ui_theme = Theme::from_document(state.runtime.document());
        let page = view::layout_page(state.runtime.document(), &ui_theme);

        // Clamp and ease the scroll position, then let the components see it
        let max_row = page.lines.len().saturating_sub(1);
        state.scroll_row = state.scroll_row.min(max_row);
        state.step_smooth_scroll();
        state.report_scroll(&page);

        terminal.draw(|f| render(f, state, &ui_theme, &page))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handles one key press; returns true when the user quit.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let doc = state.runtime.document();
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('t') => {
            if let Some(toggle) = doc.by_id(markers::THEME_TOGGLE_ID) {
                state.click(toggle);
            }
        }
        KeyCode::Char('m') => {
            if let Some(&toggle) = doc.select_class(doc.root(), markers::NAV_TOGGLE_CLASS).first() {
                state.click(toggle);
            }
        }
        KeyCode::Char('g') | KeyCode::Home => {
            // The back-to-top control, when present, answers with a smooth
            // scroll command; otherwise jump directly.
            match doc.by_id(markers::TO_TOP_ID) {
                Some(to_top) => state.click(to_top),
                None => state.scroll_target = Some(0),
            }
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            let buttons = doc.select_class(doc.root(), markers::FILTER_BTN_CLASS);
            if let Some(&btn) = buttons.get(index) {
                state.click(btn);
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_target = None;
            state.scroll_row = state.scroll_row.saturating_add(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_target = None;
            state.scroll_row = state.scroll_row.saturating_sub(1);
        }
        KeyCode::PageDown => {
            state.scroll_target = None;
            state.scroll_row = state.scroll_row.saturating_add(state.viewport_rows);
        }
        KeyCode::PageUp => {
            state.scroll_target = None;
            state.scroll_row = state.scroll_row.saturating_sub(state.viewport_rows);
        }
        KeyCode::End => {
            state.scroll_target = None;
            state.scroll_row = usize::MAX / 2; // clamped on the next frame
        }
        _ => {}
    }
    Ok(false)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &mut AppState, theme: &Theme, page: &RenderedPage) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(5),    // Page content
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    let title = Line::from(vec![Span::styled(
        format!(" {APP_NAME} "),
        Style::default()
            .fg(theme.background)
            .bg(theme.primary)
            .add_modifier(Modifier::BOLD),
    )]);
    f.render_widget(Paragraph::new(title), chunks[0]);

    state.viewport_rows = chunks[1].height as usize;
    let content = Paragraph::new(page.lines.clone())
        .style(Style::default().bg(theme.background))
        .scroll((state.scroll_row as u16, 0));
    f.render_widget(content, chunks[1]);

    f.render_widget(Paragraph::new(status_line(state, theme)), chunks[2]);
}

fn status_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let mut spans = vec![Span::styled(
        " q quit · t theme · m menu · 1-9 filter · j/k scroll".to_string(),
        Style::default().fg(theme.text_muted).bg(theme.surface),
    )];

    let doc = state.runtime.document();
    let show_to_top = doc
        .by_id(markers::TO_TOP_ID)
        .is_some_and(|t| doc.node(t).has_class(markers::SHOW_CLASS));
    if show_to_top {
        spans.push(Span::styled(
            " · g ↑ top".to_string(),
            Style::default()
                .fg(theme.accent)
                .bg(theme.surface)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
