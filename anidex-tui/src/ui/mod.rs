//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! Each page reads the provider snapshot passed in; nothing here mutates
//! state.

mod anime;
mod gallery;
mod home;

use libanidex::ContextValue;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use tui_textarea::TextArea;

use crate::app::{InputMode, UiState};
use crate::router::Route;

pub use anime::detail_line_count;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Render the application UI
///
/// Main rendering entry point. The search box is owned by the event loop
/// because tui-textarea keeps its own cursor state.
pub fn render(frame: &mut Frame, state: &UiState, context: &ContextValue, search_box: &TextArea) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Page
            Constraint::Length(1), // Status line
        ])
        .split(area);

    match state.route {
        Route::Home => home::render(frame, chunks[0], state, context, search_box),
        Route::Anime(id) => anime::render(frame, chunks[0], state, context, id),
        Route::Character(id) => gallery::render(frame, chunks[0], state, context, id),
    }

    render_status_line(frame, chunks[1], state, context);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref warning) = state.warning {
        render_warning_overlay(frame, area, warning);
    }
}

/// Style helper that honours NO_COLOR
pub(crate) fn fg(state: &UiState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default()
    }
}

/// Placeholder for an empty list
pub(crate) fn empty_message(state: &UiState, loading: bool, empty: &str) -> Paragraph<'static> {
    let text = if loading { "Loading...".to_string() } else { empty.to_string() };
    Paragraph::new(vec![Line::from(""), Line::from(Span::styled(text, fg(state, Color::Yellow)))])
        .alignment(Alignment::Center)
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &UiState, context: &ContextValue) {
    let mut spans = Vec::new();

    if context.state.loading {
        let frame_index = (state.tick % SPINNER.len() as u64) as usize;
        spans.push(Span::styled(
            format!("{} Loading ", SPINNER[frame_index]),
            fg(state, Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(format!("{} ", state.route), fg(state, Color::Cyan)));

    match state.mode {
        InputMode::Goto => {
            spans.push(Span::raw("Go to: "));
            spans.push(Span::styled(
                format!("{}_", state.goto_input),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }
        InputMode::Search => spans.push(Span::styled(
            "Enter: search | Esc: cancel",
            fg(state, Color::Gray),
        )),
        InputMode::Normal => spans.push(Span::styled(hints(state.route), fg(state, Color::Gray))),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hints(route: Route) -> &'static str {
    match route {
        Route::Home => "1-3/Tab: tabs | /: search | Enter: open | g: go to | F1: help | q: quit",
        Route::Anime(_) | Route::Character(_) => "Esc: back | r: reload | g: go to | F1: help | q: quit",
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  q          - Quit"),
        Line::from("  F1 / ?     - Toggle help"),
        Line::from("  g          - Go to a route (/anime/20, /character/17)"),
        Line::from("  j/k, Up/Dn - Move cursor"),
        Line::from(""),
        Line::from("Home:"),
        Line::from("  1 2 3, Tab - Popular / Airing / Upcoming"),
        Line::from("  r          - Reload tab"),
        Line::from("  /          - Search"),
        Line::from("  Enter      - Open anime"),
        Line::from(""),
        Line::from("Anime and gallery pages:"),
        Line::from("  Esc, b     - Back"),
        Line::from("  r          - Reload"),
        Line::from(""),
        Line::from("Anime pages show entries from the loaded lists."),
        Line::from("Character galleries open with g, e.g. /character/17"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render warning overlay
fn render_warning_overlay(frame: &mut Frame, area: Rect, warning: &str) {
    let popup_area = centered_rect(50, 25, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(warning, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Warning ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(widget, popup_area);
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
