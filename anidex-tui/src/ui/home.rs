//! Home page: search box, tab buttons and the anime list
//!
//! The search box border is styled by the event loop, which owns it.

use libanidex::{Anime, ContextValue};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Tabs},
    Frame,
};
use tui_textarea::TextArea;

use super::{empty_message, fg};
use crate::app::{visible_anime, HomeTab, UiState};

pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    state: &UiState,
    context: &ContextValue,
    search_box: &TextArea,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search box
            Constraint::Length(3), // Tabs
            Constraint::Min(3),    // List
        ])
        .split(area);

    frame.render_widget(search_box.widget(), chunks[0]);

    let titles: Vec<Line> = HomeTab::ALL.iter().map(|tab| Line::from(tab.label())).collect();
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL))
        .select(state.tab.index())
        .highlight_style(fg(state, Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[1]);

    let app = &context.state;
    let list = visible_anime(state, app);
    let title = if state.tab == HomeTab::Popular && app.is_search {
        format!(" Search results for \"{}\" ", context.search)
    } else {
        format!(" {} ", state.tab.label())
    };
    let block = Block::default().title(title).borders(Borders::ALL);

    if list.is_empty() {
        frame.render_widget(empty_message(state, app.loading, "Nothing here yet").block(block), chunks[2]);
        return;
    }

    let items: Vec<ListItem> = list.iter().map(|anime| ListItem::new(row(state, anime))).collect();
    let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(list.len() - 1)));
    frame.render_stateful_widget(widget, chunks[2], &mut list_state);
}

fn row<'a>(state: &UiState, anime: &'a Anime) -> Line<'a> {
    let mut spans = vec![Span::styled(anime.display_title(), Style::default().add_modifier(Modifier::BOLD))];

    if let Some(score) = anime.score {
        spans.push(Span::styled(format!("  {:.2}", score), fg(state, Color::Yellow)));
    }
    if let Some(episodes) = anime.episodes {
        spans.push(Span::raw(format!("  {} eps", episodes)));
    }
    if let Some(ref status) = anime.status {
        spans.push(Span::styled(format!("  {}", status), fg(state, Color::Gray)));
    }

    Line::from(spans)
}
