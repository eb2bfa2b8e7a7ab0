//! Character gallery page
//!
//! Lists the picture URLs of the character in the route. Pictures are
//! requested when the page is navigated to.

use libanidex::ContextValue;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::{empty_message, fg};
use crate::app::UiState;

pub(super) fn render(frame: &mut Frame, area: Rect, state: &UiState, context: &ContextValue, id: u64) {
    let pictures = &context.state.pictures;
    let block = Block::default()
        .title(format!(" Character #{} - {} pictures ", id, pictures.len()))
        .borders(Borders::ALL);

    if pictures.is_empty() {
        frame.render_widget(empty_message(state, context.state.loading, "No pictures").block(block), area);
        return;
    }

    let items: Vec<ListItem> = pictures
        .iter()
        .enumerate()
        .map(|(i, picture)| {
            let url = picture.url().unwrap_or("(no url)");
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>3}. ", i + 1), fg(state, Color::DarkGray)),
                Span::raw(url),
            ]))
        })
        .collect();

    let widget = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(pictures.len() - 1)));
    frame.render_stateful_widget(widget, area, &mut list_state);
}
