//! Anime details page
//!
//! Shows an anime already present in one of the loaded lists. There is no
//! per-anime request; an id that isn't loaded gets a hint instead.

use libanidex::{Anime, ContextValue};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{empty_message, fg};
use crate::app::UiState;

pub(crate) const NOT_LOADED_HINT: &str =
    "Not in any loaded list. Open it from the home page, or press g to go to another route.";

/// Number of lines the details page has for `anime`, the scroll limit
pub fn detail_line_count(anime: &Anime) -> usize {
    details(&UiState::new(), anime).len()
}

pub(super) fn render(frame: &mut Frame, area: Rect, state: &UiState, context: &ContextValue, id: u64) {
    let Some(anime) = context.state.find_anime(id) else {
        let block = Block::default().title(format!(" Anime #{} ", id)).borders(Borders::ALL);
        let hint = NOT_LOADED_HINT;
        frame.render_widget(empty_message(state, context.state.loading, hint).block(block), area);
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", anime.display_title()))
        .borders(Borders::ALL);

    let widget = Paragraph::new(details(state, anime))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.selected.min(u16::MAX as usize) as u16, 0));

    frame.render_widget(widget, area);
}

fn details<'a>(state: &UiState, anime: &'a Anime) -> Vec<Line<'a>> {
    let label = |name: &'static str| Span::styled(format!("{:<12}", name), fg(state, Color::Cyan));
    let mut lines = Vec::new();

    let mut field = |name: &'static str, value: Option<String>| {
        if let Some(value) = value {
            lines.push(Line::from(vec![label(name), Span::raw(value)]));
        }
    };

    field("Title", Some(anime.title.clone()));
    field("Japanese", anime.title_japanese.clone());
    field("Score", anime.score.map(|s| match anime.scored_by {
        Some(by) => format!("{:.2} ({} users)", s, by),
        None => format!("{:.2}", s),
    }));
    field("Rank", anime.rank.map(|r| format!("#{}", r)));
    field("Popularity", anime.popularity.map(|p| format!("#{}", p)));
    field("Members", anime.members.map(|m| m.to_string()));
    field("Status", anime.status.clone());
    field("Episodes", anime.episodes.map(|e| e.to_string()));
    field("Duration", anime.duration.clone());
    field("Aired", anime.aired.as_ref().and_then(|a| a.string.clone()));
    field(
        "Season",
        match (&anime.season, anime.year) {
            (Some(season), Some(year)) => Some(format!("{} {}", season, year)),
            (None, Some(year)) => Some(year.to_string()),
            _ => None,
        },
    );
    field("Rating", anime.rating.clone());
    field("Source", anime.source.clone());
    field("Genres", join_names(anime.genres.iter().map(|g| g.name.as_str())));
    field("Studios", join_names(anime.studios.iter().map(|s| s.name.as_str())));
    field("Trailer", anime.trailer.as_ref().and_then(|t| t.url.clone()));
    field("Poster", anime.poster_url().map(str::to_string));

    if let Some(ref synopsis) = anime.synopsis {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Synopsis", Style::default().add_modifier(Modifier::BOLD))));
        lines.extend(synopsis.lines().map(Line::from));
    }

    if let Some(ref background) = anime.background {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Background", Style::default().add_modifier(Modifier::BOLD))));
        lines.extend(background.lines().map(Line::from));
    }

    lines
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = names.collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}
