//! URL-style routes for the three pages
//!
//! `/` is the home page, `/anime/:id` an anime's details and
//! `/character/:id` a character's picture gallery.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Anime(u64),
    Character(u64),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No page at '{0}'")]
    NotFound(String),

    #[error("Invalid id '{id}' in '{path}'")]
    InvalidId { path: String, id: String },
}

impl Route {
    /// Parse a path such as `/anime/20`
    ///
    /// Query strings, fragments and trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = without_query.split('/').filter(|s| !s.is_empty()).collect();

        let parse_id = |id: &str| {
            id.parse::<u64>().map_err(|_| RouteError::InvalidId {
                path: trimmed.to_string(),
                id: id.to_string(),
            })
        };

        match segments.as_slice() {
            [] => Ok(Route::Home),
            ["anime", id] => Ok(Route::Anime(parse_id(id)?)),
            ["character", id] => Ok(Route::Character(parse_id(id)?)),
            _ => Err(RouteError::NotFound(trimmed.to_string())),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Route::Home => "Anime".to_string(),
            Route::Anime(id) => format!("Anime #{}", id),
            Route::Character(id) => format!("Character #{} pictures", id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::Anime(id) => write!(f, "/anime/{}", id),
            Route::Character(id) => write!(f, "/character/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_parse() {
        for route in [Route::Home, Route::Anime(20), Route::Character(17)] {
            assert_eq!(Route::parse(&route.to_string()).unwrap(), route);
        }
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::parse("/anime/20/").unwrap(), Route::Anime(20));
        assert_eq!(Route::parse("/character/17?tab=1").unwrap(), Route::Character(17));
        assert_eq!(Route::parse("").unwrap(), Route::Home);
    }
}
