//! Event handling infrastructure
//!
//! Turns terminal events (keyboard, resize, tick) into actions.

use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::app::UiAction;

/// TUI events that can be dispatched
#[derive(Debug, Clone)]
pub enum TuiEvent {
    /// Keyboard input
    Key(KeyEvent),

    /// Terminal resize
    Resize(u16, u16),

    /// Periodic tick, also emitted when nothing happened
    Tick,
}

impl From<TuiEvent> for UiAction {
    fn from(event: TuiEvent) -> Self {
        match event {
            TuiEvent::Key(key) => UiAction::Key(key),
            TuiEvent::Resize(w, h) => UiAction::Resize(w, h),
            TuiEvent::Tick => UiAction::Tick,
        }
    }
}

/// Event handler that polls for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler with the specified tick rate
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event, blocking up to tick_rate duration
    pub fn next(&self) -> std::io::Result<TuiEvent> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => {
                    Ok(TuiEvent::Key(key))
                }
                CrosstermEvent::Resize(w, h) => Ok(TuiEvent::Resize(w, h)),
                _ => Ok(TuiEvent::Tick),
            }
        } else {
            Ok(TuiEvent::Tick)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_handler_creation() {
        let handler = EventHandler::new(100);
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_events_convert_to_actions() {
        assert_eq!(UiAction::from(TuiEvent::Tick), UiAction::Tick);
        assert_eq!(UiAction::from(TuiEvent::Resize(80, 24)), UiAction::Resize(80, 24));
    }
}
