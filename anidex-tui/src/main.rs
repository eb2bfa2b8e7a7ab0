//! anidex-tui - Terminal UI for anidex
//!
//! Browse popular, airing and upcoming anime, search by title and page
//! through character galleries without leaving the terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use anidex_tui::{
    app::{event::EventHandler, update, InputMode, UiAction, UiState},
    error::Result,
    router::Route,
    services::ServiceHandle,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui,
};
use clap::Parser;
use crossterm::event::{KeyCode, KeyModifiers};
use libanidex::config::resolve_state_path;
use libanidex::logging::{LogTarget, LoggingConfig};
use libanidex::Config;
use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

const SEARCH_PLACEHOLDER: &str = "Press / to search anime by title";

#[derive(Parser, Debug)]
#[command(name = "anidex-tui")]
#[command(version, about = "Browse anime from the terminal")]
#[command(long_about = r#"Browse anime from the terminal.

The home page loads the most popular anime on start. Switch tabs to load
airing and upcoming anime, press / to search, Enter to open an anime and
g to jump to any route.

ROUTES:
    /                 Home page (popular, airing, upcoming, search results)
    /anime/:id        Details of a loaded anime
    /character/:id    Picture gallery of a character

EXAMPLES:
    anidex-tui
    anidex-tui --route /character/17
    anidex-tui --config ./anidex.toml --log-file /tmp/anidex.log

Logs go to a file because the terminal is taken by the UI.
"#)]
struct Args {
    /// Page to open first
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Config file (default: $ANIDEX_CONFIG or ~/.config/anidex/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log file (default: anidex-tui.log in the state directory)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match e {
                anidex_tui::TuiError::Anidex(ref inner) => inner.exit_code(),
                anidex_tui::TuiError::Route(_) => 3,
                anidex_tui::TuiError::Terminal(_) => 1,
            };
            ExitCode::from(code as u8)
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = match args.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    let log_file = match args.log_file {
        Some(ref path) => path.clone(),
        None => resolve_state_path()?.join("anidex-tui.log"),
    };
    LoggingConfig::from_config(&config.log, args.verbose).init(LogTarget::File(log_file))?;

    // Validate before the terminal is taken over
    let route = Route::parse(&args.route)?;
    tracing::debug!(%route, "anidex-tui starting");

    let services = ServiceHandle::new(&config)?;
    services.provider().start();

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &services, UiState::from_config(&config), route);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut Tui, services: &ServiceHandle, state: UiState, route: Route) -> Result<()> {
    let provider = services.provider();
    let mut state = update(state, UiAction::Navigate(route), provider);

    // Search box is stateful (cursor, scroll), so it lives outside UiState
    let mut search_box = TextArea::default();
    search_box.set_placeholder_text(SEARCH_PLACEHOLDER);

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        let border_color = if state.mode == InputMode::Search {
            Color::Green
        } else {
            Color::DarkGray
        };
        let border_style = if state.config.colors_enabled {
            Style::default().fg(border_color)
        } else {
            Style::default()
        };
        search_box.set_block(
            Block::default()
                .title(" Search ")
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        let context = provider.context();
        terminal.draw(|frame| {
            ui::render(frame, &state, &context, &search_box);
        })?;

        let action = match event_handler.next()? {
            anidex_tui::app::event::TuiEvent::Key(key)
                if state.mode == InputMode::Search
                    && !state.has_overlay()
                    && !matches!(
                        (key.code, key.modifiers),
                        (KeyCode::Enter, _) | (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
                    ) =>
            {
                // Let the search box handle the input
                search_box.input(key);
                UiAction::SearchInputChanged(search_box.lines().join(" "))
            }
            other => other.into(),
        };

        state = update(state, action, provider);

        if state.should_quit {
            break;
        }
    }

    tracing::debug!("anidex-tui exiting");
    Ok(())
}
