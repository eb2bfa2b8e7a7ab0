//! anidex-fetch - Fetch anime data from the command line
//!
//! Runs one dispatcher against the configured API and prints the list it
//! committed.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use libanidex::logging::{LogTarget, LoggingConfig};
use libanidex::provider::EMPTY_SEARCH_WARNING;
use libanidex::{AnidexError, Anime, AppState, Config, Dispatcher, JikanClient, Outcome, Picture, Result, Store};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "anidex-fetch")]
#[command(version, about = "Fetch anime lists, search results and character pictures")]
#[command(long_about = r#"Fetch anime lists, search results and character pictures.

EXAMPLES:
    # Most popular anime
    anidex-fetch popular

    # Top 5 currently airing, as JSON
    anidex-fetch airing --limit 5 --format json

    # Search by title
    anidex-fetch search cowboy bebop
    anidex-fetch search naruto --format jsonl | jq -r '.title'

    # Pictures of a character
    anidex-fetch pictures 17

OUTPUT FORMATS:
    text  - One line per entry: id | title | score | status (default)
    json  - JSON array of full records
    jsonl - JSON lines, one record per line (streaming-friendly)

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (network, HTTP status, bad response, bad config)
    3 - Invalid input (empty search term)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT", global = true)]
    #[arg(value_parser = ["text", "json", "jsonl"])]
    format: String,

    /// Print at most N entries
    #[arg(short, long, value_name = "N", global = true)]
    limit: Option<usize>,

    /// Config file (default: $ANIDEX_CONFIG or ~/.config/anidex/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Most popular anime
    Popular,
    /// Upcoming anime
    Upcoming,
    /// Currently airing anime
    Airing,
    /// Search anime by title
    Search {
        /// Search term, words are joined with spaces
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },
    /// Pictures of a character
    Pictures {
        /// Character id
        id: u64,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };

    LoggingConfig::from_config(&config.log, cli.verbose).init(LogTarget::Stderr)?;
    tracing::debug!("anidex-fetch started with args: {:?}", cli);

    // Checked before any client is built so nothing goes out
    if let Command::Search { ref query } = cli.command {
        if query.join(" ").trim().is_empty() {
            return Err(AnidexError::InvalidInput(EMPTY_SEARCH_WARNING.to_string()));
        }
    }

    let store = Store::new();
    let dispatcher = Dispatcher::new(Arc::new(JikanClient::new(&config.api)?), store.clone());

    let outcome = match cli.command {
        Command::Popular => dispatcher.get_popular_anime().await,
        Command::Upcoming => dispatcher.get_upcoming_anime().await,
        Command::Airing => dispatcher.get_airing_anime().await,
        Command::Search { ref query } => dispatcher.search_anime(&query.join(" ")).await,
        Command::Pictures { id } => dispatcher.get_anime_pictures(id).await,
    };

    match outcome {
        Outcome::Committed => {}
        Outcome::Failed(e) => return Err(e.into()),
        // Nothing else runs against this store
        Outcome::Superseded => return Ok(()),
    }

    let state = store.state();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let limit = cli.limit.unwrap_or(usize::MAX);

    match cli.command {
        Command::Pictures { .. } => print_records(&mut out, &state.pictures, limit, &cli.format, picture_line)?,
        ref command => print_records(&mut out, anime_list(&state, command), limit, &cli.format, anime_line)?,
    }

    out.flush()?;
    Ok(())
}

/// The list a command's dispatcher commits to
fn anime_list<'a>(state: &'a AppState, command: &Command) -> &'a [Anime] {
    match command {
        Command::Popular => &state.popular_anime,
        Command::Upcoming => &state.upcoming_anime,
        Command::Airing => &state.airing_anime,
        Command::Search { .. } => &state.search_results,
        Command::Pictures { .. } => &[],
    }
}

fn print_records<T: Serialize, W: Write>(
    out: &mut W,
    records: &[T],
    limit: usize,
    format: &str,
    text_line: fn(&T) -> String,
) -> io::Result<()> {
    let records = &records[..records.len().min(limit)];

    match format {
        "json" => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        "jsonl" => {
            for record in records {
                serde_json::to_writer(&mut *out, record)?;
                writeln!(out)?;
            }
        }
        _ => {
            for record in records {
                writeln!(out, "{}", text_line(record))?;
            }
        }
    }

    Ok(())
}

fn anime_line(anime: &Anime) -> String {
    let score = anime
        .score
        .map(|s| format!("{:.2}", s))
        .unwrap_or_else(|| "-".to_string());
    let status = anime.status.as_deref().unwrap_or("-");
    format!("{} | {} | {} | {}", anime.mal_id, anime.display_title(), score, status)
}

fn picture_line(picture: &Picture) -> String {
    picture.url().unwrap_or("-").to_string()
}
