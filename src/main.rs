//! Terminal lifecycle, event loop, and cleanup for the storefront search box.

mod actions;
mod app;
mod events;
mod headless;
mod state;
mod ui;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use reqwest::Url;
use storefront_search::config::parse_base_url;
use storefront_search::{IndexLoader, SearchConfig};

use app::App;
use events::{key_to_action, TICK_RATE};

/// Search the storefront's apps, games, and articles.
#[derive(Debug, Parser)]
#[command(name = "storefront-search", version, about)]
struct Cli {
    /// Site root serving the JSON fixtures (overrides STOREFRONT_BASE_URL).
    #[arg(long, value_parser = parse_base_url)]
    base_url: Option<Url>,

    /// Entries shown per group (overrides STOREFRONT_DISPLAY_LIMIT).
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    limit: Option<u64>,

    /// Run one query, print the results, and exit instead of opening the TUI.
    #[arg(long, short)]
    query: Option<String>,

    /// Print headless results as JSON.
    #[arg(long, requires = "query")]
    json: bool,
}

impl Cli {
    fn apply(&self, mut config: SearchConfig) -> SearchConfig {
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(limit) = self.limit {
            config.display_limit = limit as usize;
        }
        config
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they don't tear the alternate screen (RUST_LOG controls the filter).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("storefront_search=info".parse()?),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let env_config = SearchConfig::from_env().context("invalid STOREFRONT_* settings")?;
    let config = cli.apply(env_config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let loader = IndexLoader::new(&config).context("failed to set up the index loader")?;

    if let Some(query) = cli.query.as_deref() {
        return headless::run(&runtime, loader, &config, query, cli.json);
    }

    let handle = loader.spawn(runtime.handle());
    let mut app = App::new(config, handle);

    // Set up the terminal in raw / alternate-screen mode.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, DisableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.show_cursor()?;

    let result = run_loop(&mut terminal, &mut app);

    // Always restore the terminal, even on error.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    // Dropping the app cancels a load that is still in flight.
    drop(app);
    runtime.shutdown_background();
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick = app.tick.wrapping_add(1);
        app.poll_results();

        if app.should_quit {
            return Ok(());
        }

        let tick = app.tick;
        terminal.draw(|frame| ui::render(frame, app, tick))?;

        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(&key) {
                    app.dispatch(action);
                    if app.should_quit {
                        return Ok(());
                    }
                }
            }
        }
    }
}
