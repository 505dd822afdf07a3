// src/main.rs

use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use std::io::{stdout, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info};
use url::Url;

use shieldgrade::app::App;
use shieldgrade::cli::Cli;
use shieldgrade::config::Config;
use shieldgrade::core::error::ScanError;
use shieldgrade::core::models::SecurityReport;
use shieldgrade::core::scanner::headers_scanner::{HeaderFetcher, RelayFetcher};
use shieldgrade::core::scanner::run_analysis;
use shieldgrade::logging::{get_data_dir, initialize_logging};
use shieldgrade::ui;

type Outcome = Result<SecurityReport, ScanError>;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = initialize_logging()?;
    info!(log = %log_path.display(), "Starting.");

    let config = Arc::new(Config::load(&cli)?);
    let fetcher: Arc<dyn HeaderFetcher> = Arc::new(RelayFetcher::new(&config)?);
    let export_dir = config
        .export_dir
        .clone()
        .unwrap_or_else(|| get_data_dir().join("exports"));

    // --- Setup ---
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let mut app = App::new(export_dir);
    let result = run(&mut terminal, &mut app, cli.url, config, fetcher).await;

    // --- Restore Terminal ---
    stdout().execute(LeaveAlternateScreen)?;
    stdout().execute(DisableMouseCapture)?;
    disable_raw_mode()?;

    if let Err(e) = &result {
        error!(error = %e, "Exited with error.");
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    initial_url: Option<String>,
    config: Arc<Config>,
    fetcher: Arc<dyn HeaderFetcher>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Outcome>(1);

    if let Some(url) = initial_url {
        app.input = url;
        if let Some(target) = app.submit() {
            spawn_analysis(target, &config, &fetcher, &tx);
        }
    }

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(target) = app.handle_key(key) {
                        spawn_analysis(target, &config, &fetcher, &tx);
                    }
                }
            }
        }

        app.on_tick(Instant::now());

        if let Ok(outcome) = rx.try_recv() {
            app.complete(outcome);
        }
    }
    Ok(())
}

/// Runs one analysis off the UI loop and posts the outcome back on `tx`.
fn spawn_analysis(
    target: Url,
    config: &Arc<Config>,
    fetcher: &Arc<dyn HeaderFetcher>,
    tx: &mpsc::Sender<Outcome>,
) {
    let config = Arc::clone(config);
    let fetcher = Arc::clone(fetcher);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = run_analysis(&target, &config, fetcher.as_ref()).await;
        if let Err(e) = &outcome {
            error!(target = %target, error = %e, "Analysis failed.");
        }
        let _ = tx.send(outcome).await;
    });
}
