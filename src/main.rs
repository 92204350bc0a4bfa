//! creator-upload - terminal wizard for publishing workflows and AI apps
//!
//! Walks the creator through a multi-step form, uploads the attached files
//! and submits the listing to the creator platform API.

mod api;
mod app;
mod config;
mod platform;
mod state;
mod submission;
mod ui;

use anyhow::{Context, Result};
use api::HttpCreatorApi;
use app::App;
use clap::Parser;
use config::UploaderConfig;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use state::ContentType;
use std::fs::{self, File};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Upload a workflow or AI app to the creator platform")]
struct Args {
    /// What to publish: `workflow` or `ai-app`
    #[arg(long = "type", value_name = "TYPE")]
    content_type: ContentType,
    /// Creator API base URL (overrides config and CREATOR_API_URL)
    #[arg(long)]
    api_url: Option<String>,
}

/// Log to a file while the terminal is in alternate-screen mode; stderr only
/// when no log file can be opened
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "creator_upload=info".into());

    let log_file = UploaderConfig::log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok()?;
        }
        File::options().create(true).append(true).open(path).ok()
    });

    match log_file {
        Some(file) => tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config = UploaderConfig::load()
        .context("Failed to load configuration")?
        .resolve(args.api_url.as_deref());
    tracing::info!(
        content_type = %args.content_type,
        api = %config.api_base_url,
        "starting upload wizard"
    );

    let api = HttpCreatorApi::new(
        &config.api_base_url,
        config.auth_token.clone(),
        config.request_timeout,
    )?;
    let base_url = api.base_url().to_string();
    let mut app = App::new(Arc::new(api), args.content_type, &base_url);
    app.load_lookups().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    if let Some(route) = app.navigate_to() {
        println!("{route}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        app.terminal_size = Some((term_size.height, term_size.width));

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Poll faster while a submission reports progress
        let poll_duration = if app.state.is_submitting {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }
                    app.handle_key(key).await?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse).await?;
                }
                _ => {}
            }
        }

        app.poll_submission();

        if app.should_quit() {
            return Ok(());
        }
    }
}
