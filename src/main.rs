mod animation;
mod app;
mod config;
mod error;
mod event;
mod figure;
mod ui;

use std::io;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

use crate::app::App;
use crate::config::{CliArgs, Config};
use crate::error::{FigureError, FigureResult};
use crate::event::EventHandler;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let config = Config::from_cli(&cli);

    // Initialize color-eyre with custom panic hook that restores terminal
    install_panic_hook();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(config.log_file.as_deref(), &config.log_level)?;

    info!("squaretriup starting");

    let mut terminal = setup_terminal()?;

    let mut event_handler = EventHandler::new();
    let mut app = App::new(config, event_handler.sender());

    // ── Main event loop ───────────────────────────────────────────────
    let outcome = run(&mut terminal, &mut app, &mut event_handler).await;
    event_handler.stop();

    restore_terminal(&mut terminal)?;

    info!("squaretriup exiting after {} legs", app.figure.legs());
    outcome
}

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode, alternate screen and mouse capture
fn setup_terminal() -> FigureResult<Tui> {
    enable_raw_mode()
        .map_err(|e| FigureError::Terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> FigureResult<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run(
    terminal: &mut Tui,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match events.next().await {
            Some(event) => app.handle_event(event),
            None => break,
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    color_eyre::install().ok();
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(panic_info);
    }));
}

/// Initialize tracing to a log file
fn init_logging(log_path: Option<&Path>, level: &str) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::EnvFilter;

    let Some(path) = log_path else {
        // No logging if no log path specified (can't log to stdout in a TUI)
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("off"))
            .with_writer(io::sink)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| eyre!("Invalid log path: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
