//! Info Popup - terminal demo of a reusable info overlay.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Popup positioning (see `info_popup::ui::popup`).
//! - Configuration parsing (see `crates/config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - The popup is torn down before the terminal is restored.

use anyhow::Result;
use clap::Parser;
use futures_util::StreamExt;
use info_popup::action::Action;
use info_popup::app::App;
use info_popup::cli::Cli;
use info_popup::runtime::{config::load_config, terminal::TerminalGuard};
use info_popup_config::constants::DEFAULT_CHANNEL_CAPACITY;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "info-popup.log");
    // _guard must live for the entire main() duration so logs are flushed
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;

    // Restores the terminal even if the application panics.
    let mut session = TerminalGuard::enter(!no_mouse)?;

    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    // Input stream task with backpressure handling
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(event_result) = reader.next().await {
            let Ok(event) = event_result else {
                break;
            };
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => Action::Mouse(mouse),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };

            if action.is_critical() {
                // User intent: wait for space rather than drop it
                if tx_input.send(action).await.is_err() {
                    break;
                }
            } else {
                match tx_input.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        }
    });

    let mut app = App::new(&config);
    let size = terminal.size()?;
    app.update(Action::Resize(size.width, size.height));

    let mut tick_interval = tokio::time::interval(config.tick_interval);

    tracing::info!("Info popup started");

    // Main event loop
    while app.running {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    app.shutdown();
    input_task.abort();
    drop(tx);
    tracing::info!("Info popup stopped");

    session.restore()?;
    terminal.show_cursor()?;

    Ok(())
}
