mod app;
mod chime;
mod config;
mod logging;
mod timer;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::app::ticker::IntervalTicker;
use crate::chime::Chime;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;

    // Logging goes to a file; the terminal is ours
    if let Some(log_dir) = logging::init(&cfg.logging) {
        info!(log_dir = %log_dir.display(), "pomoclock starting");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("pomoclock exiting");
    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut chime = Chime::from_config(&cfg.chime).unwrap_or_else(|e| {
        warn!("chime disabled: {}", e);
        Chime::silent()
    });
    let ticker = IntervalTicker::new(event_tx.clone(), TICK_PERIOD);
    let mut state = AppState::new(cfg, Box::new(ticker));

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });
    drop(event_tx);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);

        // Process actions
        for action in actions {
            match action {
                Action::PlayChime { finished, next } => {
                    info!(%finished, %next, "playing chime");
                    if let Err(e) = chime.play(&mut io::stdout()) {
                        warn!("chime failed: {}", e);
                        state.status_message = Some(format!("Chime failed: {}", e));
                        state.dirty = true;
                    }
                }
                Action::StopChime => {
                    if chime.is_playing() {
                        info!("stopping chime");
                    }
                    chime.stop();
                }
                Action::Quit => {
                    state.should_quit = true;
                }
            }
        }

        // Reap a player that finished on its own
        chime.reap();

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    info!(state = ?state.engine.state(), "timer state at exit");
    Ok(())
}
