//! Terminal 2048 runner (default binary).
//!
//! Asks for a player name, plays on a crossterm framebuffer renderer and
//! prints the final score and leaderboard once the terminal is restored.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_2048::core::BoardSnapshot;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::scores::{JsonFileStore, MemoryStore, ScoreStore};
use tui_2048::term::{FrameBuffer, GameView, PanelInfo, TerminalRenderer, Viewport};
use tui_2048::{logging, AppConfig, Session, SessionEvent};

const ANONYMOUS: &str = "Anonymous";

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config)?;
    info!("starting with {:?}", config);

    let player = match &config.player {
        Some(name) => name.clone(),
        None => prompt_name()?,
    };

    let mut store = open_store(&config);
    let mut session = Session::new(config.size, config.seed, player, store.as_ref())
        .context("cannot start a game")?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, store.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    session.finish(store.as_mut());
    result?;

    print_summary(&session, store.as_ref());
    Ok(())
}

fn prompt_name() -> Result<String> {
    print!("Enter your name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read player name")?;

    let name = line.trim();
    Ok(if name.is_empty() {
        ANONYMOUS.to_string()
    } else {
        name.to_string()
    })
}

fn open_store(config: &AppConfig) -> Box<dyn ScoreStore> {
    match JsonFileStore::open(&config.scores_path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!(
                "cannot use score file {:?} ({}), scores will not be saved",
                config.scores_path, e
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    store: &mut dyn ScoreStore,
) -> Result<()> {
    let view = GameView::default();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        session.board().snapshot_into(&mut snap);
        let panel = PanelInfo {
            player: session.player(),
            best: session.best(),
        };
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Some(&panel), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Nothing happens between key presses, so block on the next event.
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if let SessionEvent::Restarted { .. } = session.apply(action, store)? {
                    term.invalidate();
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

fn print_summary(session: &Session, store: &dyn ScoreStore) {
    println!(
        "Game over! Final score for {}: {}",
        session.player(),
        session.board().score()
    );

    match store.leaderboard() {
        Ok(entries) => {
            println!("Leaderboard:");
            for (i, entry) in entries.iter().enumerate() {
                println!("{}. {} has score {}", i + 1, entry.name, entry.score);
            }
        }
        Err(e) => warn!("cannot list leaderboard: {}", e),
    }
}
