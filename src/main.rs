mod anki;
mod app;
mod logging;
mod ui;

use crate::anki::client::AnkiClient;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new();
    let client = AnkiClient::new();

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
                Some(Err(_)) | None => break,
            }
        }
    });

    // Kick off the initial due-card fetch.
    execute_action(Action::FetchDueCards, &client, &event_tx, &mut state);

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else {
            break;
        };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            execute_action(action, &client, &event_tx, &mut state);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}

/// Execute one effect the state machine asked for. Network calls run as
/// spawned tasks that report back through the event channel, so state is
/// never touched off the main loop.
fn execute_action(
    action: Action,
    client: &AnkiClient,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
    state: &mut AppState,
) {
    match action {
        Action::FetchDueCards => {
            let client = client.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let event = match client.fetch_due_cards().await {
                    Ok(cards) => AppEvent::CardsLoaded(cards),
                    Err(e) => AppEvent::LoadFailed(e.to_string()),
                };
                let _ = tx.send(event);
            });
        }
        Action::AnswerCard { card_id, ease } => {
            let client = client.clone();
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let event = match client.answer_card(card_id, ease).await {
                    Ok(()) => AppEvent::CardAnswered { card_id, ease },
                    Err(e) => AppEvent::AnswerFailed {
                        card_id,
                        ease,
                        error: e.to_string(),
                    },
                };
                let _ = tx.send(event);
            });
        }
        Action::Quit => {
            state.should_quit = true;
        }
    }
}
