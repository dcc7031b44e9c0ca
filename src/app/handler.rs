use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, Phase};
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Apply one event to the state and return the follow-up actions for the
/// event loop to execute. All session mutation happens here; the loop stays
/// single-threaded, so completions of stale network tasks land here too and
/// only phase-compatible transitions fire.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    state.dirty = true;
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),

        AppEvent::CardsLoaded(cards) => {
            if state.phase != Phase::Loading {
                return vec![];
            }
            if cards.is_empty() {
                state.phase = Phase::Exhausted;
            } else {
                state.cards = cards;
                state.cursor = 0;
                state.revealed = false;
                state.phase = Phase::Reviewing;
            }
            vec![]
        }

        AppEvent::LoadFailed(error) => {
            if state.phase == Phase::Loading {
                state.fail(error);
            }
            vec![]
        }

        AppEvent::CardAnswered { card_id, .. } => {
            if state.pending_answer.take() != Some(card_id) {
                return vec![];
            }
            // Advance only if the answered card is still the one under
            // review; if the user skipped past it in the meantime the
            // completion is stale and must not move the cursor again.
            if state.phase == Phase::Reviewing
                && state.current_card().map(|c| c.id) == Some(card_id)
            {
                state.advance();
            }
            vec![]
        }

        AppEvent::AnswerFailed {
            card_id,
            ease,
            error,
        } => {
            state.pending_answer = None;
            if state.phase == Phase::Reviewing {
                state.fail(format!(
                    "failed to answer card {} with ease {}: {}",
                    card_id, ease, error
                ));
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    let CEvent::Key(key) = event else {
        return vec![];
    };
    if key.kind != KeyEventKind::Press {
        return vec![];
    }
    handle_key(state, key)
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Quit works from every phase, including Failed.
    let ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Char('q') || ctrl_c {
        return vec![Action::Quit];
    }

    if state.phase != Phase::Reviewing {
        return vec![];
    }

    match key.code {
        KeyCode::Enter => {
            // Already-revealed is a no-op, so revealing is idempotent.
            state.revealed = true;
            vec![]
        }

        KeyCode::Char(c @ '1'..='4') => {
            if !state.revealed || state.pending_answer.is_some() {
                return vec![];
            }
            let Some(ease) = c.to_digit(10) else {
                // The range pattern guarantees a digit; anything else would
                // mean the key matching itself is broken.
                state.fail(format!("invalid ease input: {:?}", c));
                return vec![];
            };
            let ease = ease as u8;
            let Some(card) = state.current_card() else {
                return vec![];
            };
            // An ease the scheduler did not offer for this card is ignored.
            if !card.ease_options.contains_key(&ease) {
                return vec![];
            }
            let card_id = card.id;
            state.pending_answer = Some(card_id);
            vec![Action::AnswerCard { card_id, ease }]
        }

        KeyCode::Right | KeyCode::Char('n') => {
            state.advance();
            vec![]
        }

        _ => vec![],
    }
}
