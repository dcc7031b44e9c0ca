use crate::anki::protocol::{ease_label, CardInfo};
use std::collections::BTreeMap;

/// One due card, immutable once built from its `cardsInfo` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: i64,
    pub front: String,
    pub back: String,
    /// Legal ease values mapped to their display labels. A `BTreeMap` keeps
    /// the answer buttons in ascending ease order.
    pub ease_options: BTreeMap<u8, String>,
}

impl From<CardInfo> for Card {
    fn from(info: CardInfo) -> Self {
        let ease_options = info
            .buttons
            .iter()
            .map(|&ease| (ease, ease_label(ease)))
            .collect();
        Self {
            id: info.card_id,
            front: info.fields.front.value,
            back: info.fields.back.value,
            ease_options,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the initial fetch
    Loading,
    /// Working through the session
    Reviewing,
    /// No cards left (or none were due)
    Exhausted,
    /// A terminal error; only quit remains
    Failed,
}

/// The whole review session. Owned by the event loop and mutated only inside
/// `handler::handle_event`, so no locking is needed anywhere.
#[derive(Debug)]
pub struct AppState {
    /// Due cards in server-provided order, stable for the session.
    pub cards: Vec<Card>,
    /// Index of the card under review; `cards.len()` means the session is
    /// exhausted.
    pub cursor: usize,
    pub revealed: bool,
    pub phase: Phase,
    /// Message shown in the Failed phase.
    pub error: Option<String>,
    /// Card id of the in-flight `answerCards` call, if any. Set when an
    /// answer is dispatched, cleared when its result arrives. Blocks a
    /// second dispatch and lets a stale completion be recognized.
    pub pending_answer: Option<i64>,
    /// Render gate: set by transitions, cleared after each draw.
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            revealed: false,
            phase: Phase::Loading,
            error: None,
            pending_answer: None,
            dirty: false,
            should_quit: false,
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Move past the current card. The back is hidden again; stepping past
    /// the last card exhausts the session.
    pub fn advance(&mut self) {
        if self.cursor < self.cards.len() {
            self.cursor += 1;
        }
        self.revealed = false;
        if self.cursor == self.cards.len() {
            self.phase = Phase::Exhausted;
        }
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.phase = Phase::Failed;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anki::protocol::{CardFields, FieldValue};

    fn info(card_id: i64, buttons: Vec<u8>) -> CardInfo {
        CardInfo {
            card_id,
            fields: CardFields {
                front: FieldValue {
                    value: "front".into(),
                },
                back: FieldValue {
                    value: "back".into(),
                },
            },
            buttons,
        }
    }

    #[test]
    fn test_card_from_info_labels_buttons() {
        let card = Card::from(info(7, vec![1, 2, 3, 4]));
        assert_eq!(card.id, 7);
        assert_eq!(card.ease_options[&1], "Again");
        assert_eq!(card.ease_options[&4], "Easy");
    }

    #[test]
    fn test_card_from_info_unknown_button_gets_generated_label() {
        let card = Card::from(info(7, vec![1, 7]));
        assert_eq!(card.ease_options[&7], "Ease 7");
    }

    #[test]
    fn test_ease_options_iterate_in_ascending_order() {
        let card = Card::from(info(7, vec![4, 1, 3, 2]));
        let order: Vec<u8> = card.ease_options.keys().copied().collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_advance_to_end_exhausts() {
        let mut state = AppState::new();
        state.cards = vec![Card::from(info(1, vec![1])), Card::from(info(2, vec![1]))];
        state.phase = Phase::Reviewing;
        state.revealed = true;

        state.advance();
        assert_eq!(state.cursor, 1);
        assert!(!state.revealed);
        assert_eq!(state.phase, Phase::Reviewing);

        state.advance();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.phase, Phase::Exhausted);

        // Cursor never runs past the session length.
        state.advance();
        assert_eq!(state.cursor, 2);
    }
}
