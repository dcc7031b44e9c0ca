use crate::app::state::Card;
use crossterm::event::Event as CrosstermEvent;

/// Everything that can happen to the application, funneled through one
/// channel into the update loop. Completed network tasks report back here
/// rather than touching state themselves.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Due cards fetched from AnkiConnect (possibly none)
    CardsLoaded(Vec<Card>),
    /// The initial fetch failed
    LoadFailed(String),

    /// A submitted answer was acknowledged by the scheduler
    CardAnswered { card_id: i64, ease: u8 },
    /// A submitted answer was rejected or never reached the server
    AnswerFailed {
        card_id: i64,
        ease: u8,
        error: String,
    },
}
