/// Follow-up work a state transition asks for. The event loop in `main`
/// executes these; network actions run as spawned tasks whose results come
/// back as events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchDueCards,
    AnswerCard { card_id: i64, ease: u8 },
    Quit,
}
