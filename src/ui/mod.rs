mod layout;
mod review;
mod theme;

use crate::app::state::{AppState, Phase};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use theme::Theme;

/// Draw one frame from the current state. Pure with respect to the state:
/// safe to call repeatedly and after every transition.
pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    let header = Paragraph::new(Span::styled("Anki Review", Theme::title())).centered();
    frame.render_widget(header, app_layout.header);

    if state.phase == Phase::Reviewing && state.current_card().is_some() {
        let counter = format!("Card {}/{}", state.cursor + 1, state.cards.len());
        let counter = Paragraph::new(Span::styled(counter, Theme::counter())).centered();
        frame.render_widget(counter, app_layout.counter);
    }

    match state.phase {
        Phase::Loading => render_message(
            frame,
            app_layout.body,
            vec![Line::styled(
                "Loading cards from AnkiConnect...",
                Theme::counter(),
            )],
        ),
        Phase::Reviewing => review::render(frame, app_layout.body, state),
        Phase::Exhausted => render_message(
            frame,
            app_layout.body,
            vec![
                Line::styled("No cards due today! Great job!", Theme::success()),
                Line::styled("Press 'q' to quit.", Theme::prompt()),
            ],
        ),
        Phase::Failed => {
            let error = state.error.as_deref().unwrap_or("unknown error");
            render_message(
                frame,
                app_layout.body,
                vec![
                    Line::styled(format!("Error: {}", error), Theme::error()),
                    Line::styled("Press 'q' to quit.", Theme::prompt()),
                ],
            );
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, lines: Vec<Line>) {
    let paragraph = Paragraph::new(lines).centered();
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Card;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::collections::BTreeMap;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                let symbol = buffer
                    .cell(Position::new(x, y))
                    .map(|cell| cell.symbol())
                    .unwrap_or(" ");
                out.push_str(symbol);
            }
            out.push('\n');
        }
        out
    }

    fn reviewing_state() -> AppState {
        let mut state = AppState::new();
        state.cards = vec![Card {
            id: 101,
            front: "bonjour".into(),
            back: "hello".into(),
            ease_options: BTreeMap::from([
                (1, "Again".into()),
                (2, "Hard".into()),
                (3, "Good".into()),
                (4, "Easy".into()),
            ]),
        }];
        state.phase = Phase::Reviewing;
        state
    }

    #[test]
    fn test_loading_screen() {
        let state = AppState::new();
        let screen = draw(&state);
        assert!(screen.contains("Anki Review"));
        assert!(screen.contains("Loading cards from AnkiConnect..."));
    }

    #[test]
    fn test_reviewing_hides_back_until_revealed() {
        let state = reviewing_state();
        let screen = draw(&state);
        assert!(screen.contains("Card 1/1"));
        assert!(screen.contains("bonjour"));
        assert!(!screen.contains("hello"));
        assert!(screen.contains("Press ENTER to reveal back"));
    }

    #[test]
    fn test_revealed_card_shows_back_and_buttons_in_order() {
        let mut state = reviewing_state();
        state.revealed = true;
        let screen = draw(&state);
        assert!(screen.contains("hello"));
        let buttons_line = screen
            .lines()
            .find(|l| l.contains("Again"))
            .expect("button row");
        let positions: Vec<usize> = ["1: Again", "2: Hard", "3: Good", "4: Easy"]
            .iter()
            .map(|label| buttons_line.find(label).expect("label present"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exhausted_screen() {
        let mut state = AppState::new();
        state.phase = Phase::Exhausted;
        let screen = draw(&state);
        assert!(screen.contains("No cards due today! Great job!"));
        assert!(screen.contains("Press 'q' to quit."));
    }

    #[test]
    fn test_failed_screen_shows_error_verbatim() {
        let mut state = AppState::new();
        state.fail("API-reported error: collection is not available".into());
        let screen = draw(&state);
        assert!(screen.contains("Error: API-reported error: collection is not available"));
        assert!(screen.contains("Press 'q' to quit."));
    }
}
