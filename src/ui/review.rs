use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

/// Render the card under review: front, and once revealed the back plus one
/// labeled button per legal ease option in ascending order.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let Some(card) = state.current_card() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let mut lines: Vec<Line> = vec![
        Line::styled(card.front.clone(), Theme::front()),
        Line::default(),
    ];

    if state.revealed {
        lines.push(Line::styled(card.back.clone(), Theme::back()));
        lines.push(Line::default());
        lines.push(Line::styled("Press 1-4 to answer:", Theme::prompt()));

        let mut buttons: Vec<Span> = Vec::new();
        for (ease, label) in &card.ease_options {
            if !buttons.is_empty() {
                buttons.push(Span::raw(" "));
            }
            buttons.push(Span::styled(
                format!(" {}: {} ", ease, label),
                Theme::button(),
            ));
        }
        lines.push(Line::from(buttons));
    } else {
        lines.push(Line::styled("Press ENTER to reveal back", Theme::prompt()));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .centered();
    frame.render_widget(paragraph, area);
}
