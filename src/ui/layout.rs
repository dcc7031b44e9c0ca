use ratatui::prelude::*;

pub struct AppLayout {
    pub header: Rect,
    pub counter: Rect,
    pub body: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        counter: chunks[1],
        body: chunks[2],
    }
}
