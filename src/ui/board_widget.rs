use crate::game::{Board, Cell};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the 3x3 board into the given area, highlighting the selected
/// cell. Cells are addressed 0-8 in row-major order.
pub fn render_board(frame: &mut Frame, board: &Board, selected_cell: usize, area: Rect) {
    let mut lines = Vec::new();

    lines.push(Line::from("╔═══════════╗"));

    for row in 0..3 {
        let mut spans = vec![Span::raw("║")];

        for col in 0..3 {
            let index = row * 3 + col;
            let (symbol, color) = match board.get(index) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Red),
                Cell::O => (" O ", Color::Yellow),
            };

            let mut style = Style::default().fg(color);
            if index == selected_cell {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));

            if col < 2 {
                spans.push(Span::raw("│"));
            }
        }

        spans.push(Span::raw("║"));
        lines.push(Line::from(spans));

        if row < 2 {
            lines.push(Line::from("║───┼───┼───║"));
        }
    }

    lines.push(Line::from("╚═══════════╝"));

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
