use crate::game::{GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_cell: usize,
    message: &Option<String>,
    vs_computer: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, vs_computer, chunks[0]);
    super::board_widget::render_board(frame, game_state.board(), selected_cell, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

/// Display name for a player, mode-aware: O is the computer in
/// single-player mode.
pub fn player_label(player: Player, vs_computer: bool) -> &'static str {
    match (player, vs_computer) {
        (Player::X, _) => "Player X",
        (Player::O, false) => "Player O",
        (Player::O, true) => "Computer (O)",
    }
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Red,
        Player::O => Color::Yellow,
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    vs_computer: bool,
    area: ratatui::layout::Rect,
) {
    let mode = if vs_computer { "vs Computer" } else { "Two Player" };

    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Winner: {}  |  {}", player_label(player, vs_computer), mode),
            mark_color(player),
        ),
        Some(GameOutcome::Draw) => (format!("Draw  |  {}", mode), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Turn: {}  |  {}", player_label(player, vs_computer), mode),
                mark_color(player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Toe"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let line = Line::from("←↑↓→: Select  |  Enter: Place  |  P: Toggle opponent  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
