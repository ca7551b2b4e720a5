use crate::config::AppConfig;
use crate::game::{GameOutcome, MoveError, Player};
use crate::session::GameSession;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    session: GameSession,
    selected_cell: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: GameSession::from_config(&config.opponent),
            selected_cell: 4, // Start on the center cell
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_cell % 3 > 0 {
                    self.selected_cell -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_cell % 3 < 2 {
                    self.selected_cell += 1;
                }
            }
            KeyCode::Up => {
                if self.selected_cell >= 3 {
                    self.selected_cell -= 3;
                }
            }
            KeyCode::Down => {
                if self.selected_cell < 6 {
                    self.selected_cell += 3;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                // Reset game
                self.session.reset();
                self.selected_cell = 4;
                self.message = Some("New game started!".to_string());
            }
            KeyCode::Char('p') => {
                let enabled = !self.session.opponent_enabled();
                self.session.set_opponent_enabled(enabled);
                self.message = Some(
                    if enabled {
                        "Playing against the computer."
                    } else {
                        "Two-player mode."
                    }
                    .to_string(),
                );
            }
            _ => {}
        }
    }

    /// Place the current player's mark on the selected cell
    fn place_mark(&mut self) {
        if self.session.state().is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        // With the opponent on, only the human (X) turn accepts input.
        if self.session.opponent_enabled() && self.session.state().current_player() != Player::X {
            return;
        }

        match self.session.play(self.selected_cell) {
            Ok(()) => {
                // Check if game just ended
                if let Some(outcome) = self.session.state().outcome() {
                    let vs_computer = self.session.opponent_enabled();
                    self.message = Some(match outcome {
                        GameOutcome::Winner(player) => {
                            format!("{} wins!", super::game_view::player_label(player, vs_computer))
                        }
                        GameOutcome::Draw => "It's a draw!".to_string(),
                    });
                }
            }
            Err(MoveError::CellOccupied) => {
                self.message = Some("Cell is already taken!".to_string());
            }
            Err(MoveError::InvalidCell) => {
                self.message = Some("Invalid cell!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.session.state(),
            self.selected_cell,
            &self.message,
            self.session.opponent_enabled(),
        );
    }
}
