//! Core tic-tac-toe game logic: board representation, player types, and
//! the game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CELLS, WIN_LINES};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
