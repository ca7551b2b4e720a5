use super::{Board, Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    InvalidCell,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Winning player, if the game ended with one
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal cells (empty, game not over)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.empty_cells()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, cell: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(cell)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(cell, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::PlaceError::CellOccupied => MoveError::CellOccupied,
                super::board::PlaceError::InvalidCell => MoveError::InvalidCell,
            })?;

        // Check for win
        if let Some(mark) = self.board.winner() {
            let winner = if mark == Cell::X { Player::X } else { Player::O };
            self.outcome = Some(GameOutcome::Winner(winner));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}
