//! Game session: the single owned instance of [`GameState`] together with
//! the computer opponent and its on/off toggle. The UI holds exactly one
//! session and drives it through [`GameSession::play`].

use tracing::debug;

use crate::ai::{Agent, ScriptedAgent};
use crate::config::OpponentConfig;
use crate::game::{GameState, MoveError, Player};

pub struct GameSession {
    state: GameState,
    opponent: Box<dyn Agent>,
    opponent_enabled: bool,
}

impl GameSession {
    pub fn new(opponent: Box<dyn Agent>, opponent_enabled: bool) -> Self {
        GameSession {
            state: GameState::initial(),
            opponent,
            opponent_enabled,
        }
    }

    /// Build a session with the scripted opponent per configuration.
    pub fn from_config(config: &OpponentConfig) -> Self {
        let opponent: Box<dyn Agent> = match config.seed {
            Some(seed) => Box::new(ScriptedAgent::from_seed(seed)),
            None => Box::new(ScriptedAgent::new()),
        };
        Self::new(opponent, config.enabled)
    }

    /// Get reference to the game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// Enable or disable the computer opponent.
    ///
    /// Enabling while it is O's turn mid-game makes the opponent take that
    /// pending turn immediately. In any other position the toggle applies
    /// from the next human move. Disabling hands O back to the human.
    pub fn set_opponent_enabled(&mut self, enabled: bool) {
        self.opponent_enabled = enabled;
        if enabled && !self.state.is_terminal() && self.state.current_player() == Player::O {
            self.opponent_turn();
        }
    }

    /// Apply the human move at `cell`.
    ///
    /// When the opponent is enabled and the game continues, the opponent's
    /// reply is selected and applied within this same call, so control
    /// returns to the human player. Illegal moves leave the state
    /// untouched and surface as [`MoveError`].
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        let player = self.state.current_player();
        self.state.apply_move_mut(cell)?;
        debug!(cell, player = player.name(), "placed mark");

        if self.opponent_enabled && !self.state.is_terminal() {
            self.opponent_turn();
        }

        if let Some(outcome) = self.state.outcome() {
            debug!(?outcome, "game over");
        }

        Ok(())
    }

    /// Start a new game. The board clears, X moves first.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        debug!("game reset");
    }

    fn opponent_turn(&mut self) {
        if let Some(cell) = self.opponent.select_move(&self.state) {
            let player = self.state.current_player();
            self.state
                .apply_move_mut(cell)
                .expect("Agent selected illegal cell");
            debug!(
                cell,
                player = player.name(),
                agent = self.opponent.name(),
                "opponent reply"
            );
        }
    }
}
