use crate::game::GameState;

/// Universal interface for computer opponents.
pub trait Agent {
    /// Select an empty cell for the current player to mark.
    /// Returns `None` when no legal move remains.
    fn select_move(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
