use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Cell, GameState, WIN_LINES};

use super::agent::Agent;

/// The scripted single-player opponent. Move selection runs three tiers in
/// strict priority order:
///
/// 1. Complete an own line (win now)
/// 2. Complete the opposing line (block)
/// 3. Uniformly random empty cell
///
/// Tiers 1 and 2 scan the win-line table in its fixed order, so ties
/// resolve to the first qualifying line rather than arbitrarily.
pub struct ScriptedAgent {
    rng: StdRng,
}

impl ScriptedAgent {
    pub fn new() -> Self {
        ScriptedAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded constructor for reproducible games.
    pub fn from_seed(seed: u64) -> Self {
        ScriptedAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ScriptedAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// Find the empty cell of the first win line holding exactly two `mark`
/// cells and one empty cell, scanning in table order.
fn completing_cell(board: &Board, mark: Cell) -> Option<usize> {
    for line in &WIN_LINES {
        let marks = line.iter().filter(|&&i| board.get(i) == mark).count();
        if marks == 2 {
            if let Some(&empty) = line.iter().find(|&&i| board.get(i) == Cell::Empty) {
                return Some(empty);
            }
        }
    }
    None
}

impl Agent for ScriptedAgent {
    fn select_move(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }

        let own = state.current_player().to_cell();
        let opposing = state.current_player().other().to_cell();

        if let Some(cell) = completing_cell(state.board(), own) {
            return Some(cell);
        }

        if let Some(cell) = completing_cell(state.board(), opposing) {
            return Some(cell);
        }

        let actions = state.legal_actions();
        if actions.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..actions.len());
        Some(actions[idx])
    }

    fn name(&self) -> &str {
        "Scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, Player};

    /// Build a state by replaying moves from the initial position.
    fn state_after(moves: &[usize]) -> GameState {
        let mut state = GameState::initial();
        for &cell in moves {
            state.apply_move_mut(cell).unwrap();
        }
        state
    }

    #[test]
    fn test_takes_winning_cell() {
        // X: 0, 1 / O: 3, 4 — O to move next would block, but here X moves
        // and completes the top row.
        let state = state_after(&[0, 3, 1, 4]);
        assert_eq!(state.current_player(), Player::X);

        let mut agent = ScriptedAgent::from_seed(0);
        assert_eq!(agent.select_move(&state), Some(2));
    }

    #[test]
    fn test_win_takes_precedence_over_block() {
        // O to move. O has two in the middle row (3, 4), X has two in the
        // top row (0, 1). O must finish its own line at 5, not block at 2.
        let state = state_after(&[0, 3, 1, 4, 8]);
        assert_eq!(state.current_player(), Player::O);

        let mut agent = ScriptedAgent::from_seed(0);
        assert_eq!(agent.select_move(&state), Some(5));
    }

    #[test]
    fn test_blocks_opposing_line() {
        // O to move. X threatens the top row at 2; O has no win available.
        let state = state_after(&[0, 4, 1]);
        assert_eq!(state.current_player(), Player::O);

        let mut agent = ScriptedAgent::from_seed(0);
        assert_eq!(agent.select_move(&state), Some(2));
    }

    #[test]
    fn test_block_scan_uses_table_order() {
        // X threatens both the top row (at 2) and the left column (at 6).
        // The row line comes first in the table, so the block lands on 2.
        let state = state_after(&[0, 4, 1, 8, 3]);
        assert_eq!(state.current_player(), Player::O);

        let mut agent = ScriptedAgent::from_seed(0);
        assert_eq!(agent.select_move(&state), Some(2));
    }

    #[test]
    fn test_random_tier_selects_empty_cell() {
        // Single X in a corner: no two-in-a-line anywhere, so tier 3 runs.
        let state = state_after(&[0]);
        let legal = state.legal_actions();

        let mut agent = ScriptedAgent::new();
        for _ in 0..100 {
            let cell = agent.select_move(&state).unwrap();
            assert!(legal.contains(&cell), "Cell {} is not legal", cell);
        }
    }

    #[test]
    fn test_random_tier_is_deterministic_when_seeded() {
        let state = state_after(&[0]);
        let first = ScriptedAgent::from_seed(42).select_move(&state);
        let second = ScriptedAgent::from_seed(42).select_move(&state);
        assert_eq!(first, second);
    }

    #[test]
    fn test_returns_none_on_finished_game() {
        let state = state_after(&[0, 4, 1, 5, 2]);
        assert!(state.is_terminal());

        let mut agent = ScriptedAgent::from_seed(0);
        assert_eq!(agent.select_move(&state), None);
    }

    #[test]
    fn test_completing_cell_ignores_blocked_lines() {
        // Top row holds X X O: two X marks but no empty cell to complete.
        let state = state_after(&[0, 2, 1]);
        assert_eq!(completing_cell(state.board(), Cell::X), None);
    }

    #[test]
    fn test_scripted_agent_name() {
        let agent = ScriptedAgent::new();
        assert_eq!(agent.name(), "Scripted");
    }
}
