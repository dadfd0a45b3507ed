//! Random-move engine.
//!
//! Selects uniformly from legal moves. Used by the terminal binary for random
//! playouts and by tests that need varied but reproducible games.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine: the same seed replays the same games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn name(&self) -> &str {
        "RayChess Random"
    }

    /// A uniformly chosen legal move, or `None` when the game is over.
    pub fn choose_move(&mut self, game_state: &mut GameState) -> Option<Move> {
        game_state.legal_moves().choose(&mut self.rng).copied()
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}
