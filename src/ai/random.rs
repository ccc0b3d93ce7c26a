use crate::game::{Board, COLS};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that picks any column uniformly at random, full or not.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an agent whose choices are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a column from 0..COLS, ignoring the board.
    pub fn choose_column(&mut self) -> usize {
        self.rng.random_range(0..COLS)
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, _board: &Board) -> usize {
        self.choose_column()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
