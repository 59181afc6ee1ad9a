//! Uniform random-move agent.
//!
//! Backed by a seedable `StdRng` so tests and replays can fix the sequence of
//! choices.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::agent_trait::Agent;
use crate::move_generation::checkers_move::Move;

pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::seeded)
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn choose_move(&mut self, legal_moves: &[Move]) -> Option<Move> {
        legal_moves.choose(&mut self.rng).copied()
    }
}
