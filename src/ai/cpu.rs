use rand::rngs::StdRng;
use rand::SeedableRng;

use super::agent::Agent;
use super::strategy::{choose_move, Strategy};
use crate::error::MoveError;
use crate::game::Game;

/// A computer player driven by one of the rule-based skill tiers.
pub struct CpuAgent {
    strategy: Strategy,
    rng: StdRng,
    name: String,
}

impl CpuAgent {
    pub fn new(strategy: Strategy) -> Self {
        Self::with_rng(strategy, StdRng::from_os_rng())
    }

    /// Reproducible move choices.
    pub fn with_seed(strategy: Strategy, seed: u64) -> Self {
        Self::with_rng(strategy, StdRng::seed_from_u64(seed))
    }

    fn with_rng(strategy: Strategy, rng: StdRng) -> Self {
        CpuAgent {
            strategy,
            rng,
            name: format!("CPU ({strategy})"),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Agent for CpuAgent {
    fn select_column(&mut self, game: &Game) -> Result<Option<char>, MoveError> {
        let color = game.current_player().color();
        choose_move(game.board(), color, self.strategy, &mut self.rng)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
