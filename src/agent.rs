//! The public entry point for picking the automated player's move.

use crate::board::{Board, GameStatus};
use crate::config::MctsConfig;
use crate::error::{Error, Result};
use crate::mcts::MonteCarloTreeSearch;
use crate::random::{RandomGenerator, SeededRandomGenerator};
use log::debug;

/// Runs a fresh search from `board` for exactly `simulation_budget` iterations and
/// returns the chosen move.
///
/// The tree is built for this call only and dropped before returning.
pub fn choose_move<T: Board, K: RandomGenerator>(
    board: &T,
    simulation_budget: u32,
    exploration_weight: f64,
    random: &mut K,
) -> Result<T::Move> {
    if board.status() != GameStatus::Ongoing {
        return Err(Error::GameOver);
    }
    if simulation_budget < 1 {
        return Err(Error::InvalidSimulationBudget {
            budget: simulation_budget,
        });
    }

    let mut mcts = MonteCarloTreeSearch::new(board.clone(), random, exploration_weight);
    mcts.iterate_n_times(simulation_budget)?;
    let best_move = mcts.best_move()?;

    let root = mcts.get_root();
    debug!(
        "chose {:?} after {} simulations (root visits {}, children {})",
        best_move,
        simulation_budget,
        root.value().visits,
        root.children().count()
    );
    Ok(best_move)
}

/// An automated player: a search configuration plus its own random source.
#[derive(Debug, Clone)]
pub struct MctsAgent {
    config: MctsConfig,
    random: SeededRandomGenerator,
}

impl MctsAgent {
    /// Creates an agent, seeding from `config.seed` when set and from the
    /// operating system otherwise.
    pub fn new(config: MctsConfig) -> Result<Self> {
        config.validate()?;
        let random = match config.seed {
            Some(seed) => SeededRandomGenerator::new(seed),
            None => SeededRandomGenerator::from_entropy(),
        };
        Ok(Self { config, random })
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Picks a move for the player to move on `board`.
    pub fn choose_move<T: Board>(&mut self, board: &T) -> Result<T::Move> {
        choose_move(
            board,
            self.config.simulations,
            self.config.exploration_weight,
            &mut self.random,
        )
    }
}
