//! Search settings for the automated player.

use crate::error::{Error, Result};
use crate::mcts::DEFAULT_EXPLORATION_WEIGHT;

/// Number of iterations per decision when none is configured.
pub const DEFAULT_SIMULATIONS: u32 = 3000;

/// Configuration for an `MctsAgent`.
///
/// # Examples
///
/// ```
/// use connect_four_mcts::config::MctsConfig;
///
/// let config = MctsConfig::new(500)
///     .with_exploration_weight(1.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of search iterations per decision
    pub simulations: u32,
    /// Weight of the exploration term in the UCT score
    pub exploration_weight: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl MctsConfig {
    /// Create a configuration with the given simulation budget and default
    /// exploration weight, without a fixed seed.
    pub fn new(simulations: u32) -> Self {
        Self {
            simulations,
            exploration_weight: DEFAULT_EXPLORATION_WEIGHT,
            seed: None,
        }
    }

    pub fn with_exploration_weight(mut self, exploration_weight: f64) -> Self {
        self.exploration_weight = exploration_weight;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.simulations == 0 {
            return Err(Error::InvalidConfiguration {
                message: "simulations must be at least 1".to_string(),
            });
        }
        if !self.exploration_weight.is_finite() || self.exploration_weight < 0.0 {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "exploration weight {} must be non-negative and finite",
                    self.exploration_weight
                ),
            });
        }
        Ok(())
    }
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATIONS)
    }
}
