//! Connect Four with a Monte Carlo tree search opponent.
//!
//! This library provides the rules engine for Connect Four on the standard 7x6 grid
//! and a Monte Carlo Tree Search (MCTS) engine that picks moves for the automated
//! player. The search is generic over the `Board` trait; rollouts are greedy
//! (take a win, and for the second player also block one) rather than uniformly random.
//!
//! # Example
//!
//! ```rust
//! use connect_four_mcts::agent::choose_move;
//! use connect_four_mcts::board::Board;
//! use connect_four_mcts::boards::connect_four::ConnectFourBoard;
//! use connect_four_mcts::random::SeededRandomGenerator;
//!
//! // The human opens in the centre column
//! let mut board = ConnectFourBoard::default();
//! board.make(3).unwrap();
//!
//! // Ask the search for a reply and play it
//! let mut random = SeededRandomGenerator::new(7);
//! let reply = choose_move(&board, 500, 2.0, &mut random).unwrap();
//! board.make(reply).unwrap();
//!
//! println!("{board}");
//! ```

/// The automated player and the `choose_move` entry point.
pub mod agent;
/// Contains the `Board` trait, `Player` and `GameStatus`.
pub mod board;
/// Contains the Connect Four implementation of the `Board` trait.
pub mod boards;
/// Search settings.
pub mod config;
pub mod error;
/// The core search module, containing the `MonteCarloTreeSearch` implementation.
pub mod mcts;
/// Contains the `MctsNode` struct, which represents a node in the search tree.
pub mod mcts_node;
/// Contains traits and implementations for random number generation.
pub mod random;
/// The greedy playout policy used by the simulation stage.
pub mod rollout;

pub use error::{Error, Result};
