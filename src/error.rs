//! Error types for the rules engine and the search.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: column {column} is out of range or already full")]
    InvalidMove { column: usize },

    #[error("game already over")]
    GameOver,

    #[error("no move to undo")]
    NothingToUndo,

    #[error("simulation budget must be at least 1, got {budget}")]
    InvalidSimulationBudget { budget: u32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("ongoing state has no legal moves")]
    NoLegalMoves,

    #[error("cannot pick from an empty set of candidates")]
    EmptyCandidates,

    #[error("search tree has no node for a known id")]
    MissingNode,
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
