//! Contains implementations of the `Board` trait.

/// A `Board` implementation for Connect Four on a 7x6 grid.
pub mod connect_four;
