use crate::error::Result;

/// The central trait of the library, defining the interface for a game state.
///
/// The search engine only talks to the game through this trait. States are
/// cloned whenever the search needs an independent branch, so an implementation
/// must not share mutable data between clones.
pub trait Board: Default + Clone {
    /// The type representing a move in the game.
    type Move: Copy + PartialEq + std::fmt::Debug;

    /// Returns the player whose turn it is. Frozen once the game is over.
    fn current_player(&self) -> Player;

    /// Returns the current status of the game.
    fn status(&self) -> GameStatus;

    /// Returns all legal moves in a stable, ascending order.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Applies a move for the current player. Leaves the state unchanged on error.
    fn make(&mut self, b_move: Self::Move) -> Result<()>;

    /// The move that produced this state, if any.
    fn last_move(&self) -> Option<Self::Move>;

    /// Returns true if `player` would complete a winning line by playing `b_move` now,
    /// regardless of whose turn it is.
    fn is_winning_move(&self, b_move: Self::Move, player: Player) -> bool;
}

/// The two players. Red always moves first.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

/// Represents the possible statuses of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum GameStatus {
    /// The game is still ongoing.
    Ongoing,
    RedWin,
    YellowWin,
    Draw,
}

impl GameStatus {
    /// The winning status for `player`.
    pub fn win_for(player: Player) -> GameStatus {
        match player {
            Player::Red => GameStatus::RedWin,
            Player::Yellow => GameStatus::YellowWin,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::RedWin => Some(Player::Red),
            GameStatus::YellowWin => Some(Player::Yellow),
            _ => None,
        }
    }
}
