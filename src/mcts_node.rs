use crate::board::{Board, GameStatus};

/// Represents a single node in the Monte Carlo search tree.
///
/// Each node owns its own copy of the game state, so no two nodes share a board.
/// Parent and child links live in the tree arena, not here.
#[derive(Debug, Clone)]
pub struct MctsNode<T: Board> {
    /// The game state that this node represents.
    pub board: T,
    /// The number of simulations routed through this node.
    pub visits: u32,
    /// Accumulated score: 1.0 per win for this node's player to move, 0.5 per draw.
    pub value: f64,
}

impl<T: Board> Default for MctsNode<T> {
    fn default() -> Self {
        MctsNode::new(T::default())
    }
}

impl<T: Board> MctsNode<T> {
    /// Creates a fresh, unvisited node for `board`.
    pub fn new(board: T) -> Self {
        MctsNode {
            board,
            visits: 0,
            value: 0.0,
        }
    }

    /// The move that led to this node's state from its parent. `None` for a fresh root.
    pub fn prev_move(&self) -> Option<T::Move> {
        self.board.last_move()
    }

    pub fn is_terminal(&self) -> bool {
        self.board.status().is_terminal()
    }

    /// Smoothed win rate `value / (visits + 1)`, used for the final move choice.
    pub fn win_rate(&self) -> f64 {
        self.value / (self.visits as f64 + 1.0)
    }

    /// UCT score of this node as a child of a parent with `parent_visits` visits.
    pub fn uct_value(&self, parent_visits: u32, exploration_weight: f64) -> f64 {
        let exploration =
            f64::sqrt(f64::ln(parent_visits as f64 + 1.0) / (self.visits as f64 + 1.0));
        self.win_rate() + exploration_weight * exploration
    }

    /// Records one simulation result.
    ///
    /// Credit is relative to the player to move at this node, not the player who
    /// moved into it.
    pub fn record(&mut self, result: GameStatus) {
        self.visits += 1;
        if result == GameStatus::win_for(self.board.current_player()) {
            self.value += 1.0;
        } else if result == GameStatus::Draw {
            self.value += 0.5;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::boards::connect_four::ConnectFourBoard;

    #[test]
    fn unvisited_node_has_zero_win_rate() {
        let node: MctsNode<ConnectFourBoard> = MctsNode::default();
        assert_eq!(node.visits, 0);
        assert_eq!(node.win_rate(), 0.0);
        assert_eq!(node.prev_move(), None);
    }

    #[test]
    fn record_credits_player_to_move() {
        // arrange
        let mut node: MctsNode<ConnectFourBoard> = MctsNode::default();
        assert_eq!(node.board.current_player(), Player::Red);

        // act
        node.record(GameStatus::RedWin);
        node.record(GameStatus::YellowWin);
        node.record(GameStatus::Draw);

        // assert
        assert_eq!(node.visits, 3);
        assert_eq!(node.value, 1.5);
        assert_eq!(node.win_rate(), 1.5 / 4.0);
    }

    #[test]
    fn uct_value_matches_formula() {
        let mut node: MctsNode<ConnectFourBoard> = MctsNode::default();
        node.visits = 3;
        node.value = 2.0;
        let expected = 2.0 / 4.0 + 2.0 * f64::sqrt(f64::ln(11.0) / 4.0);
        assert!((node.uct_value(10, 2.0) - expected).abs() < 1e-12);
    }
}
