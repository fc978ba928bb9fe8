use crate::board::{Board, GameStatus};
use crate::error::{Error, Result};
use crate::mcts_node::MctsNode;
use crate::random::RandomGenerator;
use crate::rollout;
use ego_tree::{NodeId, NodeRef, Tree};
use log::trace;

/// Exploration weight used when none is configured.
pub const DEFAULT_EXPLORATION_WEIGHT: f64 = 2.0;

/// The main struct for running the Monte Carlo Tree Search algorithm.
///
/// It owns the whole search tree as a single arena: parent and child links are
/// node ids, and every node is released together when the search is dropped.
pub struct MonteCarloTreeSearch<T: Board, K: RandomGenerator> {
    tree: Tree<MctsNode<T>>,
    root_id: NodeId,
    random: K,
    exploration_weight: f64,
    next_action: MctsAction,
}

/// A builder for creating instances of `MonteCarloTreeSearch`.
pub struct MonteCarloTreeSearchBuilder<T: Board, K: RandomGenerator> {
    board: T,
    random_generator: K,
    exploration_weight: f64,
}

impl<T: Board, K: RandomGenerator + Default> MonteCarloTreeSearchBuilder<T, K> {
    /// Creates a new builder with the given root state.
    pub fn new(board: T) -> Self {
        Self {
            board,
            random_generator: K::default(),
            exploration_weight: DEFAULT_EXPLORATION_WEIGHT,
        }
    }
}

impl<T: Board, K: RandomGenerator> MonteCarloTreeSearchBuilder<T, K> {
    /// Sets the random number generator used by rollouts.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Sets the weight of the exploration term in the UCT score.
    pub fn with_exploration_weight(mut self, exploration_weight: f64) -> Self {
        self.exploration_weight = exploration_weight;
        self
    }

    /// Builds the `MonteCarloTreeSearch` instance with the configured parameters.
    pub fn build(self) -> MonteCarloTreeSearch<T, K> {
        MonteCarloTreeSearch::new(self.board, self.random_generator, self.exploration_weight)
    }
}

impl<T: Board, K: RandomGenerator> MonteCarloTreeSearch<T, K> {
    /// Returns a new builder for `MonteCarloTreeSearch`.
    pub fn builder(board: T) -> MonteCarloTreeSearchBuilder<T, K>
    where
        K: Default,
    {
        MonteCarloTreeSearchBuilder::new(board)
    }

    /// Creates a new search rooted at `board`.
    pub fn new(board: T, rg: K, exploration_weight: f64) -> Self {
        let tree = Tree::new(MctsNode::new(board));
        let root_id = tree.root().id();

        Self {
            tree,
            root_id,
            random: rg,
            exploration_weight,
            next_action: MctsAction::Selection,
        }
    }

    /// Returns a reference to the root node of the search tree.
    pub fn get_root(&self) -> NodeRef<'_, MctsNode<T>> {
        self.tree.root()
    }

    /// Returns the next MCTS stage to be performed.
    pub fn get_next_mcts_action(&self) -> &MctsAction {
        &self.next_action
    }

    /// Executes a single stage of the algorithm and advances to the next one.
    pub fn execute_action(&mut self) -> Result<()> {
        let action = self.next_action;
        trace!("mcts stage: {}", action.get_name());
        self.next_action = match action {
            MctsAction::Selection => {
                let selected = self.select_node()?;
                if self.node(selected)?.value().is_terminal() {
                    MctsAction::Simulation { node: selected }
                } else {
                    MctsAction::Expansion { leaf: selected }
                }
            }
            MctsAction::Expansion { leaf } => MctsAction::Simulation {
                node: self.expand_node(leaf)?,
            },
            MctsAction::Simulation { node } => {
                let board = self.node(node)?.value().board.clone();
                let result = rollout::simulate(&board, &mut self.random)?;
                MctsAction::Backpropagation { node, result }
            }
            MctsAction::Backpropagation { node, result } => {
                self.backpropagate(node, result)?;
                MctsAction::Selection
            }
        };
        Ok(())
    }

    /// Performs one full iteration: selection, expansion, simulation, backpropagation.
    pub fn do_iteration(&mut self) -> Result<()> {
        self.execute_action()?;
        while self.next_action != MctsAction::Selection {
            self.execute_action()?;
        }
        Ok(())
    }

    /// Runs the search for exactly `n` iterations.
    pub fn iterate_n_times(&mut self, n: u32) -> Result<()> {
        for _ in 0..n {
            self.do_iteration()?;
        }
        Ok(())
    }

    /// Returns the child of the root with the highest smoothed win rate.
    /// Ties go to the earliest created child. `None` until the root is expanded.
    pub fn get_most_perspective_move(&self) -> Option<NodeRef<'_, MctsNode<T>>> {
        let mut best_rate = f64::NEG_INFINITY;
        let mut best_node = None;
        for child in self.tree.root().children() {
            let rate = child.value().win_rate();
            if rate > best_rate {
                best_rate = rate;
                best_node = Some(child);
            }
        }
        best_node
    }

    /// The move leading to the most promising child of the root.
    pub fn best_move(&self) -> Result<T::Move> {
        self.get_most_perspective_move()
            .and_then(|child| child.value().prev_move())
            .ok_or(Error::NoLegalMoves)
    }

    fn node(&self, node_id: NodeId) -> Result<NodeRef<'_, MctsNode<T>>> {
        self.tree.get(node_id).ok_or(Error::MissingNode)
    }

    /// Descends from the root by UCT until reaching a terminal node or one that has
    /// not been expanded yet.
    fn select_node(&self) -> Result<NodeId> {
        let mut current = self.root_id;
        loop {
            let node = self.node(current)?;
            let mcts_node = node.value();
            if mcts_node.is_terminal() {
                return Ok(current);
            }

            let legal_moves = mcts_node.board.legal_moves().len();
            if legal_moves == 0 {
                return Err(Error::NoLegalMoves);
            }
            if node.children().count() < legal_moves {
                return Ok(current);
            }

            current = self.best_uct_child(node)?;
        }
    }

    fn best_uct_child(&self, node: NodeRef<'_, MctsNode<T>>) -> Result<NodeId> {
        let parent_visits = node.value().visits;
        let mut max_uct = f64::NEG_INFINITY;
        let mut best_child_id = None;
        for child in node.children() {
            let current_uct = child.value().uct_value(parent_visits, self.exploration_weight);
            if current_uct > max_uct {
                max_uct = current_uct;
                best_child_id = Some(child.id());
            }
        }
        best_child_id.ok_or(Error::MissingNode)
    }

    /// Expands a node with one child per legal move, in legal-move order, and
    /// returns the last child created.
    fn expand_node(&mut self, node_id: NodeId) -> Result<NodeId> {
        let board = self.node(node_id)?.value().board.clone();
        let mut last_child = None;
        for possible_move in board.legal_moves() {
            let mut child_board = board.clone();
            child_board.make(possible_move)?;
            let mut parent = self.tree.get_mut(node_id).ok_or(Error::MissingNode)?;
            last_child = Some(parent.append(MctsNode::new(child_board)).id());
        }
        last_child.ok_or(Error::NoLegalMoves)
    }

    /// Walks from `node_id` up to the root, recording `result` on every node.
    fn backpropagate(&mut self, node_id: NodeId, result: GameStatus) -> Result<()> {
        let mut current = Some(node_id);
        while let Some(id) = current {
            let mut node = self.tree.get_mut(id).ok_or(Error::MissingNode)?;
            node.value().record(result);
            current = node.parent().map(|parent| parent.id());
        }
        Ok(())
    }
}

/// Represents the four stages of one MCTS iteration.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum MctsAction {
    /// **Selection**: descend from the root by UCT to a terminal or unexpanded node.
    Selection,
    /// **Expansion**: create a child for every legal move of `leaf`.
    Expansion {
        /// The node to be expanded.
        leaf: NodeId,
    },
    /// **Simulation**: run a playout from `node`.
    Simulation {
        /// The node whose state the playout starts from.
        node: NodeId,
    },
    /// **Backpropagation**: record `result` on the path from `node` to the root.
    Backpropagation {
        /// The node from which the simulation was run.
        node: NodeId,
        /// The terminal status the playout reached.
        result: GameStatus,
    },
}

impl MctsAction {
    /// Returns the name of the current MCTS stage.
    pub fn get_name(&self) -> &'static str {
        match self {
            MctsAction::Selection => "Selection",
            MctsAction::Expansion { .. } => "Expansion",
            MctsAction::Simulation { .. } => "Simulation",
            MctsAction::Backpropagation { .. } => "Backpropagation",
        }
    }
}
