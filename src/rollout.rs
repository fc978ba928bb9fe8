//! The playout policy used during the simulation stage.
//!
//! Playouts are greedy rather than uniformly random. At every ply the player to
//! move takes an immediate win if one exists. Yellow, the second player, also
//! blocks an immediate Red win before falling back to a random move; Red does not
//! block. The asymmetry is deliberate and changes search results if removed.

use crate::board::{Board, GameStatus, Player};
use crate::error::{Error, Result};
use crate::random::RandomGenerator;

/// Plays `board` forward to a terminal status and returns that status.
pub fn simulate<T: Board, K: RandomGenerator>(board: &T, random: &mut K) -> Result<GameStatus> {
    let mut board = board.clone();
    while board.status() == GameStatus::Ongoing {
        let next = choose_rollout_move(&board, random)?;
        board.make(next)?;
    }
    Ok(board.status())
}

/// Picks the next playout move for the player to move on `board`.
pub fn choose_rollout_move<T: Board, K: RandomGenerator>(board: &T, random: &mut K) -> Result<T::Move> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(Error::NoLegalMoves);
    }

    let mover = board.current_player();
    if let Some(win) = find_winning_move(board, &moves, mover) {
        return Ok(win);
    }
    if mover == Player::Yellow {
        if let Some(block) = find_winning_move(board, &moves, mover.other()) {
            return Ok(block);
        }
    }

    random.pick_random(&moves).copied().ok_or(Error::EmptyCandidates)
}

/// First move, in legal-move order, that completes a line for `player`.
fn find_winning_move<T: Board>(board: &T, moves: &[T::Move], player: Player) -> Option<T::Move> {
    moves
        .iter()
        .copied()
        .find(|&candidate| board.is_winning_move(candidate, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::connect_four::ConnectFourBoard;
    use crate::random::SeededRandomGenerator;

    fn play(moves: &[usize]) -> ConnectFourBoard {
        let mut board = ConnectFourBoard::default();
        for &column in moves {
            board.make(column).unwrap();
        }
        board
    }

    #[test]
    fn takes_immediate_win() {
        // Red to move with three stacked in column 2.
        let board = play(&[2, 5, 2, 5, 2, 6]);
        let mut rg = SeededRandomGenerator::new(1);
        for _ in 0..20 {
            assert_eq!(choose_rollout_move(&board, &mut rg).unwrap(), 2);
        }
    }

    #[test]
    fn yellow_blocks_red_threat() {
        // Yellow to move, Red threatens column 4 vertically.
        let board = play(&[4, 0, 4, 1, 4]);
        assert_eq!(board.current_player(), Player::Yellow);
        let mut rg = SeededRandomGenerator::new(2);
        for _ in 0..20 {
            assert_eq!(choose_rollout_move(&board, &mut rg).unwrap(), 4);
        }
    }

    #[test]
    fn yellow_prefers_own_win_over_block() {
        // Both threaten: Red in column 0, Yellow in column 6.
        let board = play(&[0, 6, 0, 6, 0, 6, 3]);
        assert_eq!(board.current_player(), Player::Yellow);
        let mut rg = SeededRandomGenerator::new(3);
        assert_eq!(choose_rollout_move(&board, &mut rg).unwrap(), 6);
    }

    #[test]
    fn red_does_not_block() {
        // Red to move, Yellow threatens column 6; Red has no win of its own.
        let board = play(&[0, 6, 2, 6, 4, 6]);
        assert_eq!(board.current_player(), Player::Red);
        let mut rg = SeededRandomGenerator::new(4);
        let picks: Vec<usize> = (0..200)
            .map(|_| choose_rollout_move(&board, &mut rg).unwrap())
            .collect();
        assert!(picks.iter().any(|&column| column != 6));
    }

    #[test]
    fn simulate_reaches_terminal_without_touching_input() {
        let board = play(&[3, 3]);
        let before = board.clone();
        let mut rg = SeededRandomGenerator::new(5);
        for _ in 0..50 {
            let status = simulate(&board, &mut rg).unwrap();
            assert!(status.is_terminal());
        }
        assert_eq!(board, before);
    }

    #[test]
    fn simulate_on_terminal_state_returns_it() {
        let board = play(&[0, 6, 0, 6, 0, 6, 0]);
        let mut rg = SeededRandomGenerator::default();
        assert_eq!(simulate(&board, &mut rg).unwrap(), GameStatus::RedWin);
    }
}
