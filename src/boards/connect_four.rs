use crate::board::{Board, GameStatus, Player};
use crate::error::{Error, Result};
use std::fmt;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 6;
const LINE_LENGTH: usize = 4;

/// Horizontal, vertical, diagonal-up and diagonal-down, as (column, row) steps.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// An implementation of the `Board` trait for Connect Four on the standard 7x6 grid.
///
/// Cells are stored column-major with row 0 at the bottom. A move is a column
/// index in `0..7`. Invariant: `cells[c][r]` is occupied iff `r < heights[c]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConnectFourBoard {
    cells: [[Option<Player>; ROWS]; COLUMNS],
    heights: [usize; COLUMNS],
    current_player: Player,
    status: GameStatus,
    last_move: Option<usize>,
}

impl Default for ConnectFourBoard {
    /// Creates an empty board with Red to move.
    fn default() -> Self {
        Self {
            cells: [[None; ROWS]; COLUMNS],
            heights: [0; COLUMNS],
            current_player: Player::Red,
            status: GameStatus::Ongoing,
            last_move: None,
        }
    }
}

impl ConnectFourBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The disc at `column`, `row` (row 0 is the bottom), or `None` for an empty or
    /// out-of-range cell.
    pub fn cell(&self, column: usize, row: usize) -> Option<Player> {
        self.cells.get(column)?.get(row).copied().flatten()
    }

    pub fn height(&self, column: usize) -> usize {
        self.heights.get(column).copied().unwrap_or(0)
    }

    pub fn heights(&self) -> &[usize; COLUMNS] {
        &self.heights
    }

    pub fn disc_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Removes the disc placed by the most recent `make`.
    ///
    /// Only one level of undo is tracked: after an `unmake` the last move is cleared
    /// and a second `unmake` fails with `NothingToUndo`.
    pub fn unmake(&mut self) -> Result<()> {
        let column = self.last_move.ok_or(Error::NothingToUndo)?;
        let row = self.heights[column] - 1;
        // The player only flipped if the undone move left the game ongoing.
        if self.status == GameStatus::Ongoing {
            self.current_player = self.current_player.other();
        }
        self.cells[column][row] = None;
        self.heights[column] = row;
        self.status = GameStatus::Ongoing;
        self.last_move = None;
        Ok(())
    }

    fn is_playable(&self, column: usize) -> bool {
        column < COLUMNS && self.heights[column] < ROWS
    }

    /// Counts `player` discs running from (column, row) in direction (dc, dr),
    /// excluding the starting cell.
    fn count_direction(&self, column: usize, row: usize, dc: isize, dr: isize, player: Player) -> usize {
        let mut count = 0;
        let mut c = column as isize + dc;
        let mut r = row as isize + dr;
        while c >= 0 && r >= 0 && self.cell(c as usize, r as usize) == Some(player) {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }

    /// True if a `player` disc at (column, row) is part of four or more in a line.
    fn completes_line(&self, column: usize, row: usize, player: Player) -> bool {
        DIRECTIONS.iter().any(|&(dc, dr)| {
            1 + self.count_direction(column, row, dc, dr, player)
                + self.count_direction(column, row, -dc, -dr, player)
                >= LINE_LENGTH
        })
    }
}

impl Board for ConnectFourBoard {
    type Move = usize;

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn legal_moves(&self) -> Vec<Self::Move> {
        (0..COLUMNS).filter(|&column| self.heights[column] < ROWS).collect()
    }

    fn make(&mut self, column: usize) -> Result<()> {
        if !self.is_playable(column) {
            return Err(Error::InvalidMove { column });
        }
        if self.status.is_terminal() {
            return Err(Error::GameOver);
        }

        let row = self.heights[column];
        let player = self.current_player;
        self.cells[column][row] = Some(player);
        self.heights[column] += 1;
        self.last_move = Some(column);

        if self.completes_line(column, row, player) {
            self.status = GameStatus::win_for(player);
        } else if self.heights.iter().all(|&height| height == ROWS) {
            self.status = GameStatus::Draw;
        } else {
            self.current_player = player.other();
        }
        Ok(())
    }

    fn last_move(&self) -> Option<Self::Move> {
        self.last_move
    }

    fn is_winning_move(&self, column: usize, player: Player) -> bool {
        self.is_playable(column) && self.completes_line(column, self.heights[column], player)
    }
}

impl fmt::Display for ConnectFourBoard {
    /// Renders the grid top row first: `R` for Red, `Y` for Yellow, `.` for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<&str> = (0..COLUMNS)
                .map(|column| match self.cells[column][row] {
                    Some(Player::Red) => "R",
                    Some(Player::Yellow) => "Y",
                    None => ".",
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[usize]) -> ConnectFourBoard {
        let mut board = ConnectFourBoard::default();
        for &column in moves {
            board.make(column).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_has_every_column() {
        let board = ConnectFourBoard::default();
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.current_player(), Player::Red);
        assert_eq!(board.status(), GameStatus::Ongoing);
        assert_eq!(board.last_move(), None);
    }

    #[test]
    fn disc_drops_to_lowest_row() {
        // arrange
        let mut board = play(&[3]);

        // act
        board.make(3).unwrap();

        // assert
        assert_eq!(board.cell(3, 0), Some(Player::Red));
        assert_eq!(board.cell(3, 1), Some(Player::Yellow));
        assert_eq!(board.cell(3, 2), None);
        assert_eq!(board.height(3), 2);
        assert_eq!(board.last_move(), Some(3));
        assert_eq!(board.current_player(), Player::Red);
    }

    #[test]
    fn horizontal_four_wins() {
        let board = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(board.status(), GameStatus::RedWin);
        assert_eq!(board.current_player(), Player::Red);
    }

    #[test]
    fn diagonal_down_four_wins() {
        // Red: (3,0) (2,1) (1,2) (0,3)
        let board = play(&[3, 2, 2, 1, 0, 1, 1, 0, 5, 0, 0]);
        assert_eq!(board.status(), GameStatus::RedWin);
        assert_eq!(board.last_move(), Some(0));
    }

    #[test]
    fn full_column_is_rejected() {
        // arrange
        let mut board = play(&[2, 2, 2, 2, 2, 2]);
        let before = board.clone();

        // act
        let result = board.make(2);

        // assert
        assert_eq!(result, Err(Error::InvalidMove { column: 2 }));
        assert_eq!(board, before);
        assert!(!board.legal_moves().contains(&2));
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let mut board = ConnectFourBoard::default();
        assert_eq!(board.make(7), Err(Error::InvalidMove { column: 7 }));
        assert_eq!(board, ConnectFourBoard::default());
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut board = play(&[0, 6, 0, 6, 0, 6, 0]);
        let before = board.clone();
        assert_eq!(board.make(1), Err(Error::GameOver));
        assert_eq!(board, before);
    }

    #[test]
    fn unmake_restores_previous_state() {
        let mut board = play(&[3, 4, 3]);
        let before = board.clone();

        board.make(5).unwrap();
        board.unmake().unwrap();

        assert_eq!(board.cells, before.cells);
        assert_eq!(board.heights, before.heights);
        assert_eq!(board.current_player, before.current_player);
        assert_eq!(board.status, before.status);
    }

    #[test]
    fn unmake_winning_move_keeps_winner_to_move() {
        let mut board = play(&[0, 6, 0, 6, 0, 6]);
        board.make(0).unwrap();
        assert_eq!(board.status(), GameStatus::RedWin);

        board.unmake().unwrap();

        assert_eq!(board.status(), GameStatus::Ongoing);
        assert_eq!(board.current_player(), Player::Red);
        assert_eq!(board.height(0), 3);
    }

    #[test]
    fn unmake_without_move_fails() {
        let mut board = play(&[1]);
        board.unmake().unwrap();
        assert_eq!(board.unmake(), Err(Error::NothingToUndo));
    }

    #[test]
    fn winning_move_detection_ignores_turn() {
        // Red has three in column 0, Yellow three in column 6, Red to move.
        let board = play(&[0, 6, 0, 6, 0, 6]);
        assert!(board.is_winning_move(0, Player::Red));
        assert!(board.is_winning_move(6, Player::Yellow));
        assert!(!board.is_winning_move(3, Player::Red));
        assert!(!board.is_winning_move(7, Player::Red));
    }

    #[test]
    fn clone_is_independent() {
        let original = play(&[3]);
        let mut copy = original.clone();
        copy.make(4).unwrap();
        assert_eq!(original.height(4), 0);
        assert_eq!(original.cell(4, 0), None);
        assert_eq!(copy.cell(4, 0), Some(Player::Yellow));
    }

    #[test]
    fn display_renders_top_row_first() {
        let board = play(&[0, 1]);
        let rendered = board.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ". . . . . . .");
        assert_eq!(lines[5], "R Y . . . . .");
    }
}
