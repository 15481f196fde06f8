//! Fixed 7×6 grid. Row 0 is the top of the board, row `HEIGHT - 1` the bottom;
//! pieces fall to the highest empty row index of their column.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const WIDTH: usize = 7;
pub const HEIGHT: usize = 6;
pub const CENTER_COLUMN: usize = WIDTH / 2;
const MAX_CELLS: usize = WIDTH * HEIGHT;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Moves first; the human side in a game against the computer.
    Red,
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    pub(crate) fn symbol(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => f.write_str("red"),
            Player::Yellow => f.write_str("yellow"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Yellow,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

/// Board values are small and `Copy`: the search clones freely and every
/// hypothetical position is independent of the one it came from.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `HEIGHT` text rows, top row first, using `.` for
    /// empty cells and `R`/`Y` for pieces. Rejects pieces resting on air.
    pub fn from_rows(rows: &[&str]) -> Result<Self, GameError> {
        if rows.len() != HEIGHT {
            return Err(GameError::InvalidBoard(format!(
                "expected {HEIGHT} rows, found {}",
                rows.len()
            )));
        }
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != WIDTH {
                return Err(GameError::InvalidBoard(format!(
                    "row {row} has {} cells, expected {WIDTH}",
                    symbols.len()
                )));
            }
            for (column, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][column] = match symbol {
                    '.' => Cell::Empty,
                    'R' | 'r' => Cell::Red,
                    'Y' | 'y' => Cell::Yellow,
                    other => {
                        return Err(GameError::InvalidBoard(format!(
                            "unexpected symbol {other} at row {row}, column {column}"
                        )))
                    }
                };
            }
        }
        for column in 0..WIDTH {
            for row in 0..HEIGHT - 1 {
                if board.cells[row][column] != Cell::Empty
                    && board.cells[row + 1][column] == Cell::Empty
                {
                    return Err(GameError::FloatingPiece { row, column });
                }
            }
        }
        Ok(board)
    }

    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    pub fn is_legal_move(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column] == Cell::Empty
    }

    /// Legal columns in ascending order. Search relies on this order for its
    /// lowest-column tie-break.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..WIDTH).filter(|&col| self.is_legal_move(col)).collect()
    }

    /// Row a piece dropped into `column` would settle in.
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= WIDTH {
            return None;
        }
        (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column] == Cell::Empty)
    }

    /// Returns a copy with `player`'s piece dropped into `column`.
    ///
    /// # Panics
    ///
    /// Panics if the column is out of range or full. Callers derive columns
    /// from [`Board::legal_moves`]; use [`Board::try_drop_piece`] for
    /// unvalidated input.
    pub fn drop_piece(&self, column: usize, player: Player) -> Board {
        let Some(row) = self.landing_row(column) else {
            panic!("column {column} is not a legal move");
        };
        let mut next = *self;
        next.cells[row][column] = player.cell();
        next
    }

    /// Checked drop. Returns the new board and the row the piece landed in.
    pub fn try_drop_piece(
        &self,
        column: usize,
        player: Player,
    ) -> Result<(Board, usize), GameError> {
        if column >= WIDTH {
            return Err(GameError::ColumnOutOfBounds { column });
        }
        let row = self
            .landing_row(column)
            .ok_or(GameError::ColumnFull { column })?;
        let mut next = *self;
        next.cells[row][column] = player.cell();
        Ok((next, row))
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.piece_count() >= MAX_CELLS
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        let footer: String = (0..WIDTH).map(|col| char::from(b'0' + col as u8)).collect();
        write!(f, "{footer}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty_and_fully_open() {
        let board = Board::new();
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
        assert!(!board.is_full());
    }

    #[test]
    fn pieces_stack_from_the_bottom() {
        let board = Board::new()
            .drop_piece(3, Player::Red)
            .drop_piece(3, Player::Yellow);
        assert_eq!(board.get(5, 3), Cell::Red);
        assert_eq!(board.get(4, 3), Cell::Yellow);
        assert_eq!(board.get(3, 3), Cell::Empty);
        assert_eq!(board.landing_row(3), Some(3));
    }

    #[test]
    fn drop_changes_exactly_one_cell() {
        let before = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "...Y...",
            "..RR...",
            "Y.RYY.R",
        ])
        .unwrap();
        let after = before.drop_piece(2, Player::Yellow);
        assert_eq!(after.piece_count(), before.piece_count() + 1);
        let mut changed = Vec::new();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                if before.get(row, col) != after.get(row, col) {
                    changed.push((row, col));
                }
            }
        }
        assert_eq!(changed, vec![(3, 2)]);
        assert_eq!(after.get(3, 2), Cell::Yellow);
    }

    #[test]
    fn drop_leaves_the_source_board_untouched() {
        let board = Board::new();
        let _child = board.drop_piece(0, Player::Red);
        assert_eq!(board, Board::new());
    }

    #[test]
    #[should_panic(expected = "not a legal move")]
    fn drop_into_full_column_panics() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board = board.drop_piece(0, Player::Red);
        }
        board.drop_piece(0, Player::Yellow);
    }

    #[test]
    fn checked_drop_reports_errors() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board = board.try_drop_piece(6, Player::Yellow).unwrap().0;
        }
        assert!(!board.is_legal_move(6));
        assert_eq!(
            board.try_drop_piece(6, Player::Red),
            Err(GameError::ColumnFull { column: 6 })
        );
        assert_eq!(
            board.try_drop_piece(7, Player::Red),
            Err(GameError::ColumnOutOfBounds { column: 7 })
        );
        assert!(!board.is_legal_move(7));
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn full_board_has_no_moves() {
        let mut board = Board::new();
        for col in 0..WIDTH {
            for _ in 0..HEIGHT {
                board = board.drop_piece(col, Player::Red);
            }
        }
        assert!(board.is_full());
        assert!(board.legal_moves().is_empty());
    }

    #[test]
    fn text_board_rejects_floating_pieces() {
        let res = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            "...R...",
            ".......",
            ".......",
        ]);
        assert_eq!(res, Err(GameError::FloatingPiece { row: 3, column: 3 }));
    }

    #[test]
    fn text_board_rejects_bad_shape() {
        assert!(matches!(
            Board::from_rows(&["......."]),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_rows(&[".......", ".......", ".......", ".......", ".......", "..X...."]),
            Err(GameError::InvalidBoard(_))
        ));
    }

    #[test]
    fn display_round_trips_through_text() {
        let board = Board::new()
            .drop_piece(0, Player::Red)
            .drop_piece(6, Player::Yellow);
        let text = board.to_string();
        let rows: Vec<&str> = text.lines().take(HEIGHT).collect();
        assert_eq!(rows[5], "R.....Y");
        assert_eq!(Board::from_rows(&rows).unwrap(), board);
        assert!(text.ends_with("0123456"));
    }
}
