//! Four-in-a-row detection and game outcome.
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, HEIGHT, WIDTH};

/// `(row, column)` coordinates of four consecutive cells.
pub type Window = [(usize, usize); 4];

/// Every line of four on the board, in scan order: horizontal, vertical,
/// down-right diagonal, up-right diagonal. Each block is row-major.
pub static WINDOWS: Lazy<Vec<Window>> = Lazy::new(generate_windows);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Winner { player: Player, line: Window },
    Draw,
}

pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// First winning line for `player` in scan order.
pub fn winning_line(board: &Board, player: Player) -> Option<Window> {
    let cell = player.cell();
    WINDOWS
        .iter()
        .find(|window| window.iter().all(|&(row, col)| board.get(row, col) == cell))
        .copied()
}

pub fn is_terminal(board: &Board) -> bool {
    has_four_in_a_row(board, Player::Red)
        || has_four_in_a_row(board, Player::Yellow)
        || board.legal_moves().is_empty()
}

/// `None` while the game is still open.
pub fn outcome(board: &Board) -> Option<Outcome> {
    for player in [Player::Red, Player::Yellow] {
        if let Some(line) = winning_line(board, player) {
            return Some(Outcome::Winner { player, line });
        }
    }
    if board.legal_moves().is_empty() {
        return Some(Outcome::Draw);
    }
    None
}

fn generate_windows() -> Vec<Window> {
    let mut windows = Vec::new();
    // Horizontal
    for row in 0..HEIGHT {
        for col in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row, col + i)));
        }
    }
    // Vertical
    for row in 0..=HEIGHT - 4 {
        for col in 0..WIDTH {
            windows.push(std::array::from_fn(|i| (row + i, col)));
        }
    }
    // Diagonal \
    for row in 0..=HEIGHT - 4 {
        for col in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row + i, col + i)));
        }
    }
    // Diagonal /
    for row in 3..HEIGHT {
        for col in 0..=WIDTH - 4 {
            windows.push(std::array::from_fn(|i| (row - i, col + i)));
        }
    }
    windows
}
