//! Static evaluation of a position from the computer's point of view.
use crate::board::{Board, Cell, Player, CENTER_COLUMN, HEIGHT};
use crate::rules::WINDOWS;

const CENTER_WEIGHT: i64 = 3;

/// Scores four cells. Only a three-with-one-gap opponent line is penalised;
/// the weaker opponent shapes are deliberately ignored.
pub fn score_window(cells: [Cell; 4], ai: Player) -> i64 {
    let mine = ai.cell();
    let theirs = ai.opponent().cell();
    let count = |target: Cell| cells.iter().filter(|&&cell| cell == target).count();
    let (a, p, e) = (count(mine), count(theirs), count(Cell::Empty));

    let mut score = 0;
    match (a, e) {
        (4, _) => score += 100,
        (3, 1) => score += 5,
        (2, 2) => score += 2,
        _ => {}
    }
    if p == 3 && e == 1 {
        score -= 4;
    }
    score
}

/// Sum of [`score_window`] over every line of four, plus a bonus for each of
/// the computer's pieces in the center column.
pub fn score_position(board: &Board, ai: Player) -> i64 {
    let center = (0..HEIGHT)
        .filter(|&row| board.get(row, CENTER_COLUMN) == ai.cell())
        .count() as i64;

    WINDOWS.iter().fold(center * CENTER_WEIGHT, |score, window| {
        let cells = window.map(|(row, col)| board.get(row, col));
        score + score_window(cells, ai)
    })
}
