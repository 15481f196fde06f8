//! Move-history notation: `R3Y3R2...`, one color letter and one column digit
//! per move. Lets a stateless caller describe any reachable position.
use serde::{Deserialize, Serialize};

use crate::board::{Board, Player, WIDTH};
use crate::error::GameError;
use crate::rules::outcome;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedMove {
    pub player: Player,
    pub column: usize,
}

pub fn parse_history(history: &str) -> Result<Vec<TypedMove>, GameError> {
    let history = history.trim();
    let chars: Vec<char> = history.chars().collect();
    let mut moves = Vec::with_capacity(chars.len() / 2);
    let mut idx = 0;
    while idx < chars.len() {
        let color = chars[idx];
        let player = match color {
            'R' | 'r' => Player::Red,
            'Y' | 'y' => Player::Yellow,
            _ => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("expected R or Y, found {color}"),
                })
            }
        };
        idx += 1;
        let Some(&column_char) = chars.get(idx) else {
            return Err(GameError::ParseMove {
                position: idx,
                reason: "missing column number".to_string(),
            });
        };
        let column = match column_char.to_digit(10) {
            Some(digit) if (digit as usize) < WIDTH => digit as usize,
            Some(_) => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("column must be 0-{}", WIDTH - 1),
                })
            }
            None => {
                return Err(GameError::ParseMove {
                    position: idx,
                    reason: format!("expected column digit, found {column_char}"),
                })
            }
        };
        moves.push(TypedMove { player, column });
        idx += 1;
    }
    Ok(moves)
}

pub fn format_history(moves: &[TypedMove]) -> String {
    moves
        .iter()
        .map(|mv| format!("{}{}", mv.player.symbol(), mv.column))
        .collect()
}

/// Replays `moves` onto an empty board. Returns the board and the side to
/// move next (the opponent of the last mover; red on an empty history).
pub fn replay(moves: &[TypedMove]) -> Result<(Board, Player), GameError> {
    let mut board = Board::new();
    for mv in moves {
        if outcome(&board).is_some() {
            return Err(GameError::GameOver);
        }
        board = board.try_drop_piece(mv.column, mv.player)?.0;
    }
    let to_move = moves
        .last()
        .map(|mv| mv.player.opponent())
        .unwrap_or(Player::Red);
    Ok((board, to_move))
}
