use connect_four::{
    best_move, choose_move, Board, Game, GameError, GameStatus, Mode, MoveRequest, Player,
    DEFAULT_DEPTH,
};

fn position(rows: [&str; 6]) -> Board {
    Board::from_rows(&rows).unwrap()
}

#[test]
fn opening_move_is_the_center() {
    for depth in 1..=3 {
        assert_eq!(choose_move(&Board::new(), Player::Yellow, depth), Ok(3));
    }
}

#[test]
fn blocks_three_on_the_bottom_row() {
    let board = position([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "RRR....",
    ]);
    for depth in 2..=DEFAULT_DEPTH {
        assert_eq!(choose_move(&board, Player::Yellow, depth), Ok(3), "depth {depth}");
    }
}

#[test]
fn completes_three_on_the_bottom_row() {
    let board = position([
        ".......",
        ".......",
        ".......",
        ".......",
        ".......",
        "YYY....",
    ]);
    for depth in 1..=DEFAULT_DEPTH {
        assert_eq!(choose_move(&board, Player::Yellow, depth), Ok(3), "depth {depth}");
    }
}

#[test]
fn prefers_its_own_win_over_blocking() {
    // Column 3 blocks red, but column 6 finishes yellow's vertical four.
    let board = position([
        ".......",
        ".......",
        ".......",
        "......Y",
        "......Y",
        "RRR...Y",
    ]);
    assert_eq!(choose_move(&board, Player::Yellow, DEFAULT_DEPTH), Ok(6));
}

#[test]
fn stateless_request_blocks_vertical_threat() {
    // Red stacks three in column 0; yellow must cap it.
    let res = best_move(
        &MoveRequest {
            position: "R0Y1R0Y1R0".to_string(),
        },
        DEFAULT_DEPTH,
    )
    .unwrap();
    assert_eq!(res.column, 0);
}

#[test]
fn rejects_malformed_history() {
    let res = best_move(
        &MoveRequest {
            position: "R0B1".to_string(),
        },
        DEFAULT_DEPTH,
    );
    assert!(matches!(res, Err(GameError::ParseMove { position: 2, .. })));
}

#[test]
fn engine_plays_out_a_full_game_against_itself() {
    let mut game = Game::new(Mode::TwoPlayer).with_depth(2).unwrap();
    let mut plies = 0;
    while !game.status().is_over() {
        let outcome = game.play_ai().unwrap();
        assert!(outcome.row < 6);
        plies += 1;
        assert!(plies <= 42, "game must end within 42 plies");
    }
    assert_eq!(game.board().piece_count(), plies);
    assert_eq!(game.history().len(), plies * 2);
    if let GameStatus::Won { winner, line } = game.status() {
        for (row, col) in line {
            assert_eq!(game.board().get(*row, *col), winner.cell());
        }
    }
}
