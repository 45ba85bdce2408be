use proptest::array::uniform9;
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{
    current_player, evaluate_status, validate_move, Board, Cell, GameEngine, GameStatus,
    MoveError, Player, CELLS,
};

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(None), Just(Some(Player::X)), Just(Some(Player::O))]
}

fn arb_board() -> impl Strategy<Value = Board> {
    uniform9(cell()).prop_map(Board::from)
}

fn mirrored(board: &Board) -> Board {
    let mut cells = *board.cells();
    for c in cells.iter_mut() {
        *c = c.map(Player::opponent);
    }
    Board::from(cells)
}

/// Play random legal moves from the empty board until a terminal status,
/// checking invariants after every accepted move.
fn random_playout(seed: u64) -> GameStatus {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    let mut moves = 0usize;
    loop {
        let status = engine.status();
        assert_ne!(status, GameStatus::Impossible);
        if status.is_terminal() {
            return status;
        }
        let empty: Vec<usize> = (0..CELLS)
            .filter(|&i| engine.board().cells()[i].is_none())
            .collect();
        let index = empty[rng.random_range(0..empty.len())];
        let (row, col) = ((index / 3 + 1).to_string(), (index % 3 + 1).to_string());
        let played = engine.play(&row, &col).unwrap();
        let expected = if moves % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(played, expected);
        moves += 1;
        assert_eq!(engine.board().filled(), moves);
    }
}

/// A validated and applied move followed by evaluation sees the win once a
/// player completes a line.
#[test]
fn apply_then_evaluate_detects_win() {
    // X about to complete the top row; O holds two non-winning cells.
    let mut board: Board = "XX OO    ".parse().unwrap();
    let index = validate_move(&board, "1", "3").unwrap();
    board.apply(index, Player::X).unwrap();
    assert_eq!(evaluate_status(&board), GameStatus::XWins);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// `evaluate_status` is total: any nine-cell board yields exactly one
    /// defined status without panicking.
    #[test]
    fn status_total_over_arbitrary_boards(board in arb_board()) {
        let status = evaluate_status(&board);
        prop_assert!(matches!(
            status,
            GameStatus::InProgress
                | GameStatus::XWins
                | GameStatus::OWins
                | GameStatus::Draw
                | GameStatus::Impossible
        ));
    }

    /// Swapping every X with O mirrors the status.
    #[test]
    fn status_symmetric_under_mark_swap(board in arb_board()) {
        let expected = match evaluate_status(&board) {
            GameStatus::XWins => GameStatus::OWins,
            GameStatus::OWins => GameStatus::XWins,
            other => other,
        };
        prop_assert_eq!(evaluate_status(&mirrored(&board)), expected);
    }

    /// A draw requires a full board; an in-progress board has an empty cell.
    #[test]
    fn status_consistent_with_fill(board in arb_board()) {
        match evaluate_status(&board) {
            GameStatus::Draw => prop_assert!(board.is_full()),
            GameStatus::InProgress => prop_assert!(!board.is_full()),
            _ => {}
        }
    }

    /// On a full board every in-range coordinate fails with CellOccupied,
    /// while numeric and range violations still take precedence.
    #[test]
    fn full_board_always_occupied(marks in uniform9(prop_oneof![Just(Player::X), Just(Player::O)])) {
        let board = Board::from(marks.map(Some));
        for row in 1..=3u8 {
            for col in 1..=3u8 {
                prop_assert_eq!(
                    validate_move(&board, &row.to_string(), &col.to_string()),
                    Err(MoveError::CellOccupied)
                );
            }
        }
        prop_assert_eq!(validate_move(&board, "x", "1"), Err(MoveError::NonNumeric));
        prop_assert_eq!(validate_move(&board, "9", "1"), Err(MoveError::OutOfRange));
    }

    /// `current_player` strictly alternates along any legal playout, and
    /// legal play never reaches Impossible.
    #[test]
    fn random_playouts_stay_legal(seed in any::<u64>()) {
        let status = random_playout(seed);
        prop_assert!(matches!(
            status,
            GameStatus::XWins | GameStatus::OWins | GameStatus::Draw
        ));
    }

    /// The parity rule holds for any board reached by k legal moves.
    #[test]
    fn current_player_matches_parity(board in arb_board()) {
        let expected = if board.filled() % 2 == 0 { Player::X } else { Player::O };
        prop_assert_eq!(current_player(&board), expected);
    }
}
