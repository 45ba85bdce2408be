//! Core game logic: turn derivation, move validation and outcome
//! evaluation over a [`Board`].

use crate::board::{Board, Player, SIDE};
use crate::common::MoveError;
use core::fmt;

/// The eight winning lines: three rows, three columns, two diagonals,
/// as flat cell indices.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWins,
    OWins,
    Draw,
    /// The board cannot be reached through legal alternating play: mark
    /// counts differ by more than one, or both players hold a winning line.
    Impossible,
}

impl GameStatus {
    /// Returns `true` for any status that ends the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game not finished"),
            GameStatus::XWins => write!(f, "X wins"),
            GameStatus::OWins => write!(f, "O wins"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Impossible => write!(f, "Impossible"),
        }
    }
}

/// Player to move: X when the number of filled cells is even, O otherwise.
/// X always moves first and turns strictly alternate.
pub fn current_player(board: &Board) -> Player {
    if board.filled() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

fn has_winning_line(board: &Board, player: Player) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells()[i] == Some(player)))
}

/// Evaluate the status of an arbitrary board.
///
/// Total over every nine-cell board, including boards never produced by
/// validated moves; corruption shows up as `Impossible` rather than a
/// panic.
pub fn evaluate_status(board: &Board) -> GameStatus {
    let x_count = board.count_of(Player::X);
    let o_count = board.count_of(Player::O);
    if x_count.abs_diff(o_count) > 1 {
        return GameStatus::Impossible;
    }
    let x_win = has_winning_line(board, Player::X);
    let o_win = has_winning_line(board, Player::O);
    match (x_win, o_win) {
        (true, true) => GameStatus::Impossible,
        (true, false) => GameStatus::XWins,
        (false, true) => GameStatus::OWins,
        (false, false) if board.is_full() => GameStatus::Draw,
        (false, false) => GameStatus::InProgress,
    }
}

/// Validate a pair of raw coordinate tokens against the board.
///
/// Checks run in a fixed order and the first failure wins: both tokens
/// must parse as integers (`NonNumeric`), both values must lie in [1, 3]
/// (`OutOfRange`), and the target cell must be empty (`CellOccupied`).
/// On success returns the zero-based flat index ready for
/// [`Board::apply`].
pub fn validate_move(board: &Board, row: &str, col: &str) -> Result<usize, MoveError> {
    let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) else {
        return Err(MoveError::NonNumeric);
    };
    if !(1..=SIDE).contains(&row) || !(1..=SIDE).contains(&col) {
        return Err(MoveError::OutOfRange);
    }
    let index = (row - 1) * SIDE + (col - 1);
    if board.cells()[index].is_some() {
        return Err(MoveError::CellOccupied);
    }
    Ok(index)
}

/// Core game engine holding the board and applying validated moves.
///
/// The player to move is derived from the board rather than stored, so it
/// cannot drift out of sync with the cell contents.
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    /// Create an engine with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
        }
    }

    /// Wrap an existing board, e.g. one parsed from its string encoding.
    pub fn from_board(board: Board) -> Self {
        Self { board }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    pub fn current_player(&self) -> Player {
        current_player(&self.board)
    }

    /// Validate the raw coordinate tokens and apply the move for the
    /// player to move. Returns the mark placed. On error the board is
    /// unchanged.
    pub fn play(&mut self, row: &str, col: &str) -> Result<Player, MoveError> {
        let index = validate_move(&self.board, row, col)?;
        let player = current_player(&self.board);
        self.board.apply(index, player)?;
        Ok(player)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        evaluate_status(&self.board)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
