//! Common types for Tic-Tac-Toe: move validation errors.

/// Errors returned when a proposed move is rejected.
///
/// All variants are recoverable at the driver level: the driver prints the
/// message and prompts again without touching the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// One or both coordinate tokens did not parse as integers.
    NonNumeric,
    /// A parsed coordinate lies outside [1, 3].
    OutOfRange,
    /// The target cell already holds a mark.
    CellOccupied,
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::NonNumeric => write!(f, "You should enter numbers!"),
            MoveError::OutOfRange => write!(f, "Coordinates should be from 1 to 3!"),
            MoveError::CellOccupied => write!(f, "This cell is occupied! Choose another one!"),
        }
    }
}
