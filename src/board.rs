//! Game board state: a fixed 3x3 grid of cells indexed 0-8 in row-major
//! order.

use crate::common::MoveError;
use core::fmt;
use core::str::FromStr;

/// Board side length.
pub const SIDE: usize = 3;
/// Total number of cells.
pub const CELLS: usize = SIDE * SIDE;

/// One of the two players, identified by its mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used when rendering this player's mark.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

/// A single board position: empty, or held by a player.
pub type Cell = Option<Player>;

/// Errors returned when parsing a board from its string encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Input did not contain exactly nine characters.
    BadLength(usize),
    /// Input contained a character other than 'X', 'O' or ' '.
    BadCell(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::BadLength(len) => {
                write!(f, "BadLength: expected {} cells, got {}", CELLS, len)
            }
            ParseBoardError::BadCell(ch) => {
                write!(f, "BadCell: unexpected character {:?}", ch)
            }
        }
    }
}

/// The 3x3 board. Always exactly nine cells; mutated one cell at a time
/// by accepted moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; CELLS],
        }
    }

    /// Immutable view of all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Cell at a flat index, or `None` if the index is out of range.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Number of cells holding a mark.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of cells held by `player`.
    pub fn count_of(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Place `player`'s mark at `index`.
    ///
    /// Rejects indices outside [0, 8] with `OutOfRange` and filled cells
    /// with `CellOccupied`. Accepted moves touch exactly one cell.
    pub fn apply(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        let cell = self.cells.get_mut(index).ok_or(MoveError::OutOfRange)?;
        if cell.is_some() {
            return Err(MoveError::CellOccupied);
        }
        *cell = Some(player);
        Ok(())
    }
}

impl From<[Cell; CELLS]> for Board {
    fn from(cells: [Cell; CELLS]) -> Self {
        Board { cells }
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the nine-character string encoding, e.g. `"XXXOO    "`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELLS];
        let mut count = 0;
        for (i, ch) in s.chars().enumerate() {
            if i >= CELLS {
                return Err(ParseBoardError::BadLength(s.chars().count()));
            }
            cells[i] = match ch {
                'X' => Some(Player::X),
                'O' => Some(Player::O),
                ' ' => None,
                other => return Err(ParseBoardError::BadCell(other)),
            };
            count += 1;
        }
        if count != CELLS {
            return Err(ParseBoardError::BadLength(count));
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    /// Render the grid with separator lines:
    ///
    /// ```text
    /// ---------
    /// | X X X |
    /// | O O   |
    /// |       |
    /// ---------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in self.cells.chunks(SIDE) {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell.map_or(' ', Player::mark))?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "---------")
    }
}
