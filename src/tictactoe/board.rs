//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The piece occupying this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::X => Some(Piece::X),
            Cell::O => Some(Piece::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two players' marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    X,
    O,
}

impl Piece {
    /// Get the opposing piece
    pub fn opponent(self) -> Piece {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
        }
    }

    /// Convert piece to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::X => Cell::X,
            Piece::O => Cell::O,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target on the board.
///
/// Coordinates are signed so that out-of-range requests coming from callers
/// can be represented and rejected by [`super::rules::result`]. Actions order
/// row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: i32,
    pub col: i32,
}

impl Action {
    pub const fn new(row: i32, col: i32) -> Self {
        Action { row, col }
    }

    /// Grid indices when the action lies on the board
    pub fn indices(self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        (row < SIZE && col < SIZE).then_some((row, col))
    }
}

impl From<(i32, i32)> for Action {
    fn from((row, col): (i32, i32)) -> Self {
        Action::new(row, col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An immutable 3x3 grid.
///
/// `Board` is `Copy`: every operation that plays a move hands back a new
/// value and leaves the original untouched. Whose turn it is is never stored;
/// it is derived from the piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

/// Returns the all-empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Counts the cells holding `piece`.
pub fn piece_count(piece: Piece, board: &Board) -> usize {
    board.count(piece.to_cell())
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from row-major cell rows
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters; whitespace and the row
    /// separators `|` and `/` are filtered out. Piece counts are not checked
    /// here, see [`Board::validate`].
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 cell characters remain or any character
    /// is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(Board { cells })
    }

    /// Row-major view of the grid
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Cell at (row, col), or `None` off the board
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        SIZE * SIZE - self.count(Cell::Empty)
    }

    /// True when no piece has been placed yet
    pub fn is_empty_board(&self) -> bool {
        self.occupied_count() == 0
    }

    /// True when every cell holds a piece
    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// Copy of this board with one cell overwritten. Bounds are the caller's
    /// concern.
    pub(crate) fn with_cell(&self, row: usize, col: usize, cell: Cell) -> Board {
        let mut next = *self;
        next.cells[row][col] = cell;
        next
    }

    /// Compact nine-character encoding, row-major
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = initial_state();
        assert!(board.is_empty_board());
        for row in board.cells() {
            for &cell in row {
                assert_eq!(cell, Cell::Empty);
            }
        }
    }

    #[test]
    fn test_piece_count() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(piece_count(Piece::X, &board), 3);
        assert_eq!(piece_count(Piece::O, &board), 2);
        assert_eq!(board.occupied_count(), 5);
        assert_eq!(piece_count(Piece::X, &initial_state()), 0);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XO. / .X. / ..O").unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::X));
        assert_eq!(board.get(0, 1), Some(Cell::O));
        assert_eq!(board.get(1, 1), Some(Cell::X));
        assert_eq!(board.get(2, 2), Some(Cell::O));
        assert_eq!(board.get(3, 0), None);

        let result = Board::from_string("XO");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));

        let result = Board::from_string("XOZ......");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_from_string_rejects_extra_cells() {
        assert!(Board::from_string("..........").is_err());
    }

    #[test]
    fn test_action_indices() {
        assert_eq!(Action::new(2, 1).indices(), Some((2, 1)));
        assert_eq!(Action::new(3, 0).indices(), None);
        assert_eq!(Action::new(-1, 1).indices(), None);
        assert_eq!(Action::new(0, 3).indices(), None);
    }

    #[test]
    fn test_actions_order_row_major() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
        assert_eq!(board.encode(), "XOX.O.X..");
    }
}
