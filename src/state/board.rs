//! Board model and win detection.
//!
//! A board is 9 cells in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on a board.
pub const BOARD_CELLS: usize = 9;

/// The eight winning lines, in the order they are checked.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }

    /// Get the opposing mark.
    pub fn opposite(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    /// Mark that moves at a given history position (even → X).
    pub fn for_position(position: usize) -> Self {
        if position % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single cell: empty or holding a mark.
pub type Cell = Option<Mark>;

/// Immutable board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board([Cell; BOARD_CELLS]);

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from raw cells (for restoring state).
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Self(cells)
    }

    /// Get the cell at an index. Out-of-range indices read as empty.
    pub fn get(&self, index: usize) -> Cell {
        self.0.get(index).copied().flatten()
    }

    /// Check if a cell is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index).is_none()
    }

    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.0
    }

    /// Return a copy of this board with `mark` placed at `index`.
    ///
    /// The caller is responsible for checking the index and that the cell is
    /// free; this only builds the next snapshot.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.0[index] = Some(mark);
        next
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(|c| c.is_some())
    }

    /// Indices where this board and `other` differ.
    pub fn diff(&self, other: &Board) -> Vec<usize> {
        (0..BOARD_CELLS).filter(|&i| self.0[i] != other.0[i]).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        let cells: Vec<serde_json::Value> = self
            .0
            .iter()
            .map(|c| match c {
                Some(m) => serde_json::json!(m.as_str()),
                None => serde_json::Value::Null,
            })
            .collect();
        serde_json::Value::Array(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.0.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Some(m) => write!(f, "{}", m)?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// First fully matched winning line on the board, if any.
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        board.get(a).is_some() && board.get(a) == board.get(b) && board.get(a) == board.get(c)
    })
}

/// Mark occupying the first fully matched winning line, if any.
pub fn winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board(layout: &str) -> Board {
        let mut cells = [None; BOARD_CELLS];
        for (i, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[i] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(winner(&Board::new()), None);
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WINNING_LINES {
            let mut b = Board::new();
            for i in line {
                b = b.with_mark(i, Mark::O);
            }
            assert_eq!(winner(&b), Some(Mark::O));
            assert_eq!(winning_line(&b), Some(line));
        }
    }

    #[test]
    fn test_no_line_no_winner() {
        // Full board, no three in a row
        let b = board("XOX XOO OXX");
        assert!(b.is_full());
        assert_eq!(winner(&b), None);

        let b = board("XX. OO. ...");
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let b = board("XXO ... ...");
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Top row and left column both X; rows are checked first
        let b = board("XXX X.. X..");
        assert_eq!(winning_line(&b), Some([0, 1, 2]));
        assert_eq!(winner(&b), Some(Mark::X));
    }

    #[test]
    fn test_with_mark_leaves_original() {
        let b = Board::new();
        let next = b.with_mark(4, Mark::X);
        assert!(b.is_empty_at(4));
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.filled_count(), 1);
        assert_eq!(b.diff(&next), vec![4]);
    }

    #[test]
    fn test_get_out_of_range_is_empty() {
        assert_eq!(Board::new().get(9), None);
    }

    #[test]
    fn test_mark_for_position() {
        assert_eq!(Mark::for_position(0), Mark::X);
        assert_eq!(Mark::for_position(1), Mark::O);
        assert_eq!(Mark::for_position(6), Mark::X);
        assert_eq!(Mark::X.opposite(), Mark::O);
    }

    #[test]
    fn test_display() {
        let b = board("X.. .O. ..X");
        assert_eq!(b.to_string(), "X . .\n. O .\n. . X");
    }

    #[test]
    fn test_to_json() {
        let b = Board::new().with_mark(0, Mark::X).with_mark(8, Mark::O);
        assert_eq!(
            b.to_json(),
            serde_json::json!(["X", null, null, null, null, null, null, null, "O"])
        );
    }
}
