use thiserror::Error;

use super::types::Mark;

pub const BOARD_SIZE: usize = 3;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates ({row}, {col}) are outside the 3x3 grid")]
    InvalidCoordinate { row: usize, col: usize },
}

/// Fixed 3x3 grid of marks. Occupied cells are never overwritten; the only
/// way to clear a cell is `undo_move`, which the move search uses to
/// backtrack its speculative placements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    fn check_coordinates(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::InvalidCoordinate { row, col });
        }
        Ok(())
    }

    /// Marks the cell and returns `Ok(true)` iff it was empty. An occupied
    /// cell is a normal `Ok(false)` outcome with no mutation.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, BoardError> {
        Self::check_coordinates(row, col)?;
        if self.cells[row][col] != Mark::Empty {
            return Ok(false);
        }
        self.cells[row][col] = mark;
        Ok(true)
    }

    /// Clears the cell unconditionally. Search backtracking only.
    pub fn undo_move(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        Self::check_coordinates(row, col)?;
        self.cells[row][col] = Mark::Empty;
        Ok(())
    }

    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Self::check_coordinates(row, col)?;
        Ok(self.cells[row][col] == Mark::Empty)
    }

    pub fn mark_at(&self, row: usize, col: usize) -> Result<Mark, BoardError> {
        Self::check_coordinates(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    /// True iff any of the 3 rows, 3 columns, or 2 diagonals is fully
    /// occupied by `mark`.
    pub fn has_winner(&self, mark: Mark) -> bool {
        if mark == Mark::Empty {
            return false;
        }

        for i in 0..BOARD_SIZE {
            if (0..BOARD_SIZE).all(|j| self.cells[i][j] == mark) {
                return true;
            }
            if (0..BOARD_SIZE).all(|j| self.cells[j][i] == mark) {
                return true;
            }
        }

        if (0..BOARD_SIZE).all(|i| self.cells[i][i] == mark) {
            return true;
        }
        (0..BOARD_SIZE).all(|i| self.cells[i][BOARD_SIZE - 1 - i] == mark)
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }
}
