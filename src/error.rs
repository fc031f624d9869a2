//! This module contains some error and result definitions used in this crate.
//! Errors concerning the [Combinations](crate::util::Combinations) utility
//! are defined next to it in the [util](crate::util) module.

use thiserror::Error;

/// Miscellaneous errors that can occur on methods of the
/// [Board](crate::Board) and the
/// [BacktrackingSolver](crate::solver::BacktrackingSolver).
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid as a cell digit. This is the
    /// case if it is greater than 9. Note that 0 is accepted by
    /// [Board::set_value](crate::Board::set_value), where it clears the
    /// cell.
    #[error("number is not a digit in the range [1, 9]")]
    InvalidNumber,

    /// Indicates that the specified coordinates (row and column) lie outside
    /// the 9x9 grid. This is the case if either of them is greater than or
    /// equal to 9.
    #[error("cell coordinates lie outside the 9x9 grid")]
    OutOfBounds,

    /// An error that is raised by the solver whenever the search space of a
    /// board is exhausted without finding a complete assignment. The board is
    /// always rolled back to its pre-solve state before this is returned.
    #[error("no assignment of the empty cells satisfies the Sudoku rules")]
    Unsolvable
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;
