//! This module is about the deduction techniques a human player uses to
//! eliminate and resolve candidates: naked values, hidden values and pointing
//! values. In contrast to the [backtracking solver](crate::solver), these
//! techniques never guess. Each one inspects the candidate sets of one house
//! at a time, applies its eliminations directly to the [Board](crate::Board)
//! and returns a report of the affected cells together with the digits that
//! justified the move, so that a caller can explain or highlight the
//! deduction.
//!
//! All techniques require
//! [update_pencil_marks](crate::Board::update_pencil_marks) to have been
//! called after the most recent value edit, since they operate purely on
//! candidate state. They are independent of each other and can be invoked in
//! any order.
//!
//! # Example
//!
//! Eight digits in a row leave only one candidate in the ninth cell, which
//! the naked-value technique with size 1 detects. The cell is part of three
//! houses, so it is reported once per house in which it forms a naked
//! single.
//!
//! ```
//! use sudoku_engine::Board;
//! use sudoku_engine::strategy::find_naked_values;
//!
//! let mut board = Board::new();
//!
//! for col in 0..8 {
//!     board.set_value(0, col, col + 1).unwrap();
//! }
//!
//! board.update_pencil_marks();
//!
//! let groups = find_naked_values(&mut board, 1);
//!
//! assert_eq!(3, groups.len());
//!
//! for group in &groups {
//!     assert_eq!(1, group.cells().len());
//!     assert_eq!((0, 8), (group.cells()[0].row(), group.cells()[0].col()));
//!     assert!(group.digits().contains(9));
//! }
//! ```

use crate::{Cell, House};
use crate::util::DigitSet;

use serde::{Deserialize, Serialize};

pub mod impls;

pub use impls::*;

/// A set of cells in one house that collectively hold exactly as many
/// candidate digits as there are cells, reported by
/// [find_naked_values](impls::find_naked_values). The shared digits have
/// been removed from the candidates of every other unsolved cell in the
/// house.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NakedGroup {
    house: House,
    cells: Vec<Cell>,
    digits: DigitSet
}

impl NakedGroup {

    pub(crate) fn new(house: House, cells: Vec<Cell>, digits: DigitSet)
            -> NakedGroup {
        NakedGroup {
            house,
            cells,
            digits
        }
    }

    /// Gets the house in which the group was found.
    pub fn house(&self) -> House {
        self.house
    }

    /// Gets clones of the cells forming the group, in house order. Their
    /// candidate sets all equal [NakedGroup::digits].
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the candidate digits shared by the cells of the group.
    pub fn digits(&self) -> DigitSet {
        self.digits
    }
}

/// A set of digits confined to exactly as many cells of one house, reported
/// by [find_hidden_values](impls::find_hidden_values). The cells' candidate
/// sets have been restricted to exactly these digits, discarding any further
/// candidates they carried.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HiddenGroup {
    house: House,
    cells: Vec<Cell>,
    digits: DigitSet
}

impl HiddenGroup {

    pub(crate) fn new(house: House, cells: Vec<Cell>, digits: DigitSet)
            -> HiddenGroup {
        HiddenGroup {
            house,
            cells,
            digits
        }
    }

    /// Gets the house in which the group was found.
    pub fn house(&self) -> House {
        self.house
    }

    /// Gets clones of the cells forming the group, in house order. Their
    /// candidate sets have been restricted to exactly
    /// [HiddenGroup::digits].
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Gets the digits confined to the cells of the group.
    pub fn digits(&self) -> DigitSet {
        self.digits
    }
}

/// A digit confined, within one block, to the three cells the block shares
/// with one row or column, reported by
/// [find_pointing_values](impls::find_pointing_values). The digit has been
/// removed from the candidates of every unsolved cell of that row or column
/// outside the block; only the cells that actually lost the candidate are
/// carried in the report.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PointingLine {
    line: House,
    block: usize,
    digit: usize,
    cells: Vec<Cell>
}

impl PointingLine {

    pub(crate) fn new(line: House, block: usize, digit: usize,
            cells: Vec<Cell>) -> PointingLine {
        PointingLine {
            line,
            block,
            digit,
            cells
        }
    }

    /// Gets the row or column house the digit is confined to within the
    /// block.
    pub fn line(&self) -> House {
        self.line
    }

    /// Gets the index of the block within which the digit is confined.
    pub fn block(&self) -> usize {
        self.block
    }

    /// Gets the confined digit.
    pub fn digit(&self) -> usize {
        self.digit
    }

    /// Gets clones of the cells from which the digit was removed, in line
    /// order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
