//! This module contains the duplicate-digit detection for a [Board]. It is
//! the only place in the engine that decides whether a board state violates
//! the Sudoku rules; candidate maintenance deliberately ignores duplicates
//! (see [Board::update_pencil_marks]).

use crate::{Board, HouseKind};

use serde::{Deserialize, Serialize};

/// Reports one cell that shares its placed digit with at least one other
/// cell of the same house. A cell that conflicts in several houses, or with
/// several digits, is reported once per house kind and digit.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct InvalidCell {
    row: usize,
    col: usize,
    house: HouseKind,
    digit: usize
}

impl InvalidCell {

    /// Gets the row of the offending cell.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the column of the offending cell.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Gets the kind of the house in which the conflict was found.
    pub fn house(&self) -> HouseKind {
        self.house
    }

    /// Gets the digit that occurs more than once in the house.
    pub fn digit(&self) -> usize {
        self.digit
    }
}

/// Checks every house of the board for duplicate digits. For each house and
/// each digit that is placed in more than one of its cells, every offending
/// cell is reported, not just the second and later ones.
///
/// An empty result means the board is valid. Validity says nothing about
/// solvability. This function never fails; even a fully conflicting board
/// produces structured reports.
///
/// Houses are visited in the order of [Board::houses], so reports arrive
/// grouped by house and, within a house, ordered by digit and cell position.
pub fn find_duplicates(board: &Board) -> Vec<InvalidCell> {
    let mut reports = Vec::new();

    for house in board.houses() {
        let positions = house.positions();

        for digit in 1..=9 {
            let offending: Vec<(usize, usize)> = positions.iter()
                .cloned()
                .filter(|&(row, col)|
                    board.cell_at(row, col).value() == Some(digit))
                .collect();

            if offending.len() > 1 {
                for (row, col) in offending {
                    reports.push(InvalidCell {
                        row,
                        col,
                        house: house.kind(),
                        digit
                    });
                }
            }
        }
    }

    reports
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn empty_board_is_valid() {
        let board = Board::new();
        assert!(find_duplicates(&board).is_empty());
    }

    #[test]
    fn distinct_digits_are_valid() {
        let mut board = Board::new();
        board.set_value(0, 0, 1).unwrap();
        board.set_value(0, 1, 2).unwrap();
        board.set_value(1, 0, 3).unwrap();
        board.set_value(8, 8, 1).unwrap();

        assert!(find_duplicates(&board).is_empty());
    }

    #[test]
    fn row_duplicate_reports_both_cells() {
        let mut board = Board::new();
        board.set_value(0, 0, 5).unwrap();
        board.set_value(0, 3, 5).unwrap();

        let reports = find_duplicates(&board);

        assert_eq!(2, reports.len());

        for report in &reports {
            assert_eq!(HouseKind::Row, report.house());
            assert_eq!(5, report.digit());
            assert_eq!(0, report.row());
        }

        assert_eq!(0, reports[0].col());
        assert_eq!(3, reports[1].col());
    }

    #[test]
    fn block_duplicate_reports_both_cells() {
        let mut board = Board::new();
        board.set_value(0, 0, 7).unwrap();
        board.set_value(1, 1, 7).unwrap();

        let reports = find_duplicates(&board);

        assert_eq!(2, reports.len());

        for report in &reports {
            assert_eq!(HouseKind::Block, report.house());
            assert_eq!(7, report.digit());
        }
    }

    #[test]
    fn triple_duplicate_reports_every_cell() {
        let mut board = Board::new();
        board.set_value(4, 0, 3).unwrap();
        board.set_value(4, 4, 3).unwrap();
        board.set_value(4, 8, 3).unwrap();

        let reports = find_duplicates(&board);

        assert_eq!(3, reports.len());

        for report in &reports {
            assert_eq!(HouseKind::Row, report.house());
            assert_eq!(3, report.digit());
            assert_eq!(4, report.row());
        }
    }

    #[test]
    fn conflict_in_multiple_houses_reports_each_kind() {
        let mut board = Board::new();
        board.set_value(0, 0, 9).unwrap();
        board.set_value(0, 1, 9).unwrap();

        // Same row and same block, but different columns.
        let reports = find_duplicates(&board);

        assert_eq!(4, reports.len());
        assert!(reports.iter().any(|r| r.house() == HouseKind::Row));
        assert!(reports.iter().any(|r| r.house() == HouseKind::Block));
        assert!(!reports.iter().any(|r| r.house() == HouseKind::Column));
    }

    #[test]
    fn report_serializes_for_the_ui_boundary() {
        let mut board = Board::new();
        board.set_value(0, 0, 5).unwrap();
        board.set_value(0, 3, 5).unwrap();

        let reports = find_duplicates(&board);
        let json = serde_json::to_string(&reports).unwrap();
        let parsed: Vec<InvalidCell> = serde_json::from_str(&json).unwrap();

        assert_eq!(reports, parsed);
    }
}
