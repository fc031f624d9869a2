//! This module contains the implementations of the deduction techniques
//! provided by this crate. All of them are re-exported in
//! [crate::strategy], so you should not have to `use` anything from this
//! module directly.

use crate::{block_of, Board, House, HouseKind, SIZE, BLOCK_SIZE};
use crate::strategy::{HiddenGroup, NakedGroup, PointingLine};
use crate::util::{Combinations, DigitSet};

/// Searches every house for groups of exactly `size` unsolved cells sharing
/// one identical candidate set of `size` digits. For every group found, the
/// shared digits are removed from the candidates of all other unsolved cells
/// in the house.
///
/// With a size of 1 this finds naked singles, cells whose candidate set has
/// shrunk to a single digit. Sizes 2 to 4 find naked pairs, triples and
/// quads; larger groups always have a smaller hidden counterpart and are
/// rarely worth searching for.
///
/// A group is reported even if every elimination it implies has already been
/// made, so calling this method twice in a row returns the same groups both
/// times. Since a group lies in one house but its cells belong to up to
/// three, the same cells may be reported once per house in which they form a
/// group.
///
/// Requires [Board::update_pencil_marks] to have been called after the most
/// recent value edit.
pub fn find_naked_values(board: &mut Board, size: usize) -> Vec<NakedGroup> {
    let mut groups = Vec::new();
    let houses: Vec<House> = board.houses().collect();

    for house in houses {
        let positions = house.positions();

        for (i, &(row, col)) in positions.iter().enumerate() {
            let shared = {
                let cell = board.cell_at(row, col);

                if cell.is_solved() || cell.candidates().len() != size {
                    continue;
                }

                cell.candidates()
            };

            // The strictly-later scan ensures every group is anchored at its
            // first cell and therefore found only once per house.
            let mut members = vec![(row, col)];

            for &(other_row, other_col) in positions[(i + 1)..].iter() {
                let other = board.cell_at(other_row, other_col);

                if !other.is_solved() && other.candidates() == shared {
                    members.push((other_row, other_col));
                }
            }

            if members.len() != size {
                continue;
            }

            for &(other_row, other_col) in positions.iter() {
                if members.contains(&(other_row, other_col)) {
                    continue;
                }

                let other = board.cell_at_mut(other_row, other_col);

                if !other.is_solved() {
                    *other.candidates_mut() -= shared;
                }
            }

            let cells = members.iter()
                .map(|&(row, col)| board.cell_at(row, col).clone())
                .collect();
            groups.push(NakedGroup::new(house, cells, shared));
        }
    }

    groups
}

/// Searches every house for sets of `size` digits that are confined to
/// exactly `size` unsolved cells, where at least one of those cells carries
/// further candidates. The candidate sets of the confined cells are
/// restricted to exactly those digits.
///
/// This is the exclusivity counterpart of [find_naked_values]: the cells of
/// a hidden group may carry additional candidates before the restriction,
/// but no cell outside the group may carry any of the group's digits. With a
/// size of 1 this finds hidden singles, digits that can only go in one cell
/// of a house.
///
/// Requires [Board::update_pencil_marks] to have been called after the most
/// recent value edit.
pub fn find_hidden_values(board: &mut Board, size: usize) -> Vec<HiddenGroup> {
    let mut groups = Vec::new();
    let houses: Vec<House> = board.houses().collect();

    for house in houses {
        let positions = house.positions();

        for &(row, col) in positions.iter() {
            let seed_digits: Vec<usize> = {
                let seed = board.cell_at(row, col);

                if seed.is_solved() || seed.candidates().len() <= size {
                    continue;
                }

                seed.candidates().iter().collect()
            };

            // size < seed_digits.len() holds here, so construction cannot
            // fail.
            let mut combinations =
                Combinations::new(&seed_digits, size).unwrap();
            let mut restricted = false;

            while !restricted && combinations.has_next() {
                let combination = combinations.next().unwrap();
                let mut digits = DigitSet::new();

                for &digit in &combination {
                    digits.insert(digit).unwrap();
                }

                let mut members = Vec::new();
                let mut confined = true;

                for &(other_row, other_col) in positions.iter() {
                    let other = board.cell_at(other_row, other_col);

                    if other.is_solved() {
                        continue;
                    }

                    if digits.is_subset(&other.candidates()) {
                        // The seed always lands here, since the combination
                        // was drawn from its own candidates.
                        members.push((other_row, other_col));
                    }
                    else if !(digits & other.candidates()).is_empty() {
                        confined = false;
                        break;
                    }
                }

                if !confined || members.len() != size {
                    continue;
                }

                for &(member_row, member_col) in members.iter() {
                    *board.cell_at_mut(member_row, member_col)
                        .candidates_mut() = digits;
                }

                let cells = members.iter()
                    .map(|&(row, col)| board.cell_at(row, col).clone())
                    .collect();
                groups.push(HiddenGroup::new(house, cells, digits));

                // The seed's candidates just shrank to the combination, so
                // it no longer qualifies for further combinations.
                restricted = true;
            }
        }
    }

    groups
}

/// Searches every 3-cell segment shared by a block and a row or column for
/// digits that are confined to the segment within the block. Such a digit
/// must be placed somewhere in the segment, so it is removed from the
/// candidates of every unsolved cell of the row or column outside the
/// segment.
///
/// A line is only reported if at least one candidate was actually removed;
/// an immediately repeated call therefore returns nothing.
///
/// Requires [Board::update_pencil_marks] to have been called after the most
/// recent value edit.
pub fn find_pointing_values(board: &mut Board) -> Vec<PointingLine> {
    let mut lines = Vec::new();
    scan_segments(board, HouseKind::Row, &mut lines);
    scan_segments(board, HouseKind::Column, &mut lines);
    lines
}

fn scan_segments(board: &mut Board, kind: HouseKind,
        lines: &mut Vec<PointingLine>) {
    for line_index in 0..SIZE {
        let line = match kind {
            HouseKind::Row => House::row(line_index),
            _ => House::column(line_index)
        };
        let line_positions = line.positions();

        for segment in 0..BLOCK_SIZE {
            let triple = &line_positions[(segment * 3)..(segment * 3 + 3)];
            let (block_row, block_col) = triple[0];
            let block_index = block_of(block_row, block_col);
            let block_positions = House::block(block_index).positions();

            for digit in 1..=9 {
                let in_segment = triple.iter().any(|&(row, col)| {
                    let cell = board.cell_at(row, col);
                    !cell.is_solved() && cell.candidates().contains(digit)
                });

                if !in_segment {
                    continue;
                }

                let elsewhere_in_block = block_positions.iter()
                    .any(|&(row, col)| {
                        if triple.contains(&(row, col)) {
                            return false;
                        }

                        let cell = board.cell_at(row, col);
                        !cell.is_solved() && cell.candidates().contains(digit)
                    });

                if elsewhere_in_block {
                    continue;
                }

                let mut affected = Vec::new();

                for &(row, col) in line_positions.iter() {
                    if triple.contains(&(row, col)) {
                        continue;
                    }

                    let cell = board.cell_at_mut(row, col);

                    if !cell.is_solved()
                            && cell.candidates_mut().remove(digit).unwrap() {
                        affected.push((row, col));
                    }
                }

                if !affected.is_empty() {
                    let cells = affected.iter()
                        .map(|&(row, col)| board.cell_at(row, col).clone())
                        .collect();
                    lines.push(
                        PointingLine::new(line, block_index, digit, cells));
                }
            }
        }
    }
}
