//! Randomized consistency tests. All random number generators are seeded,
//! so every run exercises the same boards.

use crate::fix_tests::CLASSIC_SOLUTION;
use crate::{Board, SIZE};
use crate::solver::BacktrackingSolver;
use crate::validate::find_duplicates;

use rand::seq::index;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 20;
const REMOVED_CELLS: usize = 40;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(0x5EED)
}

/// Produces a board holding the classic solution with `count` randomly
/// chosen cells cleared. The result may admit more than one completion,
/// which none of the tests below rely on.
fn remove_random_cells(rng: &mut ChaCha8Rng, count: usize) -> Board {
    let mut board = Board::from_values(&CLASSIC_SOLUTION).unwrap();

    for cell_index in index::sample(rng, SIZE * SIZE, count) {
        board.set_value(cell_index / SIZE, cell_index % SIZE, 0).unwrap();
    }

    board
}

#[test]
fn solving_after_random_removals_is_consistent() {
    let mut rng = rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let mut board = remove_random_cells(&mut rng, REMOVED_CELLS);
        let givens: Vec<Option<usize>> = board.cells()
            .map(|c| c.value())
            .collect();

        let assigned = BacktrackingSolver.solve(&mut board).unwrap();

        assert_eq!(REMOVED_CELLS, assigned.len());
        assert!(board.is_full());
        assert!(find_duplicates(&board).is_empty());

        // The solver only fills cells, it never touches givens.
        for (cell, given) in board.cells().zip(givens) {
            if let Some(digit) = given {
                assert_eq!(Some(digit), cell.value());
            }
        }
    }
}

#[test]
fn relabeled_solution_stays_valid_and_solvable() {
    let mut rng = rng();

    for _ in 0..ITERATIONS_PER_RUN {
        // Relabeling the digits of a valid solution by any permutation
        // yields another valid solution.
        let mut relabeling: Vec<usize> = (1..=SIZE).collect();
        relabeling.shuffle(&mut rng);

        let mut values = CLASSIC_SOLUTION;

        for row_values in values.iter_mut() {
            for value in row_values.iter_mut() {
                *value = relabeling[*value - 1];
            }
        }

        let board = Board::from_values(&values).unwrap();

        assert!(board.is_full());
        assert!(find_duplicates(&board).is_empty());

        // Punching holes into the relabeled solution keeps it solvable.
        let mut punched = board.clone();

        for cell_index in index::sample(&mut rng, SIZE * SIZE, 30) {
            punched.set_value(cell_index / SIZE, cell_index % SIZE, 0)
                .unwrap();
        }

        let assigned = BacktrackingSolver.solve(&mut punched).unwrap();

        assert_eq!(30, assigned.len());
        assert!(find_duplicates(&punched).is_empty());
    }
}

#[test]
fn pencil_marks_never_exclude_a_placeable_digit() {
    let mut rng = rng();

    for _ in 0..ITERATIONS_PER_RUN {
        let mut board = remove_random_cells(&mut rng, REMOVED_CELLS);
        board.update_pencil_marks();

        // Every cleared cell must still see its original digit as a
        // candidate, since that digit completes the board.
        for cell in board.cells() {
            if cell.is_solved() {
                continue;
            }

            let original = CLASSIC_SOLUTION[cell.row()][cell.col()];
            assert!(cell.candidates().contains(original));
        }
    }
}
