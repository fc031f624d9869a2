//! This module contains utility functionality needed for this crate. Most
//! prominently, it contains the definition of the [DigitSet] used for storing
//! cell candidates, as well as the [Combinations] generator used by the
//! hidden-value technique to enumerate candidate subsets.

use crate::error::{SudokuError, SudokuResult};

use serde::{Deserialize, Serialize};

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use thiserror::Error;

/// A set of Sudoku digits in the range `[1, 9]`, implemented as a bitmask in
/// a single `u16`. Each digit is represented by one bit. This generally has
/// better performance than a `HashSet` and makes the set a cheap [Copy] type,
/// which is convenient since candidate sets are compared and combined in
/// every deduction technique.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq,
    Serialize)]
pub struct DigitSet {
    bits: u16
}

/// An iterator over the digits contained in a [DigitSet] in ascending order.
pub struct DigitSetIter {
    bits: u16
}

impl Iterator for DigitSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            None
        }
        else {
            let digit = self.bits.trailing_zeros() as usize + 1;
            self.bits &= self.bits - 1;
            Some(digit)
        }
    }
}

const ALL_DIGITS: u16 = 0x01ff;

fn digit_mask(digit: usize) -> SudokuResult<u16> {
    if digit == 0 || digit > 9 {
        Err(SudokuError::InvalidNumber)
    }
    else {
        Ok(1u16 << (digit - 1))
    }
}

impl DigitSet {

    /// Creates a new, empty `DigitSet`.
    pub fn new() -> DigitSet {
        DigitSet {
            bits: 0
        }
    }

    /// Creates a new `DigitSet` that contains all digits 1 to 9. This is the
    /// candidate set of a cell about which nothing is known.
    pub fn full() -> DigitSet {
        DigitSet {
            bits: ALL_DIGITS
        }
    }

    /// Creates a new `DigitSet` which contains only the given digit.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn singleton(digit: usize) -> SudokuResult<DigitSet> {
        let mut result = DigitSet::new();
        result.insert(digit)?;
        Ok(result)
    }

    /// Indicates whether this set contains the given digit, in which case
    /// this method returns `true`. If it is not contained or outside the
    /// range `[1, 9]`, `false` will be returned.
    pub fn contains(&self, digit: usize) -> bool {
        if let Ok(mask) = digit_mask(digit) {
            self.bits & mask > 0
        }
        else {
            false
        }
    }

    /// Inserts the given digit into this set, such that [DigitSet::contains]
    /// returns `true` for this digit afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// not present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn insert(&mut self, digit: usize) -> SudokuResult<bool> {
        let mask = digit_mask(digit)?;
        let changed = self.bits & mask == 0;
        self.bits |= mask;
        Ok(changed)
    }

    /// Removes the given digit from this set, such that [DigitSet::contains]
    /// returns `false` for this digit afterwards.
    ///
    /// This method returns `true` if the set has changed (i.e. the digit was
    /// present before) and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn remove(&mut self, digit: usize) -> SudokuResult<bool> {
        let mask = digit_mask(digit)?;
        let changed = self.bits & mask > 0;
        self.bits &= !mask;
        Ok(changed)
    }

    /// Removes all digits from this set, such that [DigitSet::contains] will
    /// return `false` for all inputs and [DigitSet::is_empty] will return
    /// `true`.
    pub fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Indicates whether this set is empty, i.e. contains no digits.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Indicates whether this set contains all digits 1 to 9.
    pub fn is_full(&self) -> bool {
        self.bits == ALL_DIGITS
    }

    /// Indicates whether every digit in this set is also contained in
    /// `other`.
    pub fn is_subset(&self, other: &DigitSet) -> bool {
        self.bits & other.bits == self.bits
    }

    /// Returns an iterator over the digits contained in this set in
    /// ascending order.
    pub fn iter(&self) -> DigitSetIter {
        DigitSetIter {
            bits: self.bits
        }
    }

    /// Computes the set union of this and the given set.
    ///
    /// `DigitSet` implements [BitOr] as syntactic sugar for this operation.
    pub fn union(&self, other: &DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits | other.bits
        }
    }

    /// Computes the set intersection of this and the given set.
    ///
    /// `DigitSet` implements [BitAnd] as syntactic sugar for this operation.
    pub fn intersection(&self, other: &DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & other.bits
        }
    }

    /// Computes the set difference of this and the given set, that is, the
    /// set of all digits contained in this set but not in `other`.
    ///
    /// `DigitSet` implements [Sub] as syntactic sugar for this operation.
    pub fn difference(&self, other: &DigitSet) -> DigitSet {
        DigitSet {
            bits: self.bits & !other.bits
        }
    }
}

impl IntoIterator for DigitSet {
    type Item = usize;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> DigitSetIter {
        self.iter()
    }
}

impl BitOr for DigitSet {
    type Output = DigitSet;

    fn bitor(self, rhs: DigitSet) -> DigitSet {
        self.union(&rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: DigitSet) {
        self.bits |= rhs.bits;
    }
}

impl BitAnd for DigitSet {
    type Output = DigitSet;

    fn bitand(self, rhs: DigitSet) -> DigitSet {
        self.intersection(&rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: DigitSet) {
        self.bits &= rhs.bits;
    }
}

impl Sub for DigitSet {
    type Output = DigitSet;

    fn sub(self, rhs: DigitSet) -> DigitSet {
        self.difference(&rhs)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: DigitSet) {
        self.bits &= !rhs.bits;
    }
}

/// An enumeration of the errors that can happen when using a [Combinations]
/// generator.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum CombinationError {

    /// Indicates that the requested combination size exceeds the number of
    /// elements in the source sequence.
    #[error("combination size exceeds the length of the source sequence")]
    InvalidSize,

    /// Indicates that [Combinations::next] was called after all combinations
    /// had already been produced.
    #[error("all combinations have already been produced")]
    Exhausted
}

/// Syntactic sugar for `Result<V, CombinationError>`.
pub type CombinationResult<V> = Result<V, CombinationError>;

fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);
    let mut result = 1usize;

    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }

    result
}

/// Lazily enumerates all combinations (subsets of a fixed size) of a source
/// sequence in lexicographic order of the source indices. The generator keeps
/// one index pointer per element of the combination, starting at
/// `0, 1, ..., size - 1`, and advances by incrementing the right-most pointer
/// that has not yet reached its maximum position and resetting all pointers
/// to its right to the consecutive positions immediately following it.
///
/// The enumeration is finite and not restartable. A fresh generator is
/// required to enumerate the combinations a second time.
///
/// # Example
///
/// ```
/// use sudoku_engine::util::Combinations;
///
/// let digits = [1, 2, 3];
/// let mut combinations = Combinations::new(&digits, 2).unwrap();
///
/// assert_eq!(vec![1, 2], combinations.next().unwrap());
/// assert_eq!(vec![1, 3], combinations.next().unwrap());
/// assert_eq!(vec![2, 3], combinations.next().unwrap());
/// assert!(!combinations.has_next());
/// ```
pub struct Combinations<'a, T> {
    source: &'a [T],
    pointers: Vec<usize>,
    remaining: usize
}

impl<'a, T: Clone> Combinations<'a, T> {

    /// Creates a new generator over all combinations of `size` elements of
    /// the given source sequence. A size of 0 is valid and produces exactly
    /// one empty combination.
    ///
    /// # Errors
    ///
    /// If `size` is greater than the length of `source`. In that case,
    /// `CombinationError::InvalidSize` is returned.
    pub fn new(source: &'a [T], size: usize)
            -> CombinationResult<Combinations<'a, T>> {
        if size > source.len() {
            Err(CombinationError::InvalidSize)
        }
        else {
            Ok(Combinations {
                source,
                pointers: (0..size).collect(),
                remaining: binomial(source.len(), size)
            })
        }
    }

    /// Indicates whether any combination remains to be produced. This is
    /// derived from the precomputed total number of combinations.
    pub fn has_next(&self) -> bool {
        self.remaining > 0
    }

    /// Returns the current combination as a vector of cloned source elements
    /// and advances the generator to the next one.
    ///
    /// # Errors
    ///
    /// If all combinations have already been produced. In that case,
    /// `CombinationError::Exhausted` is returned.
    pub fn next(&mut self) -> CombinationResult<Vec<T>> {
        if self.remaining == 0 {
            return Err(CombinationError::Exhausted);
        }

        let combination = self.pointers.iter()
            .map(|&pointer| self.source[pointer].clone())
            .collect();
        self.remaining -= 1;

        if self.remaining > 0 {
            self.advance();
        }

        Ok(combination)
    }

    fn advance(&mut self) {
        let len = self.source.len();
        let size = self.pointers.len();

        // Not exhausted, so some pointer is below its maximum position.
        let mut i = size - 1;

        while self.pointers[i] == len - size + i {
            i -= 1;
        }

        self.pointers[i] += 1;

        for j in (i + 1)..size {
            self.pointers[j] = self.pointers[j - 1] + 1;
        }
    }
}
