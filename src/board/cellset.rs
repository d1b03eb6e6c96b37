//! Bitset over board cell indices.
//!
//! The board has 37 cells, so a single `u64` word holds any subset. Ring
//! expansion uses it for deduplication; iteration is in ascending index order,
//! which gives sorted ring output for free.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::{Serialize, Serializer};

use super::topology::{CellIndex, CELL_COUNT};

const FULL_MASK: u64 = (1u64 << CELL_COUNT) - 1;

/// A set of cell indices in `[0, CELL_COUNT)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellSet(u64);

impl CellSet {
    /// The empty set.
    #[inline]
    pub const fn empty() -> Self {
        CellSet(0)
    }

    /// Every cell on the board.
    #[inline]
    pub const fn full() -> Self {
        CellSet(FULL_MASK)
    }

    /// A set holding one cell.
    #[inline]
    pub fn single(index: CellIndex) -> Self {
        debug_assert!(index < CELL_COUNT);
        CellSet(1u64 << index)
    }

    /// Returns true if `index` is in the set.
    #[inline]
    pub fn contains(&self, index: CellIndex) -> bool {
        index < CELL_COUNT && (self.0 >> index) & 1 != 0
    }

    /// Adds `index`. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, index: CellIndex) -> bool {
        debug_assert!(index < CELL_COUNT);
        let bit = 1u64 << index;
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    /// Removes `index`. Returns true if it was present.
    #[inline]
    pub fn remove(&mut self, index: CellIndex) -> bool {
        if index >= CELL_COUNT {
            return false;
        }
        let bit = 1u64 << index;
        let present = self.0 & bit != 0;
        self.0 &= !bit;
        present
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates members in ascending order.
    pub fn iter(&self) -> CellSetIter {
        CellSetIter(self.0)
    }

    /// Collects members into an ascending `Vec`.
    pub fn to_vec(&self) -> Vec<CellIndex> {
        self.iter().collect()
    }
}

impl FromIterator<CellIndex> for CellSet {
    fn from_iter<I: IntoIterator<Item = CellIndex>>(iter: I) -> Self {
        let mut set = CellSet::empty();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl BitOr for CellSet {
    type Output = CellSet;

    #[inline]
    fn bitor(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellSet {
    #[inline]
    fn bitor_assign(&mut self, rhs: CellSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for CellSet {
    type Output = CellSet;

    #[inline]
    fn bitand(self, rhs: CellSet) -> CellSet {
        CellSet(self.0 & rhs.0)
    }
}

impl Not for CellSet {
    type Output = CellSet;

    /// Complement within the board.
    #[inline]
    fn not(self) -> CellSet {
        CellSet(!self.0 & FULL_MASK)
    }
}

impl Serialize for CellSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Ascending iterator over a `CellSet`.
pub struct CellSetIter(u64);

impl Iterator for CellSetIter {
    type Item = CellIndex;

    #[inline]
    fn next(&mut self) -> Option<CellIndex> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as CellIndex;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = CellIndex;
    type IntoIter = CellSetIter;

    fn into_iter(self) -> CellSetIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_reports_freshness() {
        let mut set = CellSet::empty();
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.contains(5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn iteration_is_ascending() {
        let set: CellSet = [30, 2, 17, 0, 36, 2].into_iter().collect();
        assert_eq!(set.to_vec(), vec![0, 2, 17, 30, 36]);
        assert_eq!(set.iter().size_hint(), (5, Some(5)));
    }

    #[test]
    fn remove_and_out_of_range() {
        let mut set = CellSet::single(12);
        assert!(!set.contains(37));
        assert!(!set.contains(99));
        assert!(!set.remove(40));
        assert!(set.remove(12));
        assert!(!set.remove(12));
        assert!(set.is_empty());
    }

    #[test]
    fn complement_stays_on_board() {
        let full = CellSet::full();
        assert_eq!(full.len(), CELL_COUNT);
        assert!((!full).is_empty());

        let some: CellSet = [0, 1, 2].into_iter().collect();
        let rest = !some;
        assert_eq!(rest.len(), CELL_COUNT - 3);
        assert!((rest & some).is_empty());
        assert_eq!(rest | some, full);
    }

    #[test]
    fn serializes_as_index_list() {
        let set: CellSet = [4, 1, 9].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[1,4,9]");
    }
}
