//! The six fixed hex directions.
//!
//! Direction order matches the neighbor columns of the board text format:
//! right, upper-right, upper-left, left, lower-left, lower-right. The
//! `#[repr(u8)]` discriminant doubles as the column index.

use serde::Serialize;

/// Number of directions around a hex cell.
pub const DIRECTION_COUNT: usize = 6;

/// A direction on the hex board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Direction {
    Right = 0,
    UpperRight = 1,
    UpperLeft = 2,
    Left = 3,
    LowerLeft = 4,
    LowerRight = 5,
}

/// All six directions in column order.
pub const ALL_DIRECTIONS: [Direction; DIRECTION_COUNT] = [
    Direction::Right,
    Direction::UpperRight,
    Direction::UpperLeft,
    Direction::Left,
    Direction::LowerLeft,
    Direction::LowerRight,
];

impl Direction {
    /// Returns the column index of this direction (0..6).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a direction by column index.
    pub fn from_index(index: usize) -> Option<Direction> {
        ALL_DIRECTIONS.get(index).copied()
    }

    /// Returns the direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        ALL_DIRECTIONS[(self as usize + 3) % DIRECTION_COUNT]
    }

    /// Returns a lowercase, hyphenated name for logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::UpperRight => "upper-right",
            Direction::UpperLeft => "upper-left",
            Direction::Left => "left",
            Direction::LowerLeft => "lower-left",
            Direction::LowerRight => "lower-right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_column_order() {
        for (i, d) in ALL_DIRECTIONS.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Direction::from_index(i), Some(*d));
        }
        assert_eq!(Direction::from_index(6), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Direction::Right.opposite(), Direction::Left);
        assert_eq!(Direction::UpperRight.opposite(), Direction::LowerLeft);
        assert_eq!(Direction::UpperLeft.opposite(), Direction::LowerRight);
        for d in ALL_DIRECTIONS {
            assert_ne!(d.opposite(), d);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Direction::LowerLeft.to_string(), "lower-left");
        assert_eq!(format!("{}", Direction::Right), "right");
    }
}
