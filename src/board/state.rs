//! Per-turn game state.
//!
//! A snapshot of the day, soil nutrients, both players and every tree. It is
//! rebuilt from scratch each turn and never mutated afterwards.

use serde::Serialize;

use super::topology::{Board, CellIndex};

/// Slot of the opponent in `TurnState::players`.
pub const OPPONENT: usize = 0;
/// Slot of the player this program acts for.
pub const ME: usize = 1;

/// Growth tier of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum TreeSize {
    Seed = 0,
    Small = 1,
    Medium = 2,
    Large = 3,
}

impl TreeSize {
    /// Returns the numeric tier used in the text format.
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// Parses a tier from the text format.
    pub fn from_tier(tier: u8) -> Option<TreeSize> {
        match tier {
            0 => Some(TreeSize::Seed),
            1 => Some(TreeSize::Small),
            2 => Some(TreeSize::Medium),
            3 => Some(TreeSize::Large),
            _ => None,
        }
    }
}

/// One player's resources for the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Player {
    pub sun: u16,
    pub score: u16,
    pub is_mine: bool,
    /// Only ever set for the opponent.
    pub is_waiting: bool,
}

impl Player {
    /// The player this program acts for. Never waiting.
    pub fn me(sun: u16, score: u16) -> Self {
        Player {
            sun,
            score,
            is_mine: true,
            is_waiting: false,
        }
    }

    pub fn opponent(sun: u16, score: u16, is_waiting: bool) -> Self {
        Player {
            sun,
            score,
            is_mine: false,
            is_waiting,
        }
    }
}

/// A tree standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tree {
    pub index: CellIndex,
    pub size: TreeSize,
    pub is_mine: bool,
    pub is_dormant: bool,
}

/// Everything known about the game at the start of a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnState {
    pub day: u8,
    pub nutrients: u8,
    /// Indexed by `OPPONENT` and `ME`.
    pub players: [Player; 2],
    pub trees: Vec<Tree>,
}

impl TurnState {
    #[inline]
    pub fn me(&self) -> &Player {
        &self.players[ME]
    }

    #[inline]
    pub fn opponent(&self) -> &Player {
        &self.players[OPPONENT]
    }

    /// The tree on `index`, if one stands there.
    pub fn tree_at(&self, index: CellIndex) -> Option<&Tree> {
        self.trees.iter().find(|t| t.index == index)
    }

    /// Trees whose cell is not on `board`.
    ///
    /// Turn parsing does not check tree indices against the board; callers
    /// that care run this afterwards.
    pub fn trees_off_board<'a>(
        &'a self,
        board: &'a Board,
    ) -> impl Iterator<Item = &'a Tree> + 'a {
        self.trees.iter().filter(move |t| !board.contains(t.index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::standard_records;

    fn sample_state() -> TurnState {
        TurnState {
            day: 3,
            nutrients: 18,
            players: [Player::opponent(7, 2, true), Player::me(5, 4)],
            trees: vec![
                Tree {
                    index: 21,
                    size: TreeSize::Small,
                    is_mine: true,
                    is_dormant: false,
                },
                Tree {
                    index: 30,
                    size: TreeSize::Large,
                    is_mine: false,
                    is_dormant: true,
                },
            ],
        }
    }

    #[test]
    fn tree_size_tier_roundtrip() {
        for size in [TreeSize::Seed, TreeSize::Small, TreeSize::Medium, TreeSize::Large] {
            assert_eq!(TreeSize::from_tier(size.tier()), Some(size));
        }
        assert_eq!(TreeSize::from_tier(4), None);
        assert!(TreeSize::Seed < TreeSize::Large);
    }

    #[test]
    fn player_slots() {
        let state = sample_state();
        assert!(state.me().is_mine);
        assert!(!state.me().is_waiting);
        assert!(!state.opponent().is_mine);
        assert!(state.opponent().is_waiting);
        assert_eq!(state.me().sun, 5);
        assert_eq!(state.opponent().score, 2);
    }

    #[test]
    fn tree_lookup() {
        let state = sample_state();
        assert_eq!(state.tree_at(30).map(|t| t.size), Some(TreeSize::Large));
        assert!(state.tree_at(0).is_none());
    }

    #[test]
    fn off_board_trees_are_reported() {
        let board = Board::build(&standard_records()).unwrap();
        let mut state = sample_state();
        assert_eq!(state.trees_off_board(&board).count(), 0);

        state.trees.push(Tree {
            index: 40,
            size: TreeSize::Seed,
            is_mine: true,
            is_dormant: false,
        });
        let off: Vec<CellIndex> = state.trees_off_board(&board).map(|t| t.index).collect();
        assert_eq!(off, vec![40]);
    }
}
