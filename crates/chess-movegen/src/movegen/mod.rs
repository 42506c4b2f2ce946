//! Move generation.
//!
//! Generation is layered:
//! - [`walker`] turns one direction (or one fixed offset) plus a
//!   [`MovePolicy`] into concrete moves on a board snapshot
//! - [`composite`] fixes headings and limits to express named movements
//!   ("slide left", "one step backward") and their serializable form,
//!   [`MovePattern`]
//!
//! Every generator returns a [`MoveSet`]; callers must not rely on its
//! iteration order.

pub mod composite;
pub mod walker;

use std::collections::{hash_set, BTreeSet, HashSet};

use chess_core::{Move, Position};

pub use composite::{
    backward, backward_limited, forward, forward_limited, leap, leaps, one_step,
    one_step_backward, one_step_forward, slide, slide_down, slide_left, slide_right, slide_up,
    slides, walk, MovePattern, Path, RankCondition,
};
pub use walker::{concretise, concretise_offset, Limit, MovePolicy};

/// An unordered set of candidate moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    moves: HashSet<Move>,
}

impl MoveSet {
    /// Creates an empty move set.
    #[inline]
    pub fn new() -> Self {
        MoveSet {
            moves: HashSet::new(),
        }
    }

    /// Adds a move, returning false if it was already present.
    #[inline]
    pub fn insert(&mut self, m: Move) -> bool {
        self.moves.insert(m)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn contains(&self, m: &Move) -> bool {
        self.moves.contains(m)
    }

    /// Iterates over the moves in unspecified order.
    #[inline]
    pub fn iter(&self) -> hash_set::Iter<'_, Move> {
        self.moves.iter()
    }

    /// Moves that take a piece.
    pub fn captures(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.is_capture())
    }

    /// Moves onto empty squares.
    pub fn quiet(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| !m.is_capture())
    }

    /// Every destination square, sorted.
    pub fn destinations(&self) -> BTreeSet<Position> {
        self.moves.iter().map(|m| m.to).collect()
    }

    /// Adds every move of `other`.
    pub fn merge(&mut self, other: MoveSet) {
        self.moves.extend(other.moves);
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        self.moves.retain(f);
    }

    /// Returns the moves ordered by origin, then destination.
    pub fn to_sorted_vec(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.moves.iter().copied().collect();
        moves.sort_by_key(|m| (m.from, m.to, m.promotion.map(|k| k.index())));
        moves
    }
}

impl Extend<Move> for MoveSet {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        self.moves.extend(iter);
    }
}

impl FromIterator<Move> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        MoveSet {
            moves: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MoveSet {
    type Item = Move;
    type IntoIter = hash_set::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a Move;
    type IntoIter = hash_set::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl std::fmt::Debug for MoveSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.to_sorted_vec()).finish()
    }
}
