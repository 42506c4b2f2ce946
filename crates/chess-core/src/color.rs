//! Player color representation.

use serde::{Deserialize, Serialize};

use crate::Bounds;

/// The two sides of the board.
///
/// White starts on the low ranks and moves "up"; Black starts on the high
/// ranks and moves "down".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank delta of a forward step (+1 for White, -1 for Black).
    #[inline]
    pub const fn forward_rank_delta(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the back rank for this color on a board of the given size.
    #[inline]
    pub const fn home_rank(self, bounds: Bounds) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => bounds.ranks() - 1,
        }
    }

    /// Returns the rank pawns of this color start on.
    ///
    /// On a board with a single rank this is the home rank itself.
    #[inline]
    pub const fn pawn_rank(self, bounds: Bounds) -> u8 {
        let ranks = bounds.ranks();
        match self {
            Color::White if ranks > 1 => 1,
            Color::Black if ranks > 1 => ranks - 2,
            _ => self.home_rank(bounds),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
