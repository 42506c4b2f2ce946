//! Direction primitives.
//!
//! Every direction is data: a fixed `(Δfile, Δrank)` [`Offset`]. "Up" means
//! towards higher ranks, i.e. away from White's side of the board.
//! [`RelativeDirection`]s are expressed from a piece's own point of view and
//! resolve to a concrete [`Direction`] through [`orient`].

use serde::{Deserialize, Serialize};

use crate::Color;

/// A fixed `(Δfile, Δrank)` translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub file: i8,
    pub rank: i8,
}

impl Offset {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Offset { file, rank }
    }

    /// The eight knight leaps.
    pub const KNIGHT: [Offset; 8] = [
        Offset::new(1, 2),
        Offset::new(2, 1),
        Offset::new(2, -1),
        Offset::new(1, -2),
        Offset::new(-1, -2),
        Offset::new(-2, -1),
        Offset::new(-2, 1),
        Offset::new(-1, 2),
    ];

    /// Returns the offset pointing the other way.
    #[inline]
    pub const fn reversed(self) -> Self {
        Offset::new(-self.file, -self.rank)
    }

    /// Returns true for the zero offset, which never leaves its origin.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.file == 0 && self.rank == 0
    }
}

/// The eight single-step board directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The directions a rook slides in.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The directions a bishop slides in.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// The translation applied by one step.
    #[inline]
    pub const fn offset(self) -> Offset {
        match self {
            Direction::Left => Offset::new(-1, 0),
            Direction::Right => Offset::new(1, 0),
            Direction::Up => Offset::new(0, 1),
            Direction::Down => Offset::new(0, -1),
            Direction::UpLeft => Offset::new(-1, 1),
            Direction::UpRight => Offset::new(1, 1),
            Direction::DownLeft => Offset::new(-1, -1),
            Direction::DownRight => Offset::new(1, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }

    /// Mirrors the direction across the horizontal axis (up <-> down).
    #[inline]
    pub const fn flipped_vertically(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::UpLeft => Direction::DownLeft,
            Direction::UpRight => Direction::DownRight,
            Direction::DownLeft => Direction::UpLeft,
            Direction::DownRight => Direction::UpRight,
            other => other,
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::UpLeft | Direction::UpRight | Direction::DownLeft | Direction::DownRight
        )
    }
}

/// A direction seen from a piece's own side of the board.
///
/// Only the vertical component depends on color. "Left" in
/// [`RelativeDirection::ForwardLeft`] is the board's left for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeDirection {
    Forward,
    Backward,
    ForwardLeft,
    ForwardRight,
    BackwardLeft,
    BackwardRight,
}

/// Resolves a relative direction for a piece of the given color.
///
/// White's forward is [`Direction::Up`]; Black's forward is
/// [`Direction::Down`].
#[inline]
pub const fn orient(color: Color, relative: RelativeDirection) -> Direction {
    let as_white = match relative {
        RelativeDirection::Forward => Direction::Up,
        RelativeDirection::Backward => Direction::Down,
        RelativeDirection::ForwardLeft => Direction::UpLeft,
        RelativeDirection::ForwardRight => Direction::UpRight,
        RelativeDirection::BackwardLeft => Direction::DownLeft,
        RelativeDirection::BackwardRight => Direction::DownRight,
    };
    match color {
        Color::White => as_white,
        Color::Black => as_white.flipped_vertically(),
    }
}

/// Either a board direction or one relative to the moving piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Heading {
    Absolute(Direction),
    Relative(RelativeDirection),
}

impl Heading {
    /// Resolves to a concrete direction for a piece of `color`.
    #[inline]
    pub const fn resolve(self, color: Color) -> Direction {
        match self {
            Heading::Absolute(direction) => direction,
            Heading::Relative(relative) => orient(color, relative),
        }
    }
}

impl From<Direction> for Heading {
    fn from(direction: Direction) -> Self {
        Heading::Absolute(direction)
    }
}

impl From<RelativeDirection> for Heading {
    fn from(relative: RelativeDirection) -> Self {
        Heading::Relative(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_offsets_cancel() {
        for direction in Direction::ALL {
            let forth = direction.offset();
            let back = direction.opposite().offset();
            assert_eq!(forth.reversed(), back, "{:?}", direction);
        }
    }

    #[test]
    fn every_direction_moves() {
        for direction in Direction::ALL {
            assert!(!direction.offset().is_null());
        }
    }

    #[test]
    fn diagonal_partition() {
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal()));
        assert!(Direction::ORTHOGONAL.iter().all(|d| !d.is_diagonal()));
    }

    #[test]
    fn forward_depends_on_color() {
        assert_eq!(orient(Color::White, RelativeDirection::Forward), Direction::Up);
        assert_eq!(orient(Color::Black, RelativeDirection::Forward), Direction::Down);
        assert_eq!(orient(Color::White, RelativeDirection::Backward), Direction::Down);
        assert_eq!(orient(Color::Black, RelativeDirection::Backward), Direction::Up);
    }

    #[test]
    fn relative_diagonals_keep_board_left() {
        assert_eq!(
            orient(Color::White, RelativeDirection::ForwardLeft),
            Direction::UpLeft
        );
        assert_eq!(
            orient(Color::Black, RelativeDirection::ForwardLeft),
            Direction::DownLeft
        );
        assert_eq!(
            orient(Color::Black, RelativeDirection::BackwardRight),
            Direction::UpRight
        );
    }

    #[test]
    fn forward_is_backward_for_the_other_side() {
        for color in Color::ALL {
            assert_eq!(
                orient(color, RelativeDirection::Forward),
                orient(color.opposite(), RelativeDirection::Backward)
            );
        }
    }

    #[test]
    fn heading_resolves() {
        let heading = Heading::from(Direction::Left);
        assert_eq!(heading.resolve(Color::Black), Direction::Left);
        let heading = Heading::from(RelativeDirection::Forward);
        assert_eq!(heading.resolve(Color::Black), Direction::Down);
    }

    #[test]
    fn knight_offsets_are_distinct() {
        for (i, a) in Offset::KNIGHT.iter().enumerate() {
            for b in &Offset::KNIGHT[i + 1..] {
                assert_ne!(a, b);
            }
            assert_eq!(a.file.abs() + a.rank.abs(), 3);
        }
    }
}
