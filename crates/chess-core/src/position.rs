//! Board geometry: bounds and positions.

use std::fmt;

use crate::{Direction, Offset};

/// Dimensions of a rectangular board.
///
/// Files are named with the letters `a`-`z`, so a board has at most 26
/// files. Ranks are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    files: u8,
    ranks: u8,
}

impl Bounds {
    /// The standard 8x8 board.
    pub const STANDARD: Bounds = Bounds { files: 8, ranks: 8 };

    /// Largest supported number of files.
    pub const MAX_FILES: u8 = 26;

    /// Creates bounds, or `None` if either side is zero or there are more
    /// than [`Self::MAX_FILES`] files.
    pub const fn new(files: u8, ranks: u8) -> Option<Self> {
        if files == 0 || ranks == 0 || files > Self::MAX_FILES {
            None
        } else {
            Some(Bounds { files, ranks })
        }
    }

    #[inline]
    pub const fn files(self) -> u8 {
        self.files
    }

    #[inline]
    pub const fn ranks(self) -> u8 {
        self.ranks
    }

    /// Total number of squares.
    #[inline]
    pub const fn area(self) -> usize {
        self.files as usize * self.ranks as usize
    }

    /// Returns true if the signed coordinate lies on the board.
    #[inline]
    pub const fn contains(self, file: i16, rank: i16) -> bool {
        file >= 0 && rank >= 0 && file < self.files as i16 && rank < self.ranks as i16
    }

    /// Iterates over every position, rank by rank from the first.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.ranks).flat_map(move |rank| (0..self.files).map(move |file| Position { file, rank }))
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::STANDARD
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.files, self.ranks)
    }
}

/// An immutable (file, rank) coordinate, 0-based.
///
/// A `Position` can only be built inside some [`Bounds`]; stepping off the
/// board yields `None` rather than an invalid coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    rank: u8,
    file: u8,
}

impl Position {
    /// Creates a position if it lies within `bounds`.
    #[inline]
    pub const fn new(file: u8, rank: u8, bounds: Bounds) -> Option<Self> {
        if file < bounds.files && rank < bounds.ranks {
            Some(Position { file, rank })
        } else {
            None
        }
    }

    /// Parses algebraic notation (e.g. "e4", "b10") within `bounds`.
    pub fn from_algebraic(s: &str, bounds: Bounds) -> Option<Self> {
        let mut chars = s.chars();
        let letter = chars.next()?.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rank: u16 = digits.parse().ok()?;
        if rank == 0 || rank > u8::MAX as u16 {
            return None;
        }
        let file = letter as u8 - b'a';
        Self::new(file, (rank - 1) as u8, bounds)
    }

    /// Returns the file index (0-based).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Returns the rank index (0-based).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Row-major index of this position on a board with the given bounds.
    #[inline]
    pub const fn index(self, bounds: Bounds) -> usize {
        self.rank as usize * bounds.files as usize + self.file as usize
    }

    /// Applies a fixed offset, returning `None` when the result is off-board.
    #[inline]
    pub const fn offset(self, offset: Offset, bounds: Bounds) -> Option<Self> {
        let file = self.file as i16 + offset.file as i16;
        let rank = self.rank as i16 + offset.rank as i16;
        if bounds.contains(file, rank) {
            Some(Position {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Takes one step in `direction`, returning `None` when off-board.
    #[inline]
    pub const fn step(self, direction: Direction, bounds: Bounds) -> Option<Self> {
        self.offset(direction.offset(), bounds)
    }

    /// Number of steps available in `direction` before leaving the board.
    pub fn distance_to_edge(self, direction: Direction, bounds: Bounds) -> u8 {
        let mut steps = 0;
        let mut current = self;
        while let Some(next) = current.step(direction, bounds) {
            current = next;
            steps += 1;
        }
        steps
    }

    /// Returns the algebraic notation for this position.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.file) as char, self.rank as u16 + 1)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_algebraic())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const STD: Bounds = Bounds::STANDARD;

    #[test]
    fn bounds_new() {
        assert_eq!(Bounds::new(8, 8), Some(Bounds::STANDARD));
        assert_eq!(Bounds::new(0, 8), None);
        assert_eq!(Bounds::new(8, 0), None);
        assert_eq!(Bounds::new(27, 8), None);
        assert!(Bounds::new(26, 255).is_some());
    }

    #[test]
    fn bounds_positions_cover_board() {
        let bounds = Bounds::new(3, 2).unwrap();
        let all: Vec<_> = bounds.positions().map(|p| p.to_algebraic()).collect();
        assert_eq!(all, ["a1", "b1", "c1", "a2", "b2", "c2"]);
        assert_eq!(bounds.area(), 6);
    }

    #[test]
    fn position_new() {
        let e4 = Position::new(4, 3, STD).unwrap();
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.index(STD), 28);
        assert_eq!(Position::new(8, 0, STD), None);
        assert_eq!(Position::new(0, 8, STD), None);
    }

    #[test]
    fn position_from_algebraic() {
        assert_eq!(Position::from_algebraic("a1", STD), Position::new(0, 0, STD));
        assert_eq!(Position::from_algebraic("E4", STD), Position::new(4, 3, STD));
        assert_eq!(Position::from_algebraic("h8", STD), Position::new(7, 7, STD));
        assert_eq!(Position::from_algebraic("i1", STD), None);
        assert_eq!(Position::from_algebraic("a9", STD), None);
        assert_eq!(Position::from_algebraic("a0", STD), None);
        assert_eq!(Position::from_algebraic("", STD), None);
        assert_eq!(Position::from_algebraic("4e", STD), None);
    }

    #[test]
    fn position_from_algebraic_large_board() {
        let bounds = Bounds::new(12, 12).unwrap();
        let pos = Position::from_algebraic("l12", bounds).unwrap();
        assert_eq!((pos.file(), pos.rank()), (11, 11));
        assert_eq!(pos.to_algebraic(), "l12");
    }

    #[test]
    fn step_stays_on_board() {
        let a1 = Position::new(0, 0, STD).unwrap();
        assert_eq!(a1.step(Direction::Left, STD), None);
        assert_eq!(a1.step(Direction::Down, STD), None);
        assert_eq!(a1.step(Direction::Up, STD), Position::new(0, 1, STD));
        assert_eq!(a1.step(Direction::UpRight, STD), Position::new(1, 1, STD));
    }

    #[test]
    fn offset_applies_vector() {
        let b1 = Position::new(1, 0, STD).unwrap();
        assert_eq!(b1.offset(Offset::new(1, 2), STD), Position::new(2, 2, STD));
        assert_eq!(b1.offset(Offset::new(-2, 1), STD), None);
    }

    #[test]
    fn distance_to_edge() {
        let e4 = Position::from_algebraic("e4", STD).unwrap();
        assert_eq!(e4.distance_to_edge(Direction::Left, STD), 4);
        assert_eq!(e4.distance_to_edge(Direction::Right, STD), 3);
        assert_eq!(e4.distance_to_edge(Direction::UpLeft, STD), 4);
        assert_eq!(e4.distance_to_edge(Direction::DownRight, STD), 3);
    }

    #[test]
    fn display_and_debug() {
        let e4 = Position::from_algebraic("e4", STD).unwrap();
        assert_eq!(format!("{}", e4), "e4");
        assert_eq!(format!("{:?}", e4), "Position(e4)");
    }
    fn bounds_and_position() -> impl Strategy<Value = (Bounds, Position)> {
        (1u8..=Bounds::MAX_FILES, 1u8..=u8::MAX).prop_flat_map(|(files, ranks)| {
            let bounds = Bounds::new(files, ranks).unwrap();
            (0..files, 0..ranks)
                .prop_map(move |(file, rank)| (bounds, Position::new(file, rank, bounds).unwrap()))
        })
    }

    proptest! {
        #[test]
        fn step_back_returns_to_start(
            (bounds, start) in bounds_and_position(),
            direction in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            if let Some(next) = start.step(direction, bounds) {
                prop_assert_ne!(next, start);
                prop_assert_eq!(next.step(direction.opposite(), bounds), Some(start));
            }
        }

        #[test]
        fn offset_stays_in_bounds(
            (bounds, start) in bounds_and_position(),
            file in any::<i8>(),
            rank in any::<i8>(),
        ) {
            if let Some(target) = start.offset(Offset::new(file, rank), bounds) {
                prop_assert!(target.file() < bounds.files());
                prop_assert!(target.rank() < bounds.ranks());
                prop_assert_eq!(Position::new(target.file(), target.rank(), bounds), Some(target));
                prop_assert_eq!(
                    i16::from(target.file()) - i16::from(start.file()),
                    i16::from(file)
                );
            }
        }

        #[test]
        fn algebraic_roundtrip((bounds, position) in bounds_and_position()) {
            let text = position.to_algebraic();
            prop_assert_eq!(Position::from_algebraic(&text, bounds), Some(position));
        }
    }
}
