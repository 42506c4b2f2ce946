//! Standard chess piece movement.

use chess_core::{Direction, Offset, PieceKind, RelativeDirection};

use super::RuleSet;
use crate::movegen::{Limit, MovePattern, MovePolicy, RankCondition};

const fn slide(direction: Direction) -> MovePattern {
    MovePattern::slide(direction, MovePolicy::SLIDE)
}

const fn step(direction: Direction) -> MovePattern {
    MovePattern::step(direction, MovePolicy::SLIDE)
}

const fn knight(index: usize) -> MovePattern {
    MovePattern::leap(Offset::KNIGHT[index], MovePolicy::LEAP)
}

const PAWN: [MovePattern; 4] = [
    MovePattern::relative(
        RelativeDirection::Forward,
        MovePolicy::PEACEFUL_ONLY,
        Limit::ONE,
    ),
    MovePattern::relative(
        RelativeDirection::Forward,
        MovePolicy::PEACEFUL_ONLY,
        Limit::Steps(2),
    )
    .only_from(RankCondition::PawnRank),
    MovePattern::relative(
        RelativeDirection::ForwardLeft,
        MovePolicy::CAPTURE_ONLY,
        Limit::ONE,
    ),
    MovePattern::relative(
        RelativeDirection::ForwardRight,
        MovePolicy::CAPTURE_ONLY,
        Limit::ONE,
    ),
];

const KNIGHT: [MovePattern; 8] = [
    knight(0),
    knight(1),
    knight(2),
    knight(3),
    knight(4),
    knight(5),
    knight(6),
    knight(7),
];

const BISHOP: [MovePattern; 4] = [
    slide(Direction::UpLeft),
    slide(Direction::UpRight),
    slide(Direction::DownLeft),
    slide(Direction::DownRight),
];

const ROOK: [MovePattern; 4] = [
    slide(Direction::Left),
    slide(Direction::Right),
    slide(Direction::Up),
    slide(Direction::Down),
];

const QUEEN: [MovePattern; 8] = [
    slide(Direction::Left),
    slide(Direction::Right),
    slide(Direction::Up),
    slide(Direction::Down),
    slide(Direction::UpLeft),
    slide(Direction::UpRight),
    slide(Direction::DownLeft),
    slide(Direction::DownRight),
];

const KING: [MovePattern; 8] = [
    step(Direction::Left),
    step(Direction::Right),
    step(Direction::Up),
    step(Direction::Down),
    step(Direction::UpLeft),
    step(Direction::UpRight),
    step(Direction::DownLeft),
    step(Direction::DownRight),
];

/// Standard chess movement.
///
/// - Rook, bishop and queen slide along their lines until blocked
/// - King steps one square in any direction
/// - Knight leaps to its eight fixed offsets
/// - Pawn pushes one square, two from its starting rank, and captures
///   one square diagonally forward
///
/// Castling, en passant and promotion are not generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardChess;

impl RuleSet for StandardChess {
    fn patterns(&self, kind: PieceKind) -> &[MovePattern] {
        match kind {
            PieceKind::Pawn => &PAWN,
            PieceKind::Knight => &KNIGHT,
            PieceKind::Bishop => &BISHOP,
            PieceKind::Rook => &ROOK,
            PieceKind::Queen => &QUEEN,
            PieceKind::King => &KING,
        }
    }
}
