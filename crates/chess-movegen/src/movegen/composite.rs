//! Composite move builders.
//!
//! Each builder fixes a heading and a limit and forwards the
//! [`MovePolicy`] unchanged to the walker. Piece rules are unions of these
//! calls: a rook is four unbounded orthogonal [`slide`]s, a king is eight
//! [`one_step`]s, a knight is eight [`leap`]s.
//!
//! [`MovePattern`] is the same contract as data, so rule sets can be
//! written as constant tables or loaded from configuration.

use chess_core::{Direction, Heading, Offset, RelativeDirection};
use serde::{Deserialize, Serialize};

use super::walker::{concretise, concretise_offset, Limit, MovePolicy};
use super::MoveSet;
use crate::{BoardView, Origin};

/// Walks towards `heading` for at most `limit` steps.
pub fn walk<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    heading: impl Into<Heading>,
    policy: MovePolicy,
    limit: Limit,
) -> MoveSet {
    let direction = heading.into().resolve(origin.color());
    concretise(origin, direction, policy, limit)
}

/// Slides towards `heading` until blocked or off the board.
pub fn slide<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    heading: impl Into<Heading>,
    policy: MovePolicy,
) -> MoveSet {
    walk(origin, heading, policy, Limit::Unbounded)
}

/// A single step towards `heading`.
pub fn one_step<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    heading: impl Into<Heading>,
    policy: MovePolicy,
) -> MoveSet {
    walk(origin, heading, policy, Limit::ONE)
}

/// Union of unbounded slides in several directions.
pub fn slides<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    directions: &[Direction],
    policy: MovePolicy,
) -> MoveSet {
    let mut moves = MoveSet::new();
    for &direction in directions {
        moves.merge(slide(origin, direction, policy));
    }
    moves
}

pub fn slide_left<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, Direction::Left, policy)
}

pub fn slide_right<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, Direction::Right, policy)
}

pub fn slide_up<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, Direction::Up, policy)
}

pub fn slide_down<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, Direction::Down, policy)
}

/// Slides towards the moving piece's forward direction.
pub fn forward<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, RelativeDirection::Forward, policy)
}

/// Slides towards the moving piece's backward direction.
pub fn backward<B: BoardView + ?Sized>(origin: &Origin<'_, B>, policy: MovePolicy) -> MoveSet {
    slide(origin, RelativeDirection::Backward, policy)
}

pub fn forward_limited<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    policy: MovePolicy,
    limit: Limit,
) -> MoveSet {
    walk(origin, RelativeDirection::Forward, policy, limit)
}

pub fn backward_limited<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    policy: MovePolicy,
    limit: Limit,
) -> MoveSet {
    walk(origin, RelativeDirection::Backward, policy, limit)
}

pub fn one_step_forward<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    policy: MovePolicy,
) -> MoveSet {
    one_step(origin, RelativeDirection::Forward, policy)
}

pub fn one_step_backward<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    policy: MovePolicy,
) -> MoveSet {
    one_step(origin, RelativeDirection::Backward, policy)
}

/// Leaps by one fixed offset.
pub fn leap<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    offset: Offset,
    policy: MovePolicy,
) -> MoveSet {
    concretise_offset(origin, offset, policy)
}

/// Union of leaps by several fixed offsets.
pub fn leaps<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    offsets: &[Offset],
    policy: MovePolicy,
) -> MoveSet {
    let mut moves = MoveSet::new();
    for &offset in offsets {
        moves.merge(leap(origin, offset, policy));
    }
    moves
}

/// The geometric part of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Path {
    /// Walk along a line.
    Line(Heading),
    /// Jump straight to a fixed offset.
    Leap(Offset),
}

/// Restricts a pattern to pieces standing on a particular rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankCondition {
    /// The rank the piece's pawns start on.
    PawnRank,
    /// The piece's back rank.
    HomeRank,
}

/// One composite builder call, as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovePattern {
    pub path: Path,
    /// Ignored for leaps.
    #[serde(default, skip_serializing_if = "Limit::is_unbounded")]
    pub limit: Limit,
    #[serde(default)]
    pub attack: bool,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub peaceful: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_from: Option<RankCondition>,
}

impl MovePattern {
    /// A walk of at most `limit` steps.
    pub const fn line(heading: Heading, policy: MovePolicy, limit: Limit) -> Self {
        MovePattern {
            path: Path::Line(heading),
            limit,
            attack: policy.attack,
            jump: policy.jump,
            peaceful: policy.peaceful,
            only_from: None,
        }
    }

    /// An unbounded slide along an absolute direction.
    pub const fn slide(direction: Direction, policy: MovePolicy) -> Self {
        Self::line(Heading::Absolute(direction), policy, Limit::Unbounded)
    }

    /// A single step along an absolute direction.
    pub const fn step(direction: Direction, policy: MovePolicy) -> Self {
        Self::line(Heading::Absolute(direction), policy, Limit::ONE)
    }

    /// A walk along a direction relative to the moving piece.
    pub const fn relative(relative: RelativeDirection, policy: MovePolicy, limit: Limit) -> Self {
        Self::line(Heading::Relative(relative), policy, limit)
    }

    /// A leap by a fixed offset.
    pub const fn leap(offset: Offset, policy: MovePolicy) -> Self {
        MovePattern {
            path: Path::Leap(offset),
            limit: Limit::ONE,
            attack: policy.attack,
            jump: policy.jump,
            peaceful: policy.peaceful,
            only_from: None,
        }
    }

    /// Restricts the pattern to pieces standing on `condition`'s rank.
    pub const fn only_from(self, condition: RankCondition) -> Self {
        MovePattern {
            only_from: Some(condition),
            ..self
        }
    }

    #[inline]
    pub const fn policy(&self) -> MovePolicy {
        MovePolicy {
            attack: self.attack,
            jump: self.jump,
            peaceful: self.peaceful,
        }
    }

    /// Returns true if the pattern applies to a piece at `origin`.
    pub fn applies_to<B: BoardView + ?Sized>(&self, origin: &Origin<'_, B>) -> bool {
        let Some(condition) = self.only_from else {
            return true;
        };
        let bounds = origin.bounds();
        let color = origin.color();
        let rank = match condition {
            RankCondition::PawnRank => color.pawn_rank(bounds),
            RankCondition::HomeRank => color.home_rank(bounds),
        };
        origin.position().rank() == rank
    }

    /// Generates the moves this pattern allows from `origin`.
    pub fn generate<B: BoardView + ?Sized>(&self, origin: &Origin<'_, B>) -> MoveSet {
        if !self.applies_to(origin) {
            return MoveSet::new();
        }
        match self.path {
            Path::Line(heading) => walk(origin, heading, self.policy(), self.limit),
            Path::Leap(offset) => leap(origin, offset, self.policy()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use chess_core::{Bounds, Position};

    fn targets(moves: &MoveSet) -> Vec<String> {
        moves.destinations().iter().map(|p| p.to_algebraic()).collect()
    }

    fn origin_at<'b>(board: &'b Board, square: &str) -> Origin<'b, Board> {
        Origin::new(board, board.locate(square).unwrap()).unwrap()
    }

    #[test]
    fn slide_left_from_center() {
        let board = Board::from_placement("8/8/8/8/4R3/8/8/8").unwrap();
        let origin = origin_at(&board, "e4");
        let moves = slide_left(&origin, MovePolicy::SLIDE);
        assert_eq!(targets(&moves), ["a4", "b4", "c4", "d4"]);
    }

    #[test]
    fn slide_family_covers_rook_lines() {
        let board = Board::from_placement("8/8/8/8/4R3/8/8/8").unwrap();
        let origin = origin_at(&board, "e4");
        let total = slide_left(&origin, MovePolicy::SLIDE).len()
            + slide_right(&origin, MovePolicy::SLIDE).len()
            + slide_up(&origin, MovePolicy::SLIDE).len()
            + slide_down(&origin, MovePolicy::SLIDE).len();
        assert_eq!(total, 14);
        assert_eq!(slides(&origin, &Direction::ORTHOGONAL, MovePolicy::SLIDE).len(), 14);
    }

    #[test]
    fn forward_and_backward_follow_color() {
        let board = Board::from_placement("8/8/8/4p3/4P3/8/8/8").unwrap();

        let white = origin_at(&board, "e4");
        assert!(one_step_forward(&white, MovePolicy::PEACEFUL_ONLY).is_empty());
        assert_eq!(targets(&one_step_backward(&white, MovePolicy::SLIDE)), ["e3"]);
        assert_eq!(targets(&backward(&white, MovePolicy::SLIDE)), ["e1", "e2", "e3"]);

        let black = origin_at(&board, "e5");
        assert_eq!(targets(&one_step_backward(&black, MovePolicy::SLIDE)), ["e6"]);
        assert_eq!(targets(&forward(&black, MovePolicy::SLIDE)), ["e4"]);
        assert_eq!(
            targets(&forward_limited(&black, MovePolicy::SLIDE, Limit::Steps(5))),
            ["e4"]
        );
        assert_eq!(
            targets(&backward_limited(&black, MovePolicy::SLIDE, Limit::Steps(2))),
            ["e6", "e7"]
        );
    }

    #[test]
    fn king_steps() {
        let board = Board::from_placement("8/8/8/8/8/8/8/K7").unwrap();
        let origin = origin_at(&board, "a1");
        let mut moves = MoveSet::new();
        for direction in Direction::ALL {
            moves.merge(one_step(&origin, direction, MovePolicy::SLIDE));
        }
        assert_eq!(targets(&moves), ["b1", "a2", "b2"]);
    }

    #[test]
    fn knight_leaps() {
        let board = Board::from_placement("8/8/8/8/3N4/8/8/8").unwrap();
        let origin = origin_at(&board, "d4");
        assert_eq!(leaps(&origin, &Offset::KNIGHT, MovePolicy::LEAP).len(), 8);

        let corner = Board::from_placement("8/8/8/8/8/8/8/N7").unwrap();
        let origin = origin_at(&corner, "a1");
        assert_eq!(targets(&leaps(&origin, &Offset::KNIGHT, MovePolicy::LEAP)), ["c2", "b3"]);
    }

    #[test]
    fn pattern_matches_builder() {
        let board = Board::from_placement("8/8/8/8/4R3/8/8/8").unwrap();
        let origin = origin_at(&board, "e4");
        let pattern = MovePattern::slide(Direction::Left, MovePolicy::SLIDE);
        assert_eq!(pattern.generate(&origin), slide_left(&origin, MovePolicy::SLIDE));
        assert_eq!(pattern.policy(), MovePolicy::SLIDE);
    }

    #[test]
    fn pattern_rank_condition() {
        let board = Board::from_placement("8/p7/8/8/8/8/4P3/8").unwrap();
        let double = MovePattern::relative(
            RelativeDirection::Forward,
            MovePolicy::PEACEFUL_ONLY,
            Limit::Steps(2),
        )
        .only_from(RankCondition::PawnRank);

        let white = origin_at(&board, "e2");
        assert_eq!(targets(&double.generate(&white)), ["e3", "e4"]);
        let black = origin_at(&board, "a7");
        assert_eq!(targets(&double.generate(&black)), ["a5", "a6"]);

        let moved = Board::from_placement("8/8/8/8/8/4P3/8/8").unwrap();
        let origin = origin_at(&moved, "e3");
        assert!(!double.applies_to(&origin));
        assert!(double.generate(&origin).is_empty());
    }

    #[test]
    fn home_rank_condition() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/4K3").unwrap();
        let pattern = MovePattern::step(Direction::Up, MovePolicy::SLIDE)
            .only_from(RankCondition::HomeRank);
        assert!(pattern.applies_to(&origin_at(&board, "e1")));
        assert!(pattern.applies_to(&origin_at(&board, "e8")));
    }

    #[test]
    fn leap_pattern_ignores_limit() {
        let board = Board::from_placement("8/8/8/8/8/8/8/N7").unwrap();
        let origin = origin_at(&board, "a1");
        let pattern = MovePattern {
            limit: Limit::Steps(0),
            ..MovePattern::leap(Offset::new(1, 2), MovePolicy::LEAP)
        };
        let moves = pattern.generate(&origin);
        assert_eq!(moves.len(), 1);
        let b3 = Position::new(1, 2, Bounds::STANDARD).unwrap();
        assert!(moves.iter().all(|m| m.to == b3));
    }
}
