//! The directional walker.
//!
//! [`concretise`] is the single walker behind every sliding and stepping
//! movement: it repeatedly steps from the origin in one [`Direction`] and
//! decides, square by square, whether to emit a move, keep going or stop.
//! [`concretise_offset`] is the leaping counterpart for fixed-offset pieces
//! such as the knight; it never looks at intervening squares.

use chess_core::{Direction, Move, Offset};
use serde::{Deserialize, Serialize};
use tracing::trace;

use super::MoveSet;
use crate::{BoardView, Origin};

/// What a movement may do when it reaches a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovePolicy {
    /// May move onto a square held by the opponent, capturing it.
    pub attack: bool,
    /// May pass over occupied squares.
    pub jump: bool,
    /// May move onto an empty square.
    pub peaceful: bool,
}

impl MovePolicy {
    /// Ordinary movement: captures and quiet moves, blocked by any piece.
    pub const SLIDE: MovePolicy = MovePolicy {
        attack: true,
        jump: false,
        peaceful: true,
    };

    /// Captures only (pawn diagonals).
    pub const CAPTURE_ONLY: MovePolicy = MovePolicy {
        attack: true,
        jump: false,
        peaceful: false,
    };

    /// Quiet moves only (pawn pushes).
    pub const PEACEFUL_ONLY: MovePolicy = MovePolicy {
        attack: false,
        jump: false,
        peaceful: true,
    };

    /// Leaping movement (knight).
    pub const LEAP: MovePolicy = MovePolicy {
        attack: true,
        jump: true,
        peaceful: true,
    };
}

/// How many squares a walk may cover.
///
/// Serialized as an optional integer: absent means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub enum Limit {
    #[default]
    Unbounded,
    Steps(u8),
}

impl Limit {
    pub const ONE: Limit = Limit::Steps(1);

    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Limit::Unbounded)
    }

    /// Returns true if another step may be taken after `taken` steps.
    #[inline]
    pub const fn allows(self, taken: u16) -> bool {
        match self {
            Limit::Unbounded => true,
            Limit::Steps(max) => taken < max as u16,
        }
    }
}

impl From<Option<u8>> for Limit {
    fn from(steps: Option<u8>) -> Self {
        steps.map_or(Limit::Unbounded, Limit::Steps)
    }
}

impl From<Limit> for Option<u8> {
    fn from(limit: Limit) -> Self {
        match limit {
            Limit::Unbounded => None,
            Limit::Steps(steps) => Some(steps),
        }
    }
}

/// Walks from `origin` in `direction` and collects the reachable moves.
///
/// At each square reached:
/// - an opponent's piece is captured if `policy.attack`; the walk then
///   continues only if `policy.jump`
/// - a friendly piece ends the walk unless `policy.jump`
/// - an empty square yields a quiet move if `policy.peaceful`, and the
///   walk continues
///
/// The walk ends at the board edge or after `limit` steps.
pub fn concretise<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    direction: Direction,
    policy: MovePolicy,
    limit: Limit,
) -> MoveSet {
    let board = origin.board();
    let bounds = board.bounds();
    let from = origin.position();
    let mover = origin.piece();

    let mut moves = MoveSet::new();
    let mut current = from;
    let mut steps: u16 = 0;

    while limit.allows(steps) {
        let Some(next) = current.step(direction, bounds) else {
            break;
        };
        current = next;
        steps += 1;

        match board.piece_at(current) {
            Some(occupant) if occupant.is_enemy_of(mover) => {
                if policy.attack {
                    moves.insert(Move::capture(from, current, mover, occupant));
                }
                if !policy.jump {
                    break;
                }
            }
            Some(_) => {
                if !policy.jump {
                    break;
                }
            }
            None => {
                if policy.peaceful {
                    moves.insert(Move::quiet(from, current, mover));
                }
            }
        }
    }

    trace!(
        origin = %from,
        ?direction,
        steps,
        moves = moves.len(),
        "walk finished"
    );
    moves
}

/// Leaps from `origin` by a fixed `offset`.
///
/// Intervening squares are never inspected. The destination yields a
/// capture if it holds an opponent's piece and `policy.attack`, or a quiet
/// move if it is empty and `policy.peaceful`.
pub fn concretise_offset<B: BoardView + ?Sized>(
    origin: &Origin<'_, B>,
    offset: Offset,
    policy: MovePolicy,
) -> MoveSet {
    let mut moves = MoveSet::new();
    if offset.is_null() {
        return moves;
    }

    let board = origin.board();
    let from = origin.position();
    let mover = origin.piece();

    if let Some(to) = from.offset(offset, board.bounds()) {
        match board.piece_at(to) {
            Some(occupant) if occupant.is_enemy_of(mover) && policy.attack => {
                moves.insert(Move::capture(from, to, mover, occupant));
            }
            None if policy.peaceful => {
                moves.insert(Move::quiet(from, to, mover));
            }
            _ => {}
        }
    }

    trace!(origin = %from, ?offset, moves = moves.len(), "leap finished");
    moves
}
