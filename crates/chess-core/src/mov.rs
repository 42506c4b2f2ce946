//! Move representation.

use crate::{Piece, PieceKind, Position};
use std::fmt;

/// Flags for special move types.
///
/// Directional generation always produces [`MoveFlag::Normal`]; the other
/// flags are set by rule layers that post-process generated moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum MoveFlag {
    /// Normal move (no special action).
    #[default]
    Normal = 0,
    /// Pawn double push from starting rank.
    DoublePush = 1,
    /// Kingside castling (O-O).
    CastleKingside = 2,
    /// Queenside castling (O-O-O).
    CastleQueenside = 3,
    /// En passant capture.
    EnPassant = 4,
    /// Pawn promotion; the piece is in [`Move::promotion`].
    Promotion = 5,
}

impl MoveFlag {
    /// Returns true if this is a castling move.
    #[inline]
    pub const fn is_castling(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }

    /// Returns true for anything but a normal move.
    #[inline]
    pub const fn is_special(self) -> bool {
        !matches!(self, MoveFlag::Normal)
    }
}

/// A candidate move.
///
/// `auxiliary` names a second square touched by special moves (the rook of a
/// castle, the pawn taken en passant).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub flag: MoveFlag,
    pub auxiliary: Option<Position>,
}

impl Move {
    /// Creates a move to an empty square.
    #[inline]
    pub const fn quiet(from: Position, to: Position, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            flag: MoveFlag::Normal,
            auxiliary: None,
        }
    }

    /// Creates a move that takes `captured` on the destination square.
    #[inline]
    pub const fn capture(from: Position, to: Position, piece: Piece, captured: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: Some(captured),
            promotion: None,
            flag: MoveFlag::Normal,
            auxiliary: None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns the UCI notation for this move (e.g., "e2e4", "e7e8q").
    pub fn to_uci(&self) -> String {
        match self.promotion {
            Some(kind) => format!("{}{}{}", self.from, self.to, kind.letter()),
            None => format!("{}{}", self.from, self.to),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}", self.to_uci())?;
        if let Some(captured) = self.captured {
            write!(f, "x{}", captured.to_fen_char())?;
        }
        if self.flag.is_special() {
            write!(f, " {:?}", self.flag)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uci())
    }
}
