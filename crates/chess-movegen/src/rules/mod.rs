//! Piece rules.
//!
//! A [`RuleSet`] maps each [`PieceKind`] to the [`MovePattern`]s that make
//! up its movement; a piece's candidate moves are the union of its patterns.
//! [`StandardChess`] is the built-in table, [`RuleBook`] a configurable one
//! loaded from TOML.
//!
//! Moves produced here are pseudo-legal: nothing checks whose turn it is or
//! whether a king is left in check, and castling, en passant and promotion
//! are left to higher layers.

mod book;
mod standard;

pub use book::{RuleBook, RuleBookError};
pub use standard::StandardChess;

use chess_core::{Color, PieceKind};
use tracing::debug;

use crate::movegen::{MovePattern, MoveSet};
use crate::{BoardView, Origin};

/// Movement rules for every kind of piece.
///
/// # Example
///
/// ```
/// use chess_movegen::{Board, RuleSet, StandardChess};
/// use chess_core::Color;
///
/// let board = Board::startpos();
/// let moves = StandardChess.color_moves(&board, Color::White);
/// assert_eq!(moves.len(), 20);
/// ```
pub trait RuleSet {
    /// The patterns that make up the movement of `kind`.
    fn patterns(&self, kind: PieceKind) -> &[MovePattern];

    /// Candidate moves of the piece standing on `origin`.
    fn piece_moves<B: BoardView + ?Sized>(&self, origin: &Origin<'_, B>) -> MoveSet {
        let piece = origin.piece();
        let mut moves = MoveSet::new();
        for pattern in self.patterns(piece.kind) {
            moves.merge(pattern.generate(origin));
        }
        debug!(
            origin = %origin.position(),
            piece = %piece,
            moves = moves.len(),
            "generated piece moves"
        );
        moves
    }

    /// Candidate moves of every piece of `color`.
    fn color_moves<B: BoardView>(&self, board: &B, color: Color) -> MoveSet {
        let mut moves = MoveSet::new();
        for origin in board.origins_of(color) {
            moves.merge(self.piece_moves(&origin));
        }
        moves
    }
}
