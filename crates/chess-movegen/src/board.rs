//! Board snapshots and the read-only view used by move generation.
//!
//! Generation never owns or mutates a board. It reads through
//! [`BoardView`], and every generation call starts from an [`Origin`], which
//! holds a shared borrow of the board together with a square that is known
//! to carry a piece. While any `Origin` is alive the board cannot be mutated.

use std::fmt;

use chess_core::{Bounds, Color, FenError, FenParser, Piece, Placement, Position};
use thiserror::Error;

/// Errors raised when building boards or origins.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("no piece on origin square {0}")]
    EmptyOrigin(Position),

    #[error("position {position} lies outside a {bounds} board")]
    OutOfBounds { position: Position, bounds: Bounds },

    #[error(transparent)]
    Fen(#[from] FenError),
}

/// Read access to a board snapshot.
pub trait BoardView {
    /// Dimensions of the board.
    fn bounds(&self) -> Bounds;

    /// Returns the piece on `position`, if any.
    ///
    /// Only called with positions inside [`bounds`](BoardView::bounds).
    fn piece_at(&self, position: Position) -> Option<Piece>;

    /// Returns an origin for `position`, or `None` if the square is empty.
    fn origin(&self, position: Position) -> Option<Origin<'_, Self>>
    where
        Self: Sized,
    {
        Origin::new(self, position).ok()
    }

    /// Iterates over the origins of every piece of `color`.
    fn origins_of(&self, color: Color) -> Vec<Origin<'_, Self>>
    where
        Self: Sized,
    {
        self.bounds()
            .positions()
            .filter_map(|position| self.origin(position))
            .filter(|origin| origin.color() == color)
            .collect()
    }
}

impl<T: BoardView + ?Sized> BoardView for &T {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn piece_at(&self, position: Position) -> Option<Piece> {
        (**self).piece_at(position)
    }
}

/// A piece-bearing square on a borrowed board: the starting point of every
/// generation call.
pub struct Origin<'b, B: ?Sized> {
    board: &'b B,
    position: Position,
    piece: Piece,
}

impl<'b, B: BoardView + ?Sized> Origin<'b, B> {
    /// Binds `position` on `board`.
    ///
    /// Fails with [`BoardError::EmptyOrigin`] when no piece stands there.
    pub fn new(board: &'b B, position: Position) -> Result<Self, BoardError> {
        let bounds = board.bounds();
        if position.file() >= bounds.files() || position.rank() >= bounds.ranks() {
            return Err(BoardError::OutOfBounds { position, bounds });
        }
        let piece = board
            .piece_at(position)
            .ok_or(BoardError::EmptyOrigin(position))?;
        Ok(Origin {
            board,
            position,
            piece,
        })
    }

    #[inline]
    pub fn board(&self) -> &'b B {
        self.board
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.board.bounds()
    }
}

impl<B: ?Sized> Origin<'_, B> {
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The moving piece.
    #[inline]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.piece.color
    }
}

impl<B: ?Sized> Clone for Origin<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: ?Sized> Copy for Origin<'_, B> {}

impl<B: ?Sized> fmt::Debug for Origin<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Origin")
            .field("position", &self.position)
            .field("piece", &self.piece)
            .finish()
    }
}

/// An owned board snapshot, stored row-major from the first rank.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    bounds: Bounds,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Creates an empty board.
    pub fn empty(bounds: Bounds) -> Self {
        Board {
            bounds,
            cells: vec![None; bounds.area()],
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        let fen = FenParser::parse(FenParser::STARTPOS).expect("STARTPOS is a valid FEN");
        Self::from_decoded(&fen.placement)
    }

    /// Creates a board from a full FEN string; only the placement is kept.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parsed = FenParser::parse(fen)?;
        Ok(Self::from_decoded(&parsed.placement))
    }

    /// Creates a board from a FEN piece-placement field alone.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let parsed = Placement::parse(placement)?;
        Ok(Self::from_decoded(&parsed))
    }

    fn from_decoded(placement: &Placement) -> Self {
        let mut board = Board::empty(placement.bounds);
        board.place_all(placement);
        board
    }

    fn place_all(&mut self, placement: &Placement) {
        for &(position, piece) in &placement.pieces {
            let index = position.index(self.bounds);
            self.cells[index] = Some(piece);
        }
    }

    /// Parses algebraic notation against this board's bounds.
    pub fn locate(&self, algebraic: &str) -> Option<Position> {
        Position::from_algebraic(algebraic, self.bounds)
    }

    fn slot(&self, position: Position) -> Result<usize, BoardError> {
        if position.file() < self.bounds.files() && position.rank() < self.bounds.ranks() {
            Ok(position.index(self.bounds))
        } else {
            Err(BoardError::OutOfBounds {
                position,
                bounds: self.bounds,
            })
        }
    }

    /// Puts `piece` on `position`, returning whatever stood there.
    pub fn put(&mut self, position: Position, piece: Piece) -> Result<Option<Piece>, BoardError> {
        let index = self.slot(position)?;
        Ok(self.cells[index].replace(piece))
    }

    /// Removes and returns the piece on `position`.
    pub fn take(&mut self, position: Position) -> Result<Option<Piece>, BoardError> {
        let index = self.slot(position)?;
        Ok(self.cells[index].take())
    }

    /// Iterates over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.bounds
            .positions()
            .filter_map(move |position| self.piece_at(position).map(|piece| (position, piece)))
    }

    /// Renders the piece-placement field of a FEN string.
    pub fn to_placement(&self) -> String {
        let mut out = String::new();
        for rank in (0..self.bounds.ranks()).rev() {
            let mut empty = 0;
            for file in 0..self.bounds.files() {
                let piece = Position::new(file, rank, self.bounds).and_then(|p| self.piece_at(p));
                match piece {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }
        out
    }
}

impl BoardView for Board {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn piece_at(&self, position: Position) -> Option<Piece> {
        let index = self.slot(position).ok()?;
        self.cells[index]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.bounds.ranks()).rev() {
            write!(f, "{:>3} ", rank as u16 + 1)?;
            for file in 0..self.bounds.files() {
                let c = Position::new(file, rank, self.bounds)
                    .and_then(|p| self.piece_at(p))
                    .map_or('.', Piece::to_fen_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "    ")?;
        for file in 0..self.bounds.files() {
            write!(f, "{}", (b'a' + file) as char)?;
        }
        Ok(())
    }
}
