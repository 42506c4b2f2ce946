//! Core types for directional move generation.
//!
//! This crate provides the value types shared by the generator and its
//! callers:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Bounds`] and [`Position`] for board geometry
//! - [`Direction`], [`RelativeDirection`] and [`Offset`] for movement vectors
//! - [`Move`] for move representation
//! - FEN parsing

mod color;
mod direction;
mod fen;
mod mov;
mod piece;
mod position;

pub use color::Color;
pub use direction::{orient, Direction, Heading, Offset, RelativeDirection};
pub use fen::{FenError, FenParser, Placement};
pub use mov::{Move, MoveFlag};
pub use piece::{Piece, PieceKind};
pub use position::{Bounds, Position};
