//! Directional move generation on an immutable board snapshot.
//!
//! This crate provides:
//! - [`Board`] - an array-backed snapshot, readable through [`BoardView`]
//! - [`Origin`] - a borrowed board square known to hold a piece
//! - [`concretise`] and [`concretise_offset`] - the walkers every movement
//!   reduces to
//! - Composite builders ([`slide`], [`one_step_backward`], [`leap`], ...) and
//!   their data form, [`MovePattern`]
//! - [`RuleSet`] - per-piece movement, with [`StandardChess`] built in and
//!   [`RuleBook`] loaded from TOML
//!
//! # Architecture
//!
//! A piece's movement is a union of patterns. Each pattern fixes a heading
//! (absolute, or relative to the piece's color) and a step limit, and hands
//! a [`MovePolicy`] to the walker. The walker steps square by square through
//! the board view and decides, from occupancy and policy, whether to emit a
//! move and whether to keep going.
//!
//! Generation only ever holds shared borrows of the board, so a snapshot can
//! be queried from several threads at once and cannot change underneath a
//! walk.
//!
//! # Example
//!
//! ```
//! use chess_movegen::{slide_left, Board, BoardView, MovePolicy};
//!
//! let board = Board::from_placement("8/8/8/8/1p2R3/8/8/8").unwrap();
//! let origin = board.origin(board.locate("e4").unwrap()).unwrap();
//! let moves = slide_left(&origin, MovePolicy::SLIDE);
//! assert_eq!(moves.len(), 3);
//! assert_eq!(moves.captures().count(), 1);
//! ```

mod board;
pub mod movegen;
pub mod rules;

pub use board::{Board, BoardError, BoardView, Origin};
pub use movegen::{
    backward, backward_limited, concretise, concretise_offset, forward, forward_limited, leap,
    leaps, one_step, one_step_backward, one_step_forward, slide, slide_down, slide_left,
    slide_right, slide_up, slides, walk, Limit, MovePattern, MovePolicy, MoveSet, Path,
    RankCondition,
};
pub use rules::{RuleBook, RuleBookError, RuleSet, StandardChess};
