//! Rule sets loaded from configuration.
//!
//! A rule book lists the patterns of each piece kind in TOML:
//!
//! ```toml
//! [[pieces.rook]]
//! path = { line = "left" }
//! attack = true
//! peaceful = true
//!
//! [[pieces.knight]]
//! path = { leap = { file = 1, rank = 2 } }
//! attack = true
//! jump = true
//! peaceful = true
//!
//! [[pieces.pawn]]
//! path = { line = "forward" }
//! limit = 2
//! peaceful = true
//! only_from = "pawn_rank"
//! ```
//!
//! Omitting `limit` on a line makes it unbounded. Piece kinds without an
//! entry do not move.

use std::collections::HashMap;
use std::path::Path as FsPath;

use chess_core::PieceKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::{RuleSet, StandardChess};
use crate::movegen::{MovePattern, Path};

/// Errors that can occur when loading a rule book.
#[derive(Error, Debug)]
pub enum RuleBookError {
    /// Failed to read the rule book from disk.
    #[error("failed to read rule book: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not a valid rule book.
    #[error("failed to parse rule book: {0}")]
    Parse(#[from] toml::de::Error),
    /// A piece kind is listed with no patterns.
    #[error("no patterns listed for {0}")]
    EmptyPatternList(PieceKind),
    /// A leap that would land on its own origin.
    #[error("{0} has a leap with a zero offset")]
    NullLeap(PieceKind),
}

/// A configurable [`RuleSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    #[serde(default)]
    pieces: HashMap<PieceKind, Vec<MovePattern>>,
}

impl RuleBook {
    /// Creates a rule book in which no piece moves.
    pub fn new() -> Self {
        Self::default()
    }

    /// The [`StandardChess`] tables as a rule book.
    pub fn standard() -> Self {
        let pieces = PieceKind::ALL
            .into_iter()
            .map(|kind| (kind, StandardChess.patterns(kind).to_vec()))
            .collect();
        RuleBook { pieces }
    }

    /// Parses a rule book from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`RuleBookError::Parse`] for malformed TOML, and
    /// [`RuleBookError::EmptyPatternList`] or [`RuleBookError::NullLeap`]
    /// for rule books that parse but cannot describe a movement.
    pub fn from_toml_str(content: &str) -> Result<Self, RuleBookError> {
        let book: RuleBook = toml::from_str(content)?;
        book.validate()?;
        for kind in PieceKind::ALL {
            if !book.pieces.contains_key(&kind) {
                warn!(piece = %kind, "rule book has no patterns; piece cannot move");
            }
        }
        Ok(book)
    }

    /// Loads a rule book from a TOML file.
    pub fn load(path: impl AsRef<FsPath>) -> Result<Self, RuleBookError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let book = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            kinds = book.pieces.len(),
            "loaded rule book"
        );
        Ok(book)
    }

    /// Serializes the rule book to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Replaces the patterns of `kind`.
    pub fn set(&mut self, kind: PieceKind, patterns: Vec<MovePattern>) {
        self.pieces.insert(kind, patterns);
    }

    fn validate(&self) -> Result<(), RuleBookError> {
        for (&kind, patterns) in &self.pieces {
            if patterns.is_empty() {
                return Err(RuleBookError::EmptyPatternList(kind));
            }
            let null_leap = patterns
                .iter()
                .any(|p| matches!(p.path, Path::Leap(offset) if offset.is_null()));
            if null_leap {
                return Err(RuleBookError::NullLeap(kind));
            }
        }
        Ok(())
    }
}

impl RuleSet for RuleBook {
    fn patterns(&self, kind: PieceKind) -> &[MovePattern] {
        self.pieces.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }
}
