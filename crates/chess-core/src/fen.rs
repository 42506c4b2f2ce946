//! FEN (Forsyth-Edwards Notation) parsing.
//!
//! Piece placement is accepted for any rectangular board up to 26 files:
//! rank lengths are inferred from the first rank, and runs of empty squares
//! may use more than one digit (`"10"`).

use thiserror::Error;

use crate::{Bounds, Color, Piece, Position};

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("invalid active color: expected 'w' or 'b', got '{0}'")]
    InvalidActiveColor(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square: {0}")]
    InvalidEnPassantSquare(String),

    #[error("invalid halfmove clock: {0}")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number: {0}")]
    InvalidFullmoveNumber(String),
}

/// The piece-placement field of a FEN string, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board dimensions implied by the placement.
    pub bounds: Bounds,
    /// Every occupied position with its piece, in FEN reading order.
    pub pieces: Vec<(Position, Piece)>,
}

impl Placement {
    /// Parses a placement field such as `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    pub fn parse(placement: &str) -> Result<Self, FenError> {
        let rows: Vec<&str> = placement.split('/').collect();
        let rank_count = u8::try_from(rows.len())
            .map_err(|_| FenError::InvalidPiecePlacement(format!("too many ranks: {}", rows.len())))?;

        let mut decoded = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let rank_name = rows.len() - i;
            decoded.push(Self::parse_row(row, rank_name)?);
        }

        let files = decoded.first().map(Vec::len).unwrap_or(0);
        let bounds = u8::try_from(files)
            .ok()
            .and_then(|files| Bounds::new(files, rank_count))
            .ok_or_else(|| {
                FenError::InvalidPiecePlacement(format!(
                    "unsupported board size {}x{}",
                    files, rank_count
                ))
            })?;

        let mut pieces = Vec::new();
        for (i, row) in decoded.into_iter().enumerate() {
            let rank_name = rows.len() - i;
            if row.len() != files {
                return Err(FenError::InvalidPiecePlacement(format!(
                    "rank {} has {} squares, expected {}",
                    rank_name,
                    row.len(),
                    files
                )));
            }
            let rank = (rank_name - 1) as u8;
            for (file, cell) in row.into_iter().enumerate() {
                if let Some(piece) = cell {
                    if let Some(pos) = Position::new(file as u8, rank, bounds) {
                        pieces.push((pos, piece));
                    }
                }
            }
        }

        Ok(Placement { bounds, pieces })
    }

    fn parse_row(row: &str, rank_name: usize) -> Result<Vec<Option<Piece>>, FenError> {
        let mut cells = Vec::new();
        let mut run = 0usize;
        for c in row.chars() {
            if let Some(digit) = c.to_digit(10) {
                run = run * 10 + digit as usize;
                if run > Bounds::MAX_FILES as usize {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "empty run too long in rank {}",
                        rank_name
                    )));
                }
                continue;
            }
            cells.extend(std::iter::repeat(None).take(run));
            run = 0;
            match Piece::from_fen_char(c) {
                Some(piece) => cells.push(Some(piece)),
                None => {
                    return Err(FenError::InvalidPiecePlacement(format!(
                        "invalid character '{}' in rank {}",
                        c, rank_name
                    )))
                }
            }
        }
        cells.extend(std::iter::repeat(None).take(run));
        Ok(cells)
    }
}

/// Parsed FEN data.
///
/// Only the placement and the side to move are kept. Castling rights, the
/// en passant target and both clocks are checked for well-formedness and
/// then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenParser {
    pub placement: Placement,
    pub active_color: Color,
}

impl FenParser {
    /// The standard starting position FEN.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Parses a FEN string.
    pub fn parse(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::InvalidPartCount(parts.len()));
        }

        let placement = Placement::parse(parts[0])?;

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::InvalidActiveColor(other.to_string())),
        };

        Self::validate_castling(parts[2])?;
        Self::validate_en_passant(parts[3], placement.bounds)?;

        parts[4]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidHalfmoveClock(parts[4].to_string()))?;
        parts[5]
            .parse::<u32>()
            .map_err(|_| FenError::InvalidFullmoveNumber(parts[5].to_string()))?;

        Ok(FenParser {
            placement,
            active_color,
        })
    }

    fn validate_castling(castling: &str) -> Result<(), FenError> {
        if castling == "-" {
            return Ok(());
        }

        for c in castling.chars() {
            if !"KQkq".contains(c) {
                return Err(FenError::InvalidCastlingRights(format!(
                    "invalid character '{}'",
                    c
                )));
            }
        }

        Ok(())
    }

    fn validate_en_passant(ep: &str, bounds: Bounds) -> Result<(), FenError> {
        if ep == "-" {
            return Ok(());
        }
        let target = Position::from_algebraic(ep, bounds)
            .ok_or_else(|| FenError::InvalidEnPassantSquare(ep.to_string()))?;
        // The target lies directly behind a pawn that just double-pushed.
        let white_target = Color::White.pawn_rank(bounds) + 1;
        let black_target = Color::Black.pawn_rank(bounds).wrapping_sub(1);
        if target.rank() != white_target && target.rank() != black_target {
            return Err(FenError::InvalidEnPassantSquare(ep.to_string()));
        }
        Ok(())
    }
}
