//! Error types for decoding Wordfeud API payloads.
//!
//! # Design
//! A single `DecodeError` covers every way a payload can fail to become a
//! typed value. `Json` wraps serde's error for malformed text and shape
//! mismatches; the remaining variants are raised by this crate's own lookups
//! (ruleset codes, board names, tile rows), so callers can tell "the server
//! sent garbage" apart from "the server sent something we do not know yet".

use thiserror::Error;

/// Errors returned by `from_json` constructors and decoding accessors.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not valid JSON, or not an object of the expected shape.
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    /// A ruleset code with no entry in the ruleset table.
    #[error("unknown ruleset code {0}")]
    UnknownRuleSet(u8),

    /// A board type name other than `normal` or `random`.
    #[error("unknown board type {0:?}")]
    UnknownBoardType(String),

    /// A row of the move matrix that does not describe a tile.
    #[error("malformed tile in row {row}: {reason}")]
    MalformedTile { row: usize, reason: String },
}

impl DecodeError {
    pub(crate) fn malformed_tile(row: usize, reason: impl Into<String>) -> Self {
        DecodeError::MalformedTile {
            row,
            reason: reason.into(),
        }
    }
}
