//! This module defines general error types used throughout the crate.

use thiserror::Error;

/// Error type for converting integers to (C like) enums using TryFrom
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TryFromIntToEnumError {
    /// attempted to convert integer into enum value, but integer was out of bounds
    #[error("attempted to convert integer into enum value, but integer was out of bounds")]
    OutOfBounds,
}

/// Error type for move tokens that do not belong to the notation grammar.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    /// A token that is not a face, wide, slice or rotation move.
    #[error("unrecognized move token `{0}`")]
    UnrecognizedToken(String),
}

/// Error type for user piece placements that cannot be searched or matched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    /// Fewer pieces were assigned than the operation requires.
    #[error("only {assigned} of {required} pieces are assigned")]
    Incomplete {
        /// How many pieces the caller has assigned so far.
        assigned: usize,
        /// How many the operation needs before it can run.
        required: usize,
    },
    /// Two tracked pieces were assigned to the same location.
    #[error("two pieces are assigned to the same edge slot")]
    PositionCollision,
}

/// Error type for case patterns that do not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The encoded pattern string has the wrong number of characters.
    #[error("pattern has {got} characters, expected {expected}")]
    BadLength {
        /// Length of the offending encoding.
        got: usize,
        /// Length the pattern kind requires.
        expected: usize,
    },
    /// A bitmap pattern contained something other than '0' or '1'.
    #[error("bitmap pattern contains `{0}`, expected '0' or '1'")]
    BadBit(char),
}

/// Error type for loading and validating a case table.
#[derive(Debug, Error)]
pub enum CaseTableError {
    /// The table was not valid JSON for the expected record shape.
    #[error("malformed case table: {0}")]
    Json(#[from] serde_json::Error),
    /// A record carried a pattern encoding with the wrong shape.
    #[error("case `{id}`: {source}")]
    Pattern {
        /// Identifier of the offending record.
        id: String,
        /// What was wrong with its pattern.
        source: PatternError,
    },
    /// A record carried a solution that does not parse as move notation.
    #[error("case `{id}`: {source}")]
    Notation {
        /// Identifier of the offending record.
        id: String,
        /// The offending token.
        source: NotationError,
    },
    /// A record carried an orientation outside the piece's range.
    #[error("case `{id}`: orientation out of range")]
    Orientation {
        /// Identifier of the offending record.
        id: String,
    },
}
