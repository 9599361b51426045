//! Error types for game path classification.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while building a grammar.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern source failed to compile.
    #[error("invalid game path pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// An equality constraint names a group the pattern does not define.
    #[error("pattern {pattern:?} has no capture group named {group:?}")]
    UnknownGroup { pattern: String, group: &'static str },
}

/// Result type for grammar construction.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding the fields of a matched path.
///
/// These never reach callers of [`crate::PathParser::classify`]; they are
/// logged and the descriptor degrades to its file/object type.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A capture the decoder needs was not part of the match.
    #[error("missing capture group {0:?}")]
    MissingCapture(&'static str),

    /// A numeric capture does not fit its declared width.
    #[error("capture {field:?} = {value:?} is not a valid {width}: {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        width: &'static str,
        #[source]
        source: ParseIntError,
    },

    /// A code table has no entry for a captured value.
    #[error("{0}")]
    Common(#[from] xivpath_common::Error),

    /// A map id capture is not exactly four bytes.
    #[error("map id {0:?} is not four ASCII characters")]
    InvalidMapId(String),
}

/// Result type for field decoding.
pub type DecodeResult<T> = std::result::Result<T, DecodeError>;
