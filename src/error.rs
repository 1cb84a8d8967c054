//! Defines [`WktError`], representing all errors returned by this crate.

use std::fmt::Debug;

use thiserror::Error;

/// The category of a [`ParseError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input was empty or contained only whitespace.
    ///
    /// This is distinct from the `EMPTY` keyword, which is valid input.
    #[error("empty input")]
    EmptyInput,

    /// The leading keyword is not one of the seven geometry keywords.
    #[error("unknown geometry type")]
    UnknownGeometryType,

    /// A numeric token does not match `["-"] digit+ ["." digit+] [("e" | "E") ["+" | "-"] digit+]`,
    /// or overflows `f64`.
    #[error("malformed number")]
    MalformedNumber,

    /// A `(` was never closed, or a `)` has no matching `(`.
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    /// The input ended before the geometry was complete.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// A token appeared where the grammar does not allow it.
    #[error("unexpected token")]
    UnexpectedToken,

    /// Parentheses are nested deeper than
    /// [`WktReaderOptions::max_depth`](crate::reader::WktReaderOptions::max_depth).
    #[error("nesting too deep")]
    NestingTooDeep,
}

/// A failure to parse WKT text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at byte {offset}: {fragment:?}")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// Byte offset into the input where the offending text starts.
    pub offset: usize,
    /// The offending text.
    pub fragment: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, offset: usize, fragment: impl Into<String>) -> Self {
        Self {
            kind,
            offset,
            fragment: fragment.into(),
        }
    }
}

/// A geometry value that cannot be represented as WKT.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WriteError {
    /// A polygon has interior rings but no exterior ring.
    #[error("polygon has {0} interior ring(s) but no exterior ring")]
    MissingExterior(usize),

    /// A ring of a non-empty polygon has no coordinates.
    #[error("polygon ring has no coordinates")]
    EmptyRing,

    /// A coordinate is NaN or infinite.
    #[error("coordinate ({0}, {1}) is not finite")]
    NonFiniteCoordinate(f64, f64),

    /// Coordinates carry dimensions other than x and y.
    #[error("unsupported coordinate dimension: {0:?}")]
    UnsupportedDimension(geo_traits::Dimensions),

    /// [std::fmt::Error] from the output sink
    #[error(transparent)]
    Fmt(#[from] std::fmt::Error),
}

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum WktError {
    /// [ParseError]
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// [WriteError]
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Incorrect geometry type for operation
    #[error("Incorrect geometry type for operation: {0}")]
    IncorrectGeometryType(String),
}

/// Result type of the reader.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type of the writer.
pub type WriteResult<T> = std::result::Result<T, WriteError>;

/// Crate-specific result type.
pub type WktResult<T> = std::result::Result<T, WktError>;
