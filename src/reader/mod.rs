//! Parse WKT text into a [`Geometry`].

mod parser;
mod token;

use crate::error::ParseResult;
use crate::geometry::Geometry;

/// Options for parsing WKT.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WktReaderOptions {
    /// The maximum nesting depth of parentheses.
    ///
    /// A polygon inside a geometry collection is three levels deep. Input exceeding this limit
    /// fails with [`ParseErrorKind::NestingTooDeep`](crate::error::ParseErrorKind::NestingTooDeep)
    /// rather than recursing without bound.
    pub max_depth: usize,
}

impl Default for WktReaderOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Parse a WKT string into a [`Geometry`] with default options.
///
/// ```
/// use geowkt::geometry::{Geometry, Point};
///
/// let geometry = geowkt::read_wkt("POINT (12.5 7.25)").unwrap();
/// assert_eq!(geometry, Geometry::Point(Point::new(12.5, 7.25)));
/// ```
pub fn read_wkt(input: &str) -> ParseResult<Geometry> {
    read_wkt_with_options(input, &WktReaderOptions::default())
}

/// Parse a WKT string into a [`Geometry`].
pub fn read_wkt_with_options(input: &str, options: &WktReaderOptions) -> ParseResult<Geometry> {
    tracing::trace!(len = input.len(), "parsing WKT");
    parser::Parser::new(input, options)
        .parse()
        .inspect_err(|err| tracing::debug!(error = %err, "failed to parse WKT"))
}
