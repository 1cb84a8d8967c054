//! Write any [`geo_traits`] geometry as canonical WKT.
//!
//! Output is always the keyword, a single space, then either `EMPTY` or a fully parenthesized
//! body. Coordinates are written as `x y` and list elements are separated by `", "`.

mod coord;
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::fmt::Write;

use geo_traits::GeometryTrait;

use crate::common::WktType;
use crate::error::WriteResult;

pub use geometry::write_geometry_as_wkt;
pub use geometrycollection::write_geometry_collection_as_wkt;
pub use linestring::write_line_string_as_wkt;
pub use multilinestring::write_multi_line_string_as_wkt;
pub use multipoint::write_multi_point_as_wkt;
pub use multipolygon::write_multi_polygon_as_wkt;
pub use point::write_point_as_wkt;
pub use polygon::write_polygon_as_wkt;

/// Options for writing WKT.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WktWriterOptions {
    /// Round coordinates to this many decimal places, dropping trailing zeros.
    ///
    /// `None` (the default) writes the shortest decimal that reads back to the identical `f64`,
    /// so no precision is lost. Values above 1074, where every `f64` is already exact, behave
    /// like 1074. Beyond about 17 places the output shows the exact binary value rather than the
    /// shortest decimal. A coordinate that rounds to zero is written as `0`, never `-0`.
    pub precision: Option<usize>,
}

/// Write a geometry to a WKT string with default options.
///
/// ```
/// use geowkt::geometry::{LineString, Polygon};
///
/// let exterior = LineString::from(vec![(30., 10.), (10., 30.), (40., 40.), (30., 10.)]);
/// let polygon = Polygon::new(exterior, vec![]);
/// assert_eq!(
///     geowkt::to_wkt(&polygon).unwrap(),
///     "POLYGON ((30 10, 10 30, 40 40, 30 10))"
/// );
/// ```
pub fn to_wkt(geom: &impl GeometryTrait<T = f64>) -> WriteResult<String> {
    to_wkt_with_options(geom, &WktWriterOptions::default())
}

/// Write a geometry to a WKT string.
pub fn to_wkt_with_options(
    geom: &impl GeometryTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<String> {
    tracing::trace!("writing WKT");
    let mut out = String::new();
    write_geometry_as_wkt(&mut out, geom, options)
        .inspect_err(|err| tracing::debug!(error = %err, "failed to write WKT"))?;
    Ok(out)
}

/// Write `KEYWORD `, the prefix shared by every geometry.
fn write_tag<W: Write>(writer: &mut W, geometry_type: WktType) -> WriteResult<()> {
    writer.write_str(geometry_type.as_str())?;
    writer.write_char(' ')?;
    Ok(())
}

/// Write `(item, item, ...)`.
fn write_delimited<W: Write, I: IntoIterator>(
    writer: &mut W,
    items: I,
    mut write_item: impl FnMut(&mut W, I::Item) -> WriteResult<()>,
) -> WriteResult<()> {
    writer.write_char('(')?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            writer.write_str(", ")?;
        }
        write_item(writer, item)?;
    }
    writer.write_char(')')?;
    Ok(())
}
