use std::fmt::Write;

use geo_traits::{CoordTrait, PointTrait};

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::coord::write_coord;
use crate::writer::{write_tag, WktWriterOptions};

/// Write a Point geometry to a Writer encoded as WKT
pub fn write_point_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl PointTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::Point)?;
    write_point_body(writer, geom, options)
}

/// `(x y)` or `EMPTY`. A point with both components NaN is treated as empty.
pub(crate) fn write_point_body<W: Write>(
    writer: &mut W,
    geom: &impl PointTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    match geom.coord() {
        Some(coord) if !(coord.x().is_nan() && coord.y().is_nan()) => {
            writer.write_char('(')?;
            write_coord(writer, &coord, options)?;
            writer.write_char(')')?;
        }
        _ => writer.write_str(EMPTY)?,
    }
    Ok(())
}
