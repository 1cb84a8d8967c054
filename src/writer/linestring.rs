use std::fmt::Write;

use geo_traits::LineStringTrait;

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::coord::write_coord;
use crate::writer::{write_delimited, write_tag, WktWriterOptions};

/// Write a LineString geometry to a Writer encoded as WKT
pub fn write_line_string_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl LineStringTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::LineString)?;
    write_line_string_body(writer, geom, options)
}

/// `(x y, x y, ...)` or `EMPTY`
pub(crate) fn write_line_string_body<W: Write>(
    writer: &mut W,
    geom: &impl LineStringTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    if geom.num_coords() == 0 {
        writer.write_str(EMPTY)?;
        return Ok(());
    }
    write_coords(writer, geom, options)
}

/// `(x y, x y, ...)`, even if there are no coordinates.
pub(crate) fn write_coords<W: Write>(
    writer: &mut W,
    geom: &impl LineStringTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_delimited(writer, geom.coords(), |writer, coord| {
        write_coord(writer, &coord, options)
    })
}
