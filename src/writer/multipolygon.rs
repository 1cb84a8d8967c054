use std::fmt::Write;

use geo_traits::MultiPolygonTrait;

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::polygon::write_polygon_body;
use crate::writer::{write_delimited, write_tag, WktWriterOptions};

/// Write a MultiPolygon geometry to a Writer encoded as WKT
pub fn write_multi_polygon_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl MultiPolygonTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::MultiPolygon)?;
    if geom.num_polygons() == 0 {
        writer.write_str(EMPTY)?;
        return Ok(());
    }
    write_delimited(writer, geom.polygons(), |writer, polygon| {
        write_polygon_body(writer, &polygon, options)
    })
}
