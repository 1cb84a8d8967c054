use std::fmt::Write;

use geo_traits::{LineStringTrait, PolygonTrait};

use crate::common::{WktType, EMPTY};
use crate::error::{WriteError, WriteResult};
use crate::writer::linestring::write_coords;
use crate::writer::{write_tag, WktWriterOptions};

/// Write a Polygon geometry to a Writer encoded as WKT
pub fn write_polygon_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl PolygonTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::Polygon)?;
    write_polygon_body(writer, geom, options)
}

/// `((exterior), (interior), ...)` or `EMPTY`
pub(crate) fn write_polygon_body<W: Write>(
    writer: &mut W,
    geom: &impl PolygonTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    let num_interiors = geom.num_interiors();
    let exterior = match geom.exterior() {
        Some(exterior) if exterior.num_coords() > 0 => exterior,
        _ if num_interiors > 0 => return Err(WriteError::MissingExterior(num_interiors)),
        _ => {
            writer.write_str(EMPTY)?;
            return Ok(());
        }
    };

    writer.write_char('(')?;
    write_coords(writer, &exterior, options)?;
    for interior in geom.interiors() {
        if interior.num_coords() == 0 {
            return Err(WriteError::EmptyRing);
        }
        writer.write_str(", ")?;
        write_coords(writer, &interior, options)?;
    }
    writer.write_char(')')?;
    Ok(())
}
