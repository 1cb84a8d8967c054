use std::fmt::Write;

use geo_traits::GeometryCollectionTrait;

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::geometry::write_geometry_as_wkt;
use crate::writer::{write_delimited, write_tag, WktWriterOptions};

/// Write a GeometryCollection geometry to a Writer encoded as WKT
///
/// Members are written with their own keyword, recursively.
pub fn write_geometry_collection_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl GeometryCollectionTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::GeometryCollection)?;
    if geom.num_geometries() == 0 {
        writer.write_str(EMPTY)?;
        return Ok(());
    }
    write_delimited(writer, geom.geometries(), |writer, geometry| {
        write_geometry_as_wkt(writer, &geometry, options)
    })
}
