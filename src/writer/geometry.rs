use std::fmt::Write;

use geo_traits::{GeometryTrait, GeometryType, LineTrait, RectTrait, TriangleTrait};

use crate::error::WriteResult;
use crate::geometry::{LineString, Polygon};
use crate::writer::coord::{check_dim, to_coord};
use crate::writer::{
    write_geometry_collection_as_wkt, write_line_string_as_wkt, write_multi_line_string_as_wkt,
    write_multi_point_as_wkt, write_multi_polygon_as_wkt, write_point_as_wkt,
    write_polygon_as_wkt, WktWriterOptions,
};

/// Write any geometry to a Writer encoded as WKT.
///
/// Rects and triangles are written as `POLYGON`s with a closed exterior ring, and lines as a
/// two-coordinate `LINESTRING`.
///
/// On error, `writer` may already hold part of the output.
pub fn write_geometry_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl GeometryTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    match geom.as_type() {
        GeometryType::Point(g) => write_point_as_wkt(writer, g, options),
        GeometryType::LineString(g) => write_line_string_as_wkt(writer, g, options),
        GeometryType::Polygon(g) => write_polygon_as_wkt(writer, g, options),
        GeometryType::MultiPoint(g) => write_multi_point_as_wkt(writer, g, options),
        GeometryType::MultiLineString(g) => write_multi_line_string_as_wkt(writer, g, options),
        GeometryType::MultiPolygon(g) => write_multi_polygon_as_wkt(writer, g, options),
        GeometryType::GeometryCollection(g) => {
            write_geometry_collection_as_wkt(writer, g, options)
        }
        GeometryType::Rect(g) => write_rect_as_wkt(writer, g, options),
        GeometryType::Triangle(g) => write_triangle_as_wkt(writer, g, options),
        GeometryType::Line(g) => write_line_as_wkt(writer, g, options),
    }
}

fn write_rect_as_wkt<W: Write>(
    writer: &mut W,
    rect: &impl RectTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    check_dim(rect.dim())?;
    let min = to_coord(&rect.min())?;
    let max = to_coord(&rect.max())?;
    let exterior = LineString::from(vec![
        (max.x, min.y),
        (max.x, max.y),
        (min.x, max.y),
        (min.x, min.y),
        (max.x, min.y),
    ]);
    write_polygon_as_wkt(writer, &Polygon::new(exterior, vec![]), options)
}

fn write_triangle_as_wkt<W: Write>(
    writer: &mut W,
    triangle: &impl TriangleTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    check_dim(triangle.dim())?;
    let first = to_coord(&triangle.first())?;
    let exterior = LineString::new(vec![
        first,
        to_coord(&triangle.second())?,
        to_coord(&triangle.third())?,
        first,
    ]);
    write_polygon_as_wkt(writer, &Polygon::new(exterior, vec![]), options)
}

fn write_line_as_wkt<W: Write>(
    writer: &mut W,
    line: &impl LineTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    check_dim(line.dim())?;
    let line_string = LineString::new(vec![to_coord(&line.start())?, to_coord(&line.end())?]);
    write_line_string_as_wkt(writer, &line_string, options)
}
