use std::fmt::Write;

use geo_traits::MultiLineStringTrait;

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::linestring::write_line_string_body;
use crate::writer::{write_delimited, write_tag, WktWriterOptions};

/// Write a MultiLineString geometry to a Writer encoded as WKT
pub fn write_multi_line_string_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl MultiLineStringTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::MultiLineString)?;
    if geom.num_line_strings() == 0 {
        writer.write_str(EMPTY)?;
        return Ok(());
    }
    write_delimited(writer, geom.line_strings(), |writer, line_string| {
        write_line_string_body(writer, &line_string, options)
    })
}
