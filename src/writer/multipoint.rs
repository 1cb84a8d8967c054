use std::fmt::Write;

use geo_traits::MultiPointTrait;

use crate::common::{WktType, EMPTY};
use crate::error::WriteResult;
use crate::writer::point::write_point_body;
use crate::writer::{write_delimited, write_tag, WktWriterOptions};

/// Write a MultiPoint geometry to a Writer encoded as WKT
///
/// Each member is parenthesized: `MULTIPOINT ((1 2), (3 4))`.
pub fn write_multi_point_as_wkt<W: Write>(
    writer: &mut W,
    geom: &impl MultiPointTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    write_tag(writer, WktType::MultiPoint)?;
    if geom.num_points() == 0 {
        writer.write_str(EMPTY)?;
        return Ok(());
    }
    write_delimited(writer, geom.points(), |writer, point| {
        write_point_body(writer, &point, options)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{MultiPoint, Point};

    #[test]
    fn write_multi_point() {
        let mp = MultiPoint::new(vec![
            Point::new(26., 31.),
            Point::new(25., 35.),
            Point::new(26., 36.),
        ]);
        let mut out = String::new();
        write_multi_point_as_wkt(&mut out, &mp, &Default::default()).unwrap();
        assert_eq!(out, "MULTIPOINT ((26 31), (25 35), (26 36))");
    }

    #[test]
    fn write_multi_point_with_empty_member() {
        let mp = MultiPoint::new(vec![Point::empty(), Point::new(1., 2.)]);
        let mut out = String::new();
        write_multi_point_as_wkt(&mut out, &mp, &Default::default()).unwrap();
        assert_eq!(out, "MULTIPOINT (EMPTY, (1 2))");
    }
}
