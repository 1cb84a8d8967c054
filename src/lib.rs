//! Read and write 2D vector geometries as [Well-Known Text
//! (WKT)](https://en.wikipedia.org/wiki/Well-known_text_representation_of_geometry).
//!
//! Parsing produces the owned types in [`geometry`]. Writing accepts anything implementing the
//! [`geo_traits`] geometry traits, so the same writer serves this crate's own types and those of
//! other geometry libraries.
//!
//! ```
//! use geowkt::{read_wkt, to_wkt};
//!
//! let wkt = "MULTIPOINT ((26 31), (25 35), (26 36))";
//! let geometry = read_wkt(wkt).unwrap();
//! assert_eq!(to_wkt(&geometry).unwrap(), wkt);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use common::WktType;
pub use error::{ParseError, ParseErrorKind, WktError, WktResult, WriteError};
pub use reader::{read_wkt, read_wkt_with_options, WktReaderOptions};
pub use writer::{to_wkt, to_wkt_with_options, WktWriterOptions};

pub mod common;
pub mod error;
#[cfg(feature = "geo-types")]
pub mod geo;
pub mod geometry;
pub mod reader;
#[cfg(test)]
pub(crate) mod test;
pub mod writer;

#[cfg(test)]
mod round_trip {
    use crate::geometry::{Geometry, GeometryCollection, MultiPoint, Point};
    use crate::test::fixtures;
    use crate::{read_wkt, to_wkt};

    #[test]
    fn write_then_read() {
        for (_, geometry) in fixtures::all() {
            let wkt = to_wkt(&geometry).unwrap();
            assert_eq!(read_wkt(&wkt).unwrap(), geometry, "{wkt}");
        }
    }

    #[test]
    fn read_then_write_is_canonical() {
        let inputs = [
            ("POINT(26 36)", "POINT (26 36)"),
            ("  MULTIPOINT (26 31,25 35)", "MULTIPOINT ((26 31), (25 35))"),
            (
                "POLYGON((30 10,10 30,40 40,30 10))",
                "POLYGON ((30 10, 10 30, 40 40, 30 10))",
            ),
            ("POINT (1e3 2.50)", "POINT (1000 2.5)"),
        ];
        for (input, canonical) in inputs {
            let geometry = read_wkt(input).unwrap();
            assert_eq!(to_wkt(&geometry).unwrap(), canonical);
        }
    }

    #[test]
    fn values_survive_exactly() {
        let values = [0.1 + 0.2, -71.064544, 1. / 3., 1e-12, 123456789.123456789];
        let points: MultiPoint = values.iter().map(|&v| Point::new(v, -v)).collect();
        let geometry = Geometry::from(GeometryCollection::new(vec![points.into()]));
        let wkt = to_wkt(&geometry).unwrap();
        assert_eq!(read_wkt(&wkt).unwrap(), geometry);
    }
}
