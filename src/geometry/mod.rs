//! An owned, immutable geometry model.
//!
//! Every type implements the matching [`geo_traits`] trait, which is all the writer needs. Each
//! container exclusively owns its children.

mod coord;
#[allow(clippy::module_inception)]
mod geometry;
mod geometrycollection;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use coord::Coord;
pub use geometry::Geometry;
pub use geometrycollection::GeometryCollection;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;
