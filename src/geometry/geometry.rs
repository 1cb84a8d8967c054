use std::str::FromStr;

use geo_traits::{
    Dimensions, GeometryTrait, GeometryType, UnimplementedLine, UnimplementedRect,
    UnimplementedTriangle,
};

use crate::common::WktType;
use crate::error::ParseError;
use crate::geometry::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Any geometry that can be expressed in WKT.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The WKT keyword of this geometry
    pub fn geometry_type(&self) -> WktType {
        match self {
            Self::Point(_) => WktType::Point,
            Self::LineString(_) => WktType::LineString,
            Self::Polygon(_) => WktType::Polygon,
            Self::MultiPoint(_) => WktType::MultiPoint,
            Self::MultiLineString(_) => WktType::MultiLineString,
            Self::MultiPolygon(_) => WktType::MultiPolygon,
            Self::GeometryCollection(_) => WktType::GeometryCollection,
        }
    }

    /// Whether this geometry would be written with the `EMPTY` keyword
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Point(g) => g.is_empty(),
            Self::LineString(g) => g.is_empty(),
            Self::Polygon(g) => g.is_empty(),
            Self::MultiPoint(g) => g.is_empty(),
            Self::MultiLineString(g) => g.is_empty(),
            Self::MultiPolygon(g) => g.is_empty(),
            Self::GeometryCollection(g) => g.is_empty(),
        }
    }
}

impl FromStr for Geometry {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::reader::read_wkt(s)
    }
}

macro_rules! impl_from {
    ($geometry_type:ident) => {
        impl From<$geometry_type> for Geometry {
            fn from(value: $geometry_type) -> Self {
                Self::$geometry_type(value)
            }
        }
    };
}

impl_from!(Point);
impl_from!(LineString);
impl_from!(Polygon);
impl_from!(MultiPoint);
impl_from!(MultiLineString);
impl_from!(MultiPolygon);
impl_from!(GeometryCollection);

impl GeometryTrait for Geometry {
    type T = f64;
    type PointType<'a> = Point;
    type LineStringType<'a> = LineString;
    type PolygonType<'a> = Polygon;
    type MultiPointType<'a> = MultiPoint;
    type MultiLineStringType<'a> = MultiLineString;
    type MultiPolygonType<'a> = MultiPolygon;
    type GeometryCollectionType<'a> = GeometryCollection;
    type RectType<'a> = UnimplementedRect<f64>;
    type TriangleType<'a> = UnimplementedTriangle<f64>;
    type LineType<'a> = UnimplementedLine<f64>;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Self::Point(g) => GeometryType::Point(g),
            Self::LineString(g) => GeometryType::LineString(g),
            Self::Polygon(g) => GeometryType::Polygon(g),
            Self::MultiPoint(g) => GeometryType::MultiPoint(g),
            Self::MultiLineString(g) => GeometryType::MultiLineString(g),
            Self::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Self::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

impl GeometryTrait for &Geometry {
    type T = f64;
    type PointType<'a>
        = Point
    where
        Self: 'a;
    type LineStringType<'a>
        = LineString
    where
        Self: 'a;
    type PolygonType<'a>
        = Polygon
    where
        Self: 'a;
    type MultiPointType<'a>
        = MultiPoint
    where
        Self: 'a;
    type MultiLineStringType<'a>
        = MultiLineString
    where
        Self: 'a;
    type MultiPolygonType<'a>
        = MultiPolygon
    where
        Self: 'a;
    type GeometryCollectionType<'a>
        = GeometryCollection
    where
        Self: 'a;
    type RectType<'a>
        = UnimplementedRect<f64>
    where
        Self: 'a;
    type TriangleType<'a>
        = UnimplementedTriangle<f64>
    where
        Self: 'a;
    type LineType<'a>
        = UnimplementedLine<f64>
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn as_type(
        &self,
    ) -> GeometryType<
        '_,
        Point,
        LineString,
        Polygon,
        MultiPoint,
        MultiLineString,
        MultiPolygon,
        GeometryCollection,
        UnimplementedRect<f64>,
        UnimplementedTriangle<f64>,
        UnimplementedLine<f64>,
    > {
        match self {
            Geometry::Point(g) => GeometryType::Point(g),
            Geometry::LineString(g) => GeometryType::LineString(g),
            Geometry::Polygon(g) => GeometryType::Polygon(g),
            Geometry::MultiPoint(g) => GeometryType::MultiPoint(g),
            Geometry::MultiLineString(g) => GeometryType::MultiLineString(g),
            Geometry::MultiPolygon(g) => GeometryType::MultiPolygon(g),
            Geometry::GeometryCollection(g) => GeometryType::GeometryCollection(g),
        }
    }
}

// Specialized implementations on each concrete type, so that e.g. a bare `Point` can be passed
// wherever a `GeometryTrait` is expected.

macro_rules! impl_specialization {
    ($geometry_type:ident) => {
        impl GeometryTrait for $geometry_type {
            type T = f64;
            type PointType<'b>
                = Point
            where
                Self: 'b;
            type LineStringType<'b>
                = LineString
            where
                Self: 'b;
            type PolygonType<'b>
                = Polygon
            where
                Self: 'b;
            type MultiPointType<'b>
                = MultiPoint
            where
                Self: 'b;
            type MultiLineStringType<'b>
                = MultiLineString
            where
                Self: 'b;
            type MultiPolygonType<'b>
                = MultiPolygon
            where
                Self: 'b;
            type GeometryCollectionType<'b>
                = GeometryCollection
            where
                Self: 'b;
            type RectType<'b>
                = UnimplementedRect<f64>
            where
                Self: 'b;
            type TriangleType<'b>
                = UnimplementedTriangle<f64>
            where
                Self: 'b;
            type LineType<'b>
                = UnimplementedLine<f64>
            where
                Self: 'b;

            fn dim(&self) -> Dimensions {
                Dimensions::Xy
            }

            fn as_type(
                &self,
            ) -> GeometryType<
                '_,
                Self::PointType<'_>,
                Self::LineStringType<'_>,
                Self::PolygonType<'_>,
                Self::MultiPointType<'_>,
                Self::MultiLineStringType<'_>,
                Self::MultiPolygonType<'_>,
                Self::GeometryCollectionType<'_>,
                Self::RectType<'_>,
                Self::TriangleType<'_>,
                Self::LineType<'_>,
            > {
                GeometryType::$geometry_type(self)
            }
        }
    };
}

impl_specialization!(Point);
impl_specialization!(LineString);
impl_specialization!(Polygon);
impl_specialization!(MultiPoint);
impl_specialization!(MultiLineString);
impl_specialization!(MultiPolygon);
impl_specialization!(GeometryCollection);
