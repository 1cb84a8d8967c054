//! Conversions between this crate's geometries and [`geo_types`].
//!
//! `geo-types` rects, triangles and lines become polygons and line strings. The other direction
//! fails for empty points, which `geo-types` has no way to express.

use crate::error::{WktError, WktResult};
use crate::geometry::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};

impl From<geo_types::Coord<f64>> for Coord {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Coord::new(value.x, value.y)
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(value: Coord) -> Self {
        geo_types::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point::from_coord(value.0.into())
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        value.0.into_iter().map(Coord::from).collect()
    }
}

impl From<geo_types::Line<f64>> for LineString {
    fn from(value: geo_types::Line<f64>) -> Self {
        LineString::new(vec![value.start.into(), value.end.into()])
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo_types::MultiPoint<f64>) -> Self {
        value.0.into_iter().map(Point::from).collect()
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(value: geo_types::MultiLineString<f64>) -> Self {
        value.0.into_iter().map(LineString::from).collect()
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon<f64>) -> Self {
        value.0.into_iter().map(Polygon::from).collect()
    }
}

impl From<geo_types::GeometryCollection<f64>> for GeometryCollection {
    fn from(value: geo_types::GeometryCollection<f64>) -> Self {
        value.0.into_iter().map(Geometry::from).collect()
    }
}

impl From<geo_types::Geometry<f64>> for Geometry {
    fn from(value: geo_types::Geometry<f64>) -> Self {
        use geo_types::Geometry as G;
        match value {
            G::Point(g) => Geometry::Point(g.into()),
            G::Line(g) => Geometry::LineString(g.into()),
            G::LineString(g) => Geometry::LineString(g.into()),
            G::Polygon(g) => Geometry::Polygon(g.into()),
            G::MultiPoint(g) => Geometry::MultiPoint(g.into()),
            G::MultiLineString(g) => Geometry::MultiLineString(g.into()),
            G::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
            G::GeometryCollection(g) => Geometry::GeometryCollection(g.into()),
            G::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
            G::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
        }
    }
}

impl TryFrom<Point> for geo_types::Point<f64> {
    type Error = WktError;

    fn try_from(value: Point) -> WktResult<Self> {
        value
            .coord()
            .map(|coord| geo_types::Point(coord.into()))
            .ok_or_else(|| {
                WktError::IncorrectGeometryType("geo-types cannot represent POINT EMPTY".to_string())
            })
    }
}

impl From<LineString> for geo_types::LineString<f64> {
    fn from(value: LineString) -> Self {
        geo_types::LineString::new(value.into_inner().into_iter().map(Into::into).collect())
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(value: Polygon) -> Self {
        let exterior = value.exterior().cloned().unwrap_or_default();
        let interiors = value.interiors().iter().cloned().map(Into::into).collect();
        geo_types::Polygon::new(exterior.into(), interiors)
    }
}

impl TryFrom<MultiPoint> for geo_types::MultiPoint<f64> {
    type Error = WktError;

    fn try_from(value: MultiPoint) -> WktResult<Self> {
        let points = value
            .into_inner()
            .into_iter()
            .map(geo_types::Point::try_from)
            .collect::<WktResult<Vec<_>>>()?;
        Ok(geo_types::MultiPoint::new(points))
    }
}

impl From<MultiLineString> for geo_types::MultiLineString<f64> {
    fn from(value: MultiLineString) -> Self {
        geo_types::MultiLineString::new(value.into_inner().into_iter().map(Into::into).collect())
    }
}

impl From<MultiPolygon> for geo_types::MultiPolygon<f64> {
    fn from(value: MultiPolygon) -> Self {
        geo_types::MultiPolygon::new(value.into_inner().into_iter().map(Into::into).collect())
    }
}

impl TryFrom<GeometryCollection> for geo_types::GeometryCollection<f64> {
    type Error = WktError;

    fn try_from(value: GeometryCollection) -> WktResult<Self> {
        let geometries = value
            .into_inner()
            .into_iter()
            .map(geo_types::Geometry::try_from)
            .collect::<WktResult<Vec<_>>>()?;
        Ok(geo_types::GeometryCollection::new_from(geometries))
    }
}

impl TryFrom<Geometry> for geo_types::Geometry<f64> {
    type Error = WktError;

    fn try_from(value: Geometry) -> WktResult<Self> {
        let geometry = match value {
            Geometry::Point(g) => geo_types::Geometry::Point(g.try_into()?),
            Geometry::LineString(g) => geo_types::Geometry::LineString(g.into()),
            Geometry::Polygon(g) => geo_types::Geometry::Polygon(g.into()),
            Geometry::MultiPoint(g) => geo_types::Geometry::MultiPoint(g.try_into()?),
            Geometry::MultiLineString(g) => geo_types::Geometry::MultiLineString(g.into()),
            Geometry::MultiPolygon(g) => geo_types::Geometry::MultiPolygon(g.into()),
            Geometry::GeometryCollection(g) => {
                geo_types::Geometry::GeometryCollection(g.try_into()?)
            }
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use geo_types::{coord, line_string, point, polygon, Rect};

    use super::*;
    use crate::test::fixtures;
    use crate::{read_wkt, to_wkt};

    #[test]
    fn from_geo_types() {
        let polygon: geo_types::Polygon<f64> = polygon![
            exterior: [(x: 30., y: 10.), (x: 10., y: 30.), (x: 40., y: 40.), (x: 30., y: 10.)],
            interiors: [[(x: 54., y: 23.), (x: 12., y: 28.), (x: 30., y: 30.), (x: 54., y: 23.)]]
        ];
        let polygon = Polygon::from(polygon);
        assert_eq!(polygon.exterior(), Some(&fixtures::ring0()));
        assert_eq!(polygon.interiors(), &[fixtures::hole0()]);

        let point = Point::from(point!(x: 26., y: 36.));
        assert_eq!(point, Point::new(26., 36.));
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = Rect::new(coord! { x: 0., y: 0. }, coord! { x: 2., y: 1. });
        let geometry = Geometry::from(geo_types::Geometry::Rect(rect));
        assert_eq!(geometry.geometry_type(), crate::WktType::Polygon);
        assert_eq!(
            to_wkt(&geometry).unwrap(),
            to_wkt(&Geometry::from(geo_types::Geometry::Polygon(rect.to_polygon()))).unwrap()
        );
    }

    #[test]
    fn to_geo_types_round_trip() {
        for (wkt, geometry) in fixtures::all() {
            if wkt == "POINT EMPTY" {
                continue;
            }
            let geo: geo_types::Geometry<f64> = geometry.clone().try_into().unwrap();
            assert_eq!(Geometry::from(geo), geometry, "{wkt}");
        }
    }

    #[test]
    fn empty_point_is_rejected() {
        let result = geo_types::Geometry::try_from(Geometry::Point(Point::empty()));
        assert!(matches!(result, Err(WktError::IncorrectGeometryType(_))));

        let collection = read_wkt("GEOMETRYCOLLECTION (POINT (1 2), POINT EMPTY)").unwrap();
        assert!(geo_types::Geometry::try_from(collection).is_err());
    }

    #[test]
    fn line_string_to_geo_types() {
        let line: geo_types::LineString<f64> = fixtures::hole0().into();
        assert_eq!(
            line,
            line_string![(x: 54., y: 23.), (x: 12., y: 28.), (x: 30., y: 30.), (x: 54., y: 23.)]
        );
    }
}
