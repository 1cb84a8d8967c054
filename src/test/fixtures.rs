use crate::geometry::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point,
    Polygon,
};

pub(crate) fn ring0() -> LineString {
    vec![(30., 10.), (10., 30.), (40., 40.), (30., 10.)].into()
}

pub(crate) fn hole0() -> LineString {
    vec![(54., 23.), (12., 28.), (30., 30.), (54., 23.)].into()
}

pub(crate) fn hole1() -> LineString {
    vec![(55., 26.), (17., 24.), (36., 33.), (55., 26.)].into()
}

pub(crate) fn ls0() -> LineString {
    hole0()
}

pub(crate) fn mp_points() -> MultiPoint {
    vec![Point::new(26., 31.), Point::new(25., 35.), Point::new(26., 36.)].into()
}

pub(crate) fn ml0() -> MultiLineString {
    vec![
        hole0(),
        vec![(55., 26.), (17., 24.), (36., 33.), (56., 22.)].into(),
    ]
    .into()
}

pub(crate) fn polygon0() -> Polygon {
    Polygon::new(ring0(), vec![])
}

pub(crate) fn polygon_with_holes() -> Polygon {
    Polygon::new(ring0(), vec![hole0(), hole1()])
}

pub(crate) fn mp0() -> MultiPolygon {
    vec![
        polygon0(),
        Polygon::new(
            vec![(32., 12.), (12., 32.), (42., 42.), (32., 12.)].into(),
            vec![hole0(), hole1()],
        ),
        Polygon::new(
            vec![(34., 15.), (14., 35.), (44., 45.), (34., 15.)].into(),
            vec![
                vec![(53., 25.), (32., 48.), (30., 40.), (53., 25.)].into(),
                vec![(34., 43.), (22., 58.), (30., 50.), (34., 43.)].into(),
            ],
        ),
    ]
    .into()
}

pub(crate) const MP0_WKT: &str = "MULTIPOLYGON (((30 10, 10 30, 40 40, 30 10)), ((32 12, 12 32, 42 42, 32 12), (54 23, 12 28, 30 30, 54 23), (55 26, 17 24, 36 33, 55 26)), ((34 15, 14 35, 44 45, 34 15), (53 25, 32 48, 30 40, 53 25), (34 43, 22 58, 30 50, 34 43)))";

pub(crate) fn gc0() -> GeometryCollection {
    vec![
        Point::new(4., 6.).into(),
        LineString::from(vec![(4., 6.), (7., 10.)]).into(),
        mp_points().into(),
        mp0().into(),
    ]
    .into()
}

/// Canonical WKT paired with the geometry it describes.
pub(crate) fn all() -> Vec<(&'static str, Geometry)> {
    vec![
        ("POINT EMPTY", Point::empty().into()),
        ("POINT (26 36)", Point::new(26., 36.).into()),
        ("POINT (12.5 7.25)", Point::new(12.5, 7.25).into()),
        ("LINESTRING EMPTY", LineString::empty().into()),
        ("LINESTRING (54 23, 12 28, 30 30, 54 23)", ls0().into()),
        ("MULTIPOINT EMPTY", MultiPoint::empty().into()),
        ("MULTIPOINT ((26 31), (25 35), (26 36))", mp_points().into()),
        ("MULTILINESTRING EMPTY", MultiLineString::empty().into()),
        (
            "MULTILINESTRING ((54 23, 12 28, 30 30, 54 23), (55 26, 17 24, 36 33, 56 22))",
            ml0().into(),
        ),
        ("POLYGON EMPTY", Polygon::empty().into()),
        ("POLYGON ((30 10, 10 30, 40 40, 30 10))", polygon0().into()),
        (
            "POLYGON ((30 10, 10 30, 40 40, 30 10), (54 23, 12 28, 30 30, 54 23), (55 26, 17 24, 36 33, 55 26))",
            polygon_with_holes().into(),
        ),
        ("MULTIPOLYGON EMPTY", MultiPolygon::empty().into()),
        (MP0_WKT, mp0().into()),
        ("GEOMETRYCOLLECTION EMPTY", GeometryCollection::empty().into()),
        (
            "GEOMETRYCOLLECTION (POINT (4 6), LINESTRING (4 6, 7 10), MULTIPOINT ((26 31), (25 35), (26 36)), MULTIPOLYGON (((30 10, 10 30, 40 40, 30 10)), ((32 12, 12 32, 42 42, 32 12), (54 23, 12 28, 30 30, 54 23), (55 26, 17 24, 36 33, 55 26)), ((34 15, 14 35, 44 45, 34 15), (53 25, 32 48, 30 40, 53 25), (34 43, 22 58, 30 50, 34 43))))",
            gc0().into(),
        ),
    ]
}
