use geo_traits::{Dimensions, PointTrait};

use crate::geometry::Coord;

/// A single position, or the empty point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point(Option<Coord>);

impl Point {
    /// Create a point at `(x, y)`
    pub const fn new(x: f64, y: f64) -> Self {
        Self(Some(Coord::new(x, y)))
    }

    /// Create a point at `coord`
    pub const fn from_coord(coord: Coord) -> Self {
        Self(Some(coord))
    }

    /// The empty point, `POINT EMPTY`
    pub const fn empty() -> Self {
        Self(None)
    }

    /// The position of this point, or `None` if empty
    pub fn coord(&self) -> Option<Coord> {
        self.0
    }

    /// The x component, or `None` if empty
    pub fn x(&self) -> Option<f64> {
        self.0.map(|c| c.x)
    }

    /// The y component, or `None` if empty
    pub fn y(&self) -> Option<f64> {
        self.0.map(|c| c.y)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Coord> for Point {
    fn from(value: Coord) -> Self {
        Self::from_coord(value)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl PointTrait for Point {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.0
    }
}

impl PointTrait for &Point {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn coord(&self) -> Option<Self::CoordType<'_>> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_point_has_no_coord() {
        let point = Point::empty();
        assert!(point.is_empty());
        assert!(PointTrait::coord(&point).is_none());
        assert_eq!(point.x(), None);
    }

    #[test]
    fn point_accessors() {
        let point = Point::new(12.5, 7.25);
        assert!(!point.is_empty());
        assert_eq!(point.x(), Some(12.5));
        assert_eq!(point.y(), Some(7.25));
        assert_eq!(point, Point::from((12.5, 7.25)));
    }
}
