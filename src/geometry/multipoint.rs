use geo_traits::{Dimensions, MultiPointTrait};

use crate::geometry::Point;

/// A collection of points.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPoint(Vec<Point>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    /// `MULTIPOINT EMPTY`
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified point.
    /// Will return None if the provided index is out of bounds
    pub fn point(&self, i: usize) -> Option<&Point> {
        self.0.get(i)
    }

    /// Whether this has no points. A MultiPoint made only of empty points is not empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl From<Vec<Point>> for MultiPoint {
    fn from(value: Vec<Point>) -> Self {
        Self(value)
    }
}

impl FromIterator<Point> for MultiPoint {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MultiPointTrait for MultiPoint {
    type T = f64;
    type PointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        self.0.get_unchecked(i)
    }
}

impl MultiPointTrait for &MultiPoint {
    type T = f64;
    type PointType<'a>
        = &'a Point
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_points(&self) -> usize {
        self.0.len()
    }

    unsafe fn point_unchecked(&self, i: usize) -> Self::PointType<'_> {
        self.0.get_unchecked(i)
    }
}
