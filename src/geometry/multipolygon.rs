use geo_traits::{Dimensions, MultiPolygonTrait};

use crate::geometry::Polygon;

/// A collection of polygons.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiPolygon(Vec<Polygon>);

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self(polygons)
    }

    /// `MULTIPOLYGON EMPTY`
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified polygon.
    /// Will return None if the provided index is out of bounds
    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.0.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Polygon> {
        self.0
    }
}

impl From<Vec<Polygon>> for MultiPolygon {
    fn from(value: Vec<Polygon>) -> Self {
        Self(value)
    }
}

impl FromIterator<Polygon> for MultiPolygon {
    fn from_iter<I: IntoIterator<Item = Polygon>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MultiPolygonTrait for MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        self.0.get_unchecked(i)
    }
}

impl MultiPolygonTrait for &MultiPolygon {
    type T = f64;
    type PolygonType<'a>
        = &'a Polygon
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_polygons(&self) -> usize {
        self.0.len()
    }

    unsafe fn polygon_unchecked(&self, i: usize) -> Self::PolygonType<'_> {
        self.0.get_unchecked(i)
    }
}
