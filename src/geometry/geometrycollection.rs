use geo_traits::{Dimensions, GeometryCollectionTrait};

use crate::geometry::Geometry;

/// A heterogeneous collection of geometries. Elements may themselves be collections.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometryCollection(Vec<Geometry>);

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> Self {
        Self(geometries)
    }

    /// `GEOMETRYCOLLECTION EMPTY`
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.0
    }

    pub fn num_geometries(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified geometry.
    /// Will return None if the provided index is out of bounds
    pub fn geometry(&self, i: usize) -> Option<&Geometry> {
        self.0.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Geometry> {
        self.0
    }
}

impl From<Vec<Geometry>> for GeometryCollection {
    fn from(value: Vec<Geometry>) -> Self {
        Self(value)
    }
}

impl FromIterator<Geometry> for GeometryCollection {
    fn from_iter<I: IntoIterator<Item = Geometry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl GeometryCollectionTrait for GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        self.0.get_unchecked(i)
    }
}

impl GeometryCollectionTrait for &GeometryCollection {
    type T = f64;
    type GeometryType<'a>
        = &'a Geometry
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_geometries(&self) -> usize {
        self.0.len()
    }

    unsafe fn geometry_unchecked(&self, i: usize) -> Self::GeometryType<'_> {
        self.0.get_unchecked(i)
    }
}
