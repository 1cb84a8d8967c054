use geo_traits::{Dimensions, LineStringTrait};

use crate::geometry::Coord;

/// An ordered sequence of coordinates. Also used for polygon rings.
///
/// No closure or minimum-length requirement is enforced; a single-coordinate
/// line string is representable.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineString(Vec<Coord>);

impl LineString {
    pub fn new(coords: Vec<Coord>) -> Self {
        Self(coords)
    }

    /// `LINESTRING EMPTY`
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn coords(&self) -> &[Coord] {
        &self.0
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified coordinate.
    /// Will return None if the provided index is out of bounds
    pub fn coord(&self, i: usize) -> Option<Coord> {
        self.0.get(i).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Coord> {
        self.0
    }
}

impl From<Vec<Coord>> for LineString {
    fn from(value: Vec<Coord>) -> Self {
        Self(value)
    }
}

impl From<Vec<(f64, f64)>> for LineString {
    fn from(value: Vec<(f64, f64)>) -> Self {
        Self(value.into_iter().map(Coord::from).collect())
    }
}

impl FromIterator<Coord> for LineString {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl LineStringTrait for LineString {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        *self.0.get_unchecked(i)
    }
}

impl LineStringTrait for &LineString {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_coords(&self) -> usize {
        self.0.len()
    }

    unsafe fn coord_unchecked(&self, i: usize) -> Self::CoordType<'_> {
        *self.0.get_unchecked(i)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn trait_access_matches_inherent() {
        let line: LineString = vec![(54., 23.), (12., 28.), (30., 30.)].into();
        assert_eq!(LineStringTrait::num_coords(&line), 3);
        assert_eq!(LineStringTrait::coord(&line, 1), Some(Coord::new(12., 28.)));
        assert_eq!(LineStringTrait::coord(&line, 3), None);
        let xs: Vec<f64> = LineStringTrait::coords(&line).map(|c| c.x).collect();
        assert_eq!(xs, vec![54., 12., 30.]);
    }

    #[test]
    fn empty_line_string() {
        assert!(LineString::empty().is_empty());
        assert_eq!(LineString::empty(), LineString::new(vec![]));
    }
}
