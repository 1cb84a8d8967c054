use geo_traits::{Dimensions, PolygonTrait};

use crate::geometry::LineString;

/// An exterior ring with zero or more interior rings (holes).
///
/// The polygon is empty iff the exterior ring is absent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    exterior: Option<LineString>,
    interiors: Vec<LineString>,
}

impl Polygon {
    /// Create a new polygon.
    ///
    /// An empty `exterior` with no `interiors` yields the empty polygon. An empty `exterior` with
    /// interiors is kept as given; such a polygon cannot be written as WKT.
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Self {
        if exterior.is_empty() && interiors.is_empty() {
            return Self::empty();
        }
        Self {
            exterior: Some(exterior),
            interiors,
        }
    }

    /// `POLYGON EMPTY`
    pub fn empty() -> Self {
        Self {
            exterior: None,
            interiors: vec![],
        }
    }

    /// Build a polygon from rings in order: the first ring is the exterior, the remaining rings
    /// are interiors.
    pub fn from_rings(rings: Vec<LineString>) -> Self {
        let mut rings = rings.into_iter();
        match rings.next() {
            Some(exterior) => Self::new(exterior, rings.collect()),
            None => Self::empty(),
        }
    }

    pub fn exterior(&self) -> Option<&LineString> {
        self.exterior.as_ref()
    }

    pub fn interiors(&self) -> &[LineString] {
        &self.interiors
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    /// Access to a specified interior ring.
    /// Will return None if the provided index is out of bounds
    pub fn interior(&self, i: usize) -> Option<&LineString> {
        self.interiors.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.exterior.is_none()
    }
}

impl PolygonTrait for Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.exterior.as_ref()
    }

    fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        self.interiors.get_unchecked(i)
    }
}

impl PolygonTrait for &Polygon {
    type T = f64;
    type RingType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn exterior(&self) -> Option<Self::RingType<'_>> {
        self.exterior.as_ref()
    }

    fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    unsafe fn interior_unchecked(&self, i: usize) -> Self::RingType<'_> {
        self.interiors.get_unchecked(i)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_rings_splits_exterior_and_holes() {
        let outer: LineString = vec![(30., 10.), (10., 30.), (40., 40.), (30., 10.)].into();
        let hole: LineString = vec![(54., 23.), (12., 28.), (30., 30.), (54., 23.)].into();
        let polygon = Polygon::from_rings(vec![outer.clone(), hole.clone()]);
        assert_eq!(polygon.exterior(), Some(&outer));
        assert_eq!(polygon.interiors(), &[hole]);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn empty_exterior_without_holes_is_empty() {
        assert!(Polygon::new(LineString::empty(), vec![]).is_empty());
        assert!(Polygon::from_rings(vec![]).is_empty());
        assert_eq!(Polygon::from_rings(vec![]), Polygon::empty());
    }

    #[test]
    fn empty_exterior_with_holes_is_kept() {
        let hole: LineString = vec![(1., 1.), (2., 2.), (1., 1.)].into();
        let polygon = Polygon::new(LineString::empty(), vec![hole]);
        assert!(!polygon.is_empty());
        assert_eq!(PolygonTrait::num_interiors(&polygon), 1);
    }
}
