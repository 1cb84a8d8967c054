use geo_traits::{Dimensions, MultiLineStringTrait};

use crate::geometry::LineString;

/// A collection of line strings, e.g. the segments of a road network.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiLineString(Vec<LineString>);

impl MultiLineString {
    pub fn new(line_strings: Vec<LineString>) -> Self {
        Self(line_strings)
    }

    /// `MULTILINESTRING EMPTY`
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    /// Access to a specified line string.
    /// Will return None if the provided index is out of bounds
    pub fn line_string(&self, i: usize) -> Option<&LineString> {
        self.0.get(i)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<LineString> {
        self.0
    }
}

impl From<Vec<LineString>> for MultiLineString {
    fn from(value: Vec<LineString>) -> Self {
        Self(value)
    }
}

impl FromIterator<LineString> for MultiLineString {
    fn from_iter<I: IntoIterator<Item = LineString>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl MultiLineStringTrait for MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        self.0.get_unchecked(i)
    }
}

impl MultiLineStringTrait for &MultiLineString {
    type T = f64;
    type LineStringType<'a>
        = &'a LineString
    where
        Self: 'a;

    fn dim(&self) -> Dimensions {
        Dimensions::Xy
    }

    fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    unsafe fn line_string_unchecked(&self, i: usize) -> Self::LineStringType<'_> {
        self.0.get_unchecked(i)
    }
}
