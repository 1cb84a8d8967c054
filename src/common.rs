use std::fmt;

/// The keyword marking an instance of any geometry kind with no coordinates.
pub const EMPTY: &str = "EMPTY";

/// The geometry keywords understood by this crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WktType {
    /// `POINT`
    Point,
    /// `LINESTRING`
    LineString,
    /// `POLYGON`
    Polygon,
    /// `MULTIPOINT`
    MultiPoint,
    /// `MULTILINESTRING`
    MultiLineString,
    /// `MULTIPOLYGON`
    MultiPolygon,
    /// `GEOMETRYCOLLECTION`
    GeometryCollection,
}

impl WktType {
    /// The canonical uppercase keyword
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::LineString => "LINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPoint => "MULTIPOINT",
            Self::MultiLineString => "MULTILINESTRING",
            Self::MultiPolygon => "MULTIPOLYGON",
            Self::GeometryCollection => "GEOMETRYCOLLECTION",
        }
    }

    /// Look up a keyword. Matching is case-sensitive.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "POINT" => Some(Self::Point),
            "LINESTRING" => Some(Self::LineString),
            "POLYGON" => Some(Self::Polygon),
            "MULTIPOINT" => Some(Self::MultiPoint),
            "MULTILINESTRING" => Some(Self::MultiLineString),
            "MULTIPOLYGON" => Some(Self::MultiPolygon),
            "GEOMETRYCOLLECTION" => Some(Self::GeometryCollection),
            _ => None,
        }
    }
}

impl fmt::Display for WktType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keyword_lookup_is_case_sensitive() {
        assert_eq!(WktType::from_keyword("POLYGON"), Some(WktType::Polygon));
        assert_eq!(WktType::from_keyword("Polygon"), None);
        assert_eq!(WktType::from_keyword("polygon"), None);
        assert_eq!(WktType::from_keyword(EMPTY), None);
    }

    #[test]
    fn display_matches_keyword() {
        for ty in [
            WktType::Point,
            WktType::LineString,
            WktType::Polygon,
            WktType::MultiPoint,
            WktType::MultiLineString,
            WktType::MultiPolygon,
            WktType::GeometryCollection,
        ] {
            assert_eq!(WktType::from_keyword(&ty.to_string()), Some(ty));
        }
    }
}
