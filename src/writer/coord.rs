use std::fmt::Write;

use geo_traits::{CoordTrait, Dimensions};

use crate::error::{WriteError, WriteResult};
use crate::geometry::Coord;
use crate::writer::WktWriterOptions;

/// Fail unless `dim` is plain x/y.
pub(crate) fn check_dim(dim: Dimensions) -> WriteResult<()> {
    match dim {
        Dimensions::Xy | Dimensions::Unknown(2) => Ok(()),
        dim => Err(WriteError::UnsupportedDimension(dim)),
    }
}

/// Copy any two-dimensional coordinate into a [`Coord`].
pub(crate) fn to_coord(coord: &impl CoordTrait<T = f64>) -> WriteResult<Coord> {
    check_dim(coord.dim())?;
    Ok(Coord::new(coord.x(), coord.y()))
}

/// Write `x y`.
pub(crate) fn write_coord<W: Write>(
    writer: &mut W,
    coord: &impl CoordTrait<T = f64>,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    let coord = to_coord(coord)?;
    if !coord.is_finite() {
        return Err(WriteError::NonFiniteCoordinate(coord.x, coord.y));
    }
    let Coord { x, y } = coord;

    write_number(writer, x, options)?;
    writer.write_char(' ')?;
    write_number(writer, y, options)?;
    Ok(())
}

/// Every finite `f64` is exact within this many decimal places.
const MAX_PRECISION: usize = 1074;

/// Write a finite number in plain decimal notation.
///
/// Without a precision this is the shortest representation that parses back to the same `f64`.
/// A value that rounds to zero is written as `0`, never `-0`.
fn write_number<W: Write>(
    writer: &mut W,
    value: f64,
    options: &WktWriterOptions,
) -> WriteResult<()> {
    match options.precision {
        None => write!(writer, "{value}")?,
        Some(precision) => {
            let precision = precision.min(MAX_PRECISION);
            let text = format!("{value:.precision$}");
            let text = if text.contains('.') {
                text.trim_end_matches('0').trim_end_matches('.')
            } else {
                text.as_str()
            };
            writer.write_str(if text == "-0" { "0" } else { text })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn coord_to_string(x: f64, y: f64, options: &WktWriterOptions) -> WriteResult<String> {
        let mut out = String::new();
        write_coord(&mut out, &Coord::new(x, y), options)?;
        Ok(out)
    }

    #[test]
    fn shortest_round_trip() {
        let options = WktWriterOptions::default();
        assert_eq!(coord_to_string(26., 36., &options).unwrap(), "26 36");
        assert_eq!(coord_to_string(12.5, 7.25, &options).unwrap(), "12.5 7.25");
        assert_eq!(coord_to_string(0.1, -0.2, &options).unwrap(), "0.1 -0.2");
        assert_eq!(
            coord_to_string(1e-7, 1e21, &options).unwrap(),
            "0.0000001 1000000000000000000000"
        );

        let x = 0.1 + 0.2;
        let text = coord_to_string(x, 0., &options).unwrap();
        assert_eq!(text, "0.30000000000000004 0");
    }

    #[test]
    fn precision_trims_trailing_zeros() {
        let options = WktWriterOptions { precision: Some(3) };
        assert_eq!(
            coord_to_string(0.12345, 1.23456, &options).unwrap(),
            "0.123 1.235"
        );
        assert_eq!(coord_to_string(2.5, 3., &options).unwrap(), "2.5 3");

        let options = WktWriterOptions { precision: Some(0) };
        assert_eq!(coord_to_string(2.4, -7.6, &options).unwrap(), "2 -8");
    }

    #[test]
    fn precision_rounding_to_zero_drops_sign() {
        let options = WktWriterOptions { precision: Some(2) };
        assert_eq!(coord_to_string(-0.001, 1.005, &options).unwrap(), "0 1");
        assert_eq!(coord_to_string(-0.004, -0.005, &options).unwrap(), "0 -0.01");

        // Without rounding the sign of zero is kept.
        let options = WktWriterOptions::default();
        assert_eq!(coord_to_string(-0., 0., &options).unwrap(), "-0 0");
    }

    #[test]
    fn huge_precision_is_clamped() {
        let options = WktWriterOptions {
            precision: Some(usize::MAX),
        };
        assert_eq!(coord_to_string(2.5, -1., &options).unwrap(), "2.5 -1");
        assert_eq!(coord_to_string(0.125, 1e21, &options).unwrap(), "0.125 1000000000000000000000");
    }

    #[test]
    fn non_finite_is_an_error() {
        let options = WktWriterOptions::default();
        assert!(matches!(
            coord_to_string(f64::NAN, 1., &options),
            Err(WriteError::NonFiniteCoordinate(_, _))
        ));
        assert!(matches!(
            coord_to_string(1., f64::INFINITY, &options),
            Err(WriteError::NonFiniteCoordinate(_, _))
        ));
    }
}
