use super::queryerror::QueryCurveError;

/// Scale and internal offset that map a curve built over `[0, 1]` onto the
/// external range `[from, to]`.
///
/// Returns `(scale, offset)`, where the offset is in internal units.
pub fn offset_and_scale_from_range(from: f64, to: f64) -> Result<(f64, f64), QueryCurveError> {
    let scale = to - from;
    if scale == 0.0 || !scale.is_finite() || !from.is_finite() {
        return Err(QueryCurveError::InvalidRange { from, to });
    }
    Ok((scale, from / scale))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ranges() {
        let cases = [
            (0.0, 1.0, 1.0, 0.0),
            (0.0, 0.5, 0.5, 0.0),
            (0.5, 1.0, 0.5, 1.0),
            (-1.0, 1.0, 2.0, -0.5),
            (-10.0, 10.0, 20.0, -0.5),
        ];
        for (from, to, scale, offset) in cases {
            assert_eq!(offset_and_scale_from_range(from, to), Ok((scale, offset)));
        }
    }

    #[test]
    fn descending_range_flips_scale() {
        assert_eq!(offset_and_scale_from_range(1.0, 0.0), Ok((-1.0, -1.0)));
    }

    #[test]
    fn empty_range_is_rejected() {
        assert_eq!(
            offset_and_scale_from_range(3.0, 3.0),
            Err(QueryCurveError::InvalidRange { from: 3.0, to: 3.0 })
        );
    }
}
