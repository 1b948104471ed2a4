use super::curve::ParametricCurve;
use super::point2d::Point2D;

/// Cubic bezier segment: start anchor, start handle, end handle, end anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierSegment {
    values: [f64; 8]
}

impl BezierSegment {
    pub fn new(values: [f64; 8]) -> BezierSegment {
        BezierSegment { values }
    }

    pub fn from_points(start: Point2D, start_handle: Point2D, end_handle: Point2D, end: Point2D) -> BezierSegment {
        BezierSegment::new([
            start.x(), start.y(),
            start_handle.x(), start_handle.y(),
            end_handle.x(), end_handle.y(),
            end.x(), end.y(),
        ])
    }

    /// Returns `None` unless `values` holds exactly 8 numbers.
    pub fn from_slice(values: &[f64]) -> Option<BezierSegment> {
        <[f64; 8]>::try_from(values).ok().map(BezierSegment::new)
    }

    pub fn start(&self) -> Point2D {
        Point2D::new(self.values[0], self.values[1])
    }

    pub fn end(&self) -> Point2D {
        Point2D::new(self.values[6], self.values[7])
    }

    pub fn values(&self) -> &[f64; 8] {
        &self.values
    }

    fn combine(&self, a: f64, b: f64, c: f64, d: f64) -> Point2D {
        let v = &self.values;
        Point2D::new(
            a * v[0] + b * v[2] + c * v[4] + d * v[6],
            a * v[1] + b * v[3] + c * v[5] + d * v[7],
        )
    }
}

impl ParametricCurve for BezierSegment {
    /// Bernstein form. `t` is expected in `[0, 1]`.
    fn point_at(&self, t: f64) -> Point2D {
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let t2 = t * t;

        let a = mt2 * mt;
        let b = mt2 * t * 3.0;
        let c = mt * t2 * 3.0;
        let d = t * t2;
        self.combine(a, b, c, d)
    }

    /// First derivative with respect to `t`, a quadratic.
    fn derivative_at(&self, t: f64) -> Point2D {
        let mt = 1.0 - t;
        let t2 = t * t;

        let a = -3.0 * mt * mt;
        let b = 3.0 * mt * (mt - 2.0 * t);
        let c = 3.0 * t * (2.0 * mt - t);
        let d = 3.0 * t2;
        self.combine(a, b, c, d)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn ease_segment() -> BezierSegment {
        BezierSegment::new([0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0])
    }

    #[test]
    fn endpoints_are_anchors() {
        let segment = ease_segment();
        assert_eq!(segment.point_at(0.0), segment.start());
        assert_eq!(segment.point_at(1.0), segment.end());
    }

    #[test]
    fn midpoint_of_symmetric_segment() {
        let point = ease_segment().point_at(0.5);
        assert_eq!(point, Point2D::new(0.5, 0.5));
    }

    #[test]
    fn straight_line_has_constant_derivative() {
        let segment = BezierSegment::from_points(
            Point2D::new(0.0, 0.0),
            Point2D::new(1.0 / 3.0, 2.0 / 3.0),
            Point2D::new(2.0 / 3.0, 4.0 / 3.0),
            Point2D::new(1.0, 2.0),
        );
        for t in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let derivative = segment.derivative_at(t);
            assert_abs_diff_eq!(derivative.x(), 1.0, epsilon = 1e-12);
            assert_abs_diff_eq!(derivative.y(), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let segment = ease_segment();
        let h = 1e-6;
        for t in [0.1, 0.3, 0.7] {
            let analytic = segment.derivative_at(t);
            let ahead = segment.point_at(t + h);
            let behind = segment.point_at(t - h);
            assert_abs_diff_eq!(analytic.x(), (ahead.x() - behind.x()) / (2.0 * h), epsilon = 1e-6);
            assert_abs_diff_eq!(analytic.y(), (ahead.y() - behind.y()) / (2.0 * h), epsilon = 1e-6);
        }
    }

    #[test]
    fn from_slice_requires_eight_values() {
        assert!(BezierSegment::from_slice(&[0.0; 7]).is_none());
        assert_eq!(
            BezierSegment::from_slice(&[0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0]),
            Some(ease_segment())
        );
    }
}
