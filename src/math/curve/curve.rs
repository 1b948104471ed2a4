use super::point2d::Point2D;

/// A curve parametrized by `t` over `[0, 1]`.
pub trait ParametricCurve {
    fn point_at(&self, t: f64) -> Point2D;

    fn derivative_at(&self, t: f64) -> Point2D;

    fn x_at(&self, t: f64) -> f64 {
        self.point_at(t).x()
    }
}

/// A curve made of anchored pieces, defined over `[min_x, max_x]`.
pub trait PiecewiseCurve {
    fn anchors(&self) -> Vec<Point2D>;

    fn min_x(&self) -> f64;

    fn max_x(&self) -> f64;

    fn contains_x(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}
