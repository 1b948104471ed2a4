use crate::configuration::SolverConfiguration;

use super::curve::curve::ParametricCurve;

/// Result of inverting x(t) on a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RootSearch {
    Converged { t: f64, iterations: usize },
    NotConverged { last_t: f64 },
}

impl RootSearch {
    pub fn t(&self) -> Option<f64> {
        match self {
            RootSearch::Converged { t, .. } => Some(*t),
            RootSearch::NotConverged { .. } => None,
        }
    }
}

/// Finds `t` in `[0, 1]` with `x(t) == target_x` by Newton-Raphson from `t = 0.5`.
///
/// The step is skipped while the derivative is too flat, and `t` is clamped to
/// `[0, 1]` after every iteration. The returned `t` is the one updated in the
/// iteration whose residual met the tolerance.
pub fn newton_raphson<C: ParametricCurve>(
    curve: &C,
    target_x: f64,
    configuration: &SolverConfiguration,
) -> RootSearch {
    let mut t = 0.5;
    for iteration in 1..=configuration.newton_max_iterations {
        let x_at_t = curve.x_at(t);
        let x_derivative_at_t = curve.derivative_at(t).x();
        let x_difference = target_x - x_at_t;

        if x_derivative_at_t.abs() > configuration.derivative_epsilon {
            t += x_difference / x_derivative_at_t;
        }
        t = t.clamp(0.0, 1.0);

        if x_difference.abs() <= configuration.newton_tolerance {
            return RootSearch::Converged { t, iterations: iteration };
        }
    }
    RootSearch::NotConverged { last_t: t }
}

/// Bisection over `[0, 1]`, assuming x(t) is monotonic on the curve.
pub fn bisection<C: ParametricCurve>(
    curve: &C,
    target_x: f64,
    configuration: &SolverConfiguration,
) -> RootSearch {
    let mut a = 0.0;
    let mut b = 1.0;
    let mut t = 0.5;

    for iteration in 1..=configuration.bisection_max_iterations {
        t = (a + b) / 2.0;
        let x_at_t = curve.x_at(t);

        if (x_at_t - target_x).abs() <= configuration.bisection_tolerance {
            return RootSearch::Converged { t, iterations: iteration };
        }

        if (x_at_t > target_x) != (curve.x_at(a) > target_x) {
            b = t;
        } else {
            a = t;
        }
    }
    RootSearch::NotConverged { last_t: t }
}

/// Newton-Raphson first, bisection when it does not converge.
pub fn solve_t_at_x<C: ParametricCurve>(
    curve: &C,
    target_x: f64,
    configuration: &SolverConfiguration,
) -> RootSearch {
    match newton_raphson(curve, target_x, configuration) {
        converged @ RootSearch::Converged { .. } => converged,
        RootSearch::NotConverged { last_t } => {
            log::debug!(
                "newton-raphson did not converge for x = {} (last t = {}), falling back to bisection",
                target_x,
                last_t
            );
            bisection(curve, target_x, configuration)
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::math::curve::beziersegment::BezierSegment;

    use super::*;

    fn ease_segment() -> BezierSegment {
        BezierSegment::new([0.0, 0.0, 0.5, 0.0, 0.5, 1.0, 1.0, 1.0])
    }

    // Handles sit on the anchors, so dx/dt vanishes at both ends.
    fn flat_ended_segment() -> BezierSegment {
        BezierSegment::new([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0])
    }

    // dx/dt = 3(1 - 2t)^2, which is 0 at the initial Newton guess.
    fn inflected_segment() -> BezierSegment {
        BezierSegment::new([0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 1.0])
    }

    #[test]
    fn newton_converges_immediately_at_midpoint() {
        let search = newton_raphson(&ease_segment(), 0.5, &SolverConfiguration::default());
        assert_eq!(search, RootSearch::Converged { t: 0.5, iterations: 1 });
    }

    #[test]
    fn newton_inverts_x() {
        let configuration = SolverConfiguration::default();
        let segment = ease_segment();
        for target in [0.2, 0.3, 0.6, 0.8] {
            let t = newton_raphson(&segment, target, &configuration).t().unwrap();
            assert!((0.0..=1.0).contains(&t));
            assert_abs_diff_eq!(segment.x_at(t), target, epsilon = 1e-5);
        }
    }

    #[test]
    fn newton_stalls_on_flat_derivative() {
        let configuration = SolverConfiguration::default();
        let search = newton_raphson(&inflected_segment(), 0.3, &configuration);
        assert_eq!(search, RootSearch::NotConverged { last_t: 0.5 });
    }

    #[test]
    fn bisection_inverts_x() {
        let configuration = SolverConfiguration::default();
        let segment = flat_ended_segment();
        for target in [1e-4, 0.05, 0.5, 0.999] {
            let t = bisection(&segment, target, &configuration).t().unwrap();
            assert_abs_diff_eq!(segment.x_at(t), target, epsilon = 1e-6);
        }
    }

    #[test]
    fn bisection_reports_unreachable_target() {
        let configuration = SolverConfiguration::default();
        let search = bisection(&ease_segment(), 2.0, &configuration);
        assert!(matches!(search, RootSearch::NotConverged { .. }));
        assert_eq!(search.t(), None);
    }

    #[test]
    fn iteration_caps_are_respected() {
        let configuration = SolverConfiguration {
            bisection_max_iterations: 3,
            ..SolverConfiguration::default()
        };
        let search = bisection(&ease_segment(), 0.123, &configuration);
        assert!(matches!(search, RootSearch::NotConverged { .. }));
    }

    #[test]
    fn combined_solver_falls_back() {
        let configuration = SolverConfiguration::default();
        let segment = inflected_segment();
        let t = solve_t_at_x(&segment, 0.3, &configuration).t().unwrap();
        assert_abs_diff_eq!(segment.x_at(t), 0.3, epsilon = 1e-6);
    }

    #[test]
    fn solving_is_deterministic() {
        let configuration = SolverConfiguration::default();
        let segment = ease_segment();
        let first = solve_t_at_x(&segment, 0.37, &configuration);
        let second = solve_t_at_x(&segment, 0.37, &configuration);
        assert_eq!(first, second);
    }
}
