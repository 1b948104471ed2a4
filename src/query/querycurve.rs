use crate::configuration::SolverConfiguration;
use crate::encoding::chaincodec::decode;
use crate::math::curve::beziersegment::BezierSegment;
use crate::math::curve::curve::{
    ParametricCurve,
    PiecewiseCurve
};
use crate::math::rootsolver::solve_t_at_x;

use super::queryerror::QueryCurveError;
use super::scaledbezierchain::{
    ANCHOR_STRIDE,
    FIRST_ANCHOR,
    ScaledBezierChain
};

/// Finds the y value for `scaled_x` on a scaled bezier chain.
///
/// `Ok(None)` means `scaled_x` lies outside the curve's domain.
pub fn query_curve(curve: &[f64], scaled_x: f64) -> Result<Option<f64>, QueryCurveError> {
    query_curve_with(curve, scaled_x, &SolverConfiguration::default())
}

pub fn query_curve_with(
    curve: &[f64],
    scaled_x: f64,
    configuration: &SolverConfiguration,
) -> Result<Option<f64>, QueryCurveError> {
    let chain = ScaledBezierChain::new(curve.to_vec())?;
    query_chain(&chain, scaled_x, configuration)
}

/// Decodes `encoded_chain` and queries it once. Prefer
/// [`CurveQueryFunction`](super::curvequeryfunction::CurveQueryFunction)
/// when the same chain is queried repeatedly.
pub fn query_encoded_curve(encoded_chain: &str, scaled_x: f64) -> Result<Option<f64>, QueryCurveError> {
    query_curve(&decode(encoded_chain)?, scaled_x)
}

pub(crate) fn query_chain(
    chain: &ScaledBezierChain,
    scaled_x: f64,
    configuration: &SolverConfiguration,
) -> Result<Option<f64>, QueryCurveError> {
    configuration
        .validate()
        .map_err(|error| QueryCurveError::InvalidConfiguration(error.to_string()))?;

    let values = chain.values();
    let x = chain.to_internal_x(scaled_x);

    if !chain.contains_x(x) {
        return Ok(None);
    }

    // Values queried on an anchor, in particular the first and last, must be
    // exact, so they bypass root finding.
    if let Some(i) = (FIRST_ANCHOR..values.len())
        .step_by(ANCHOR_STRIDE)
        .find(|&i| values[i] == x)
    {
        return Ok(Some(chain.to_external_y(values[i + 1])));
    }

    let segment = find_segment(values, x).ok_or(QueryCurveError::UnableToSolve { x: scaled_x })?;

    for attempt in 0..configuration.jitter_attempts {
        let tweak = configuration.jitter_step * attempt as f64;
        let target_x = if x >= 1.0 { x - tweak } else { x + tweak };
        log::trace!("query attempt {} for x = {} (target {})", attempt, x, target_x);

        if let Some(t) = solve_t_at_x(&segment, target_x, configuration).t() {
            let y = segment.point_at(t).y();
            let y = if y.abs() < configuration.zero_snap_threshold { 0.0 } else { y };
            return Ok(Some(chain.to_external_y(y)));
        }
    }

    log::warn!(
        "unable to solve for x = {} after {} attempts",
        scaled_x,
        configuration.jitter_attempts
    );
    Err(QueryCurveError::UnableToSolve { x: scaled_x })
}

/// First segment whose anchor x range contains `x`, bounds inclusive.
fn find_segment(values: &[f64], x: f64) -> Option<BezierSegment> {
    (FIRST_ANCHOR..values.len().saturating_sub(7))
        .step_by(ANCHOR_STRIDE)
        .find(|&i| x >= values[i] && x <= values[i + ANCHOR_STRIDE])
        .and_then(|i| BezierSegment::from_slice(&values[i..i + 8]))
}
