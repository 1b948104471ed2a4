use serde::{
    Deserialize,
    Serialize
};

use crate::configuration::SolverConfiguration;
use crate::encoding::chaincodec::{
    decode,
    encode,
    is_valid_chain_length
};
use crate::encoding::encodingerror::EncodingError;
use crate::math::curve::beziersegment::BezierSegment;
use crate::math::curve::curve::PiecewiseCurve;
use crate::math::curve::point2d::Point2D;

use super::querycurve::query_chain;
use super::queryerror::QueryCurveError;

// Layout of the header in front of the bezier chain.
const SCALE_X: usize = 0;
const SCALE_Y: usize = 1;
const OFFSET_X: usize = 2;
const OFFSET_Y: usize = 3;
pub(crate) const FIRST_ANCHOR: usize = 4;
/// Distance between consecutive anchors: the anchor plus two handles.
pub(crate) const ANCHOR_STRIDE: usize = 6;

/// Checks that neither scale factor is zero, then the chain length.
pub fn validate(values: &[f64]) -> Result<(), QueryCurveError> {
    if let (Some(&scale_x), Some(&scale_y)) = (values.get(SCALE_X), values.get(SCALE_Y)) {
        if scale_x == 0.0 || scale_y == 0.0 {
            return Err(QueryCurveError::InvalidScale { scale_x, scale_y });
        }
    }
    if !is_valid_chain_length(values.len()) {
        return Err(QueryCurveError::InvalidChainLength(values.len()));
    }
    Ok(())
}

/// Scale factors, offsets, then a chain of cubic segments sharing anchors:
///
/// ```text
/// sx sy ox oy | px py hx hy hx hy px py hx hy hx hy px py ...
/// ```
///
/// Internal x relates to external x by `x = external / sx - ox`, internal y
/// to external y by `external = (y + oy) * sy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ScaledBezierChain {
    values: Vec<f64>
}

impl ScaledBezierChain {
    pub fn new(values: Vec<f64>) -> Result<ScaledBezierChain, QueryCurveError> {
        validate(&values)?;
        Ok(ScaledBezierChain { values })
    }

    pub fn from_encoded(encoded_chain: &str) -> Result<ScaledBezierChain, QueryCurveError> {
        ScaledBezierChain::new(decode(encoded_chain)?)
    }

    pub fn encode(&self) -> Result<String, EncodingError> {
        encode(&self.values)
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn scale_x(&self) -> f64 {
        self.values[SCALE_X]
    }

    pub fn scale_y(&self) -> f64 {
        self.values[SCALE_Y]
    }

    pub fn offset_x(&self) -> f64 {
        self.values[OFFSET_X]
    }

    pub fn offset_y(&self) -> f64 {
        self.values[OFFSET_Y]
    }

    pub fn segment_count(&self) -> usize {
        (self.values.len() - FIRST_ANCHOR - 2) / ANCHOR_STRIDE
    }

    pub fn segment(&self, index: usize) -> Option<BezierSegment> {
        let start = FIRST_ANCHOR + index * ANCHOR_STRIDE;
        self.values
            .get(start..start + 8)
            .and_then(BezierSegment::from_slice)
    }

    pub fn segments(&self) -> impl Iterator<Item = BezierSegment> + '_ {
        self.values[FIRST_ANCHOR..]
            .windows(8)
            .step_by(ANCHOR_STRIDE)
            .filter_map(BezierSegment::from_slice)
    }

    pub fn to_internal_x(&self, scaled_x: f64) -> f64 {
        scaled_x / self.scale_x() - self.offset_x()
    }

    /// Maps an internal y to external coordinates, never returning -0.
    pub fn to_external_y(&self, y: f64) -> f64 {
        let scaled = (y + self.offset_y()) * self.scale_y();
        if scaled == 0.0 { 0.0 } else { scaled }
    }

    pub fn query(&self, scaled_x: f64) -> Result<Option<f64>, QueryCurveError> {
        query_chain(self, scaled_x, &SolverConfiguration::default())
    }

    pub fn query_with(
        &self,
        scaled_x: f64,
        configuration: &SolverConfiguration,
    ) -> Result<Option<f64>, QueryCurveError> {
        query_chain(self, scaled_x, configuration)
    }
}

impl PiecewiseCurve for ScaledBezierChain {
    fn anchors(&self) -> Vec<Point2D> {
        self.values[FIRST_ANCHOR..]
            .chunks(ANCHOR_STRIDE)
            .map(|chunk| Point2D::new(chunk[0], chunk[1]))
            .collect()
    }

    fn min_x(&self) -> f64 {
        self.values[FIRST_ANCHOR]
    }

    fn max_x(&self) -> f64 {
        self.values[self.values.len() - 2]
    }
}

impl TryFrom<Vec<f64>> for ScaledBezierChain {
    type Error = QueryCurveError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        ScaledBezierChain::new(values)
    }
}

impl From<ScaledBezierChain> for Vec<f64> {
    fn from(chain: ScaledBezierChain) -> Vec<f64> {
        chain.values
    }
}
