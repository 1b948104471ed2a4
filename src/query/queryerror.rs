use thiserror::Error;

use crate::encoding::encodingerror::EncodingError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryCurveError {
    #[error("scale factors cannot be 0 (x scale {scale_x}, y scale {scale_y})")]
    InvalidScale { scale_x: f64, scale_y: f64 },

    #[error("a scaled bezier chain cannot have {0} values")]
    InvalidChainLength(usize),

    #[error("failed to find y for x = {x} on curve")]
    UnableToSolve { x: f64 },

    #[error("invalid solver configuration: {0}")]
    InvalidConfiguration(String),

    #[error("cannot build a range from {from} to {to}")]
    InvalidRange { from: f64, to: f64 },

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
