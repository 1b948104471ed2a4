use crate::configuration::SolverConfiguration;

use super::queryerror::QueryCurveError;
use super::scaledbezierchain::ScaledBezierChain;

/// Decodes an encoded chain once and answers any number of queries on it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveQueryFunction {
    chain: ScaledBezierChain,
    configuration: SolverConfiguration
}

impl CurveQueryFunction {
    pub fn new(chain: ScaledBezierChain, configuration: SolverConfiguration) -> CurveQueryFunction {
        CurveQueryFunction { chain, configuration }
    }

    pub fn from_encoded(encoded_chain: &str) -> Result<CurveQueryFunction, QueryCurveError> {
        let chain = ScaledBezierChain::from_encoded(encoded_chain)?;
        Ok(CurveQueryFunction::new(chain, SolverConfiguration::default()))
    }

    /// The configuration is validated on every query; an invalid one makes
    /// queries fail with [`QueryCurveError::InvalidConfiguration`].
    pub fn with_configuration(mut self, configuration: SolverConfiguration) -> CurveQueryFunction {
        self.configuration = configuration;
        self
    }

    pub fn chain(&self) -> &ScaledBezierChain {
        &self.chain
    }

    pub fn configuration(&self) -> &SolverConfiguration {
        &self.configuration
    }

    pub fn query(&self, scaled_x: f64) -> Result<Option<f64>, QueryCurveError> {
        self.chain.query_with(scaled_x, &self.configuration)
    }

    pub fn into_fn(self) -> impl Fn(f64) -> Result<Option<f64>, QueryCurveError> {
        move |scaled_x| self.query(scaled_x)
    }
}

/// Shorthand for [`CurveQueryFunction::from_encoded`] followed by [`CurveQueryFunction::into_fn`].
///
/// The closure owns the decoded chain and does not borrow `encoded_chain`.
pub fn encoded_curve_query_function(
    encoded_chain: &str,
) -> Result<impl Fn(f64) -> Result<Option<f64>, QueryCurveError> + use<>, QueryCurveError> {
    Ok(CurveQueryFunction::from_encoded(encoded_chain)?.into_fn())
}
