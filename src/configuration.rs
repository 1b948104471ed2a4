use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

// ─────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────

pub const NEWTON_TOLERANCE: f64 = 1e-6;
pub const NEWTON_MAX_ITERATIONS: usize = 15;
/// Newton steps are skipped while |dx/dt| is at or below this value.
pub const DERIVATIVE_EPSILON: f64 = 1e-6;
pub const BISECTION_TOLERANCE: f64 = 1e-6;
pub const BISECTION_MAX_ITERATIONS: usize = 100;
pub const JITTER_ATTEMPTS: usize = 10;
/// Attempt `n` moves the target x by `n * JITTER_STEP`.
pub const JITTER_STEP: f64 = 0.0001;
/// Internal y values smaller than this in magnitude are reported as 0.
pub const ZERO_SNAP_THRESHOLD: f64 = 1e-15;

// ─────────────────────────────────────────────
// ConfigurationError
// ─────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: &'static str },
}

// ─────────────────────────────────────────────
// SolverConfiguration
// ─────────────────────────────────────────────

/// Numeric knobs of the curve query. Missing JSON fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfiguration {
    pub newton_tolerance: f64,
    pub newton_max_iterations: usize,
    pub derivative_epsilon: f64,
    pub bisection_tolerance: f64,
    pub bisection_max_iterations: usize,
    pub jitter_attempts: usize,
    pub jitter_step: f64,
    pub zero_snap_threshold: f64,
}

impl Default for SolverConfiguration {
    fn default() -> Self {
        SolverConfiguration {
            newton_tolerance: NEWTON_TOLERANCE,
            newton_max_iterations: NEWTON_MAX_ITERATIONS,
            derivative_epsilon: DERIVATIVE_EPSILON,
            bisection_tolerance: BISECTION_TOLERANCE,
            bisection_max_iterations: BISECTION_MAX_ITERATIONS,
            jitter_attempts: JITTER_ATTEMPTS,
            jitter_step: JITTER_STEP,
            zero_snap_threshold: ZERO_SNAP_THRESHOLD,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigurationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidValue { field, reason: "must be positive and finite" })
    }
}

fn at_least_one(field: &'static str, value: usize) -> Result<(), ConfigurationError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidValue { field, reason: "must be at least 1" })
    }
}

impl SolverConfiguration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        positive("newton_tolerance", self.newton_tolerance)?;
        positive("derivative_epsilon", self.derivative_epsilon)?;
        positive("bisection_tolerance", self.bisection_tolerance)?;
        at_least_one("newton_max_iterations", self.newton_max_iterations)?;
        at_least_one("bisection_max_iterations", self.bisection_max_iterations)?;
        at_least_one("jitter_attempts", self.jitter_attempts)?;
        if !(self.jitter_step.is_finite() && self.jitter_step >= 0.0) {
            return Err(ConfigurationError::InvalidValue {
                field: "jitter_step",
                reason: "must be non-negative and finite",
            });
        }
        if !(self.zero_snap_threshold.is_finite() && self.zero_snap_threshold >= 0.0) {
            return Err(ConfigurationError::InvalidValue {
                field: "zero_snap_threshold",
                reason: "must be non-negative and finite",
            });
        }
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<SolverConfiguration, ConfigurationError> {
        let configuration: SolverConfiguration = serde_json::from_str(json)?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<SolverConfiguration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: SolverConfiguration = serde_json::from_reader(reader)?;
        configuration.validate()?;
        log::info!("solver configuration loaded from {}", file_path.as_ref().display());
        Ok(configuration)
    }
}
