//! Centralized configuration values shared across the glyph extrusion pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance for point equality.
///
/// Two points are the same point when both coordinate differences are at most
/// this value. Used by the contour sanitizer to find closing duplicates and
/// degenerate loops.
///
/// # Examples
/// ```
/// use config::constants::POINT_EPSILON;
/// assert_eq!(POINT_EPSILON, 1.0e-11);
/// ```
pub const POINT_EPSILON: f64 = 1.0e-11;

/// Largest number of points strictly inside a repeated-vertex span that the
/// sanitizer will collapse as a degenerate loop.
///
/// Longer spans are rejected because they may hide a genuine
/// self-intersection.
///
/// # Examples
/// ```
/// use config::constants::MAX_LOOP_INTERIOR_POINTS;
/// assert_eq!(MAX_LOOP_INTERIOR_POINTS, 2);
/// ```
pub const MAX_LOOP_INTERIOR_POINTS: usize = 2;

// =============================================================================
// EXTRUSION CONSTANTS
// =============================================================================

/// Z coordinate of the lower cap.
pub const BOTTOM_Z: f64 = 0.0;

/// Z coordinate of the upper cap.
pub const TOP_Z: f64 = 1.0;

// =============================================================================
// INPUT / OUTPUT CONSTANTS
// =============================================================================

/// Default maximum deviation allowed when flattening curves into polylines.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_FLATTEN_TOLERANCE;
/// assert!(DEFAULT_FLATTEN_TOLERANCE > 0.0);
/// ```
pub const DEFAULT_FLATTEN_TOLERANCE: f64 = 0.1;

/// Significant digits written for each coordinate of an OBJ vertex line.
///
/// # Examples
/// ```
/// use config::constants::OBJ_SIGNIFICANT_DIGITS;
/// let line = format!("{:.*e}", OBJ_SIGNIFICANT_DIGITS - 1, 0.125);
/// assert_eq!(line, "1.250000000e-1");
/// ```
pub const OBJ_SIGNIFICANT_DIGITS: usize = 10;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are equal within `epsilon` (inclusive).
///
/// # Example
///
/// ```rust
/// use config::constants::{approx_equal, POINT_EPSILON};
///
/// assert!(approx_equal(1.0, 1.0 + 1e-12, POINT_EPSILON));
/// assert!(!approx_equal(1.0, 1.0 + 1e-9, POINT_EPSILON));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

// =============================================================================
// PIPELINE CONFIGURATION
// =============================================================================

/// Immutable snapshot of the numeric settings that drive one extrusion run.
///
/// # Examples
/// ```
/// use config::constants::PipelineConfig;
/// let config = PipelineConfig::default();
/// assert!(config.epsilon > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Point equality tolerance used by the sanitizer.
    pub epsilon: f64,
    /// Largest loop interior (in points) the sanitizer may remove.
    pub max_loop_interior: usize,
    /// Curve flattening tolerance used by the path parser.
    pub flatten_tolerance: f64,
}

impl PipelineConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerances.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PipelineConfig;
    /// let cfg = PipelineConfig::new(1.0e-9, 2, 0.05).expect("valid config");
    /// assert_eq!(cfg.flatten_tolerance, 0.05);
    /// ```
    pub fn new(
        epsilon: f64,
        max_loop_interior: usize,
        flatten_tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(ConfigError::InvalidEpsilon(epsilon));
        }
        if !(flatten_tolerance.is_finite() && flatten_tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(flatten_tolerance));
        }
        Ok(Self {
            epsilon,
            max_loop_interior,
            flatten_tolerance,
        })
    }

    /// Returns a copy with a different flattening tolerance, validated.
    pub fn with_flatten_tolerance(self, flatten_tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(self.epsilon, self.max_loop_interior, flatten_tolerance)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            epsilon: POINT_EPSILON,
            max_loop_interior: MAX_LOOP_INTERIOR_POINTS,
            flatten_tolerance: DEFAULT_FLATTEN_TOLERANCE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the point tolerance is zero, negative or not finite.
    InvalidEpsilon(f64),
    /// Raised when the flattening tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEpsilon(value) => {
                write!(f, "epsilon must be positive and finite: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "flatten tolerance must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
