use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{DEFAULT_INTERPOLATION_DEGREE, DEFAULT_STEP_SECONDS};
use crate::satpath_errors::SatpathError;

/// Configuration of a propagation run.
///
/// Fields
/// -----------------
/// * `step_seconds` – spacing between two propagated instants (s). Larger steps are
///   cheaper to propagate but rely more on interpolation for a smooth display.
/// * `interpolation_degree` – degree of the Lagrange polynomial used when the resulting
///   series is turned into a curve.
///
/// Defaults
/// -----------------
/// * `step_seconds`: 100 s
/// * `interpolation_degree`: 8
///
/// See also
/// -----------------
/// * [`crate::interval_propagator::IntervalPropagator`] – consumes these parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationParams {
    pub step_seconds: f64,
    pub interpolation_degree: usize,
}

impl PropagationParams {
    /// Equivalent to [`PropagationParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`PropagationParamsBuilder`] initialized with the default values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use satpath::interval_propagator::PropagationParams;
    ///
    /// let params = PropagationParams::builder()
    ///     .step_seconds(60.0)
    ///     .interpolation_degree(5)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(params.step_seconds, 60.0);
    /// ```
    pub fn builder() -> PropagationParamsBuilder {
        PropagationParamsBuilder::new()
    }
}

impl Default for PropagationParams {
    fn default() -> Self {
        PropagationParams {
            step_seconds: DEFAULT_STEP_SECONDS,
            interpolation_degree: DEFAULT_INTERPOLATION_DEGREE,
        }
    }
}

/// Builder for [`PropagationParams`], with validation.
#[derive(Debug, Clone, Default)]
pub struct PropagationParamsBuilder {
    params: PropagationParams,
}

impl PropagationParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: PropagationParams::default(),
        }
    }

    pub fn step_seconds(mut self, v: f64) -> Self {
        self.params.step_seconds = v;
        self
    }

    pub fn interpolation_degree(mut self, v: usize) -> Self {
        self.params.interpolation_degree = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `step_seconds` must be finite and strictly positive (NaN is rejected).
    /// * `interpolation_degree >= 1`.
    ///
    /// Returns
    /// -----------------
    /// * `Err(SatpathError::InvalidPropagationParameter)` if a rule fails.
    pub fn build(self) -> Result<PropagationParams, SatpathError> {
        let p = &self.params;

        if !(p.step_seconds.is_finite() && p.step_seconds > 0.0) {
            return Err(SatpathError::InvalidPropagationParameter(
                "step_seconds must be finite and > 0".into(),
            ));
        }
        if p.interpolation_degree == 0 {
            return Err(SatpathError::InvalidPropagationParameter(
                "interpolation_degree must be >= 1".into(),
            ));
        }

        Ok(self.params)
    }
}

impl fmt::Display for PropagationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Propagation Parameters")?;
            writeln!(f, "----------------------")?;
            writeln!(
                f,
                "  step_seconds         = {:.3} s          # Spacing between propagated instants",
                self.step_seconds
            )?;
            writeln!(
                f,
                "  interpolation_degree = {}                # Lagrange polynomial degree",
                self.interpolation_degree
            )
        } else {
            write!(
                f,
                "PropagationParams(step={:.1}s, degree={})",
                self.step_seconds, self.interpolation_degree
            )
        }
    }
}

#[cfg(test)]
mod params_test {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PropagationParams::default();
        assert_eq!(params.step_seconds, 100.0);
        assert_eq!(params.interpolation_degree, 8);
        assert_eq!(PropagationParams::builder().build().unwrap(), params);
    }

    #[test]
    fn test_builder_rejects_bad_step() {
        for step in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = PropagationParams::builder()
                .step_seconds(step)
                .build()
                .unwrap_err();
            assert_eq!(
                err,
                SatpathError::InvalidPropagationParameter(
                    "step_seconds must be finite and > 0".into()
                )
            );
        }
    }

    #[test]
    fn test_builder_rejects_zero_degree() {
        let err = PropagationParams::builder()
            .interpolation_degree(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, SatpathError::InvalidPropagationParameter(_)));
    }

    #[test]
    fn test_display() {
        let params = PropagationParams::default();
        assert_eq!(
            format!("{params}"),
            "PropagationParams(step=100.0s, degree=8)"
        );
        assert!(format!("{params:#}").contains("interpolation_degree = 8"));
    }
}
