//! # Interpolated curves
//!
//! An [`InterpolatedCurve`] turns the discrete samples of a
//! [`TimeSeries`](crate::time_series::TimeSeries) into a position queryable at any
//! instant of the sampled span, which is what an animated playback needs between two
//! propagated points.
//!
//! Overview
//! -----------------
//! * The curve is built **once** from a snapshot of the samples; it owns its data and is
//!   not affected by later changes to the source series.
//! * Samples are re-ordered chronologically at build time.
//! * Queries use a sliding window of `degree + 1` samples around the requested instant
//!   and evaluate the Lagrange polynomial through them.
//!
//! Fallback
//! -----------------
//! With fewer than `degree + 1` samples a polynomial of the requested degree cannot be
//! built. The curve then falls back to [`InterpolationAlgorithm::Linear`]: straight
//! segments between the stored samples, exact at each stored instant, with no smoothness
//! guarantee. [`InterpolatedCurve::algorithm`] reports the algorithm actually in use.
//!
//! Example
//! -----------------
//! ```rust
//! use hifitime::Epoch;
//! use nalgebra::Vector3;
//! use satpath::time::add_seconds;
//! use satpath::time_series::TimeSeries;
//!
//! let t0 = Epoch::from_gregorian_utc_hms(2024, 3, 1, 0, 0, 0);
//! let mut series = TimeSeries::new();
//! for k in 0..4 {
//!     let t = 100.0 * k as f64;
//!     series.add_sample(add_seconds(&t0, t), Vector3::new(t, 2.0 * t, 0.0));
//! }
//!
//! let curve = series.to_interpolated_curve(2);
//! let position = curve.position_at(&add_seconds(&t0, 150.0))?;
//! assert!((position - Vector3::new(150.0, 300.0, 0.0)).norm() < 1e-6);
//! # Ok::<(), satpath::satpath_errors::SatpathError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use hifitime::Epoch;
use log::warn;
use nalgebra::Vector3;

use crate::satpath_errors::SatpathError;
use crate::time::{add_seconds, seconds_between};
use crate::time_series::{instant_key, Sample};

mod lagrange;

use lagrange::{lagrange_polynomial, linear, window_bounds};

/// Polynomial scheme used between samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationAlgorithm {
    /// Lagrange polynomial through a window of `degree + 1` samples.
    Lagrange,
    /// Straight segments between consecutive samples (degree 1).
    Linear,
}

impl fmt::Display for InterpolationAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationAlgorithm::Lagrange => write!(f, "Lagrange"),
            InterpolationAlgorithm::Linear => write!(f, "Linear"),
        }
    }
}

/// A read-only, continuous-time view of a sampled trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve {
    epochs: Vec<Epoch>,
    /// Seconds elapsed since `epochs[0]`, strictly increasing.
    times: Vec<f64>,
    positions: Vec<Vector3<f64>>,
    algorithm: InterpolationAlgorithm,
    degree: usize,
    requested_degree: usize,
    degraded: bool,
}

impl InterpolatedCurve {
    /// Build a curve from a set of samples.
    ///
    /// Arguments
    /// -----------------
    /// * `samples` – samples in any order. When several share an instant, the last one
    ///   in the slice wins, as with [`TimeSeries::add_sample`](crate::time_series::TimeSeries::add_sample).
    /// * `algorithm` – the requested interpolation scheme.
    /// * `degree` – the requested polynomial degree (ignored for [`InterpolationAlgorithm::Linear`]).
    ///
    /// Return
    /// ----------
    /// * A curve using `algorithm`, or the linear fallback when there are not enough
    ///   samples for the requested degree.
    pub fn new(samples: &[Sample], algorithm: InterpolationAlgorithm, degree: usize) -> Self {
        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.epoch.partial_cmp(&b.epoch).unwrap_or(Ordering::Equal));
        // stable sort: the last write of an instant ends its run of duplicates
        sorted.reverse();
        sorted.dedup_by_key(|s| instant_key(&s.epoch));
        sorted.reverse();

        let (algorithm, effective_degree, degraded) = match algorithm {
            InterpolationAlgorithm::Lagrange if sorted.len() > degree => {
                (InterpolationAlgorithm::Lagrange, degree, false)
            }
            InterpolationAlgorithm::Lagrange => {
                warn!(
                    "{} samples are not enough for a degree {} Lagrange curve, falling back to linear interpolation",
                    sorted.len(),
                    degree
                );
                (InterpolationAlgorithm::Linear, 1, true)
            }
            InterpolationAlgorithm::Linear => (InterpolationAlgorithm::Linear, 1, false),
        };

        let epochs: Vec<Epoch> = sorted.iter().map(|s| s.epoch).collect();
        let times = match epochs.first() {
            Some(reference) => epochs
                .iter()
                .map(|e| seconds_between(reference, e))
                .collect(),
            None => Vec::new(),
        };
        let positions = sorted.iter().map(|s| s.position).collect();

        InterpolatedCurve {
            epochs,
            times,
            positions,
            algorithm,
            degree: effective_degree,
            requested_degree: degree,
            degraded,
        }
    }

    /// The interpolation scheme actually used by [`Self::position_at`].
    pub fn algorithm(&self) -> InterpolationAlgorithm {
        self.algorithm
    }

    /// The polynomial degree actually used by [`Self::position_at`].
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The degree asked for when the curve was built.
    pub fn requested_degree(&self) -> usize {
        self.requested_degree
    }

    /// `true` if the curve fell back to linear interpolation for lack of samples.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// First sampled instant.
    pub fn start(&self) -> Option<Epoch> {
        self.epochs.first().copied()
    }

    /// Last sampled instant.
    pub fn stop(&self) -> Option<Epoch> {
        self.epochs.last().copied()
    }

    /// Position at an arbitrary instant of the sampled span.
    ///
    /// Return
    /// ----------
    /// * The stored position when `epoch` is a sampled instant, the interpolated one
    ///   otherwise.
    /// * `Err(SatpathError::EmptyCurve)` if the curve holds no sample.
    /// * `Err(SatpathError::OutOfInterpolationRange)` if `epoch` is before the first or
    ///   after the last sample: the curve never extrapolates.
    pub fn position_at(&self, epoch: &Epoch) -> Result<Vector3<f64>, SatpathError> {
        let (Some(start), Some(stop)) = (self.start(), self.stop()) else {
            return Err(SatpathError::EmptyCurve);
        };

        let t = seconds_between(&start, epoch);
        let t_max = self.times[self.times.len() - 1];
        if !(0.0..=t_max).contains(&t) {
            return Err(SatpathError::OutOfInterpolationRange {
                epoch: *epoch,
                start,
                stop,
            });
        }

        // first sample at or after t
        let upper = self.times.partition_point(|ti| *ti < t);
        if self.times[upper] == t {
            return Ok(self.positions[upper]);
        }
        let lower = upper - 1;

        let position = match self.algorithm {
            InterpolationAlgorithm::Linear => linear(
                self.times[lower],
                &self.positions[lower],
                self.times[upper],
                &self.positions[upper],
                t,
            ),
            InterpolationAlgorithm::Lagrange => {
                let (first, last) = window_bounds(lower, self.degree, self.times.len());
                lagrange_polynomial(
                    &self.times[first..=last],
                    &self.positions[first..=last],
                    t,
                )
            }
        };
        Ok(position)
    }

    /// Evaluate the curve at regular intervals over its whole span.
    ///
    /// The first frame is the first sample; frames are `step_seconds` apart and the last
    /// one is at or before the last sample. A non-positive step yields no frame.
    pub fn frames(&self, step_seconds: f64) -> Vec<(Epoch, Vector3<f64>)> {
        let (Some(start), Some(&t_max)) = (self.start(), self.times.last()) else {
            return Vec::new();
        };
        if step_seconds.is_nan() || step_seconds <= 0.0 {
            return Vec::new();
        }

        let n_frames = (t_max / step_seconds).floor() as usize + 1;
        (0..n_frames)
            .filter_map(|k| {
                let epoch = add_seconds(&start, k as f64 * step_seconds);
                self.position_at(&epoch).ok().map(|p| (epoch, p))
            })
            .collect()
    }
}
