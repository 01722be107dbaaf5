//! # Fixed-step propagation over a time interval
//!
//! [`IntervalPropagator`] evaluates an [`OrbitPropagator`] at regularly spaced instants
//! of a half-open interval `[start, stop)` and collects renderable positions into a
//! [`TimeSeries`].
//!
//! ## Pipeline
//!
//! For each instant `start + k·step` (`k = 0, 1, …`) strictly before `stop`:
//!
//! 1. [`OrbitPropagator::propagate`] → inertial position (km),
//! 2. [`OrbitPropagator::sidereal_time`] → Earth rotation angle,
//! 3. [`eci_to_geodetic`] → longitude, latitude, height (km),
//! 4. [`Geodetic::to_cartesian`] → ECEF position (m, height scaled ×1000),
//! 5. [`TimeSeries::add_sample`].
//!
//! The run performs `ceil((stop − start) / step)` evaluations. The step is rounded once
//! to whole nanoseconds and each instant is computed from `start` in integer
//! nanoseconds, so long runs do not drift and no instant lands at or after `stop`.
//!
//! ## Failures
//!
//! * `stop <= start` produces an empty series.
//! * An instant where the propagator fails (decayed object, diverging elements) is
//!   skipped; the run goes on with the next instant. Use
//!   [`IntervalPropagator::propagate_interval_report`] to get the skipped instants and
//!   detect the case where every instant failed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use satpath::interval_propagator::{IntervalPropagator, PropagationParams};
//! use satpath::propagator::sgp4_propagator::Sgp4Satellite;
//! use satpath::time::add_hours;
//!
//! let iss = Sgp4Satellite::from_tle(
//!     "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992",
//!     "2 25544  51.6433  59.2583 0008217  16.4489 347.6017 15.51174618173442",
//! )?;
//! let start = iss.epoch();
//! let propagator = IntervalPropagator::new(&iss, PropagationParams::default());
//! let series = propagator.propagate_interval(&start, &add_hours(&start, 1.0));
//! let curve = series.to_interpolated_curve(propagator.params().interpolation_degree);
//! # Ok::<(), satpath::satpath_errors::SatpathError>(())
//! ```

use hifitime::{Duration, Epoch};
use log::{debug, warn};
use nalgebra::Vector3;

use crate::geodesy::{eci_to_geodetic, Geodetic};
use crate::propagator::OrbitPropagator;
use crate::satpath_errors::SatpathError;
use crate::time::{add_seconds, seconds_to_duration};
use crate::time_series::TimeSeries;

mod params;

pub use params::{PropagationParams, PropagationParamsBuilder};

/// Outcome of a propagation run.
///
/// Fields
/// -----------------
/// * `series` – the successfully converted samples.
/// * `skipped` – the instants where the propagator failed, in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct IntervalReport {
    pub series: TimeSeries,
    pub skipped: Vec<Epoch>,
}

impl IntervalReport {
    /// Number of instants the run tried to evaluate.
    pub fn attempted(&self) -> usize {
        self.series.len() + self.skipped.len()
    }

    /// `true` if at least one instant was attempted and none succeeded.
    pub fn all_failed(&self) -> bool {
        self.series.is_empty() && !self.skipped.is_empty()
    }
}

/// Drives an [`OrbitPropagator`] across time intervals at a fixed step.
#[derive(Debug, Clone)]
pub struct IntervalPropagator<P> {
    propagator: P,
    params: PropagationParams,
}

impl<P: OrbitPropagator> IntervalPropagator<P> {
    /// Wrap a propagator (or a reference to one) with its run parameters.
    pub fn new(propagator: P, params: PropagationParams) -> Self {
        IntervalPropagator { propagator, params }
    }

    pub fn params(&self) -> &PropagationParams {
        &self.params
    }

    pub fn propagator(&self) -> &P {
        &self.propagator
    }

    /// Geodetic coordinates of the object at `epoch` (height in km).
    pub fn geodetic_at(&self, epoch: &Epoch) -> Result<Geodetic, SatpathError> {
        let state = self.propagator.propagate(epoch)?;
        let gmst = self.propagator.sidereal_time(epoch);
        Ok(eci_to_geodetic(&state.position, gmst))
    }

    /// Renderer position of the object at `epoch` (ECEF, meters).
    pub fn position_at(&self, epoch: &Epoch) -> Result<Vector3<f64>, SatpathError> {
        Ok(self.geodetic_at(epoch)?.to_cartesian())
    }

    /// Sample `[start, stop)` and return the converted positions.
    ///
    /// Instants where the propagator fails are skipped. See the module documentation
    /// for the full pipeline.
    pub fn propagate_interval(&self, start: &Epoch, stop: &Epoch) -> TimeSeries {
        self.propagate_interval_report(start, stop).series
    }

    /// Same as [`Self::propagate_interval`], also reporting the skipped instants.
    pub fn propagate_interval_report(&self, start: &Epoch, stop: &Epoch) -> IntervalReport {
        let step_seconds = self.params.step_seconds;
        let step_ns = if step_seconds.is_finite() {
            seconds_to_duration(step_seconds).total_nanoseconds()
        } else {
            0
        };
        if step_ns <= 0 {
            warn!("Propagation step must be positive, got {step_seconds} s: no sample produced");
            return IntervalReport::default();
        }

        let span_ns = (*stop - *start).total_nanoseconds();
        if span_ns <= 0 {
            warn!("Empty propagation interval [{start}, {stop}): no sample produced");
            return IntervalReport::default();
        }

        let expected = instant_count(span_ns, step_ns);
        debug!("Propagating [{start}, {stop}) every {step_seconds} s ({expected} instants)");

        let mut report = IntervalReport {
            series: TimeSeries::with_capacity(expected.min(MAX_PREALLOCATED_SAMPLES)),
            skipped: Vec::new(),
        };

        let instants = (0..expected as i128)
            .map(|k| *start + Duration::from_total_nanoseconds(k * step_ns));

        for time in instants {
            match self.position_at(&time) {
                Ok(position) => report.series.add_sample(time, position),
                Err(err) => {
                    warn!("Skipping {time}: {err}");
                    report.skipped.push(time);
                }
            }
        }

        if report.all_failed() {
            warn!(
                "Propagation failed at every instant of [{start}, {stop}) ({} attempts)",
                report.skipped.len()
            );
        }
        report
    }

    /// Sample `[start, stop)` plus the first instant at or after `stop`.
    ///
    /// The extra sample lets a curve built from the result answer queries anywhere in
    /// `[start, stop)`, up to `stop` itself. It is absent if the propagator fails there.
    pub fn propagate_covering(&self, start: &Epoch, stop: &Epoch) -> TimeSeries {
        let step_seconds = self.params.step_seconds;
        if !(step_seconds.is_finite() && step_seconds > 0.0) {
            return self.propagate_interval(start, stop);
        }
        self.propagate_interval(start, &add_seconds(stop, step_seconds))
    }
}

/// Upper bound on the samples reserved up front; longer runs grow the series as they go.
const MAX_PREALLOCATED_SAMPLES: usize = 1 << 16;

/// Number of instants `start + k·step` strictly before `start + span`.
fn instant_count(span_ns: i128, step_ns: i128) -> usize {
    let count = (span_ns + step_ns - 1) / step_ns;
    usize::try_from(count).unwrap_or(usize::MAX)
}

/// Sample `[start, stop)` every `step_seconds` with the default interpolation settings.
///
/// Convenience wrapper around [`IntervalPropagator`]; a non-positive step yields an
/// empty series.
pub fn propagate_interval<P: OrbitPropagator>(
    propagator: &P,
    start: &Epoch,
    stop: &Epoch,
    step_seconds: f64,
) -> TimeSeries {
    let params = PropagationParams {
        step_seconds,
        ..PropagationParams::default()
    };
    IntervalPropagator::new(propagator, params).propagate_interval(start, stop)
}
