//! # Time series of sampled positions
//!
//! [`TimeSeries`] accumulates `(instant, position)` samples produced by a propagation
//! run and exposes the two read paths a renderer needs:
//!
//! * [`TimeSeries::positions`] – the raw points, e.g. to draw an orbit polyline;
//! * [`TimeSeries::to_interpolated_curve`] – a continuous curve, e.g. to animate a
//!   marker between samples.
//!
//! ## Storage
//!
//! ```text
//! TimeSeries
//! ├── samples  Vec<Sample>                  insertion order
//! └── index    HashMap<i128, usize>         TAI nanoseconds → slot in `samples`
//! ```
//!
//! Instants are unique: adding a sample at an instant already present overwrites its
//! position in place (last write wins, the slot keeps its original rank).
//!
//! Raw extraction follows insertion order, which is chronological only if samples were
//! added with increasing instants. [`TimeSeries::is_chronological`] checks it.

use std::collections::HashMap;
use std::io;

use ahash::RandomState;
use hifitime::Epoch;
use itertools::Itertools;
use nalgebra::Vector3;
use serde::Serialize;

use crate::interpolation::{InterpolatedCurve, InterpolationAlgorithm};
use crate::satpath_errors::SatpathError;

/// A position tagged with the instant it was computed for.
///
/// Fields
/// --------
/// * `epoch` – the sampled instant (sub-second precision).
/// * `position` – Earth-centered Earth-fixed Cartesian position, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub epoch: Epoch,
    pub position: Vector3<f64>,
}

/// Absolute key of an instant: TAI nanoseconds since the hifitime reference epoch.
pub(crate) fn instant_key(epoch: &Epoch) -> i128 {
    epoch.to_tai_duration().total_nanoseconds()
}

/// One CSV row of [`TimeSeries::write_csv`].
#[derive(Debug, Serialize)]
struct SampleRecord {
    epoch: String,
    x_m: f64,
    y_m: f64,
    z_m: f64,
}

impl From<&Sample> for SampleRecord {
    fn from(sample: &Sample) -> Self {
        SampleRecord {
            epoch: sample.epoch.to_string(),
            x_m: sample.position.x,
            y_m: sample.position.y,
            z_m: sample.position.z,
        }
    }
}

/// Ordered collection of samples keyed by instant.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    samples: Vec<Sample>,
    index: HashMap<i128, usize, RandomState>,
}

impl TimeSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty series with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        TimeSeries {
            samples: Vec::with_capacity(capacity),
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Insert a sample, or overwrite the position stored at the same instant.
    ///
    /// Arguments
    /// -----------------
    /// * `epoch` – the sampled instant.
    /// * `position` – ECEF position in meters.
    ///
    /// Notes
    /// ----------
    /// * Calls may come in any order, but playback consumers expect non-decreasing
    ///   instants within one propagation run.
    pub fn add_sample(&mut self, epoch: Epoch, position: Vector3<f64>) {
        match self.index.get(&instant_key(&epoch)) {
            Some(&slot) => self.samples[slot].position = position,
            None => {
                self.index.insert(instant_key(&epoch), self.samples.len());
                self.samples.push(Sample { epoch, position });
            }
        }
    }

    /// The stored positions, in insertion order.
    pub fn positions(&self) -> Vec<Vector3<f64>> {
        self.samples.iter().map(|s| s.position).collect()
    }

    /// The stored samples, in insertion order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Position stored at exactly `epoch`, if any.
    pub fn get(&self, epoch: &Epoch) -> Option<&Vector3<f64>> {
        self.index
            .get(&instant_key(epoch))
            .map(|&slot| &self.samples[slot].position)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Earliest stored instant.
    pub fn start(&self) -> Option<Epoch> {
        self.samples.iter().map(|s| s.epoch).reduce(|a, b| if b < a { b } else { a })
    }

    /// Latest stored instant.
    pub fn stop(&self) -> Option<Epoch> {
        self.samples.iter().map(|s| s.epoch).reduce(|a, b| if b > a { b } else { a })
    }

    /// `true` if the insertion order is strictly increasing in time.
    pub fn is_chronological(&self) -> bool {
        self.samples
            .iter()
            .tuple_windows()
            .all(|(a, b)| instant_key(&a.epoch) < instant_key(&b.epoch))
    }

    /// Build a Lagrange curve of the given degree from the samples stored so far.
    ///
    /// With fewer than `degree + 1` samples the curve falls back to linear
    /// interpolation, see [`crate::interpolation`].
    pub fn to_interpolated_curve(&self, degree: usize) -> InterpolatedCurve {
        self.to_interpolated_curve_with(InterpolationAlgorithm::Lagrange, degree)
    }

    /// Build a curve with an explicit interpolation scheme.
    pub fn to_interpolated_curve_with(
        &self,
        algorithm: InterpolationAlgorithm,
        degree: usize,
    ) -> InterpolatedCurve {
        InterpolatedCurve::new(&self.samples, algorithm, degree)
    }

    /// Write the samples as CSV (`epoch,x_m,y_m,z_m`), in insertion order.
    ///
    /// Return
    /// ----------
    /// * `Err(SatpathError::CsvError)` if a row cannot be written.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), SatpathError> {
        let mut wtr = csv::Writer::from_writer(writer);
        for sample in &self.samples {
            wtr.serialize(SampleRecord::from(sample))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

impl Extend<Sample> for TimeSeries {
    fn extend<T: IntoIterator<Item = Sample>>(&mut self, iter: T) {
        for sample in iter {
            self.add_sample(sample.epoch, sample.position);
        }
    }
}

impl FromIterator<Sample> for TimeSeries {
    fn from_iter<T: IntoIterator<Item = Sample>>(iter: T) -> Self {
        let mut series = TimeSeries::new();
        series.extend(iter);
        series
    }
}

#[cfg(test)]
mod time_series_test {
    use super::*;
    use crate::time::add_seconds;

    fn t0() -> Epoch {
        Epoch::from_gregorian_utc_hms(2019, 6, 5, 12, 0, 0)
    }

    #[test]
    fn test_add_and_read_back() {
        let mut series = TimeSeries::new();
        assert!(series.is_empty());

        series.add_sample(t0(), Vector3::new(1.0, 2.0, 3.0));
        series.add_sample(add_seconds(&t0(), 100.0), Vector3::new(4.0, 5.0, 6.0));

        assert_eq!(series.len(), 2);
        assert_eq!(
            series.positions(),
            vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0)]
        );
        assert_eq!(series.get(&t0()), Some(&Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(series.get(&add_seconds(&t0(), 50.0)), None);
    }

    #[test]
    fn test_repeated_sample_does_not_grow() {
        let mut series = TimeSeries::new();
        let p = Vector3::new(1.0, 2.0, 3.0);
        series.add_sample(t0(), p);
        series.add_sample(t0(), p);
        series.add_sample(t0(), p);
        assert_eq!(series.len(), 1);
        assert_eq!(series.positions(), vec![p]);
    }

    #[test]
    fn test_last_write_wins_and_keeps_slot() {
        let mut series = TimeSeries::new();
        series.add_sample(t0(), Vector3::new(1.0, 0.0, 0.0));
        series.add_sample(add_seconds(&t0(), 100.0), Vector3::new(2.0, 0.0, 0.0));
        series.add_sample(t0(), Vector3::new(9.0, 0.0, 0.0));

        assert_eq!(
            series.positions(),
            vec![Vector3::new(9.0, 0.0, 0.0), Vector3::new(2.0, 0.0, 0.0)]
        );
    }

    #[test]
    fn test_same_instant_in_another_time_scale_is_the_same_key() {
        let mut series = TimeSeries::new();
        let utc = t0();
        let tai = Epoch::from_tai_duration(utc.to_tai_duration());
        series.add_sample(utc, Vector3::new(1.0, 0.0, 0.0));
        series.add_sample(tai, Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut series = TimeSeries::new();
        series.add_sample(add_seconds(&t0(), 200.0), Vector3::new(3.0, 0.0, 0.0));
        series.add_sample(t0(), Vector3::new(1.0, 0.0, 0.0));
        series.add_sample(add_seconds(&t0(), 100.0), Vector3::new(2.0, 0.0, 0.0));

        assert_eq!(
            series.positions(),
            vec![
                Vector3::new(3.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(2.0, 0.0, 0.0)
            ]
        );
        assert!(!series.is_chronological());
        assert_eq!(series.start(), Some(t0()));
        assert_eq!(series.stop(), Some(add_seconds(&t0(), 200.0)));
    }

    #[test]
    fn test_curve_is_a_snapshot() {
        let mut series: TimeSeries = (0..3)
            .map(|k| Sample {
                epoch: add_seconds(&t0(), k as f64 * 100.0),
                position: Vector3::new(k as f64, 0.0, 0.0),
            })
            .collect();
        assert!(series.is_chronological());

        let curve = series.to_interpolated_curve(1);
        series.add_sample(t0(), Vector3::new(100.0, 0.0, 0.0));
        series.add_sample(add_seconds(&t0(), 300.0), Vector3::new(3.0, 0.0, 0.0));

        assert_eq!(curve.len(), 3);
        assert_eq!(curve.position_at(&t0()).unwrap(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(
            curve.position_at(&add_seconds(&t0(), 150.0)).unwrap(),
            Vector3::new(1.5, 0.0, 0.0)
        );
    }

    #[test]
    fn test_write_csv() {
        let mut series = TimeSeries::new();
        series.add_sample(t0(), Vector3::new(1.5, -2.0, 3.25));

        let mut buffer = Vec::new();
        series.write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("epoch,x_m,y_m,z_m"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("2019-06-05T12:00:00"));
        assert!(row.ends_with(",1.5,-2.0,3.25"));
        assert_eq!(lines.next(), None);
    }
}
