use hifitime::{Duration, Epoch, Unit};
use nalgebra::Vector3;
use sgp4::chrono::{Datelike, NaiveDateTime, Timelike};
use sgp4::{Constants, Elements, MinutesSinceEpoch};
use std::fmt;

use super::{OrbitPropagator, StateVector};
use crate::constants::SECONDS_PER_MINUTE;
use crate::satpath_errors::SatpathError;

/// An Earth satellite loaded from a TLE and propagated with SGP4.
///
/// The TLE text is handed as-is to the [`sgp4`] crate: this type only keeps the
/// parsed elements, the initialized propagator constants and the TLE epoch.
#[derive(Clone)]
pub struct Sgp4Satellite {
    elements: Elements,
    constants: Constants,
    epoch: Epoch,
}

impl fmt::Debug for Sgp4Satellite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sgp4Satellite")
            .field("norad_id", &self.elements.norad_id)
            .field("epoch", &self.epoch)
            .field("mean_motion", &self.elements.mean_motion)
            .finish()
    }
}

/// Convert the UTC datetime carried by the TLE into an [`Epoch`].
fn datetime_to_epoch(datetime: &NaiveDateTime) -> Epoch {
    Epoch::from_gregorian_utc(
        datetime.year(),
        datetime.month() as u8,
        datetime.day() as u8,
        datetime.hour() as u8,
        datetime.minute() as u8,
        datetime.second() as u8,
        datetime.nanosecond(),
    )
}

impl Sgp4Satellite {
    /// Create a satellite from the two lines of a TLE.
    ///
    /// Arguments
    /// -----------------
    /// * `line1`, `line2` – the two fixed-format lines of the element set.
    ///
    /// Return
    /// ----------
    /// * `Err(SatpathError::InvalidTle)` if the lines cannot be parsed.
    /// * `Err(SatpathError::PropagatorInitialization)` if SGP4 rejects the elements.
    pub fn from_tle(line1: &str, line2: &str) -> Result<Self, SatpathError> {
        let elements = Elements::from_tle(None, line1.trim().as_bytes(), line2.trim().as_bytes())
            .map_err(|err| SatpathError::InvalidTle(format!("{err:?}")))?;
        Self::from_elements(elements)
    }

    /// Create a satellite from already parsed SGP4 elements.
    pub fn from_elements(elements: Elements) -> Result<Self, SatpathError> {
        let constants = Constants::from_elements(&elements)
            .map_err(|err| SatpathError::PropagatorInitialization(format!("{err:?}")))?;
        let epoch = datetime_to_epoch(&elements.datetime);

        Ok(Sgp4Satellite {
            elements,
            constants,
            epoch,
        })
    }

    /// Reference epoch of the element set.
    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// NORAD catalog number.
    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id
    }

    /// Mean motion in revolutions per day.
    pub fn mean_motion(&self) -> f64 {
        self.elements.mean_motion
    }

    /// Duration of one revolution, derived from the TLE mean motion.
    pub fn orbital_period(&self) -> Duration {
        Unit::Day * (1.0 / self.elements.mean_motion)
    }

    /// The parsed element set.
    pub fn elements(&self) -> &Elements {
        &self.elements
    }
}

impl OrbitPropagator for Sgp4Satellite {
    fn propagate(&self, epoch: &Epoch) -> Result<StateVector, SatpathError> {
        let minutes = (*epoch - self.epoch).to_seconds() / SECONDS_PER_MINUTE;

        let prediction = self
            .constants
            .propagate(MinutesSinceEpoch(minutes))
            .map_err(|err| SatpathError::PropagationFailure {
                epoch: *epoch,
                reason: format!("{err:?}"),
            })?;

        Ok(StateVector {
            position: Vector3::from(prediction.position),
            velocity: Vector3::from(prediction.velocity),
        })
    }
}

#[cfg(test)]
mod sgp4_propagator_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ISS_LINE1: &str =
        "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992";
    const ISS_LINE2: &str =
        "2 25544  51.6433  59.2583 0008217  16.4489 347.6017 15.51174618173442";

    #[test]
    fn test_from_tle() {
        let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).unwrap();
        assert_eq!(iss.norad_id(), 25544);
        assert_abs_diff_eq!(iss.mean_motion(), 15.51174618, epsilon = 1e-8);

        // day 156.50900463 of 2019 is June 5th, 12:12:58 UTC
        let expected = Epoch::from_gregorian_utc_hms(2019, 6, 5, 12, 12, 58);
        assert!((iss.epoch() - expected).to_seconds().abs() < 0.01);
    }

    #[test]
    fn test_orbital_period() {
        let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).unwrap();
        assert_abs_diff_eq!(
            iss.orbital_period().to_seconds(),
            86400.0 / 15.51174618,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_invalid_tle() {
        let err = Sgp4Satellite::from_tle("not a tle", "at all").unwrap_err();
        assert!(matches!(err, SatpathError::InvalidTle(_)));
    }

    #[test]
    fn test_propagate_at_epoch_is_in_low_earth_orbit() {
        let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).unwrap();
        let state = iss.propagate(&iss.epoch()).unwrap();

        let radius = state.position.norm();
        assert!((6_700.0..6_850.0).contains(&radius), "radius = {radius} km");

        let speed = state.velocity.norm();
        assert!((7.5..7.8).contains(&speed), "speed = {speed} km/s");
    }
}
