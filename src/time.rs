use hifitime::{Duration, Epoch, Unit};

use crate::constants::{Radian, DPI, T2000};

/// Shift an epoch by a (possibly fractional, possibly negative) number of hours.
///
/// Pure function: the input epoch is left untouched and a new one is returned.
///
/// Arguments
/// ---------
/// * `epoch`: the reference instant
/// * `hours`: the offset in hours
///
/// Return
/// ------
/// * `epoch + hours`
pub fn add_hours(epoch: &Epoch, hours: f64) -> Epoch {
    *epoch + Unit::Hour * hours
}

/// Shift an epoch by a number of seconds, keeping sub-second precision.
pub fn add_seconds(epoch: &Epoch, seconds: f64) -> Epoch {
    *epoch + seconds_to_duration(seconds)
}

/// Convert seconds into a [`Duration`], rounded to the nearest nanosecond.
///
/// `0.3` gives exactly 300 000 000 ns, so multiples of the returned duration land on
/// the decimal instants a caller expects.
pub fn seconds_to_duration(seconds: f64) -> Duration {
    Duration::from_total_nanoseconds((seconds * 1e9).round() as i128)
}

/// Shift an epoch by a number of days.
pub fn add_days(epoch: &Epoch, days: f64) -> Epoch {
    *epoch + Unit::Day * days
}

/// Signed number of seconds elapsed from `from` to `to`.
pub fn seconds_between(from: &Epoch, to: &Epoch) -> f64 {
    (*to - *from).to_seconds()
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians
/// for a given Modified Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982/2000 polynomial formula
/// for the mean sidereal time at 0h UT1, plus the fractional-day
/// correction term due to Earth's rotation rate.
///
/// # Arguments
/// * `tjm` - Modified Julian Date (MJD, UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # References
/// * IAU 1982, IERS Conventions 1996/2000.
/// * Explanatory Supplement to the Astronomical Almanac (1992).
pub fn gmst(tjm: f64) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    let itjm = tjm.floor();
    let t = (itjm - T2000) / 36525.0;

    // GMST at 0h UT1, seconds → radians
    let mut gmst0 = ((C3 * t + C2) * t + C1) * t + C0;
    gmst0 *= DPI / 86400.0;

    // Earth rotation during the fraction of the day
    let h = tjm.fract() * DPI;
    let gmst = gmst0 + h * RAP;

    gmst.rem_euclid(DPI)
}

/// GMST at the given epoch.
///
/// UT1 is approximated by UTC: the |UT1 − UTC| < 0.9 s difference is far below
/// what matters for placing a sampled orbit on a globe.
pub fn epoch_to_gmst(epoch: &Epoch) -> Radian {
    gmst(epoch.to_mjd_utc_days())
}
