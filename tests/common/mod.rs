#![allow(dead_code)]

use approx::assert_relative_eq;
use nalgebra::Vector3;
use satpath::propagator::sgp4_propagator::Sgp4Satellite;

pub const ISS_LINE1: &str = "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992";
pub const ISS_LINE2: &str = "2 25544  51.6433  59.2583 0008217  16.4489 347.6017 15.51174618173442";

pub fn iss() -> Sgp4Satellite {
    Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2).expect("ISS TLE should parse")
}

pub fn assert_position_close(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
