//! Build the orbit track of the ISS and dump the orbit samples as CSV.
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example iss_track [STEP_SECONDS]
use std::env;
use std::io;

use satpath::constants::DEFAULT_EVENT_TUBE_RADIUS;
use satpath::interval_propagator::PropagationParams;
use satpath::orbit_track::{circle_cross_section, OrbitTrack};
use satpath::propagator::sgp4_propagator::Sgp4Satellite;
use satpath::satpath_errors::SatpathError;

const ISS_LINE1: &str = "1 25544U 98067A   19156.50900463  .00003075  00000-0  59442-4 0  9992";
const ISS_LINE2: &str = "2 25544  51.6433  59.2583 0008217  16.4489 347.6017 15.51174618173442";

fn main() -> Result<(), SatpathError> {
    env_logger::init();

    let mut builder = PropagationParams::builder();
    if let Some(step) = env::args().nth(1) {
        let step: f64 = step.parse().map_err(|_| {
            SatpathError::InvalidPropagationParameter(format!("cannot parse step '{step}'"))
        })?;
        builder = builder.step_seconds(step);
    }
    let params = builder.build()?;
    eprintln!("{params:#}");

    let iss = Sgp4Satellite::from_tle(ISS_LINE1, ISS_LINE2)?;
    let start = iss.epoch();
    let track = OrbitTrack::build(&iss, &start, &params);

    let curve = track.orbit_curve();
    eprintln!(
        "orbit: {} samples, {} curve of degree {}",
        track.orbit.len(),
        curve.algorithm(),
        curve.degree()
    );
    eprintln!(
        "event: {} samples, tube cross-section of {} points",
        track.event.len(),
        circle_cross_section(DEFAULT_EVENT_TUBE_RADIUS, 360).len()
    );

    track.orbit.write_csv(io::stdout().lock())
}
