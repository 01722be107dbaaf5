//! # Orbit track: the data behind a satellite visualization
//!
//! An [`OrbitTrack`] bundles the two time series a globe viewer draws for one satellite:
//!
//! * `orbit` – one full revolution `[start, start + period)`; its raw points make the
//!   orbit polyline. The curve animating the satellite marker is built from the same
//!   run plus the first instant at or after the end of the revolution, so it can be
//!   queried all the way round;
//! * `event` – a highlighted window `[start + 1 h, start + 2 h)` drawn as a tube, whose
//!   cross-section is given by [`circle_cross_section`].
//!
//! Nothing here talks to a renderer: the viewer (or a session handle wrapping it) is
//! expected to consume these series explicitly.

use hifitime::Epoch;
use log::info;
use nalgebra::Vector2;

use crate::constants::DPI;
use crate::interpolation::InterpolatedCurve;
use crate::interval_propagator::{IntervalPropagator, PropagationParams};
use crate::propagator::sgp4_propagator::Sgp4Satellite;
use crate::time::add_hours;
use crate::time_series::TimeSeries;

/// Offset of the event window from the start of the track, in hours.
const EVENT_START_HOURS: f64 = 1.0;

/// Offset of the end of the event window from the start of the track, in hours.
const EVENT_STOP_HOURS: f64 = 2.0;

#[derive(Debug, Clone)]
pub struct OrbitTrack {
    pub orbit: TimeSeries,
    pub event: TimeSeries,
    orbit_stop: Epoch,
    /// `orbit` plus the closing sample.
    animation: TimeSeries,
    interpolation_degree: usize,
}

impl OrbitTrack {
    /// Propagate one revolution of `satellite` from `start`, plus the event window.
    pub fn build(satellite: &Sgp4Satellite, start: &Epoch, params: &PropagationParams) -> Self {
        let propagator = IntervalPropagator::new(satellite, *params);

        let orbit_stop = *start + satellite.orbital_period();
        let animation = propagator.propagate_covering(start, &orbit_stop);
        let orbit: TimeSeries = animation
            .samples()
            .iter()
            .filter(|sample| sample.epoch < orbit_stop)
            .copied()
            .collect();

        let event = propagator.propagate_interval(
            &add_hours(start, EVENT_START_HOURS),
            &add_hours(start, EVENT_STOP_HOURS),
        );

        info!(
            "Built track of NORAD {}: {} orbit samples, {} event samples",
            satellite.norad_id(),
            orbit.len(),
            event.len()
        );

        OrbitTrack {
            orbit,
            event,
            orbit_stop,
            animation,
            interpolation_degree: params.interpolation_degree,
        }
    }

    /// End of the revolution, excluded from `orbit`.
    pub fn orbit_stop(&self) -> Epoch {
        self.orbit_stop
    }

    /// Curve animating the satellite along the orbit, queryable up to [`Self::orbit_stop`].
    pub fn orbit_curve(&self) -> InterpolatedCurve {
        self.animation.to_interpolated_curve(self.interpolation_degree)
    }
}

/// Points of a circle of the given radius centered on the origin, one every `360 / n`
/// degrees, starting on the +x axis.
pub fn circle_cross_section(radius: f64, n: usize) -> Vec<Vector2<f64>> {
    (0..n)
        .map(|i| {
            let angle = i as f64 * DPI / n as f64;
            Vector2::new(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

#[cfg(test)]
mod orbit_track_test {
    use super::*;
    use crate::constants::DEFAULT_EVENT_TUBE_RADIUS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_circle_cross_section() {
        let circle = circle_cross_section(DEFAULT_EVENT_TUBE_RADIUS, 360);
        assert_eq!(circle.len(), 360);
        assert_abs_diff_eq!(circle[0].x, 60_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(circle[90].y, 60_000.0, epsilon = 1e-6);
        for p in &circle {
            assert_abs_diff_eq!(p.norm(), 60_000.0, epsilon = 1e-6);
        }
        assert!(circle_cross_section(1.0, 0).is_empty());
    }
}
