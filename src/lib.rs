//! # Satpath
//!
//! Orbit sampling for satellite visualization: propagate a satellite over a time
//! interval at a fixed step, convert each inertial position into an Earth-fixed
//! Cartesian point in meters, and collect the points into a [`time_series::TimeSeries`]
//! usable both as raw polyline points and as an interpolated curve for animation.
//!
//! ```text
//! Sgp4Satellite ──▶ IntervalPropagator ──▶ TimeSeries ──┬─▶ positions()
//!  (OrbitPropagator)   (geodesy, GMST)                  └─▶ InterpolatedCurve
//! ```

pub mod constants;
pub mod geodesy;
pub mod interpolation;
pub mod interval_propagator;
pub mod orbit_track;
pub mod propagator;
pub mod satpath_errors;
pub mod time;
pub mod time_series;
