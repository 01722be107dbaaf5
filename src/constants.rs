//! # Constants and type definitions for Satpath
//!
//! This module centralizes the **physical constants**, **unit conversions** and
//! **type aliases** shared by the propagation, geodesy and interpolation modules.
//!
//! ## Overview
//!
//! - WGS84 ellipsoid parameters, in kilometers (propagator side) and meters (renderer side)
//! - Unit conversions (km ↔ m, seconds ↔ minutes ↔ days)
//! - Default sampling parameters used by [`crate::interval_propagator`]

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of seconds in an hour
pub const SECONDS_PER_HOUR: f64 = 3_600.0;

/// Number of seconds in a minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// MJD epoch of J2000.0 (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 51544.5;

/// Kilometers → meters
pub const KM_TO_M: f64 = 1_000.0;

/// Earth equatorial radius in meters (WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth polar radius in meters (WGS84)
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.314_245_179;

/// Earth equatorial radius in kilometers, as used on the propagator side
pub const EARTH_MAJOR_AXIS_KM: f64 = 6_378.137;

/// Earth polar radius in kilometers, as used on the propagator side
pub const EARTH_MINOR_AXIS_KM: f64 = 6_356.752_314_2;

// -------------------------------------------------------------------------------------------------
// Sampling defaults
// -------------------------------------------------------------------------------------------------

/// Default propagation step in seconds.
///
/// At low Earth orbit velocities (~7.5 km/s) this puts ~750 km between raw samples,
/// which a degree-8 Lagrange curve smooths out for display.
pub const DEFAULT_STEP_SECONDS: f64 = 100.0;

/// Default degree of the Lagrange interpolation polynomial
pub const DEFAULT_INTERPOLATION_DEGREE: usize = 8;

/// Radius (m) of the circular cross-section extruded along an event path
pub const DEFAULT_EVENT_TUBE_RADIUS: f64 = 60_000.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;

/// Length in kilometers
pub type Kilometer = f64;

/// Length in meters
pub type Meter = f64;
