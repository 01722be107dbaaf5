//! # Geodetic conversions
//!
//! Frame conversions between the propagator output and the renderer input:
//!
//! ```text
//! ECI position (km) ──[eci_to_geodetic, GMST]──▶ Geodetic (rad, rad, km)
//! Geodetic (rad, rad, m) ──[geodetic_to_cartesian]──▶ ECEF Cartesian (m)
//! ```
//!
//! Both directions use the WGS84 ellipsoid. Note the unit change between the two
//! steps: the propagator works in kilometers, the renderer in meters. Use
//! [`Geodetic::to_cartesian`] which applies the ×1000 height scaling.

use nalgebra::Vector3;

use crate::constants::{
    Kilometer, Meter, Radian, DPI, EARTH_MAJOR_AXIS, EARTH_MAJOR_AXIS_KM, EARTH_MINOR_AXIS,
    EARTH_MINOR_AXIS_KM, KM_TO_M,
};

/// Maximum number of fixed-point iterations used to refine the geodetic latitude
const LATITUDE_MAX_ITER: usize = 20;

/// Geodetic coordinates relative to the WGS84 ellipsoid.
///
/// Fields
/// --------
/// * `longitude` – radians, in [-π, π]
/// * `latitude` – radians, in [-π/2, π/2]
/// * `height` – kilometers above the ellipsoid (propagator units)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geodetic {
    pub longitude: Radian,
    pub latitude: Radian,
    pub height: Kilometer,
}

impl Geodetic {
    /// Height above the ellipsoid in meters.
    pub fn height_m(&self) -> Meter {
        self.height * KM_TO_M
    }

    /// Earth-centered Earth-fixed Cartesian position in meters.
    ///
    /// The height is scaled from kilometers to meters before the conversion.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        geodetic_to_cartesian(self.longitude, self.latitude, self.height_m())
    }
}

/// Wrap a longitude into [-π, π].
fn wrap_longitude(mut longitude: Radian) -> Radian {
    while longitude < -std::f64::consts::PI {
        longitude += DPI;
    }
    while longitude > std::f64::consts::PI {
        longitude -= DPI;
    }
    longitude
}

/// Convert an Earth-centered inertial position into geodetic coordinates.
///
/// The inertial frame is rotated into the Earth-fixed frame by the sidereal angle,
/// then the geodetic latitude is obtained by fixed-point iteration on the WGS84
/// ellipsoid.
///
/// Arguments
/// ---------
/// * `position`: ECI (TEME) position in kilometers
/// * `gmst`: Greenwich Mean Sidereal Time at the position epoch, in radians
///
/// Return
/// ------
/// * [`Geodetic`] with the height in kilometers
pub fn eci_to_geodetic(position: &Vector3<f64>, gmst: Radian) -> Geodetic {
    let a = EARTH_MAJOR_AXIS_KM;
    let b = EARTH_MINOR_AXIS_KM;
    let f = (a - b) / a;
    let e2 = 2.0 * f - f * f;

    let r = position.x.hypot(position.y);

    let longitude = wrap_longitude(position.y.atan2(position.x) - gmst);

    let mut latitude = position.z.atan2(r);
    let mut c = 1.0;
    for _ in 0..LATITUDE_MAX_ITER {
        c = 1.0 / (1.0 - e2 * latitude.sin().powi(2)).sqrt();
        latitude = (position.z + a * c * e2 * latitude.sin()).atan2(r);
    }

    let height = r / latitude.cos() - a * c;

    Geodetic {
        longitude,
        latitude,
        height,
    }
}

/// Convert geodetic coordinates into an Earth-centered Earth-fixed Cartesian point.
///
/// Arguments
/// ---------
/// * `longitude`: radians
/// * `latitude`: geodetic latitude, radians
/// * `height`: height above the WGS84 ellipsoid, **meters**
///
/// Return
/// ------
/// * Cartesian position in meters
pub fn geodetic_to_cartesian(longitude: Radian, latitude: Radian, height: Meter) -> Vector3<f64> {
    let radii_squared = Vector3::new(
        EARTH_MAJOR_AXIS * EARTH_MAJOR_AXIS,
        EARTH_MAJOR_AXIS * EARTH_MAJOR_AXIS,
        EARTH_MINOR_AXIS * EARTH_MINOR_AXIS,
    );

    // surface normal of the ellipsoid at this latitude/longitude
    let cos_lat = latitude.cos();
    let normal = Vector3::new(
        cos_lat * longitude.cos(),
        cos_lat * longitude.sin(),
        latitude.sin(),
    )
    .normalize();

    let k = radii_squared.component_mul(&normal);
    let gamma = normal.dot(&k).sqrt();

    k / gamma + normal * height
}
