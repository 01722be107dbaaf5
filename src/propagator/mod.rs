//! # Orbital propagators
//!
//! The sampling core does not know how a satellite state is computed: it only needs
//! an inertial position at a given instant and the sidereal angle used to rotate that
//! position into the Earth-fixed frame. This module defines that seam as the
//! [`OrbitPropagator`] trait.
//!
//! ## Implementations
//!
//! * [`sgp4_propagator::Sgp4Satellite`] – SGP4/SDP4 propagation of a Two-Line Element
//!   set, backed by the [`sgp4`] crate.
//!
//! Tests plug their own analytic propagators in the same way.

use hifitime::Epoch;
use nalgebra::Vector3;

use crate::constants::Radian;
use crate::satpath_errors::SatpathError;
use crate::time::epoch_to_gmst;

pub mod sgp4_propagator;

/// Inertial state of an orbiting object.
///
/// Fields
/// --------
/// * `position` – Earth-centered inertial position (km).
/// * `velocity` – Earth-centered inertial velocity (km/s).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// A black-box orbital propagator.
pub trait OrbitPropagator {
    /// Inertial state of the object at `epoch`.
    ///
    /// Return
    /// ----------
    /// * `Ok(StateVector)` – position in km, velocity in km/s.
    /// * `Err(SatpathError::PropagationFailure)` – the model cannot produce a state at
    ///   this instant (decayed object, diverging elements, …).
    fn propagate(&self, epoch: &Epoch) -> Result<StateVector, SatpathError>;

    /// Sidereal rotation angle of the Earth at `epoch`, in radians.
    ///
    /// Defaults to the Greenwich Mean Sidereal Time.
    fn sidereal_time(&self, epoch: &Epoch) -> Radian {
        epoch_to_gmst(epoch)
    }
}

impl<P: OrbitPropagator + ?Sized> OrbitPropagator for &P {
    fn propagate(&self, epoch: &Epoch) -> Result<StateVector, SatpathError> {
        (**self).propagate(epoch)
    }

    fn sidereal_time(&self, epoch: &Epoch) -> Radian {
        (**self).sidereal_time(epoch)
    }
}
