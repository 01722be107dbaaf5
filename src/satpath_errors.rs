use hifitime::Epoch;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SatpathError {
    #[error("Invalid TLE: {0}")]
    InvalidTle(String),

    #[error("SGP4 initialization failed: {0}")]
    PropagatorInitialization(String),

    #[error("Propagation failed at {epoch}: {reason}")]
    PropagationFailure { epoch: Epoch, reason: String },

    #[error("Invalid propagation parameter: {0}")]
    InvalidPropagationParameter(String),

    #[error("Interpolated curve has no samples")]
    EmptyCurve,

    #[error("Epoch {epoch} is outside of the interpolation range [{start}, {stop}]")]
    OutOfInterpolationRange {
        epoch: Epoch,
        start: Epoch,
        stop: Epoch,
    },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for SatpathError {
    fn eq(&self, other: &Self) -> bool {
        use SatpathError::*;
        match (self, other) {
            (InvalidTle(a), InvalidTle(b)) => a == b,
            (PropagatorInitialization(a), PropagatorInitialization(b)) => a == b,
            (
                PropagationFailure {
                    epoch: e1,
                    reason: r1,
                },
                PropagationFailure {
                    epoch: e2,
                    reason: r2,
                },
            ) => e1 == e2 && r1 == r2,
            (InvalidPropagationParameter(a), InvalidPropagationParameter(b)) => a == b,
            (
                OutOfInterpolationRange {
                    epoch: e1,
                    start: s1,
                    stop: t1,
                },
                OutOfInterpolationRange {
                    epoch: e2,
                    start: s2,
                    stop: t2,
                },
            ) => e1 == e2 && s1 == s2 && t1 == t2,

            // not comparable: same variant is enough
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            (EmptyCurve, EmptyCurve) => true,

            _ => false,
        }
    }
}
