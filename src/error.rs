//! Domain errors for the sun position model

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SunError {
    /// Sun altitude at or below the horizon; shadow length is undefined there
    #[error("sun below horizon (altitude {altitude}°): undefined shadow")]
    SunBelowHorizon { altitude: f64 },
}
