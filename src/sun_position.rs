//! Sun Position Model
//!
//! Maps (latitude, season) to a midday sun altitude and (height, altitude) to a
//! shadow length. Altitudes come from a fixed latitude-banded table rather than a
//! solar ephemeris, so every result is deterministic.
//!
//! Table values are peak (solar noon) altitudes in degrees. Within a band they rise
//! WINTER → EQUINOX → SUMMER; for a fixed season they fall as |latitude| grows.

use crate::error::SunError;
use crate::models::{Hemisphere, Season};

/// Latitude used when a land has none recorded ("temperate")
pub const DEFAULT_LATITUDE: f64 = 40.0;

/// Absolute-latitude band indexing the altitude table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LatitudeBand {
    /// [0, 15)
    Equatorial,
    /// [15, 30)
    Subtropical,
    /// [30, 45)
    Temperate,
    /// [45, 60)
    Cool,
    /// [60, 75] and anything beyond
    Polar,
}

/// A single row of the altitude table
#[derive(Debug, Clone)]
pub struct AltitudeRow {
    pub band: LatitudeBand,
    pub lower: f64,
    pub winter: f64,
    pub equinox: f64,
    pub summer: f64,
}

// ============================================================================
// EMBEDDED SUN ALTITUDE TABLE (degrees above horizon at solar noon)
// ============================================================================

static ALTITUDE_TABLE: &[AltitudeRow] = &[
    AltitudeRow { band: LatitudeBand::Equatorial, lower: 0.0, winter: 60.0, equinox: 80.0, summer: 88.0 },
    AltitudeRow { band: LatitudeBand::Subtropical, lower: 15.0, winter: 45.0, equinox: 67.0, summer: 85.0 },
    AltitudeRow { band: LatitudeBand::Temperate, lower: 30.0, winter: 30.0, equinox: 52.0, summer: 75.0 },
    AltitudeRow { band: LatitudeBand::Cool, lower: 45.0, winter: 18.0, equinox: 38.0, summer: 62.0 },
    AltitudeRow { band: LatitudeBand::Polar, lower: 60.0, winter: 6.0, equinox: 25.0, summer: 48.0 },
];

impl LatitudeBand {
    fn row(&self) -> &'static AltitudeRow {
        // Every band has exactly one row
        ALTITUDE_TABLE
            .iter()
            .find(|row| row.band == *self)
            .unwrap_or(&ALTITUDE_TABLE[ALTITUDE_TABLE.len() - 1])
    }
}

/// NORTHERN for latitude >= 0, SOUTHERN otherwise
pub fn hemisphere(latitude: f64) -> Hemisphere {
    if latitude >= 0.0 {
        Hemisphere::Northern
    } else {
        Hemisphere::Southern
    }
}

/// Classify |latitude| into its half-open band. Values above 75° reuse the top band.
pub fn latitude_band(latitude: f64) -> LatitudeBand {
    let abs_lat = latitude.abs();
    ALTITUDE_TABLE
        .iter()
        .rev()
        .find(|row| abs_lat >= row.lower)
        .map(|row| row.band)
        .unwrap_or(LatitudeBand::Equatorial)
}

/// Midday sun altitude in degrees. Missing latitude uses [`DEFAULT_LATITUDE`].
pub fn sun_altitude(latitude: Option<f64>, season: Season) -> f64 {
    let row = latitude_band(latitude.unwrap_or(DEFAULT_LATITUDE)).row();
    match season {
        Season::Winter => row.winter,
        Season::Equinox => row.equinox,
        Season::Summer => row.summer,
    }
}

/// Shadow length cast by an object of `height` at the given sun altitude.
///
/// Altitude <= 0 is a domain error. Altitude >= 90 is exactly 0.0 (sun overhead).
pub fn shadow_length(height: f64, altitude_degrees: f64) -> Result<f64, SunError> {
    if altitude_degrees <= 0.0 {
        return Err(SunError::SunBelowHorizon {
            altitude: altitude_degrees,
        });
    }
    if altitude_degrees >= 90.0 {
        return Ok(0.0);
    }
    Ok(height / libm::tan(altitude_degrees.to_radians()))
}

/// Unit vector shadows point along. No east-west component in this model.
pub fn shadow_direction(hemisphere: Hemisphere) -> (f64, f64) {
    match hemisphere {
        Hemisphere::Northern => (0.0, 1.0),
        Hemisphere::Southern => (0.0, -1.0),
    }
}

/// Translate (x, y) by `length` along the hemisphere's shadow direction
pub fn project_shadow_endpoint(x: f64, y: f64, length: f64, hemisphere: Hemisphere) -> (f64, f64) {
    let (dx, dy) = shadow_direction(hemisphere);
    (x + dx * length, y + dy * length)
}
