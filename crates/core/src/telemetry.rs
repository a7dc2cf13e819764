//! Telemetry data model: sensor readings, geographic positions, and the
//! wire-level report a field unit pushes to the ingest endpoint.
//!
//! Pure data -- no I/O. Validation is opt-in: the severity classifier
//! (see [`crate::severity`]) accepts any reading without range checks, so
//! callers that need hard guarantees run the `validate` functions at the
//! ingest boundary instead.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// TelemetryReading
// ---------------------------------------------------------------------------

/// A snapshot of the two sensor values severity classification is based on.
///
/// `fuel_level` is a gauge percentage with expected domain [0, 100];
/// `temperature` is in the caller's sensor domain (degrees). Neither is
/// range-checked here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub temperature: f64,
    pub fuel_level: f64,
}

impl TelemetryReading {
    /// Create a reading without validation.
    pub fn new(temperature: f64, fuel_level: f64) -> Self {
        Self {
            temperature,
            fuel_level,
        }
    }

    /// Create a reading, rejecting non-finite values.
    ///
    /// Classification itself is total (a NaN field never escalates a
    /// tier), so this is for callers that prefer to reject malformed
    /// telemetry outright rather than have it classified fail-safe.
    pub fn validated(temperature: f64, fuel_level: f64) -> Result<Self, CoreError> {
        if !temperature.is_finite() {
            return Err(CoreError::Validation(format!(
                "Temperature must be a finite number, got {temperature}"
            )));
        }
        if !fuel_level.is_finite() {
            return Err(CoreError::Validation(format!(
                "Fuel level must be a finite number, got {fuel_level}"
            )));
        }
        Ok(Self {
            temperature,
            fuel_level,
        })
    }
}

// ---------------------------------------------------------------------------
// GeoPosition
// ---------------------------------------------------------------------------

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Validate that both coordinates are finite and within WGS84 bounds.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(CoreError::Validation(format!(
                "Latitude must be within [-90, 90], got {}",
                self.latitude
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(CoreError::Validation(format!(
                "Longitude must be within [-180, 180], got {}",
                self.longitude
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TelemetryReport
// ---------------------------------------------------------------------------

/// One full telemetry record as pushed by a field unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReport {
    /// Fleet code of the reporting unit, e.g. `"CAT330-01"`.
    pub equipment_id: String,
    /// When the unit sampled its sensors (UTC).
    pub timestamp: Timestamp,
    /// GPS fix at sampling time.
    pub position: GeoPosition,
    /// Engine speed in revolutions per minute.
    pub engine_rpm: u32,
    /// Engine temperature in degrees Celsius.
    pub temperature: f64,
    /// Fuel gauge percentage (0-100).
    pub fuel_level: f64,
    /// Active fault codes, empty when the unit reports healthy.
    pub fault_codes: Vec<String>,
}

impl TelemetryReport {
    /// Project the two values severity classification consumes.
    pub fn reading(&self) -> TelemetryReading {
        TelemetryReading::new(self.temperature, self.fuel_level)
    }

    /// Ingest-boundary validation.
    ///
    /// Rejects empty unit codes, out-of-bounds coordinates, non-finite
    /// sensor values, and fuel levels outside the gauge domain [0, 100].
    /// Classification never requires this; it exists for services that
    /// must refuse malformed reports instead of storing them.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.equipment_id.is_empty() {
            return Err(CoreError::Validation(
                "Equipment id must not be empty".to_string(),
            ));
        }
        self.position.validate()?;
        TelemetryReading::validated(self.temperature, self.fuel_level)?;
        if !(0.0..=100.0).contains(&self.fuel_level) {
            return Err(CoreError::Validation(format!(
                "Fuel level must be within [0, 100], got {}",
                self.fuel_level
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
