//! Equipment directory records.
//!
//! One record per fleet unit: identity, operational status, and the most
//! recent telemetry the unit reported. Position and metrics are optional
//! since a unit that has never pushed a report still appears in the
//! directory.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::severity::{classify_with, SeverityThresholds, SeverityTier};
use crate::telemetry::{GeoPosition, TelemetryReading};
use crate::types::EquipmentId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";
pub const STATUS_MAINTENANCE: &str = "maintenance";

pub const VALID_OPERATIONAL_STATUSES: &[&str] =
    &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_MAINTENANCE];

/// Display names are capped to keep directory listings and map popups sane.
pub const NAME_MAX_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Where a unit sits in its duty cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationalStatus {
    Active,
    Inactive,
    Maintenance,
}

impl OperationalStatus {
    pub const ALL: [OperationalStatus; 3] = [Self::Active, Self::Inactive, Self::Maintenance];

    /// Return the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => STATUS_ACTIVE,
            Self::Inactive => STATUS_INACTIVE,
            Self::Maintenance => STATUS_MAINTENANCE,
        }
    }

    /// Parse from a string, returning an error for unknown statuses.
    pub fn from_str_value(value: &str) -> Result<Self, CoreError> {
        match value {
            STATUS_ACTIVE => Ok(Self::Active),
            STATUS_INACTIVE => Ok(Self::Inactive),
            STATUS_MAINTENANCE => Ok(Self::Maintenance),
            other => Err(CoreError::Validation(format!(
                "Unknown operational status: '{other}'. Valid statuses: {}",
                VALID_OPERATIONAL_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Checks a display name against the directory constraints: non-empty
/// after trimming, at most [`NAME_MAX_CHARS`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Equipment name must not be empty".to_string(),
        ));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "Equipment name exceeds {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A fleet unit as the directory knows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: EquipmentId,
    /// Human-facing display name, e.g. "Excavadora CAT 330".
    pub name: String,
    pub status: OperationalStatus,
    /// Last reported location; `None` until the unit pushes a report.
    pub position: Option<GeoPosition>,
    pub last_serviced_on: Option<chrono::NaiveDate>,
    /// Last reported engine temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Last reported fuel level as a percentage of tank capacity.
    pub fuel_level: Option<f64>,
}

impl EquipmentRecord {
    /// The unit's latest reading, when it has reported both metrics.
    pub fn reading(&self) -> Option<TelemetryReading> {
        match (self.temperature, self.fuel_level) {
            (Some(temperature), Some(fuel_level)) => {
                Some(TelemetryReading::new(temperature, fuel_level))
            }
            _ => None,
        }
    }

    /// Severity under the canonical thresholds.
    pub fn severity(&self) -> SeverityTier {
        self.severity_with(&SeverityThresholds::default())
    }

    /// Severity under caller-supplied thresholds. A unit with no reading
    /// classifies as [`SeverityTier::Normal`]; absence of telemetry is
    /// not an alarm condition.
    pub fn severity_with(&self, thresholds: &SeverityThresholds) -> SeverityTier {
        match self.reading() {
            Some(reading) => classify_with(reading, thresholds),
            None => SeverityTier::Normal,
        }
    }

    /// Whether the unit can be placed on the map.
    pub fn has_position(&self) -> bool {
        self.position.is_some()
    }

    /// Checks directory constraints: a valid name (see [`validate_name`]),
    /// a plausible position when present, and finite metric values when
    /// present.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_name(&self.name)?;
        if let Some(position) = self.position {
            position.validate()?;
        }
        if let Some(temperature) = self.temperature {
            if !temperature.is_finite() {
                return Err(CoreError::Validation(
                    "Temperature must be a finite number".to_string(),
                ));
            }
        }
        if let Some(fuel_level) = self.fuel_level {
            if !fuel_level.is_finite() {
                return Err(CoreError::Validation(
                    "Fuel level must be a finite number".to_string(),
                ));
            }
            if !(0.0..=100.0).contains(&fuel_level) {
                return Err(CoreError::Validation(format!(
                    "Fuel level must be between 0 and 100, got {fuel_level}"
                )));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
