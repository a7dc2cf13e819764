//! Severity classification of equipment telemetry.
//!
//! Pure logic -- no I/O, no shared state. The caller supplies a
//! [`TelemetryReading`] and gets back exactly one [`SeverityTier`]; the
//! map layer then resolves the tier to a marker via [`crate::marker`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::telemetry::TelemetryReading;

// ---------------------------------------------------------------------------
// Canonical thresholds
// ---------------------------------------------------------------------------

/// Engine temperature (degrees Celsius) above which a unit is critical.
pub const TEMPERATURE_CRITICAL: f64 = 90.0;

/// Engine temperature (degrees Celsius) above which a unit is degraded.
pub const TEMPERATURE_WARNING: f64 = 80.0;

/// Fuel percentage below which a unit is critical.
pub const FUEL_CRITICAL: f64 = 15.0;

/// Fuel percentage below which a unit is degraded.
pub const FUEL_WARNING: f64 = 30.0;

// ---------------------------------------------------------------------------
// Tier string constants
// ---------------------------------------------------------------------------

pub const TIER_CRITICAL: &str = "critical";
pub const TIER_WARNING: &str = "warning";
pub const TIER_NORMAL: &str = "normal";

/// All valid severity tier strings.
pub const VALID_SEVERITY_TIERS: &[&str] = &[TIER_CRITICAL, TIER_WARNING, TIER_NORMAL];

// ---------------------------------------------------------------------------
// SeverityTier
// ---------------------------------------------------------------------------

/// Discrete alarm level derived from a telemetry reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    /// Either sensor crossed its critical threshold.
    Critical,
    /// Either sensor crossed its warning threshold (but neither is critical).
    Warning,
    /// Both sensors are within normal range.
    Normal,
}

impl SeverityTier {
    /// Every tier, in descending severity. A marker registry must cover
    /// each of these (see [`crate::marker::MarkerRegistry`]).
    pub const ALL: [SeverityTier; 3] = [Self::Critical, Self::Warning, Self::Normal];

    /// Return the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => TIER_CRITICAL,
            Self::Warning => TIER_WARNING,
            Self::Normal => TIER_NORMAL,
        }
    }

    /// Parse from a string, returning an error for unknown tiers.
    pub fn from_str_value(s: &str) -> Result<Self, CoreError> {
        match s {
            TIER_CRITICAL => Ok(Self::Critical),
            TIER_WARNING => Ok(Self::Warning),
            TIER_NORMAL => Ok(Self::Normal),
            other => Err(CoreError::Validation(format!(
                "Unknown severity tier: '{other}'. Valid tiers: {}",
                VALID_SEVERITY_TIERS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// SeverityThresholds
// ---------------------------------------------------------------------------

/// The four threshold values the classifier evaluates against.
///
/// `Default` carries the canonical fleet values; embedding services that
/// load per-site thresholds construct their own and pass them to
/// [`classify_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Temperature ceiling for the warning tier (exclusive).
    pub temperature_warning: f64,
    /// Temperature ceiling for the critical tier (exclusive).
    pub temperature_critical: f64,
    /// Fuel floor for the warning tier (exclusive).
    pub fuel_warning: f64,
    /// Fuel floor for the critical tier (exclusive).
    pub fuel_critical: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            temperature_warning: TEMPERATURE_WARNING,
            temperature_critical: TEMPERATURE_CRITICAL,
            fuel_warning: FUEL_WARNING,
            fuel_critical: FUEL_CRITICAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a reading against the canonical thresholds.
pub fn classify(reading: TelemetryReading) -> SeverityTier {
    classify_with(reading, &SeverityThresholds::default())
}

/// Classify a reading against the given thresholds.
///
/// Rules are evaluated top to bottom and the first match wins; a single
/// out-of-range sensor is sufficient to escalate, the two signals are
/// never required to agree:
///
/// 1. `temperature > temperature_critical` OR `fuel_level < fuel_critical`
///    → [`SeverityTier::Critical`]
/// 2. `temperature > temperature_warning` OR `fuel_level < fuel_warning`
///    → [`SeverityTier::Warning`]
/// 3. otherwise → [`SeverityTier::Normal`]
///
/// Comparisons are strict, so a reading sitting exactly on a threshold
/// does not cross it. Total over all `f64` input: NaN never satisfies a
/// strict comparison, so a NaN field can never escalate the tier and a
/// fully-NaN reading classifies as `Normal`.
pub fn classify_with(reading: TelemetryReading, thresholds: &SeverityThresholds) -> SeverityTier {
    if reading.temperature > thresholds.temperature_critical
        || reading.fuel_level < thresholds.fuel_critical
    {
        SeverityTier::Critical
    } else if reading.temperature > thresholds.temperature_warning
        || reading.fuel_level < thresholds.fuel_warning
    {
        SeverityTier::Warning
    } else {
        SeverityTier::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(temperature: f64, fuel_level: f64) -> SeverityTier {
        classify(TelemetryReading::new(temperature, fuel_level))
    }

    // -- Scenario table --------------------------------------------------------

    #[test]
    fn overheating_unit_is_critical() {
        assert_eq!(tier(95.0, 50.0), SeverityTier::Critical);
    }

    #[test]
    fn fuel_starved_unit_is_critical() {
        assert_eq!(tier(70.0, 10.0), SeverityTier::Critical);
    }

    #[test]
    fn hot_unit_is_warning() {
        assert_eq!(tier(85.0, 50.0), SeverityTier::Warning);
    }

    #[test]
    fn low_fuel_unit_is_warning() {
        assert_eq!(tier(70.0, 20.0), SeverityTier::Warning);
    }

    #[test]
    fn healthy_unit_is_normal() {
        assert_eq!(tier(70.0, 50.0), SeverityTier::Normal);
    }

    // -- Threshold boundaries ----------------------------------------------

    #[test]
    fn exact_warning_boundaries_are_normal() {
        // Strict comparisons: 80 is not above 80, 30 is not below 30.
        assert_eq!(tier(80.0, 30.0), SeverityTier::Normal);
    }

    #[test]
    fn critical_temperature_boundary_is_warning() {
        // 90 does not cross the critical ceiling but does cross the
        // warning ceiling of 80.
        assert_eq!(tier(90.0, 30.0), SeverityTier::Warning);
    }

    #[test]
    fn critical_fuel_boundary_is_warning() {
        // 15 does not cross the critical floor but does cross the
        // warning floor of 30.
        assert_eq!(tier(70.0, 15.0), SeverityTier::Warning);
    }

    #[test]
    fn just_above_critical_temperature_is_critical() {
        assert_eq!(tier(90.1, 50.0), SeverityTier::Critical);
    }

    #[test]
    fn just_below_critical_fuel_is_critical() {
        assert_eq!(tier(70.0, 14.9), SeverityTier::Critical);
    }

    // -- Single-signal escalation --------------------------------------------

    #[test]
    fn high_temperature_is_critical_regardless_of_fuel() {
        for fuel in [15.0, 30.0, 50.0, 100.0] {
            assert_eq!(tier(95.0, fuel), SeverityTier::Critical);
        }
    }

    #[test]
    fn low_fuel_is_critical_regardless_of_temperature() {
        for temperature in [-40.0, 20.0, 80.0, 90.0] {
            assert_eq!(tier(temperature, 5.0), SeverityTier::Critical);
        }
    }

    #[test]
    fn warning_band_temperature_with_healthy_fuel() {
        for temperature in [80.1, 85.0, 90.0] {
            assert_eq!(tier(temperature, 60.0), SeverityTier::Warning);
        }
    }

    #[test]
    fn warning_band_fuel_with_cool_engine() {
        for fuel in [15.0, 22.5, 29.9] {
            assert_eq!(tier(40.0, fuel), SeverityTier::Warning);
        }
    }

    #[test]
    fn both_signals_in_warning_band_stay_warning() {
        assert_eq!(tier(85.0, 20.0), SeverityTier::Warning);
    }

    // -- Non-finite input ------------------------------------------------------

    #[test]
    fn nan_temperature_never_escalates() {
        assert_eq!(tier(f64::NAN, 50.0), SeverityTier::Normal);
    }

    #[test]
    fn nan_fuel_never_escalates() {
        assert_eq!(tier(70.0, f64::NAN), SeverityTier::Normal);
    }

    #[test]
    fn fully_nan_reading_is_normal() {
        assert_eq!(tier(f64::NAN, f64::NAN), SeverityTier::Normal);
    }

    #[test]
    fn nan_temperature_does_not_mask_fuel_rule() {
        assert_eq!(tier(f64::NAN, 10.0), SeverityTier::Critical);
    }

    #[test]
    fn infinite_temperature_is_critical() {
        assert_eq!(tier(f64::INFINITY, 50.0), SeverityTier::Critical);
    }

    // -- Purity ----------------------------------------------------------------

    #[test]
    fn classification_is_idempotent() {
        let reading = TelemetryReading::new(85.0, 25.0);
        assert_eq!(classify(reading), classify(reading));
    }

    // -- Custom thresholds -------------------------------------------------

    #[test]
    fn classify_with_honors_custom_thresholds() {
        let thresholds = SeverityThresholds {
            temperature_warning: 60.0,
            temperature_critical: 75.0,
            fuel_warning: 50.0,
            fuel_critical: 25.0,
        };
        let reading = TelemetryReading::new(70.0, 60.0);
        assert_eq!(classify_with(reading, &thresholds), SeverityTier::Warning);
        assert_eq!(classify(reading), SeverityTier::Normal);
    }

    #[test]
    fn default_thresholds_match_canonical_constants() {
        let thresholds = SeverityThresholds::default();
        assert_eq!(thresholds.temperature_warning, TEMPERATURE_WARNING);
        assert_eq!(thresholds.temperature_critical, TEMPERATURE_CRITICAL);
        assert_eq!(thresholds.fuel_warning, FUEL_WARNING);
        assert_eq!(thresholds.fuel_critical, FUEL_CRITICAL);
    }

    // -- String conversion -------------------------------------------------

    #[test]
    fn tier_as_str_round_trip() {
        for tier in SeverityTier::ALL {
            assert_eq!(SeverityTier::from_str_value(tier.as_str()).unwrap(), tier);
        }
    }

    #[test]
    fn unknown_tier_string_rejected() {
        let result = SeverityTier::from_str_value("severe");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unknown severity tier"));
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_string(&SeverityTier::Critical).unwrap();
        assert_eq!(json, r#""critical""#);
    }
}
