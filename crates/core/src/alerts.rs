//! Telemetry alert scanning for threshold violations.
//!
//! Pure logic. The caller fetches reports and thresholds and passes them
//! in; deduplication across repeated scans, if wanted, belongs to the
//! caller.

use serde::Serialize;

use crate::severity::{SeverityThresholds, SeverityTier};
use crate::telemetry::TelemetryReport;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Canonical metric name for engine temperature.
pub const METRIC_TEMPERATURE: &str = "temperature";
/// Canonical metric name for fuel level.
pub const METRIC_FUEL_LEVEL: &str = "fuel_level";

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// A single metric threshold violation on one report.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryAlert {
    /// The unit whose report triggered the alert.
    pub equipment_id: String,
    /// Canonical metric name ([`METRIC_TEMPERATURE`] or [`METRIC_FUEL_LEVEL`]).
    pub metric_name: String,
    /// The observed metric value that triggered the alert.
    pub observed_value: f64,
    /// The threshold value that was crossed.
    pub threshold_value: f64,
    /// How severe the violation is. Only `Critical` and `Warning` occur;
    /// in-range metrics produce no alert at all.
    pub tier: SeverityTier,
    /// When the report was recorded.
    pub timestamp: Timestamp,
}

// ---------------------------------------------------------------------------
// Evaluation functions
// ---------------------------------------------------------------------------

/// Scan a batch of reports against thresholds and return any violations.
///
/// Each violating metric yields its own alert, so a single report can
/// produce up to two. Comparisons are strict, which also means a NaN
/// metric never alerts: every comparison against NaN is false.
pub fn scan(reports: &[TelemetryReport], thresholds: &SeverityThresholds) -> Vec<TelemetryAlert> {
    let mut alerts = Vec::new();
    for report in reports {
        check_temperature(report, thresholds, &mut alerts);
        check_fuel_level(report, thresholds, &mut alerts);
    }
    alerts
}

/// Critical temperature violations only. Used by the maintenance view to
/// list units that must be shut down and inspected.
pub fn overheating(
    reports: &[TelemetryReport],
    thresholds: &SeverityThresholds,
) -> Vec<TelemetryAlert> {
    let mut alerts = scan(reports, thresholds);
    alerts.retain(|alert| {
        alert.metric_name == METRIC_TEMPERATURE && alert.tier == SeverityTier::Critical
    });
    alerts
}

/// Push a temperature alert if the report runs hot.
fn check_temperature(
    report: &TelemetryReport,
    thresholds: &SeverityThresholds,
    alerts: &mut Vec<TelemetryAlert>,
) {
    let (tier, threshold_value) = if report.temperature > thresholds.temperature_critical {
        (SeverityTier::Critical, thresholds.temperature_critical)
    } else if report.temperature > thresholds.temperature_warning {
        (SeverityTier::Warning, thresholds.temperature_warning)
    } else {
        return; // within normal range
    };

    alerts.push(TelemetryAlert {
        equipment_id: report.equipment_id.clone(),
        metric_name: METRIC_TEMPERATURE.to_string(),
        observed_value: report.temperature,
        threshold_value,
        tier,
        timestamp: report.timestamp,
    });
}

/// Push a fuel alert if the report runs low. Fuel violates downward, so
/// the comparisons invert relative to temperature.
fn check_fuel_level(
    report: &TelemetryReport,
    thresholds: &SeverityThresholds,
    alerts: &mut Vec<TelemetryAlert>,
) {
    let (tier, threshold_value) = if report.fuel_level < thresholds.fuel_critical {
        (SeverityTier::Critical, thresholds.fuel_critical)
    } else if report.fuel_level < thresholds.fuel_warning {
        (SeverityTier::Warning, thresholds.fuel_warning)
    } else {
        return; // within normal range
    };

    alerts.push(TelemetryAlert {
        equipment_id: report.equipment_id.clone(),
        metric_name: METRIC_FUEL_LEVEL.to_string(),
        observed_value: report.fuel_level,
        threshold_value,
        tier,
        timestamp: report.timestamp,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
