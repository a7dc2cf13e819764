//! Synthetic telemetry generation.
//!
//! [`ReportGenerator`] fabricates plausible [`TelemetryReport`]s for one
//! fleet unit so the backend and dashboard can be exercised without any
//! field hardware. Values are drawn uniformly from ranges wide enough to
//! cross both severity thresholds, so a dashboard watching the simulator
//! will see pins change colour over time.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use fleetwatch_core::telemetry::{GeoPosition, TelemetryReport};

/// Unit identifier used when none is configured.
pub const DEFAULT_EQUIPMENT_ID: &str = "CAT330-FAKE";

/// Simulated location used when none is configured: the equipment yard
/// in Santo Domingo.
pub const DEFAULT_POSITION: GeoPosition = GeoPosition {
    latitude: 18.4809,
    longitude: -69.9422,
};

/// Engine speed range in RPM, inclusive on both ends.
pub const ENGINE_RPM_MIN: u32 = 1_000;
pub const ENGINE_RPM_MAX: u32 = 2_000;

/// Engine temperature range in degrees Celsius. The upper end sits above
/// the critical threshold so overheating states actually occur.
pub const TEMPERATURE_MIN: f64 = 70.0;
pub const TEMPERATURE_MAX: f64 = 95.0;

/// Fuel level range as a percentage of tank capacity. The lower end sits
/// below the critical threshold so low-fuel states actually occur.
pub const FUEL_MIN: f64 = 10.0;
pub const FUEL_MAX: f64 = 100.0;

/// Produces a stream of synthetic reports for a single unit.
pub struct ReportGenerator {
    equipment_id: String,
    position: GeoPosition,
    rng: StdRng,
}

impl ReportGenerator {
    /// A generator seeded from the operating system.
    pub fn new(equipment_id: String, position: GeoPosition) -> Self {
        Self::from_rng(equipment_id, position, StdRng::from_os_rng())
    }

    /// A deterministic generator for tests: the same seed yields the same
    /// sequence of reports (timestamps aside).
    pub fn with_seed(equipment_id: String, position: GeoPosition, seed: u64) -> Self {
        Self::from_rng(equipment_id, position, StdRng::seed_from_u64(seed))
    }

    fn from_rng(equipment_id: String, position: GeoPosition, rng: StdRng) -> Self {
        Self {
            equipment_id,
            position,
            rng,
        }
    }

    /// Fabricate the next report, stamped with the current time.
    pub fn generate(&mut self) -> TelemetryReport {
        TelemetryReport {
            equipment_id: self.equipment_id.clone(),
            timestamp: Utc::now(),
            position: self.position,
            engine_rpm: self.rng.random_range(ENGINE_RPM_MIN..=ENGINE_RPM_MAX),
            temperature: self.rng.random_range(TEMPERATURE_MIN..TEMPERATURE_MAX),
            fuel_level: self.rng.random_range(FUEL_MIN..=FUEL_MAX),
            fault_codes: Vec::new(),
        }
    }
}
