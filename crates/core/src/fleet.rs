//! Fleet-level rollups for dashboard headline figures.

use serde::Serialize;

use crate::equipment::{EquipmentRecord, OperationalStatus};

// ---------------------------------------------------------------------------
// Structs
// ---------------------------------------------------------------------------

/// Headcount of the fleet broken down by operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FleetSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub maintenance: usize,
}

// ---------------------------------------------------------------------------
// Evaluation functions
// ---------------------------------------------------------------------------

/// Counts units per status. `total` always equals the slice length, so
/// the three buckets partition it.
pub fn summarize(records: &[EquipmentRecord]) -> FleetSummary {
    let mut summary = FleetSummary {
        total: records.len(),
        active: 0,
        inactive: 0,
        maintenance: 0,
    };
    for record in records {
        match record.status {
            OperationalStatus::Active => summary.active += 1,
            OperationalStatus::Inactive => summary.inactive += 1,
            OperationalStatus::Maintenance => summary.maintenance += 1,
        }
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
