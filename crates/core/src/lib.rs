//! `fleetwatch-core` -- domain logic for the fleet monitoring platform.
//!
//! Pure types and evaluation functions: telemetry records, severity
//! classification, map marker resolution, the equipment directory, and
//! alert scanning. No network or storage access -- callers fetch data
//! and pass it in, so everything here can be tested in isolation.

pub mod alerts;
pub mod equipment;
pub mod error;
pub mod fleet;
pub mod marker;
pub mod severity;
pub mod telemetry;
pub mod types;
