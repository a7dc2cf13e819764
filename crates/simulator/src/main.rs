//! `fleetwatch-simulator` -- synthetic field unit for development.
//!
//! Impersonates one piece of heavy equipment: fabricates telemetry
//! reports on a fixed interval and pushes them to the backend ingest
//! endpoint over HTTP.
//!
//! # Environment variables
//!
//! | Variable               | Required | Default       | Description                                    |
//! |------------------------|----------|---------------|------------------------------------------------|
//! | `INGEST_URL`           | yes      | --            | Ingest endpoint, e.g. `http://host:8000/api/telemetry` |
//! | `INGEST_TOKEN`         | yes      | --            | Bearer token presented on every push           |
//! | `EQUIPMENT_ID`         | no       | `CAT330-FAKE` | Unit identifier stamped on each report         |
//! | `REPORT_INTERVAL_SECS` | no       | `5`           | Seconds between report pushes                  |

use std::time::Duration;

use fleetwatch_simulator::generator::{ReportGenerator, DEFAULT_EQUIPMENT_ID, DEFAULT_POSITION};
use fleetwatch_simulator::sender::{self, ReportSender};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default interval between report generation + push cycles.
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleetwatch_simulator=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let ingest_url = std::env::var("INGEST_URL").unwrap_or_else(|_| {
        tracing::error!("INGEST_URL environment variable is required");
        std::process::exit(1);
    });

    let auth_token = std::env::var("INGEST_TOKEN").unwrap_or_else(|_| {
        tracing::error!("INGEST_TOKEN environment variable is required");
        std::process::exit(1);
    });

    let equipment_id =
        std::env::var("EQUIPMENT_ID").unwrap_or_else(|_| DEFAULT_EQUIPMENT_ID.to_string());

    let interval_secs: u64 = std::env::var("REPORT_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let interval = Duration::from_secs(interval_secs);

    tracing::info!(
        equipment_id = %equipment_id,
        ingest_url = %ingest_url,
        interval_secs,
        "Starting fleetwatch-simulator",
    );

    let mut generator = ReportGenerator::new(equipment_id, DEFAULT_POSITION);
    let report_sender = ReportSender::new(ingest_url, auth_token);

    sender::run(&report_sender, &mut generator, interval).await;
}
