//! HTTP delivery of telemetry reports to the ingest endpoint.
//!
//! [`ReportSender`] POSTs one JSON-encoded [`TelemetryReport`] per call,
//! authenticated with a bearer token. Delivery failures are logged and
//! the report is dropped; the next tick sends a fresh one, so stale data
//! never queues up behind a flaky connection.

use std::time::Duration;

use fleetwatch_core::telemetry::TelemetryReport;

use crate::generator::ReportGenerator;

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for report delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The ingest endpoint returned a non-2xx status code.
    #[error("Ingest endpoint returned HTTP {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// ReportSender
// ---------------------------------------------------------------------------

/// Delivers telemetry reports to the backend ingest endpoint.
pub struct ReportSender {
    client: reqwest::Client,
    ingest_url: String,
    auth_token: String,
}

impl ReportSender {
    /// Create a sender with a pre-configured HTTP client.
    pub fn new(ingest_url: String, auth_token: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            ingest_url,
            auth_token,
        }
    }

    /// Execute a single POST and check the response status. No retry;
    /// the caller decides what a failure means.
    pub async fn send(&self, report: &TelemetryReport) -> Result<(), SendError> {
        let response = self
            .client
            .post(&self.ingest_url)
            .bearer_auth(&self.auth_token)
            .json(report)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SendError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Push loop
// ---------------------------------------------------------------------------

/// Run the report push loop indefinitely.
///
/// This function never returns under normal operation. Each tick
/// fabricates one report and attempts one delivery.
pub async fn run(sender: &ReportSender, generator: &mut ReportGenerator, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);

    loop {
        ticker.tick().await;
        let report = generator.generate();
        tracing::debug!(
            equipment_id = %report.equipment_id,
            temperature = report.temperature,
            fuel_level = report.fuel_level,
            "Sending telemetry report"
        );

        if let Err(e) = sender.send(&report).await {
            tracing::error!(error = %e, "Failed to deliver report");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_does_not_panic() {
        let _sender = ReportSender::new(
            "http://localhost:8000/api/telemetry".to_string(),
            "secret".to_string(),
        );
    }

    #[test]
    fn send_error_display_http_status() {
        let err = SendError::HttpStatus(401);
        assert_eq!(err.to_string(), "Ingest endpoint returned HTTP 401");
    }

    #[test]
    fn send_error_display_request() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = SendError::Request(req_err);
        assert!(err.to_string().contains("HTTP request failed"));
    }
}
