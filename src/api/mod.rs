//! API Layer
//!
//! Typed HTTP client plus the fan-out bundle fetch that feeds the polling
//! controller.

pub mod client;

pub use client::*;

use crate::model::Snapshot;

/// Fetches every snapshot resource concurrently and commits only if all
/// succeed; the first failure fails the whole bundle so a poll cycle is
/// all-or-nothing.
pub async fn fetch_snapshot() -> Result<Snapshot, ApiError> {
    let (summary, zones, alerts, predictions, heatmap, pod) = futures_util::try_join!(
        client::fetch_summary(),
        client::fetch_zones(),
        client::fetch_live_alerts(),
        client::fetch_predictions_48h(),
        client::fetch_heatmap(),
        client::fetch_live_pod_data(),
    )?;
    Ok(Snapshot { summary, zones, alerts, predictions, heatmap, pod })
}
