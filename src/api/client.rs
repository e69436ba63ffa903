//! HTTP API Client
//!
//! Typed wrappers for the VectorShield REST API. Every call carries a fixed
//! 10 second client-side timeout and normalizes failures into [`ApiError`].

use futures_util::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;

use crate::model::{
    Alert, CorrelationData, HeatPoint, PodTelemetry, Prediction, RawZone, RiskExplanation,
    ScenarioResult, Summary, SystemStatus, Zone,
};
use crate::transform::normalize_zone;

/// Client-side timeout applied to every request.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Normalized failure modes for backend calls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {0}: {1}")]
    Status(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Base URL: the local development server when served from localhost, the
/// same origin otherwise.
pub fn api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();
    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000/api/v1".to_string()
    } else {
        "/api/v1".to_string()
    }
}

/// Races a request against the fixed timeout. The timed-out request is not
/// aborted; its eventual result is simply dropped.
async fn send_with_timeout<F>(fetch: F) -> Result<Response, ApiError>
where
    F: std::future::Future<Output = Result<Response, gloo_net::Error>>,
{
    let fetch = Box::pin(fetch);
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(fetch, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string())),
        Either::Right(_) => Err(ApiError::Timeout),
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Status(status, body))
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = format!("{}{}", api_base(), path);
    let response = check_status(send_with_timeout(Request::get(&url).send()).await?).await?;
    response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
}

async fn post_empty(path: &str) -> Result<Response, ApiError> {
    let url = format!("{}{}", api_base(), path);
    check_status(send_with_timeout(Request::post(&url).send()).await?).await
}

// ============ Dashboard ============

pub async fn fetch_summary() -> Result<Summary, ApiError> {
    get_json("/dashboard/summary").await
}

pub async fn fetch_live_pod_data() -> Result<PodTelemetry, ApiError> {
    get_json("/dashboard/live-pod-data").await
}

// ============ Map ============

/// Fetches zones and coerces the backend's aliased row shapes into the
/// canonical form.
pub async fn fetch_zones() -> Result<Vec<Zone>, ApiError> {
    let raw: Vec<RawZone> = get_json("/map/zones").await?;
    Ok(raw.iter().map(normalize_zone).collect())
}

pub async fn fetch_heatmap() -> Result<Vec<HeatPoint>, ApiError> {
    let rows: Vec<Vec<f64>> = get_json("/map/heatmap").await?;
    Ok(rows.iter().map(|row| HeatPoint::from_row(row)).collect())
}

// ============ Predictions and alerts ============

pub async fn fetch_predictions_48h() -> Result<Vec<Prediction>, ApiError> {
    get_json("/prediction/48h").await
}

pub async fn fetch_live_alerts() -> Result<Vec<Alert>, ApiError> {
    get_json("/alerts/live").await
}

// ============ System ============

pub async fn reload_backend() -> Result<SystemStatus, ApiError> {
    let response = post_empty("/system/reload").await?;
    response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
}

/// Best-effort simulation clock advance. Callers swallow and log failures.
pub async fn simulate_tick() -> Result<(), ApiError> {
    post_empty("/simulate-tick").await?;
    Ok(())
}

// ============ Export ============

/// Backend-native CSV export. Callers fall back to a client-synthesized file
/// when this fails.
pub async fn export_zones_csv() -> Result<String, ApiError> {
    let url = format!("{}/export/zones", api_base());
    let response = check_status(send_with_timeout(Request::get(&url).send()).await?).await?;
    response.text().await.map_err(|e| ApiError::Parse(e.to_string()))
}

// ============ Demo ============

pub async fn start_demo() -> Result<(), ApiError> {
    post_empty("/demo/start").await?;
    Ok(())
}

pub async fn stop_demo() -> Result<(), ApiError> {
    post_empty("/demo/stop").await?;
    Ok(())
}

pub async fn fetch_risk_explanation(location: &str) -> Result<RiskExplanation, ApiError> {
    let encoded: String = js_sys::encode_uri_component(location).into();
    get_json(&format!("/demo/explanation/{encoded}")).await
}

pub async fn fetch_correlations() -> Result<CorrelationData, ApiError> {
    get_json("/demo/correlations").await
}

// ============ Scenario ============

/// Uploads the two scenario CSVs as a multipart request. The browser sets the
/// multipart boundary from the `FormData` body.
pub async fn upload_scenario(
    hospital: &web_sys::File,
    water: &web_sys::File,
) -> Result<ScenarioResult, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("form construction failed".to_string()))?;
    form.append_with_blob_and_filename("hospital_file", hospital, &hospital.name())
        .map_err(|_| ApiError::Network("form append failed".to_string()))?;
    form.append_with_blob_and_filename("water_file", water, &water.name())
        .map_err(|_| ApiError::Network("form append failed".to_string()))?;

    let url = format!("{}/scenario/scenario-upload", api_base());
    let request = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = check_status(send_with_timeout(request.send()).await?).await?;
    response.json().await.map_err(|e| ApiError::Parse(e.to_string()))
}
