//! Export Projector
//!
//! Turns the current snapshot into downloadable CSV/JSON artifacts. The CSV
//! path prefers the backend-native export endpoint and falls back to a
//! client-synthesized file; the intel report is always built client-side.
//! Both projections take the timestamp as an argument so they are
//! deterministic for a fixed snapshot.

use serde::Serialize;
use wasm_bindgen::JsCast;

use crate::api;
use crate::model::{Snapshot, Zone};
use crate::transform::top_zones;

/// Prints integral floats without a decimal point, matching the backend's CSV
/// rendering (72.0 -> "72").
fn fmt_num(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Client-synthesized CSV over the in-memory zones. Never fails; a zone with
/// a missing location or level renders an empty field.
pub fn fallback_csv(zones: &[Zone]) -> String {
    let mut csv = String::from("city,risk,severity,predicted");
    for zone in zones {
        csv.push('\n');
        csv.push_str(&format!(
            "{},{},{},{}",
            zone.location,
            fmt_num(zone.risk_score),
            zone.risk_level,
            fmt_num(zone.predicted_cases)
        ));
    }
    csv
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IntelReport {
    timestamp: String,
    active_cities: Vec<CityRisk>,
    avg_risk: f64,
    total_anomalies: u32,
    top_zones: Vec<CityRisk>,
}

#[derive(Serialize)]
struct CityRisk {
    city: String,
    risk: f64,
}

fn city_risk(zone: &Zone) -> CityRisk {
    CityRisk { city: zone.location.clone(), risk: zone.risk_score }
}

/// Risk intel report as pretty-printed JSON. `topZones` is the top-5 zone
/// selection by descending risk.
pub fn intel_report(snapshot: &Snapshot, timestamp: &str) -> String {
    let report = IntelReport {
        timestamp: timestamp.to_string(),
        active_cities: snapshot.zones.iter().map(city_risk).collect(),
        avg_risk: snapshot.summary.avg_risk,
        total_anomalies: snapshot.summary.total_anomalies,
        top_zones: top_zones(&snapshot.zones, 5).iter().map(city_risk).collect(),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

/// Downloads the zone CSV, preferring the backend export endpoint. Any
/// backend failure falls back to synthesizing the file from the snapshot.
pub async fn download_zones_csv(snapshot: &Snapshot) -> Result<(), String> {
    let csv = match api::export_zones_csv().await {
        Ok(body) => body,
        Err(e) => {
            web_sys::console::warn_1(
                &format!("Export endpoint unavailable, using fallback: {e}").into(),
            );
            fallback_csv(&snapshot.zones)
        }
    };
    trigger_download(&format!("zones-{}.csv", date_stamp()), &csv)
}

/// Builds and downloads the JSON intel report from the current snapshot.
pub fn download_intel_report(snapshot: &Snapshot) -> Result<(), String> {
    let report = intel_report(snapshot, &chrono::Utc::now().to_rfc3339());
    trigger_download(&format!("intel-report-{}.json", date_stamp()), &report)
}

fn date_stamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// Creates an object URL for the content and clicks a synthetic anchor.
fn trigger_download(filename: &str, content: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&content.into());
    let blob = web_sys::Blob::new_with_str_sequence(&parts)
        .map_err(|_| "blob construction failed".to_string())?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|_| "object URL creation failed".to_string())?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "anchor creation failed".to_string())?;
    let _ = anchor.set_attribute("href", &url);
    let _ = anchor.set_attribute("download", filename);
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or("anchor cast failed")?
        .click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Summary;

    fn zone(location: &str, risk_score: f64, risk_level: &str, predicted_cases: f64) -> Zone {
        Zone {
            location: location.to_string(),
            risk_score,
            risk_level: risk_level.to_string(),
            predicted_cases,
            ..Default::default()
        }
    }

    #[test]
    fn fallback_csv_matches_expected_body() {
        let zones = vec![zone("Pune", 72.0, "HIGH", 40.0)];
        assert_eq!(fallback_csv(&zones), "city,risk,severity,predicted\nPune,72,HIGH,40");
    }

    #[test]
    fn fallback_csv_renders_missing_fields_as_empty() {
        let zones = vec![Zone { risk_score: 12.5, ..Default::default() }];
        assert_eq!(fallback_csv(&zones), "city,risk,severity,predicted\n,12.5,,0");
    }

    #[test]
    fn fallback_csv_of_no_zones_is_header_only() {
        assert_eq!(fallback_csv(&[]), "city,risk,severity,predicted");
    }

    #[test]
    fn intel_report_is_deterministic_and_ranked() {
        let snapshot = Snapshot {
            summary: Summary { avg_risk: 55.2, total_anomalies: 3, ..Default::default() },
            zones: vec![
                zone("C", 10.0, "VERYLOW", 0.0),
                zone("A", 90.0, "CRITICAL", 55.0),
                zone("B", 80.0, "HIGH", 30.0),
            ],
            ..Default::default()
        };

        let report = intel_report(&snapshot, "2026-03-01T00:00:00Z");
        let parsed: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(parsed["timestamp"], "2026-03-01T00:00:00Z");
        assert_eq!(parsed["avgRisk"], 55.2);
        assert_eq!(parsed["totalAnomalies"], 3);
        assert_eq!(parsed["activeCities"].as_array().unwrap().len(), 3);

        let top = parsed["topZones"].as_array().unwrap();
        assert_eq!(top.len(), 3.min(5));
        assert_eq!(top[0]["city"], "A");
        assert_eq!(top[1]["city"], "B");
        assert_eq!(top[2]["city"], "C");

        // Same snapshot, same clock, same bytes.
        assert_eq!(report, intel_report(&snapshot, "2026-03-01T00:00:00Z"));
    }

    #[test]
    fn intel_report_caps_top_zones_at_five() {
        let zones: Vec<_> = (0..8).map(|i| zone(&format!("Z{i}"), i as f64 * 10.0, "LOW", 0.0)).collect();
        let snapshot = Snapshot { zones, ..Default::default() };
        let parsed: serde_json::Value =
            serde_json::from_str(&intel_report(&snapshot, "t")).unwrap();
        assert_eq!(parsed["topZones"].as_array().unwrap().len(), 5);
        assert_eq!(parsed["topZones"][0]["city"], "Z7");
    }
}
