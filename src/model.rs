//! Data Model
//!
//! Wire types for the VectorShield backend and the canonical in-memory
//! snapshot shared by every dashboard view.
//!
//! Every field carries `#[serde(default)]` so a partial payload deserializes
//! into zeros and empty collections instead of failing: downstream rendering
//! never sees an absent value.

use serde::{Deserialize, Serialize};

/// Immutable bundle of the latest successfully fetched backend data.
///
/// Replaced wholesale on each successful poll cycle, never mutated in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub summary: Summary,
    pub zones: Vec<Zone>,
    pub alerts: Vec<Alert>,
    pub predictions: Vec<Prediction>,
    pub heatmap: Vec<HeatPoint>,
    pub pod: PodTelemetry,
}

/// Aggregate KPI counters from `/dashboard/summary`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Summary {
    pub avg_risk: f64,
    pub total_predicted_cases: f64,
    pub critical_zones: u32,
    pub high_zones: u32,
    pub total_zones: u32,
    pub total_anomalies: u32,
}

/// A geographic unit with a computed risk score and level.
///
/// Canonical shape produced by [`crate::transform::normalize_zone`]; the
/// backend's aliased spellings arrive as [`RawZone`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Zone {
    pub location: String,
    pub risk_score: f64,
    /// Upper-cased level string (CRITICAL, HIGH, MODERATE, LOW, VERYLOW).
    pub risk_level: String,
    pub lat: f64,
    pub lng: f64,
    pub predicted_cases: f64,
}

/// Zone row as the backend actually sends it. Field names vary between
/// deployments (`risk` vs `riskScore`, `city` vs `location`, ...) and numeric
/// fields sometimes arrive as strings, so everything is optional and loosely
/// typed until normalization.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawZone {
    #[serde(alias = "city")]
    pub location: Option<String>,
    #[serde(rename = "riskScore", alias = "risk", alias = "value")]
    pub risk_score: Option<serde_json::Value>,
    #[serde(rename = "riskLevel", alias = "level", alias = "severity")]
    pub risk_level: Option<String>,
    pub lat: Option<serde_json::Value>,
    pub lng: Option<serde_json::Value>,
    #[serde(
        rename = "predicted_cases",
        alias = "predicted_cases_48h",
        alias = "predictedCases"
    )]
    pub predicted_cases: Option<serde_json::Value>,
}

/// A live alert from `/alerts/live`. `location` is absent for nation-wide
/// watches and renders as "National Watch".
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub location: Option<String>,
    pub message: String,
    pub severity: String,
    /// ISO-8601 string as sent by the backend.
    pub timestamp: String,
}

/// Per-location 48 hour case forecast.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub location: String,
    pub predicted_cases_48h: f64,
}

/// One heatmap cell. The wire format is a bare `[lat, lng, intensity]` row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub intensity: f64,
}

impl HeatPoint {
    /// Builds a point from a wire row, padding short rows with zeros.
    pub fn from_row(row: &[f64]) -> Self {
        Self {
            lat: row.first().copied().unwrap_or(0.0),
            lng: row.get(1).copied().unwrap_or(0.0),
            intensity: row.get(2).copied().unwrap_or(0.0),
        }
    }
}

/// Environmental readings from the sensor pods.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PodTelemetry {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub soil_moisture: f64,
    /// "live", "no_data" or "error".
    pub status: String,
}

/// Result of a scenario upload. The client performs no computation on this;
/// it is rendered as received.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioResult {
    pub predicted_cases: f64,
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
    pub anomaly: bool,
    pub analysis: ScenarioAnalysis,
    #[serde(rename = "chartData")]
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    pub water_risk: String,
    pub environment_risk: String,
    pub trend: String,
}

/// A single labelled value for trend charts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartPoint {
    pub name: String,
    pub risk: f64,
}

/// Per-location risk breakdown from `/demo/explanation/{location}`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RiskExplanation {
    pub location: String,
    pub hospital_trend: f64,
    pub water_contamination: f64,
    pub environmental_risk: f64,
    pub confidence: f64,
}

/// Statistical correlation values from `/demo/correlations`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CorrelationData {
    pub cases_vs_water: f64,
    pub cases_vs_humidity: f64,
    pub cases_vs_rainfall: f64,
}

/// Response from `/system/reload`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemStatus {
    pub status: String,
    pub last_load: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_missing_fields_to_zero() {
        let summary: Summary = serde_json::from_str(r#"{"avgRisk": 42.5}"#).unwrap();
        assert_eq!(summary.avg_risk, 42.5);
        assert_eq!(summary.total_zones, 0);
        assert_eq!(summary.total_predicted_cases, 0.0);
    }

    #[test]
    fn alert_without_location_deserializes() {
        let alert: Alert = serde_json::from_str(
            r#"{"message": "Spike detected", "severity": "Critical", "timestamp": "2026-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(alert.location, None);
        assert_eq!(alert.severity, "Critical");
    }

    #[test]
    fn raw_zone_accepts_aliased_field_names() {
        let raw: RawZone =
            serde_json::from_str(r#"{"city": "Pune", "risk": 72, "level": "High"}"#).unwrap();
        assert_eq!(raw.location.as_deref(), Some("Pune"));
        assert_eq!(raw.risk_score, Some(serde_json::json!(72)));
        assert_eq!(raw.risk_level.as_deref(), Some("High"));
    }

    #[test]
    fn heat_point_pads_short_rows() {
        assert_eq!(
            HeatPoint::from_row(&[18.5]),
            HeatPoint { lat: 18.5, lng: 0.0, intensity: 0.0 }
        );
        assert_eq!(
            HeatPoint::from_row(&[18.5, 73.8, 66.0]),
            HeatPoint { lat: 18.5, lng: 73.8, intensity: 66.0 }
        );
    }

    #[test]
    fn scenario_result_tolerates_partial_payload() {
        let result: ScenarioResult =
            serde_json::from_str(r#"{"riskScore": 61.0, "anomaly": true}"#).unwrap();
        assert_eq!(result.risk_score, 61.0);
        assert!(result.anomaly);
        assert_eq!(result.analysis.trend, "");
        assert!(result.chart_data.is_empty());
    }
}
