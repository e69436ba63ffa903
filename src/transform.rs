//! Derived-View Transformations
//!
//! Pure functions that shape raw snapshot data into what each view needs:
//! alert ranking, zone normalization, top-N selection and the marker
//! color/radius mappings shared by every map surface.

use crate::model::{Alert, Prediction, RawZone, Zone};

/// Discrete risk level derived from a 0-100 score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "VeryLow",
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
            RiskLevel::Critical => "Critical",
        }
    }

    /// Marker color used identically across all map views.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "#DC2626",
            RiskLevel::High => "#EA580C",
            RiskLevel::Moderate => "#FACC15",
            RiskLevel::Low => "#22C55E",
            RiskLevel::VeryLow => "#16A34A",
        }
    }
}

/// The single source for deriving a level from a score. Thresholds:
/// Critical >= 85, High >= 70, Moderate >= 45, Low >= 15, else VeryLow.
pub fn risk_level_for(score: f64) -> RiskLevel {
    if score >= 85.0 {
        RiskLevel::Critical
    } else if score >= 70.0 {
        RiskLevel::High
    } else if score >= 45.0 {
        RiskLevel::Moderate
    } else if score >= 15.0 {
        RiskLevel::Low
    } else {
        RiskLevel::VeryLow
    }
}

/// Severity rank: Critical=4, High=3, Moderate=2, Low=1, anything else 0.
pub fn severity_rank(severity: &str) -> u8 {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => 4,
        "high" => 3,
        "moderate" => 2,
        "low" => 1,
        _ => 0,
    }
}

/// Stable sort by severity rank descending, ties broken by timestamp
/// descending (newest first). ISO-8601 timestamps compare lexicographically.
pub fn sort_alerts(mut alerts: Vec<Alert>) -> Vec<Alert> {
    alerts.sort_by(|a, b| {
        severity_rank(&b.severity)
            .cmp(&severity_rank(&a.severity))
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
    alerts
}

/// Exact severity pre-filter. `None` keeps everything.
pub fn filter_by_severity(alerts: &[Alert], severity: Option<&str>) -> Vec<Alert> {
    match severity {
        Some(wanted) => alerts.iter().filter(|a| a.severity == wanted).cloned().collect(),
        None => alerts.to_vec(),
    }
}

/// Filter-then-sort pipeline used by the alert feed.
pub fn ranked_alerts(alerts: &[Alert], severity: Option<&str>) -> Vec<Alert> {
    sort_alerts(filter_by_severity(alerts, severity))
}

/// Top `n` zones by descending risk score; ties keep original order.
pub fn top_zones(zones: &[Zone], n: usize) -> Vec<Zone> {
    let mut sorted = zones.to_vec();
    sorted.sort_by(|a, b| {
        b.risk_score
            .partial_cmp(&a.risk_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Top `n` predictions by descending forecast case count; stable on ties.
pub fn top_predictions(predictions: &[Prediction], n: usize) -> Vec<Prediction> {
    let mut sorted = predictions.to_vec();
    sorted.sort_by(|a, b| {
        b.predicted_cases_48h
            .partial_cmp(&a.predicted_cases_48h)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(n);
    sorted
}

/// Marker color step function. Same score, same color, on every map.
pub fn marker_color(score: f64) -> &'static str {
    risk_level_for(score).color()
}

/// Zone marker radius in canvas pixels.
pub fn marker_radius(score: f64) -> f64 {
    8.0 + score / 10.0
}

/// Heat overlay radius for a heatmap intensity value.
pub fn heat_radius(intensity: f64) -> f64 {
    25.0 + intensity / 5.0
}

/// Alert counts grouped by location in first-appearance order. Alerts without
/// a location group under "National Watch".
pub fn alerts_per_location(alerts: &[Alert]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for alert in alerts {
        let key = alert
            .location
            .clone()
            .unwrap_or_else(|| "National Watch".to_string());
        match counts.iter_mut().find(|(name, _)| *name == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

fn coerce_num(value: Option<&serde_json::Value>) -> f64 {
    match value {
        Some(v) => v
            .as_f64()
            .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
            .unwrap_or(0.0),
        None => 0.0,
    }
}

/// Coerces a backend zone row into the canonical [`Zone`] shape.
///
/// Numeric coercion failures default to 0. Level strings are upper-cased; a
/// missing level is derived from the score so the two always agree.
pub fn normalize_zone(raw: &RawZone) -> Zone {
    let risk_score = coerce_num(raw.risk_score.as_ref());
    let risk_level = match raw.risk_level.as_deref() {
        Some(level) if !level.is_empty() => level.to_ascii_uppercase(),
        _ => risk_level_for(risk_score).as_str().to_ascii_uppercase(),
    };
    Zone {
        location: raw.location.clone().unwrap_or_default(),
        risk_score,
        risk_level,
        lat: coerce_num(raw.lat.as_ref()),
        lng: coerce_num(raw.lng.as_ref()),
        predicted_cases: coerce_num(raw.predicted_cases.as_ref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alert(location: &str, severity: &str, timestamp: &str) -> Alert {
        Alert {
            location: Some(location.to_string()),
            message: format!("{severity} alert for {location}"),
            severity: severity.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn zone(location: &str, risk_score: f64) -> Zone {
        Zone {
            location: location.to_string(),
            risk_score,
            risk_level: risk_level_for(risk_score).as_str().to_ascii_uppercase(),
            ..Default::default()
        }
    }

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(risk_level_for(84.0), RiskLevel::High);
        assert_eq!(risk_level_for(85.0), RiskLevel::Critical);
        assert_eq!(risk_level_for(44.0), RiskLevel::Low);
        assert_eq!(risk_level_for(45.0), RiskLevel::Moderate);
        assert_eq!(risk_level_for(14.0), RiskLevel::VeryLow);
        assert_eq!(risk_level_for(15.0), RiskLevel::Low);
    }

    #[test]
    fn risk_level_is_monotonic_in_score() {
        let mut previous = risk_level_for(0.0);
        for score in 0..=100 {
            let level = risk_level_for(score as f64);
            assert!(level >= previous, "level regressed at score {score}");
            previous = level;
        }
    }

    #[test]
    fn severity_rank_total_order() {
        assert_eq!(severity_rank("Critical"), 4);
        assert_eq!(severity_rank("high"), 3);
        assert_eq!(severity_rank("Moderate"), 2);
        assert_eq!(severity_rank("LOW"), 1);
        assert_eq!(severity_rank("Advisory"), 0);
        assert_eq!(severity_rank(""), 0);
    }

    #[test]
    fn alert_sort_orders_by_severity_then_recency() {
        let sorted = sort_alerts(vec![
            alert("Pune", "Low", "2026-03-01T09:00:00Z"),
            alert("Delhi", "Critical", "2026-03-01T08:00:00Z"),
            alert("Mumbai", "Critical", "2026-03-01T10:00:00Z"),
            alert("Chennai", "High", "2026-03-01T11:00:00Z"),
        ]);
        let order: Vec<_> = sorted.iter().map(|a| a.location.as_deref().unwrap()).collect();
        assert_eq!(order, vec!["Mumbai", "Delhi", "Chennai", "Pune"]);
    }

    #[test]
    fn alert_sort_is_idempotent_and_stable() {
        let alerts = vec![
            alert("A", "High", "2026-03-01T10:00:00Z"),
            alert("B", "High", "2026-03-01T10:00:00Z"),
            alert("C", "Moderate", "2026-03-01T10:00:00Z"),
        ];
        let once = sort_alerts(alerts);
        let twice = sort_alerts(once.clone());
        assert_eq!(once, twice);
        // Equal severity and timestamp keep their original relative order.
        assert_eq!(once[0].location.as_deref(), Some("A"));
        assert_eq!(once[1].location.as_deref(), Some("B"));
    }

    #[test]
    fn critical_filter_yields_subsequence_of_full_sort() {
        let alerts = vec![
            alert("A", "Moderate", "2026-03-01T12:00:00Z"),
            alert("B", "Critical", "2026-03-01T09:00:00Z"),
            alert("C", "Critical", "2026-03-01T11:00:00Z"),
            alert("D", "High", "2026-03-01T10:00:00Z"),
        ];
        let full = ranked_alerts(&alerts, None);
        let criticals = ranked_alerts(&alerts, Some("Critical"));

        assert!(criticals.iter().all(|a| a.severity == "Critical"));
        let positions: Vec<_> = criticals
            .iter()
            .map(|a| full.iter().position(|f| f == a).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn top_zones_selects_five_descending() {
        let zones: Vec<_> = [30.0, 90.0, 55.0, 90.0, 10.0, 70.0, 40.0]
            .iter()
            .enumerate()
            .map(|(i, score)| zone(&format!("Z{i}"), *score))
            .collect();
        let top = top_zones(&zones, 5);
        assert_eq!(top.len(), 5);
        let scores: Vec<_> = top.iter().map(|z| z.risk_score).collect();
        assert_eq!(scores, vec![90.0, 90.0, 70.0, 55.0, 40.0]);
        // Tie at 90 keeps original order: Z1 before Z3.
        assert_eq!(top[0].location, "Z1");
        assert_eq!(top[1].location, "Z3");
    }

    #[test]
    fn marker_mappings_are_step_functions_of_score() {
        assert_eq!(marker_color(92.0), "#DC2626");
        assert_eq!(marker_color(70.0), "#EA580C");
        assert_eq!(marker_color(50.0), "#FACC15");
        assert_eq!(marker_color(20.0), "#22C55E");
        assert_eq!(marker_color(5.0), "#16A34A");
        assert_eq!(marker_radius(80.0), 16.0);
        assert_eq!(marker_radius(0.0), 8.0);
        assert_eq!(heat_radius(50.0), 35.0);
    }

    #[test]
    fn alerts_group_in_first_appearance_order() {
        let mut alerts = vec![
            alert("Pune", "High", "t1"),
            alert("Delhi", "Low", "t2"),
            alert("Pune", "Critical", "t3"),
        ];
        alerts.push(Alert { location: None, severity: "Moderate".into(), ..Default::default() });
        assert_eq!(
            alerts_per_location(&alerts),
            vec![
                ("Pune".to_string(), 2),
                ("Delhi".to_string(), 1),
                ("National Watch".to_string(), 1),
            ]
        );
    }

    #[test]
    fn normalize_zone_coerces_aliases_and_bad_numbers() {
        let raw: RawZone = serde_json::from_str(
            r#"{"city": "Pune", "risk": "72", "severity": "High", "lat": 18.52, "lng": "bogus"}"#,
        )
        .unwrap();
        let zone = normalize_zone(&raw);
        assert_eq!(zone.location, "Pune");
        assert_eq!(zone.risk_score, 72.0);
        assert_eq!(zone.risk_level, "HIGH");
        assert_eq!(zone.lat, 18.52);
        assert_eq!(zone.lng, 0.0);
        assert_eq!(zone.predicted_cases, 0.0);
    }

    #[test]
    fn normalize_zone_derives_missing_level_from_score() {
        let raw: RawZone = serde_json::from_str(r#"{"location": "Delhi", "riskScore": 88}"#).unwrap();
        let zone = normalize_zone(&raw);
        assert_eq!(zone.risk_level, "CRITICAL");
    }

    #[test]
    fn top_predictions_orders_by_forecast() {
        let predictions = vec![
            Prediction { location: "A".into(), predicted_cases_48h: 12.0 },
            Prediction { location: "B".into(), predicted_cases_48h: 40.0 },
            Prediction { location: "C".into(), predicted_cases_48h: 25.0 },
        ];
        let top = top_predictions(&predictions, 2);
        assert_eq!(top[0].location, "B");
        assert_eq!(top[1].location, "C");
    }
}
