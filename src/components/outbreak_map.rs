//! Outbreak Map Component
//!
//! Zone markers and heat circles on an HTML5 canvas. Marker color and radius
//! come from the shared score mappings so a given score renders identically
//! on every view.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::{HeatPoint, Zone};
use crate::transform::{heat_radius, marker_color, marker_radius};

/// Geographic map surface. `heatmap` is optional; the dashboard overview
/// renders markers only, the live map layers heat circles underneath.
#[component]
pub fn OutbreakMap(
    #[prop(into)] zones: Signal<Vec<Zone>>,
    #[prop(optional, into)] heatmap: Option<Signal<Vec<HeatPoint>>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw whenever a new snapshot lands
    create_effect(move |_| {
        let zones = zones.get();
        let heat = heatmap.map(|h| h.get()).unwrap_or_default();

        if let Some(canvas) = canvas_ref.get() {
            draw_map(&canvas, &zones, &heat);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="480"
            class="w-full h-96 rounded-xl border border-slate-800 bg-slate-950"
        />
    }
}

struct Projection {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    width: f64,
    height: f64,
    margin: f64,
}

impl Projection {
    /// Fits the view to the data, falling back to a country-level frame when
    /// the snapshot is empty.
    fn fit(zones: &[Zone], heat: &[HeatPoint], width: f64, height: f64) -> Self {
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut min_lng = f64::INFINITY;
        let mut max_lng = f64::NEG_INFINITY;

        for (lat, lng) in zones
            .iter()
            .map(|z| (z.lat, z.lng))
            .chain(heat.iter().map(|p| (p.lat, p.lng)))
        {
            min_lat = min_lat.min(lat);
            max_lat = max_lat.max(lat);
            min_lng = min_lng.min(lng);
            max_lng = max_lng.max(lng);
        }

        if !min_lat.is_finite() {
            // Default frame: India
            min_lat = 6.0;
            max_lat = 37.0;
            min_lng = 68.0;
            max_lng = 98.0;
        }
        if (max_lat - min_lat).abs() < 1.0 {
            min_lat -= 0.5;
            max_lat += 0.5;
        }
        if (max_lng - min_lng).abs() < 1.0 {
            min_lng -= 0.5;
            max_lng += 0.5;
        }

        Self { min_lat, max_lat, min_lng, max_lng, width, height, margin: 40.0 }
    }

    fn project(&self, lat: f64, lng: f64) -> (f64, f64) {
        let x = self.margin
            + (lng - self.min_lng) / (self.max_lng - self.min_lng)
                * (self.width - 2.0 * self.margin);
        // Canvas y grows downward
        let y = self.margin
            + (self.max_lat - lat) / (self.max_lat - self.min_lat)
                * (self.height - 2.0 * self.margin);
        (x, y)
    }
}

fn draw_map(canvas: &HtmlCanvasElement, zones: &[Zone], heat: &[HeatPoint]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#020617".into()); // slate-950
    ctx.fill_rect(0.0, 0.0, width, height);

    let projection = Projection::fit(zones, heat, width, height);

    // Heat overlay underneath the markers
    ctx.set_fill_style(&"rgba(239, 68, 68, 0.15)".into());
    for point in heat {
        let (x, y) = projection.project(point.lat, point.lng);
        ctx.begin_path();
        let _ = ctx.arc(x, y, heat_radius(point.intensity), 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }

    // Zone markers
    for zone in zones {
        let (x, y) = projection.project(zone.lat, zone.lng);
        let color = marker_color(zone.risk_score);

        ctx.set_global_alpha(0.8);
        ctx.set_fill_style(&color.into());
        ctx.begin_path();
        let _ = ctx.arc(x, y, marker_radius(zone.risk_score), 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();

        ctx.set_global_alpha(1.0);
        ctx.set_stroke_style(&color.into());
        ctx.set_line_width(2.5);
        ctx.stroke();

        // City label
        ctx.set_fill_style(&"#cbd5e1".into()); // slate-300
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&zone.location, x + marker_radius(zone.risk_score) + 4.0, y + 4.0);
    }

    if zones.is_empty() && heat.is_empty() {
        ctx.set_fill_style(&"#64748b".into()); // slate-500
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No zone data", width / 2.0 - 45.0, height / 2.0);
    }
}
