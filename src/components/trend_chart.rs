//! Trend Chart Components
//!
//! Bar and line charts on HTML5 Canvas for already-shaped series data.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::model::ChartPoint;

/// Labelled bar chart for small category series (top predictions, alert
/// counts per location).
#[component]
pub fn TrendChart(
    #[prop(into)] title: String,
    #[prop(into)] color: String,
    #[prop(into)] data: Signal<Vec<(String, f64)>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    let draw_color = color.clone();
    create_effect(move |_| {
        let series = data.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &series, &draw_color);
        }
    });

    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl p-4 shadow-lg">
            <h2 class="text-sm font-semibold text-white mb-3">{title}</h2>
            <canvas
                node_ref=canvas_ref
                width="400"
                height="220"
                class="w-full h-48"
            />
        </div>
    }
}

/// Projected risk line chart with a fixed 0-100 domain.
#[component]
pub fn RiskLineChart(
    #[prop(into)] color: Signal<String>,
    #[prop(into)] data: Signal<Vec<ChartPoint>>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let series = data.get();
        let stroke = color.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_line(&canvas, &series, &stroke);
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="600"
            height="220"
            class="w-full h-52"
        />
    }
}

fn context_for(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#0f172a".into()); // slate-900
    ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_empty_message(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_fill_style(&"#64748b".into());
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text("No data", width / 2.0 - 25.0, height / 2.0);
}

fn draw_bars(canvas: &HtmlCanvasElement, data: &[(String, f64)], color: &str) {
    let Some(ctx) = context_for(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if data.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_bottom = 28.0;
    let margin_top = 16.0;
    let chart_height = height - margin_top - margin_bottom;
    let max_value = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max).max(1.0);

    let slot = width / data.len() as f64;
    let bar_width = (slot * 0.6).min(56.0);

    for (i, (name, value)) in data.iter().enumerate() {
        let bar_height = value / max_value * chart_height;
        let x = i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&color.into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Value above the bar
        ctx.set_fill_style(&"#e2e8f0".into()); // slate-200
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{value:.0}"), x + bar_width / 2.0 - 8.0, y - 4.0);

        // Truncated label below
        let label: String = name.chars().take(9).collect();
        ctx.set_fill_style(&"#94a3b8".into()); // slate-400
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&label, x, height - 10.0);
    }
}

fn draw_line(canvas: &HtmlCanvasElement, data: &[ChartPoint], color: &str) {
    let Some(ctx) = context_for(canvas) else { return };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    clear(&ctx, width, height);

    if data.is_empty() {
        draw_empty_message(&ctx, width, height);
        return;
    }

    let margin_left = 34.0;
    let margin_right = 12.0;
    let margin_top = 12.0;
    let margin_bottom = 26.0;
    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Horizontal grid at 0/25/50/75/100 of the risk domain
    ctx.set_stroke_style(&"#1e293b".into()); // slate-800
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let label = 100 - i * 25;
        ctx.set_fill_style(&"#64748b".into());
        ctx.set_font("10px sans-serif");
        let _ = ctx.fill_text(&label.to_string(), 6.0, y + 3.0);
    }

    let step = if data.len() > 1 { chart_width / (data.len() - 1) as f64 } else { 0.0 };
    let point_at = |i: usize, risk: f64| {
        let x = margin_left + i as f64 * step;
        let y = margin_top + (1.0 - (risk / 100.0).clamp(0.0, 1.0)) * chart_height;
        (x, y)
    };

    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(2.0);
    ctx.begin_path();
    for (i, point) in data.iter().enumerate() {
        let (x, y) = point_at(i, point.risk);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Dots and x labels
    ctx.set_fill_style(&color.into());
    for (i, point) in data.iter().enumerate() {
        let (x, y) = point_at(i, point.risk);
        ctx.begin_path();
        let _ = ctx.arc(x, y, 3.0, 0.0, std::f64::consts::PI * 2.0);
        ctx.fill();
    }
    ctx.set_fill_style(&"#94a3b8".into());
    ctx.set_font("9px sans-serif");
    for (i, point) in data.iter().enumerate() {
        let (x, _) = point_at(i, point.risk);
        let _ = ctx.fill_text(&point.name, x - 10.0, height - 8.0);
    }
}
