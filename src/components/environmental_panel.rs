//! Environmental Panel Component
//!
//! Live sensor-pod telemetry readings.

use leptos::*;

use crate::model::PodTelemetry;

/// Telemetry grid for the latest pod readings.
#[component]
pub fn EnvironmentalPanel(#[prop(into)] data: Signal<PodTelemetry>) -> impl IntoView {
    view! {
        <div class="bg-slate-900 border border-slate-800 rounded-xl p-4">
            <h3 class="text-white font-semibold mb-4">"Live Environmental Data"</h3>
            <div class="grid grid-cols-2 gap-4">
                <Reading label="Avg Temp" value=Signal::derive(move || format!("{:.1}°C", data.get().temperature)) />
                <Reading label="Humidity" value=Signal::derive(move || format!("{:.1}%", data.get().humidity)) />
                <Reading label="Rainfall" value=Signal::derive(move || format!("{:.2}mm", data.get().rainfall)) />
                <Reading label="Soil Moisture" value=Signal::derive(move || format!("{:.1}%", data.get().soil_moisture)) />
            </div>
            <div class="mt-4 text-[11px] text-slate-400">
                "Pod sync: "
                {move || {
                    if data.get().status == "live" {
                        view! { <span class="text-emerald-400 font-bold">"Live"</span> }.into_view()
                    } else {
                        view! { <span class="text-slate-500">"Waiting..."</span> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn Reading(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="p-3 bg-slate-800/50 rounded-lg">
            <div class="text-slate-400 text-xs uppercase">{label}</div>
            <div class="text-xl font-bold text-white">{move || value.get()}</div>
        </div>
    }
}
