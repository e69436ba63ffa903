//! Scenario Lab Page
//!
//! Upload a pair of hospital-admission and water-quality CSVs and render the
//! backend's what-if risk assessment. All computation happens server-side;
//! the result is displayed exactly as received.

use leptos::*;
use leptos::html::Input;

use crate::api;
use crate::components::RiskLineChart;
use crate::model::{ChartPoint, ScenarioResult};
use crate::state::UiState;
use crate::transform::risk_level_for;

/// Illustrative trajectory shown when the backend returns no chart series.
fn placeholder_series() -> Vec<ChartPoint> {
    [
        ("T-48h", 20.0),
        ("T-36h", 25.0),
        ("T-24h", 40.0),
        ("T-12h", 35.0),
        ("Now", 45.0),
        ("T+12h", 50.0),
        ("T+24h", 65.0),
        ("T+36h", 75.0),
        ("T+48h", 80.0),
    ]
    .iter()
    .map(|(name, risk)| ChartPoint { name: (*name).to_string(), risk: *risk })
    .collect()
}

/// Scenario page component
#[component]
pub fn Scenario() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let hospital_ref = create_node_ref::<Input>();
    let water_ref = create_node_ref::<Input>();
    let (result, set_result) = create_signal(None::<ScenarioResult>);
    let (uploading, set_uploading) = create_signal(false);

    let run_scenario = move |_| {
        if uploading.get() {
            return;
        }
        let hospital = hospital_ref.get().and_then(|input| input.files()).and_then(|f| f.get(0));
        let water = water_ref.get().and_then(|input| input.files()).and_then(|f| f.get(0));

        let (Some(hospital), Some(water)) = (hospital, water) else {
            ui.show_error("Select both a hospital CSV and a water quality CSV");
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_scenario(&hospital, &water).await {
                Ok(analysis) => {
                    set_result.set(Some(analysis));
                    ui.show_success("Scenario analysis complete");
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Scenario upload failed: {e}").into());
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(
                            "Simulation failed. Please ensure CSV files are correctly formatted.",
                        );
                    }
                }
            }
            set_uploading.set(false);
        });
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-white">"Scenario Lab"</h1>
                <p class="text-slate-400 mt-1 text-sm">
                    "Run a what-if outbreak assessment from your own data"
                </p>
            </div>

            <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-6 max-w-2xl space-y-4">
                <div>
                    <label class="block text-xs font-bold text-slate-400 uppercase tracking-widest mb-2">
                        "Hospital Admissions CSV"
                    </label>
                    <input
                        type="file"
                        accept=".csv"
                        node_ref=hospital_ref
                        class="block w-full text-sm text-slate-300 file:mr-4 file:py-2 file:px-4 file:rounded-lg file:border-0 file:bg-slate-700 file:text-slate-200"
                    />
                </div>
                <div>
                    <label class="block text-xs font-bold text-slate-400 uppercase tracking-widest mb-2">
                        "Water Quality CSV"
                    </label>
                    <input
                        type="file"
                        accept=".csv"
                        node_ref=water_ref
                        class="block w-full text-sm text-slate-300 file:mr-4 file:py-2 file:px-4 file:rounded-lg file:border-0 file:bg-slate-700 file:text-slate-200"
                    />
                </div>
                <button
                    class="px-4 py-2 text-sm font-bold rounded-lg bg-cyan-500/20 text-cyan-400 border border-cyan-500/40 hover:bg-cyan-500/30 transition-colors disabled:opacity-50"
                    disabled=move || uploading.get()
                    on:click=run_scenario
                >
                    {move || if uploading.get() { "Analyzing..." } else { "Run Scenario" }}
                </button>
            </div>

            {move || result.get().map(|r| {
                let level_color = risk_level_for(r.risk_score).color().to_string();
                let anomaly = r.anomaly;
                let chart = if r.chart_data.is_empty() {
                    placeholder_series()
                } else {
                    r.chart_data.clone()
                };
                view! {
                    <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-6 max-w-2xl space-y-4">
                        <div class="flex items-center justify-between">
                            <h2 class="text-lg font-bold text-white">"Assessment Result"</h2>
                            <Show when=move || anomaly>
                                <span class="px-2 py-1 text-[10px] font-bold rounded bg-red-500/20 text-red-400 uppercase tracking-widest">
                                    "Anomaly Detected"
                                </span>
                            </Show>
                        </div>
                        <div class="grid grid-cols-3 gap-4 text-center">
                            <div>
                                <div class="text-2xl font-bold text-white">
                                    {format!("{:.0}", r.predicted_cases)}
                                </div>
                                <div class="text-[10px] text-slate-500 uppercase tracking-widest">
                                    "Predicted Cases"
                                </div>
                            </div>
                            <div>
                                <div
                                    class="text-2xl font-bold"
                                    style=format!("color: {}", risk_level_for(r.risk_score).color())
                                >
                                    {format!("{:.1}", r.risk_score)}
                                </div>
                                <div class="text-[10px] text-slate-500 uppercase tracking-widest">
                                    "Risk Score"
                                </div>
                            </div>
                            <div>
                                <div class="text-2xl font-bold text-white">{r.risk_level.clone()}</div>
                                <div class="text-[10px] text-slate-500 uppercase tracking-widest">
                                    "Risk Level"
                                </div>
                            </div>
                        </div>
                        <div class="space-y-1 text-xs text-slate-300">
                            <p>{r.analysis.water_risk.clone()}</p>
                            <p>{r.analysis.environment_risk.clone()}</p>
                            <p>{r.analysis.trend.clone()}</p>
                        </div>
                        <RiskLineChart
                            color=Signal::derive(move || level_color.clone())
                            data=Signal::derive(move || chart.clone())
                        />
                    </div>
                }
            })}
        </div>
    }
}
