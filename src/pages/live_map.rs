//! Live Map Page
//!
//! Full-width outbreak map with the risk legend and a location picker that
//! drives the per-city risk explanation panel.

use leptos::*;

use crate::components::{ExportButtons, OfflineBanner, OutbreakMap, PageLoading, RiskExplanationPanel};
use crate::poll::use_snapshot_poll;
use crate::transform::RiskLevel;

const LEGEND: [(RiskLevel, &str, &str); 5] = [
    (RiskLevel::Critical, "Critical", "85-100"),
    (RiskLevel::High, "High", "70-84"),
    (RiskLevel::Moderate, "Moderate", "45-69"),
    (RiskLevel::Low, "Low", "15-44"),
    (RiskLevel::VeryLow, "Very Low", "0-14"),
];

/// Live map page component
#[component]
pub fn LiveMap() -> impl IntoView {
    let store = use_snapshot_poll();
    let snapshot = store.snapshot();
    let offline = store.offline();
    let (selected, set_selected) = create_signal(None::<String>);

    let on_pick = move |ev| {
        let value = event_target_value(&ev);
        set_selected.set(if value.is_empty() { None } else { Some(value) });
    };

    view! {
        <Show when=move || !store.loading.get() fallback=PageLoading>
            <div class="space-y-6">
                <OfflineBanner offline=offline />

                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-white">"Live Outbreak Map"</h1>
                        <p class="text-slate-400 mt-1 text-sm">
                            "Risk markers and case-density heat overlay"
                        </p>
                    </div>
                    <div class="flex items-center gap-3">
                        <ExportButtons snapshot=snapshot />
                        <select
                            class="bg-slate-800 border border-slate-700 rounded-lg px-3 py-2 text-sm text-slate-200"
                            on:change=on_pick
                        >
                            <option value="">"Inspect a city..."</option>
                            <For
                                each=move || snapshot.get().zones
                                key=|zone| zone.location.clone()
                                children=|zone| view! {
                                    <option value=zone.location.clone()>{zone.location}</option>
                                }
                            />
                        </select>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-4 gap-6">
                    <div class="lg:col-span-3 bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                        <OutbreakMap
                            zones=Signal::derive(move || snapshot.get().zones)
                            heatmap=Signal::derive(move || snapshot.get().heatmap)
                        />
                    </div>
                    <div class="space-y-4">
                        <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                            <h3 class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-3">
                                "Risk Legend"
                            </h3>
                            <div class="space-y-2">
                                {LEGEND.iter().map(|(level, label, range)| view! {
                                    <div class="flex items-center justify-between text-xs text-slate-300">
                                        <div class="flex items-center gap-2">
                                            <span
                                                class="w-3 h-3 rounded-full"
                                                style=format!("background-color: {}", level.color())
                                            />
                                            {*label}
                                        </div>
                                        <span class="text-slate-500 font-mono">{*range}</span>
                                    </div>
                                }).collect_view()}
                            </div>
                        </div>
                        <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                            <h3 class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-3">
                                "Zone Distribution"
                            </h3>
                            <div class="space-y-2">
                                <KpiRow
                                    label="Critical"
                                    value=Signal::derive(move || snapshot.get().summary.critical_zones.to_string())
                                    color="text-red-500"
                                />
                                <KpiRow
                                    label="High"
                                    value=Signal::derive(move || snapshot.get().summary.high_zones.to_string())
                                    color="text-orange-500"
                                />
                                <KpiRow
                                    label="Active Cities"
                                    value=Signal::derive(move || snapshot.get().summary.total_zones.to_string())
                                    color="text-amber-500"
                                />
                            </div>
                        </div>
                        <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                            <h3 class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-3">
                                "Live Analytics"
                            </h3>
                            <div class="space-y-2">
                                <KpiRow
                                    label="Average Risk"
                                    value=Signal::derive(move || format!("{:.1}", snapshot.get().summary.avg_risk))
                                    color="text-slate-200"
                                />
                                <KpiRow
                                    label="Total Anomalies"
                                    value=Signal::derive(move || snapshot.get().summary.total_anomalies.to_string())
                                    color="text-yellow-500"
                                />
                                <KpiRow
                                    label="Prediction Load"
                                    value=Signal::derive(move || format!("{:.0}", snapshot.get().summary.total_predicted_cases))
                                    color="text-slate-200"
                                />
                            </div>
                        </div>
                        <RiskExplanationPanel location=selected />
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn KpiRow(
    label: &'static str,
    #[prop(into)] value: Signal<String>,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center text-xs">
            <span class="text-slate-400">{label}</span>
            <span class=format!("font-mono font-bold {color}")>{move || value.get()}</span>
        </div>
    }
}
