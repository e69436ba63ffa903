//! Dashboard Page
//!
//! Command-center view: KPI tiles, the outbreak map, forecast and alert
//! charts, and a tabbed side panel with zone rankings, pod telemetry and the
//! live alert feed.

use leptos::*;

use crate::components::{
    AlertCard, CorrelationPanel, DemoControls, EnvironmentalPanel, ExportButtons, KpiCard,
    OfflineBanner, OutbreakMap, PageLoading, SimulationIndicator, TrendChart,
};
use crate::poll::use_snapshot_poll;
use crate::transform::{alerts_per_location, risk_level_for, sort_alerts, top_predictions, top_zones};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Overview,
    Pods,
    Alerts,
}

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_snapshot_poll();
    let snapshot = store.snapshot();
    let offline = store.offline();
    let (tab, set_tab) = create_signal(Tab::Overview);

    let avg_risk = Signal::derive(move || format!("{:.1}", snapshot.get().summary.avg_risk));
    let avg_risk_level = Signal::derive(move || {
        risk_level_for(snapshot.get().summary.avg_risk).as_str().to_string()
    });
    let predicted = Signal::derive(move || {
        format!("{:.0}", snapshot.get().summary.total_predicted_cases)
    });
    let alert_count = Signal::derive(move || snapshot.get().alerts.len().to_string());
    let alert_level = Signal::derive(move || {
        if snapshot.get().alerts.is_empty() { "LOW".to_string() } else { "HIGH".to_string() }
    });
    let zones_count = Signal::derive(move || snapshot.get().summary.total_zones.to_string());

    let forecast_data = Signal::derive(move || {
        top_predictions(&snapshot.get().predictions, 5)
            .into_iter()
            .map(|p| (p.location, p.predicted_cases_48h))
            .collect::<Vec<_>>()
    });
    let alert_data = Signal::derive(move || {
        alerts_per_location(&snapshot.get().alerts)
            .into_iter()
            .map(|(loc, count)| (loc, count as f64))
            .collect::<Vec<_>>()
    });

    let tab_class = move |t: Tab| {
        if tab.get() == t {
            "px-3 py-1.5 text-xs font-bold rounded-lg bg-cyan-500/20 text-cyan-400"
        } else {
            "px-3 py-1.5 text-xs font-bold rounded-lg text-slate-500 hover:text-slate-300"
        }
    };

    view! {
        <Show when=move || !store.loading.get() fallback=PageLoading>
            <div class="space-y-6">
                <OfflineBanner offline=offline />

                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-white">"Outbreak Command Center"</h1>
                        <p class="text-slate-400 mt-1 text-sm">
                            "National disease surveillance at a glance"
                        </p>
                    </div>
                    <div class="flex items-center gap-3">
                        <SimulationIndicator />
                        <DemoControls />
                        <ExportButtons snapshot=snapshot />
                    </div>
                </div>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    <KpiCard title="Average Risk Score" value=avg_risk unit="/ 100".to_string() risk_level=avg_risk_level />
                    <KpiCard title="Predicted 48h Cases" value=predicted unit="cases".to_string() />
                    <KpiCard title="Active Alerts" value=alert_count unit="zones".to_string() risk_level=alert_level />
                    <KpiCard title="Total Risk Zones" value=zones_count unit="cities".to_string() />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-2 space-y-6">
                        <section class="bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                            <h2 class="text-sm font-bold text-slate-300 uppercase tracking-widest mb-3">
                                "Outbreak Map"
                            </h2>
                            <OutbreakMap
                                zones=Signal::derive(move || snapshot.get().zones)
                                heatmap=Signal::derive(move || snapshot.get().heatmap)
                            />
                        </section>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <TrendChart
                                title="48h Forecast Hotspots"
                                color="#22D3EE"
                                data=forecast_data
                            />
                            <TrendChart
                                title="Alerts by Location"
                                color="#F87171"
                                data=alert_data
                            />
                        </div>
                        <CorrelationPanel />
                    </div>

                    <div class="bg-slate-900/50 border border-slate-800 rounded-xl p-4">
                        <div class="flex gap-1 mb-4">
                            <button class=move || tab_class(Tab::Overview) on:click=move |_| set_tab.set(Tab::Overview)>
                                "Overview"
                            </button>
                            <button class=move || tab_class(Tab::Pods) on:click=move |_| set_tab.set(Tab::Pods)>
                                "Live Pods"
                            </button>
                            <button class=move || tab_class(Tab::Alerts) on:click=move |_| set_tab.set(Tab::Alerts)>
                                "Alerts"
                            </button>
                        </div>

                        {move || match tab.get() {
                            Tab::Overview => view! {
                                <div class="space-y-2">
                                    <For
                                        each=move || top_zones(&snapshot.get().zones, 8)
                                        key=|zone| zone.location.clone()
                                        children=move |zone| {
                                            let level = risk_level_for(zone.risk_score);
                                            view! {
                                                <a
                                                    href=format!("/city/{}", zone.location)
                                                    class="flex items-center justify-between p-3 rounded-lg bg-slate-800/40 hover:bg-slate-800 transition-colors"
                                                >
                                                    <span class="text-sm text-slate-200">{zone.location.clone()}</span>
                                                    <span
                                                        class="text-xs font-mono font-bold"
                                                        style=format!("color: {}", level.color())
                                                    >
                                                        {format!("{:.0}", zone.risk_score)}
                                                    </span>
                                                </a>
                                            }
                                        }
                                    />
                                </div>
                            }.into_view(),
                            Tab::Pods => view! {
                                <EnvironmentalPanel data=Signal::derive(move || snapshot.get().pod) />
                            }.into_view(),
                            Tab::Alerts => view! {
                                <div class="space-y-2 max-h-[32rem] overflow-y-auto">
                                    <For
                                        each=move || sort_alerts(snapshot.get().alerts)
                                        key=|alert| format!("{}-{}", alert.timestamp, alert.message)
                                        children=move |alert| view! { <AlertCard alert=alert /> }
                                    />
                                </div>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </Show>
    }
}
