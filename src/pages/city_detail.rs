//! City Detail Page
//!
//! Drill-down for a single monitored city: its current risk, 48 hour
//! forecast, the factor breakdown behind the score, and the city's alerts.

use leptos::*;
use leptos_router::use_params_map;

use crate::components::{
    AlertCard, EnvironmentalPanel, KpiCard, OfflineBanner, PageLoading, RiskExplanationPanel,
};
use crate::poll::use_snapshot_poll;
use crate::transform::{risk_level_for, sort_alerts};

/// City detail page component
#[component]
pub fn CityDetail() -> impl IntoView {
    let params = use_params_map();
    let city = Signal::derive(move || {
        params.with(|p| p.get("name").cloned().unwrap_or_default())
    });

    let store = use_snapshot_poll();
    let snapshot = store.snapshot();
    let offline = store.offline();

    let zone = Signal::derive(move || {
        let name = city.get();
        snapshot.get().zones.into_iter().find(|z| z.location == name)
    });
    let forecast = Signal::derive(move || {
        let name = city.get();
        snapshot
            .get()
            .predictions
            .into_iter()
            .find(|p| p.location == name)
            .map(|p| p.predicted_cases_48h)
    });
    let city_alerts = Signal::derive(move || {
        let name = city.get();
        let alerts = snapshot
            .get()
            .alerts
            .into_iter()
            .filter(|a| a.location.as_deref() == Some(name.as_str()))
            .collect();
        sort_alerts(alerts)
    });

    let risk_value = Signal::derive(move || {
        zone.get().map(|z| format!("{:.1}", z.risk_score)).unwrap_or_else(|| "--".into())
    });
    let risk_level = Signal::derive(move || {
        zone.get()
            .map(|z| risk_level_for(z.risk_score).as_str().to_string())
            .unwrap_or_default()
    });
    let predicted_value = Signal::derive(move || {
        forecast.get().map(|v| format!("{v:.0}")).unwrap_or_else(|| "--".into())
    });
    let alert_count = Signal::derive(move || city_alerts.get().len().to_string());

    view! {
        <Show when=move || !store.loading.get() fallback=PageLoading>
            <div class="space-y-6">
                <OfflineBanner offline=offline />

                <div>
                    <a href="/" class="text-xs text-cyan-400 hover:text-cyan-300">
                        "< Back to Command Center"
                    </a>
                    <h1 class="text-3xl font-bold text-white mt-2">{move || city.get()}</h1>
                    <Show when=move || zone.get().is_none()>
                        <p class="text-amber-400 mt-1 text-sm">
                            "This city is not in the current surveillance set."
                        </p>
                    </Show>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <KpiCard title="Risk Score" value=risk_value risk_level=risk_level />
                    <KpiCard title="Predicted Cases (48h)" value=predicted_value unit="cases".to_string() />
                    <KpiCard title="Active Alerts" value=alert_count />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                    <div class="space-y-6">
                        <RiskExplanationPanel
                            location=Signal::derive(move || {
                                let name = city.get();
                                (!name.is_empty()).then_some(name)
                            })
                        />
                        <EnvironmentalPanel data=Signal::derive(move || snapshot.get().pod) />
                    </div>
                    <div class="space-y-3">
                        <h2 class="text-sm font-bold text-slate-300 uppercase tracking-widest">
                            "City Alerts"
                        </h2>
                        <Show
                            when=move || !city_alerts.get().is_empty()
                            fallback=|| view! {
                                <div class="text-slate-500 text-sm p-6 text-center border border-dashed border-slate-800 rounded-xl">
                                    "No active alerts for this city."
                                </div>
                            }
                        >
                            <For
                                each=move || city_alerts.get()
                                key=|alert| format!("{}-{}", alert.timestamp, alert.message)
                                children=move |alert| view! { <AlertCard alert=alert /> }
                            />
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}
