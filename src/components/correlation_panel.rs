//! Correlation Panel Component
//!
//! Statistical correlation values, fetched once on mount. A fetch failure is
//! logged and the panel simply stays hidden.

use leptos::*;

use crate::api;
use crate::model::CorrelationData;

/// Statistical correlations between case counts and environmental factors.
#[component]
pub fn CorrelationPanel() -> impl IntoView {
    let (correlations, set_correlations) = create_signal(None::<CorrelationData>);

    spawn_local(async move {
        match api::fetch_correlations().await {
            Ok(data) => set_correlations.set(Some(data)),
            Err(e) => {
                web_sys::console::warn_1(&format!("Failed to fetch correlations: {e}").into());
            }
        }
    });

    view! {
        {move || correlations.get().map(|c| view! {
            <div class="bg-slate-800/30 border border-slate-700/50 rounded-xl p-4 mt-6">
                <h3 class="text-xs font-bold text-slate-400 uppercase tracking-widest mb-4">
                    "Statistical Correlations"
                </h3>
                <div class="space-y-3">
                    <CorrelationBar label="Cases vs Water Contamination" value=c.cases_vs_water color="bg-blue-500" />
                    <CorrelationBar label="Cases vs Humidity" value=c.cases_vs_humidity color="bg-emerald-500" />
                    <CorrelationBar label="Cases vs Rainfall" value=c.cases_vs_rainfall color="bg-cyan-500" />
                </div>
            </div>
        })}
    }
}

#[component]
fn CorrelationBar(
    label: &'static str,
    value: f64,
    color: &'static str,
) -> impl IntoView {
    let percent = (value * 100.0).clamp(0.0, 100.0);

    view! {
        <div class="space-y-1">
            <div class="flex justify-between text-[10px] text-slate-300">
                <span>{label}</span>
                <span class="font-mono">{format!("{value:.2}")}</span>
            </div>
            <div class="h-1.5 w-full bg-slate-700 rounded-full overflow-hidden">
                <div
                    class=format!("h-full {color} transition-all duration-1000")
                    style=format!("width: {percent}%")
                />
            </div>
        </div>
    }
}
