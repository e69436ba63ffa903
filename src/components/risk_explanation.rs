//! Risk Explanation Panel
//!
//! Factor-by-factor breakdown of why a particular city carries its current
//! risk score. Refetched whenever the selected location changes.

use leptos::*;

use crate::api;
use crate::model::RiskExplanation;

#[component]
pub fn RiskExplanationPanel(#[prop(into)] location: Signal<Option<String>>) -> impl IntoView {
    let (explanation, set_explanation) = create_signal(None::<RiskExplanation>);

    create_effect(move |_| {
        let Some(loc) = location.get() else {
            set_explanation.set(None);
            return;
        };
        spawn_local(async move {
            match api::fetch_risk_explanation(&loc).await {
                Ok(data) => set_explanation.set(Some(data)),
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("Failed to fetch risk explanation for {loc}: {e}").into(),
                    );
                    set_explanation.set(None);
                }
            }
        });
    });

    view! {
        {move || explanation.get().map(|ex| {
            let loc = location.get().unwrap_or_default();
            view! {
                <div class="bg-slate-800/40 border border-slate-700/50 rounded-xl p-4">
                    <h3 class="text-sm font-bold text-white mb-3">
                        {format!("Why is {loc} risky?")}
                    </h3>
                    <div class="space-y-2">
                        <Factor label="Hospital Admissions Trend" value=format!("{:+.1}%", ex.hospital_trend) />
                        <Factor label="Water Contamination" value=format!("{:.0}/100", ex.water_contamination) />
                        <Factor label="Environmental Risk" value=format!("{:.0}/100", ex.environmental_risk) />
                        <Factor label="Model Confidence" value=format!("{:.0}%", ex.confidence * 100.0) />
                    </div>
                </div>
            }
        })}
    }
}

#[component]
fn Factor(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center text-xs">
            <span class="text-slate-400">{label}</span>
            <span class="font-mono text-slate-200">{value}</span>
        </div>
    }
}
