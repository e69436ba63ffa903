//! KPI Card Component
//!
//! Displays one aggregate indicator, tinted by its risk level.

use leptos::*;

fn risk_classes(level: &str) -> &'static str {
    match level.to_ascii_uppercase().as_str() {
        "CRITICAL" => "text-red-500 border-red-500/20 bg-red-500/5",
        "HIGH" => "text-orange-500 border-orange-500/20 bg-orange-500/5",
        "MODERATE" => "text-amber-400 border-amber-400/20 bg-amber-400/5",
        "LOW" => "text-emerald-400 border-emerald-400/20 bg-emerald-400/5",
        _ => "text-slate-100 border-slate-800 bg-slate-900",
    }
}

/// KPI tile component
#[component]
pub fn KpiCard(
    /// Tile heading
    #[prop(into)]
    title: String,
    /// Formatted value, re-rendered on every snapshot
    #[prop(into)]
    value: Signal<String>,
    /// Optional unit label shown after the value
    #[prop(optional, into)]
    unit: Option<String>,
    /// Optional risk level driving the tile tint
    #[prop(optional, into)]
    risk_level: Option<Signal<String>>,
) -> impl IntoView {
    let card_class = move || {
        let level = risk_level.map(|s| s.get()).unwrap_or_default();
        format!(
            "p-6 rounded-xl border flex flex-col justify-between h-32 {}",
            risk_classes(&level)
        )
    };

    view! {
        <div class=card_class>
            <h3 class="text-slate-400 text-sm font-medium uppercase tracking-wider">{title}</h3>
            <div class="flex items-baseline">
                <span class="text-3xl font-bold tracking-tight">{move || value.get()}</span>
                {unit.map(|u| view! {
                    <span class="text-sm font-normal text-slate-500 ml-1">{u}</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_level_falls_back_to_neutral_tint() {
        assert_eq!(risk_classes("critical"), risk_classes("CRITICAL"));
        assert_eq!(risk_classes(""), risk_classes("whatever"));
        assert_ne!(risk_classes("HIGH"), risk_classes("LOW"));
    }
}
