//! Alert Card Component
//!
//! One entry in the incident feed, styled by severity.

use leptos::*;

use crate::model::Alert;

fn severity_classes(severity: &str) -> &'static str {
    match severity.to_ascii_lowercase().as_str() {
        "critical" => "border-l-4 border-red-500 bg-red-500/10",
        "high" => "border-l-4 border-orange-500 bg-orange-500/10",
        "moderate" => "border-l-4 border-blue-500 bg-blue-500/10",
        _ => "border-l-4 border-slate-600 bg-slate-800",
    }
}

/// Alert feed entry
#[component]
pub fn AlertCard(alert: Alert) -> impl IntoView {
    let is_critical = alert.severity.eq_ignore_ascii_case("critical");
    let location = alert
        .location
        .clone()
        .unwrap_or_else(|| "National Watch".to_string());
    let card_class = format!(
        "p-4 rounded-lg mb-3 border border-slate-800/50 transition-all {}",
        severity_classes(&alert.severity)
    );

    view! {
        <div class=card_class>
            <div class="flex justify-between items-start mb-2">
                <div class="flex items-center text-slate-100 font-semibold uppercase tracking-wider text-xs">
                    <span class=if is_critical { "text-red-500 mr-2" } else { "text-slate-400 mr-2" }>
                        "⚠"
                    </span>
                    {location}
                </div>
                {is_critical.then(|| view! {
                    <span class="inline-flex rounded-full h-2 w-2 bg-red-500 animate-pulse" />
                })}
            </div>
            <p class="text-sm text-slate-200 font-medium mb-3">{alert.message}</p>
            <div class="flex items-center justify-between text-[10px] text-slate-500">
                <span class="uppercase font-bold">{alert.severity}</span>
                <span>{alert.timestamp}</span>
            </div>
        </div>
    }
}
