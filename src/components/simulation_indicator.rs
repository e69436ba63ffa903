//! Simulation status pill shown in the header.

use leptos::*;

use crate::state::UiState;

#[component]
pub fn SimulationIndicator() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");

    view! {
        <div class=move || if ui.demo_running.get() {
            "flex items-center gap-2 px-3 py-1 rounded-full bg-emerald-500/10 border border-emerald-500/30 text-emerald-400 text-[10px] font-bold uppercase tracking-widest"
        } else {
            "flex items-center gap-2 px-3 py-1 rounded-full bg-slate-800/50 border border-slate-700 text-slate-500 text-[10px] font-bold uppercase tracking-widest"
        }>
            <span class=move || if ui.demo_running.get() {
                "w-2 h-2 rounded-full bg-emerald-400 animate-pulse"
            } else {
                "w-2 h-2 rounded-full bg-slate-600"
            } />
            {move || if ui.demo_running.get() { "Live Simulation Active" } else { "System Idle" }}
        </div>
    }
}
