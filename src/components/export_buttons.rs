//! Export Buttons
//!
//! Triggers the CSV and intel-report downloads for the current snapshot.

use leptos::*;

use crate::export;
use crate::model::Snapshot;
use crate::state::UiState;

fn export_failed_alert() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message("Export failed. Please try again.");
    }
}

#[component]
pub fn ExportButtons(#[prop(into)] snapshot: Signal<Snapshot>) -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let (exporting, set_exporting) = create_signal(false);

    let export_csv = move |_| {
        if exporting.get() {
            return;
        }
        set_exporting.set(true);
        let snap = snapshot.get();
        spawn_local(async move {
            match export::download_zones_csv(&snap).await {
                Ok(()) => ui.show_success("Zone data exported"),
                Err(e) => {
                    web_sys::console::error_1(&format!("CSV export failed: {e}").into());
                    export_failed_alert();
                }
            }
            set_exporting.set(false);
        });
    };

    let export_report = move |_| {
        let snap = snapshot.get();
        match export::download_intel_report(&snap) {
            Ok(()) => ui.show_success("Intel report generated"),
            Err(e) => {
                web_sys::console::error_1(&format!("Report export failed: {e}").into());
                export_failed_alert();
            }
        }
    };

    view! {
        <div class="flex items-center gap-2">
            <button
                class="px-3 py-1.5 text-xs font-bold rounded-lg bg-cyan-500/20 text-cyan-400 border border-cyan-500/40 hover:bg-cyan-500/30 transition-colors disabled:opacity-50"
                disabled=move || exporting.get()
                on:click=export_csv
            >
                {move || if exporting.get() { "Exporting..." } else { "Export CSV" }}
            </button>
            <button
                class="px-3 py-1.5 text-xs font-bold rounded-lg bg-violet-500/20 text-violet-400 border border-violet-500/40 hover:bg-violet-500/30 transition-colors"
                on:click=export_report
            >
                "Intel Report"
            </button>
        </div>
    }
}
