//! Demo Controls
//!
//! Start/stop the backend outbreak simulation and trigger a full data reload.

use leptos::*;

use crate::api;
use crate::state::UiState;

#[component]
pub fn DemoControls() -> impl IntoView {
    let ui = use_context::<UiState>().expect("UiState not found");
    let (busy, set_busy) = create_signal(false);

    let toggle_demo = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        let running = ui.demo_running.get();
        spawn_local(async move {
            let result = if running {
                api::stop_demo().await
            } else {
                api::start_demo().await
            };
            match result {
                Ok(()) => {
                    ui.demo_running.set(!running);
                    if running {
                        ui.show_success("Demo simulation stopped");
                    } else {
                        ui.show_success("Demo simulation started");
                    }
                }
                Err(e) => ui.show_error(&format!("Demo control failed: {e}")),
            }
            set_busy.set(false);
        });
    };

    let reload = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::reload_backend().await {
                Ok(status) => ui.show_success(&format!("Data reload: {}", status.status)),
                Err(e) => ui.show_error(&format!("Reload failed: {e}")),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="flex items-center gap-2">
            <button
                class=move || if ui.demo_running.get() {
                    "px-3 py-1.5 text-xs font-bold rounded-lg bg-red-500/20 text-red-400 border border-red-500/40 hover:bg-red-500/30 transition-colors"
                } else {
                    "px-3 py-1.5 text-xs font-bold rounded-lg bg-emerald-500/20 text-emerald-400 border border-emerald-500/40 hover:bg-emerald-500/30 transition-colors"
                }
                disabled=move || busy.get()
                on:click=toggle_demo
            >
                {move || if ui.demo_running.get() { "Stop Demo" } else { "Start Demo" }}
            </button>
            <button
                class="px-3 py-1.5 text-xs font-bold rounded-lg bg-slate-700/50 text-slate-300 border border-slate-600 hover:bg-slate-700 transition-colors"
                disabled=move || busy.get()
                on:click=reload
            >
                "Reload Data"
            </button>
        </div>
    }
}
