//! Alerts Page
//!
//! Full alert feed, ranked by severity then recency, with a severity filter.

use leptos::*;

use crate::components::{AlertCard, OfflineBanner, PageLoading};
use crate::poll::use_snapshot_poll;
use crate::transform::ranked_alerts;

const SEVERITIES: [&str; 4] = ["Critical", "High", "Moderate", "Low"];

/// Alerts page component
#[component]
pub fn Alerts() -> impl IntoView {
    let store = use_snapshot_poll();
    let snapshot = store.snapshot();
    let offline = store.offline();
    let (filter, set_filter) = create_signal(None::<String>);

    let visible = Signal::derive(move || {
        let snap = snapshot.get();
        ranked_alerts(&snap.alerts, filter.get().as_deref())
    });

    view! {
        <Show when=move || !store.loading.get() fallback=PageLoading>
            <div class="space-y-6">
                <OfflineBanner offline=offline />

                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div>
                        <h1 class="text-3xl font-bold text-white">"Active Alerts"</h1>
                        <p class="text-slate-400 mt-1 text-sm">
                            {move || format!("{} alerts match the current filter", visible.get().len())}
                        </p>
                    </div>
                    <select
                        class="bg-slate-800 border border-slate-700 rounded-lg px-3 py-2 text-sm text-slate-200"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_filter.set(if value.is_empty() { None } else { Some(value) });
                        }
                    >
                        <option value="">"All severities"</option>
                        {SEVERITIES.iter().map(|s| view! {
                            <option value=*s>{*s}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="space-y-3 max-w-3xl">
                    <Show
                        when=move || !visible.get().is_empty()
                        fallback=|| view! {
                            <div class="text-slate-500 text-sm p-6 text-center border border-dashed border-slate-800 rounded-xl">
                                "No alerts for this severity."
                            </div>
                        }
                    >
                        <For
                            each=move || visible.get()
                            key=|alert| format!("{}-{}", alert.timestamp, alert.message)
                            children=move |alert| view! { <AlertCard alert=alert /> }
                        />
                    </Show>
                </div>
            </div>
        </Show>
    }
}
