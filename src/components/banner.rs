//! Offline Banner
//!
//! Non-fatal degraded-mode indicator shown while polls are failing.

use leptos::*;

use crate::poll::OFFLINE_MESSAGE;

/// Banner shown while the backend is unreachable; the page keeps rendering
/// the last good snapshot underneath it.
#[component]
pub fn OfflineBanner(#[prop(into)] offline: Signal<bool>) -> impl IntoView {
    view! {
        {move || offline.get().then(|| view! {
            <div class="bg-red-500/10 border border-red-500/50 text-red-500 p-3 rounded-lg flex items-center gap-2 animate-pulse mb-4">
                <span class="text-lg">"⚠"</span>
                <span>{OFFLINE_MESSAGE}</span>
            </div>
        })}
    }
}
