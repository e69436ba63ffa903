//! Loading Component
//!
//! Full-page spinner shown while the first poll cycle is settling.

use leptos::*;

/// Full-page loading state for the initial fetch
#[component]
pub fn PageLoading() -> impl IntoView {
    view! {
        <div class="p-6 min-h-[60vh] flex flex-col items-center justify-center">
            <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin mb-4" />
            <p class="text-slate-400 font-medium animate-pulse tracking-widest uppercase text-xs">
                "Initializing VectorShield Matrix..."
            </p>
        </div>
    }
}
