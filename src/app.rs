//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::components::Toast;
use crate::pages::{Alerts, CityDetail, Dashboard, LiveMap, Scenario};
use crate::state::provide_ui_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide UI state to all components
    provide_ui_state();

    view! {
        <Router>
            <div class="min-h-screen bg-slate-950 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/live-map" view=LiveMap />
                        <Route path="/alerts" view=Alerts />
                        <Route path="/scenario" view=Scenario />
                        <Route path="/city/:name" view=CityDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-slate-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-cyan-600 hover:bg-cyan-700 rounded-lg font-medium transition-colors"
            >
                "Go to Command Center"
            </A>
        </div>
    }
}
