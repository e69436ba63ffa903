//! Global UI State
//!
//! Toast messages and the demo-mode flag, provided to the component tree.

use leptos::*;

/// App-wide UI state. Signal handles are `Copy`, so this is passed by value.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Whether the backend demo simulation is running
    pub demo_running: RwSignal<bool>,
}

/// Provide UI state to the component tree
pub fn provide_ui_state() {
    provide_context(UiState {
        success: create_rw_signal(None),
        error: create_rw_signal(None),
        demo_running: create_rw_signal(false),
    });
}

impl UiState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
