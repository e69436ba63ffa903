//! State Management
//!
//! App-wide UI state (toasts, demo mode). Polled data lives in per-page
//! [`crate::poll::SnapshotStore`]s, not here.

pub mod ui;

pub use ui::{provide_ui_state, UiState};
