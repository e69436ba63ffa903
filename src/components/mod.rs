//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod alert_card;
pub mod banner;
pub mod correlation_panel;
pub mod demo_controls;
pub mod environmental_panel;
pub mod export_buttons;
pub mod kpi_card;
pub mod loading;
pub mod nav;
pub mod outbreak_map;
pub mod risk_explanation;
pub mod simulation_indicator;
pub mod toast;
pub mod trend_chart;

pub use alert_card::AlertCard;
pub use banner::OfflineBanner;
pub use correlation_panel::CorrelationPanel;
pub use demo_controls::DemoControls;
pub use environmental_panel::EnvironmentalPanel;
pub use export_buttons::ExportButtons;
pub use kpi_card::KpiCard;
pub use loading::PageLoading;
pub use nav::Nav;
pub use outbreak_map::OutbreakMap;
pub use risk_explanation::RiskExplanationPanel;
pub use simulation_indicator::SimulationIndicator;
pub use toast::Toast;
pub use trend_chart::{RiskLineChart, TrendChart};
