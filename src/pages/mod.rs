//! Application Pages
//!
//! One module per routed view. Every page owns its own poller so data stops
//! refreshing the moment the page is left.

pub mod alerts;
pub mod city_detail;
pub mod dashboard;
pub mod live_map;
pub mod scenario;

pub use alerts::Alerts;
pub use city_detail::CityDetail;
pub use dashboard::Dashboard;
pub use live_map::LiveMap;
pub use scenario::Scenario;
