mod comparison;
mod dashboard;
mod fmt;
mod metrics_card;
mod pickers;
mod ranking_table;
mod repository_filter;
mod sidebar;
mod timeseries_chart;

pub use comparison::ComparisonPage;
pub use dashboard::DashboardPage;
pub use sidebar::Sidebar;
