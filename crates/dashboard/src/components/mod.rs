mod connection_indicator;
mod level_chart;
mod loading;
mod stat_card;
mod status_badge;
mod tank_gauge;

pub use connection_indicator::ConnectionIndicator;
pub use level_chart::LevelChart;
pub use loading::Loading;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use tank_gauge::TankGauge;
