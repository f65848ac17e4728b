pub mod overview;

pub use overview::ui::OverviewDashboard;
