pub mod ui;

pub use ui::platform::SuperAdminAnalytics;
pub use ui::school::SchoolAnalytics;
