pub mod ui;

pub use ui::dashboard::TeacherDashboard;
