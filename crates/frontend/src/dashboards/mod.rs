pub mod d400_super_admin;
pub mod d401_principal;
pub mod d402_class_teacher;
pub mod d403_teacher;
pub mod d404_fleet_manager;
pub mod d405_analytics;

pub use d400_super_admin::SuperAdminDashboard;
pub use d401_principal::PrincipalDashboard;
pub use d402_class_teacher::ClassTeacherDashboard;
pub use d403_teacher::TeacherDashboard;
pub use d404_fleet_manager::FleetManagerDashboard;
pub use d405_analytics::{SchoolAnalytics, SuperAdminAnalytics};
