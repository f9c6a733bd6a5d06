pub mod target_school;
pub mod u501_onboard_teacher;
pub mod u502_onboard_student;
pub mod u503_onboard_class;
pub mod u504_onboard_fleet_manager;
pub mod u505_onboard_driver;
pub mod u506_manage_onboardings;
