pub mod a001_school;
pub mod a002_student;
pub mod a003_teacher;
pub mod a004_class_section;
pub mod a005_attendance;
pub mod a006_grade;
pub mod a007_timetable;
pub mod a008_fleet;
pub mod a009_homework;
pub mod a010_event;
pub mod a011_ticket;
