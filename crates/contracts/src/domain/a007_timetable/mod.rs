//! Weekly timetable of one class/section: a day × period grid in which each
//! slot holds at most one entry.

pub mod aggregate;

pub use aggregate::{
    teacher_clashes, timetable_for_class, TeacherClash, Timetable, TimetableEntry, Weekday,
};
