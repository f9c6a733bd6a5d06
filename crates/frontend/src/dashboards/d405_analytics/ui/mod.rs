pub mod platform;
pub mod school;
