//! Common traits and helpers for all entities

pub mod entity;

pub use entity::{for_school, new_local_id, Entity, SchoolScoped};
