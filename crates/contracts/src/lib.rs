//! Shared, framework-free model of the SchoolHub client.
//!
//! Everything the UI decides (who is logged in, which screen a role sees,
//! which school an onboarding flow belongs to, how strings are localized)
//! lives here as plain structs so it can be exercised without a browser.

pub mod dashboards;
pub mod domain;
pub mod fixtures;
pub mod navigation;
pub mod shared;
pub mod system;
pub mod usecases;
