pub mod dto;

pub use dto::{ComplianceBreakdown, PlatformSummary, SchoolSummary};
