pub mod aggregate;
pub mod directory;

pub use aggregate::{generate_school_id, ComplianceStatus, School, SchoolPatch};
pub use directory::SchoolDirectory;
