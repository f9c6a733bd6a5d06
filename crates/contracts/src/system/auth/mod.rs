//! Mock identity: a fixed phone → user table stands in for an identity
//! provider, and `SessionStore` holds whoever logged in.

pub mod credentials;
pub mod role;
pub mod session;

pub use credentials::{find_by_phone, test_users, User};
pub use role::Role;
pub use session::SessionStore;
