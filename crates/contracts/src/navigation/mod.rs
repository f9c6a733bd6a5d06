//! Which screen a role sees, and where "back" goes.
//!
//! `NavigationState` is the only mutable part; `resolve` is a pure function
//! of `(role, state)` so the whole routing table is testable without a UI.

pub mod dispatch;
pub mod menu;
pub mod state;
pub mod view_key;

pub use dispatch::{
    back_target, dashboard_for, dashboard_for_key, resolve, resolve_key, resolve_view,
    DashboardKind, ResolvedView, Screen,
};
pub use menu::menu_for;
pub use state::{NavigationOrigin, NavigationState};
pub use view_key::ViewKey;
