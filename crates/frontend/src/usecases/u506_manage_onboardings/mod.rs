pub mod view;

pub use view::ManageOnboardingsPage;
