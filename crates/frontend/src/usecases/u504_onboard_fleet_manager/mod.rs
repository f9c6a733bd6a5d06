pub mod view;

pub use view::OnboardFleetManagerPage;
