pub mod view;

pub use view::OnboardStudentPage;
