pub mod view;

pub use view::OnboardTeacherPage;
