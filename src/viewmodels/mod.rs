pub mod appointment_viewmodel;
pub mod auth_viewmodel;
pub mod feedback_viewmodel;
pub mod profile_viewmodel;

pub use appointment_viewmodel::AppointmentViewModel;
pub use feedback_viewmodel::FeedbackViewModel;
pub use profile_viewmodel::ProfileViewModel;
