pub mod appointments;
pub mod dashboard;
pub mod feedback;
pub mod profile;

pub use appointments::render_doctor_appointments;
pub use dashboard::render_doctor_dashboard;
pub use feedback::render_doctor_feedback;
pub use profile::render_doctor_profile;
