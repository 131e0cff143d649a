pub mod appointments;
pub mod book_appointment;
pub mod dashboard;
pub mod doctors;
pub mod feedback_form;
pub mod profile;

pub use appointments::render_patient_appointments;
pub use book_appointment::render_book_appointment;
pub use dashboard::render_patient_dashboard;
pub use doctors::render_patient_doctors;
pub use feedback_form::render_patient_feedback;
pub use profile::render_patient_profile;
