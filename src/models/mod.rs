pub mod appointment;
pub mod auth;
pub mod doctor;
pub mod feedback;
pub mod patient;
pub mod user;

pub use appointment::{
    Appointment, AppointmentsResponse, BookAppointmentRequest, ObjectRef, PopulatedRef,
    UpdateAppointmentRequest, STATUS_CONFIRMED, STATUS_PENDING,
};
pub use auth::{AuthResponse, ErrorBody, LoginRequest, MessageResponse, SignupRequest};
pub use doctor::{Doctor, DoctorResponse, DoctorUpdate, DoctorsResponse};
pub use feedback::{Feedback, FeedbacksResponse, SubmitFeedbackRequest};
pub use patient::{Patient, PatientResponse, PatientUpdate};
pub use user::{Identity, Role, UserRef};
