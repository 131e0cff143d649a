#[cfg(test)]
#[path = "appointment_test.rs"]
mod appointment_test;

use serde::{Deserialize, Serialize};

/// Appointment status strings used on the wire.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";

/// `doctorId`/`patientId` come back either as a bare object id or populated
/// with the referenced account, depending on the endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectRef {
    Id(String),
    Populated(PopulatedRef),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulatedRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

impl ObjectRef {
    pub fn id(&self) -> &str {
        match self {
            ObjectRef::Id(id) => id,
            ObjectRef::Populated(populated) => populated.id.as_deref().unwrap_or(""),
        }
    }

    /// "First Last" when the reference is populated with names.
    pub fn display_name(&self) -> Option<String> {
        match self {
            ObjectRef::Id(_) => None,
            ObjectRef::Populated(populated) => {
                match (&populated.first_name, &populated.last_name) {
                    (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
                    _ => None,
                }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "doctorId", default)]
    pub doctor: Option<ObjectRef>,
    #[serde(rename = "patientId", default)]
    pub patient: Option<ObjectRef>,
    #[serde(rename = "appointmentDate")]
    pub date: String,
    #[serde(rename = "appointmentTime")]
    pub time: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Appointment {
    pub fn status_label(&self) -> &str {
        self.status.as_deref().unwrap_or(STATUS_PENDING)
    }

    pub fn is_confirmed(&self) -> bool {
        self.status_label() == STATUS_CONFIRMED
    }
}

/// `{ appointments: [...] }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AppointmentsResponse {
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// Payload for POST /book/appointment/{doctorId}.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BookAppointmentRequest {
    #[serde(rename = "patientId")]
    pub patient_id: String,
    #[serde(rename = "appointmentDate")]
    pub date: String,
    #[serde(rename = "appointmentTime")]
    pub time: String,
    pub description: String,
}

/// Payload for PATCH /doctor/update/appointment/{id}.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct UpdateAppointmentRequest {
    pub status: String,
}
