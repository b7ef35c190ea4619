//! The Lead Record — the single entity collected by the wizard and
//! transmitted to the notification dispatcher.

use chrono::Utc;
use serde::{Deserialize, Serialize};

fn default_rooms() -> u32 {
    1
}

/// A project enquiry as it travels over the wire.
///
/// Every optional field defaults so a sparse JSON body deserializes
/// cleanly; an empty string means "not provided".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    // Step 1: service type
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub property_type: String,

    // Step 2: project details
    #[serde(default)]
    pub project_scope: Vec<String>,
    /// Number of basement levels, minimum 1.
    #[serde(default = "default_rooms")]
    pub rooms: u32,
    #[serde(default)]
    pub square_footage: String,
    #[serde(default)]
    pub timeline: String,

    // Step 3: contact info
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,

    // Step 4: additional info
    #[serde(default)]
    pub budget: String,
    #[serde(default)]
    pub hear_about_us: String,
    #[serde(default)]
    pub message: String,

    /// Assigned client-side immediately before transmission.
    #[serde(default)]
    pub reference_number: String,
}

impl Default for Lead {
    fn default() -> Self {
        Self {
            service_type: String::new(),
            property_type: String::new(),
            project_scope: Vec::new(),
            rooms: 1,
            square_footage: String::new(),
            timeline: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            budget: String::new(),
            hear_about_us: String::new(),
            message: String::new(),
            reference_number: String::new(),
        }
    }
}

impl Lead {
    /// Full client name: first name plus last name when given.
    pub fn client_name(&self) -> String {
        if self.last_name.is_empty() {
            self.first_name.clone()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

/// Generate a display reference: `#VI-` plus the last six digits of the
/// current Unix-millisecond timestamp. Fresh per submission attempt.
pub fn generate_reference() -> String {
    let millis = Utc::now().timestamp_millis().to_string();
    let tail = &millis[millis.len().saturating_sub(6)..];
    format!("#VI-{tail}")
}
