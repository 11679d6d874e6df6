use serde::Serialize;

use super::schema::FieldName;
use super::state::FieldValues;

/// Display name of the person receiving every message.
pub const TO_NAME: &str = "Binaya";

/// Address every message is delivered to.
pub const TO_EMAIL: &str = "bt.binaya@gmail.com";

/// Template parameters handed to the delivery service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub to_name: String,
    pub from_email: String,
    pub to_email: String,
    pub message: String,
}

impl EmailPayload {
    /// Maps form values onto the fixed payload layout.
    ///
    /// The address is sent trimmed, matching what the email rule checks.
    /// Name and message are passed through unmodified.
    pub fn from_fields(fields: &FieldValues) -> Self {
        let value = |name| fields.get(&name).cloned().unwrap_or_default();
        Self {
            from_name: value(FieldName::Name),
            to_name: TO_NAME.to_string(),
            from_email: value(FieldName::Email).trim().to_string(),
            to_email: TO_EMAIL.to_string(),
            message: value(FieldName::Message),
        }
    }
}
