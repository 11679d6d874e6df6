use std::collections::BTreeMap;

use super::schema::{FieldName, FieldSchema};

/// Current value of every declared field, in declaration order.
pub type FieldValues = BTreeMap<FieldName, String>;

/// Field name → reason the field is currently invalid.
pub type ErrorMap = BTreeMap<FieldName, String>;

/// Submission status of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Waiting for the user; submit is enabled.
    #[default]
    Idle,
    /// A delivery is in flight; further submits are ignored.
    Submitting,
}

/// Mutable aggregate for one mounted form instance.
///
/// `fields` always holds exactly the schema's field names. `errors` is empty
/// exactly when the last validation pass succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub fields: FieldValues,
    pub errors: ErrorMap,
    pub status: Status,
}

impl FormState {
    /// Creates a state with every schema field present and empty, status [`Status::Idle`].
    pub fn new(schema: &FieldSchema) -> Self {
        Self {
            fields: schema.names().map(|name| (name, String::new())).collect(),
            errors: ErrorMap::new(),
            status: Status::Idle,
        }
    }

    /// Returns the value of `name`, or an empty string if it is not declared.
    pub fn value(&self, name: FieldName) -> &str {
        self.fields.get(&name).map(String::as_str).unwrap_or("")
    }

    /// Returns the error for `name`, if any.
    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(&name).map(String::as_str)
    }

    /// Returns `true` if no field currently carries an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns `true` while a delivery is in flight.
    pub fn is_submitting(&self) -> bool {
        self.status == Status::Submitting
    }
}
