//! Form data model: field schema, form state, validation and the outgoing payload.

mod payload;
mod schema;
mod state;
mod validation;

pub use payload::{EmailPayload, TO_EMAIL, TO_NAME};
pub use schema::{FieldName, FieldSchema, FieldSpec, FormatRule, UnknownField};
pub use state::{ErrorMap, FieldValues, FormState, Status};
pub use validation::validate;
