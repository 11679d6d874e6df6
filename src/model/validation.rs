use super::schema::FieldSchema;
use super::state::{ErrorMap, FieldValues};

/// Validates `fields` against `schema`, returning the errors of every invalid field.
///
/// A required field is violated when its value is empty, whitespace-only, or
/// absent from `fields`. Format rules only apply to non-blank values. An empty
/// result means the form can be submitted.
pub fn validate(fields: &FieldValues, schema: &FieldSchema) -> ErrorMap {
    let mut errors = ErrorMap::new();
    for spec in schema.fields() {
        let value = fields.get(&spec.name).map(String::as_str).unwrap_or("");
        let blank = value.trim().is_empty();

        if blank {
            if spec.required {
                errors.insert(spec.name, spec.error_message.to_string());
            }
            continue;
        }

        if let Some(rule) = spec.format
            && !rule.accepts(value)
        {
            errors.insert(spec.name, rule.message().to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::model::FieldName;

    fn values(name: &str, email: &str, message: &str) -> FieldValues {
        FieldValues::from([
            (FieldName::Name, name.to_string()),
            (FieldName::Email, email.to_string()),
            (FieldName::Message, message.to_string()),
        ])
    }

    #[test]
    fn complete_form_has_no_errors() {
        let errors = validate(
            &values("Ada", "ada@example.com", "Hello"),
            &FieldSchema::contact(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = validate(&values("", "", ""), &FieldSchema::contact());
        assert_eq!(
            errors,
            ErrorMap::from([
                (FieldName::Name, "Please provide your name".to_string()),
                (FieldName::Email, "Please provide your email".to_string()),
                (FieldName::Message, "Please write your message".to_string()),
            ])
        );
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(
            &values("  \t", "ada@example.com", "\n\n"),
            &FieldSchema::contact(),
        );
        let keys: Vec<FieldName> = errors.keys().copied().collect();
        assert_eq!(keys, vec![FieldName::Name, FieldName::Message]);
    }

    #[test]
    fn missing_field_counts_as_empty() {
        let fields = FieldValues::from([
            (FieldName::Name, "Ada".to_string()),
            (FieldName::Email, "ada@example.com".to_string()),
        ]);
        let errors = validate(&fields, &FieldSchema::contact());
        assert_eq!(
            errors.get(&FieldName::Message).map(String::as_str),
            Some("Please write your message")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_reports_format_message() {
        let errors = validate(&values("Ada", "not-an-email", "Hi"), &FieldSchema::contact());
        assert_eq!(
            errors,
            ErrorMap::from([(FieldName::Email, "Please provide a valid email".to_string())])
        );
    }

    #[test]
    fn blank_email_reports_required_message_not_format() {
        let errors = validate(&values("Ada", "   ", "Hi"), &FieldSchema::contact());
        assert_eq!(
            errors.get(&FieldName::Email).map(String::as_str),
            Some("Please provide your email")
        );
    }

    #[test]
    fn padded_values_are_accepted() {
        let errors = validate(
            &values(" Ada ", "ada@example.com", " x "),
            &FieldSchema::contact(),
        );
        assert!(errors.is_empty());
    }

    #[quickcheck]
    fn validation_is_deterministic(name: String, email: String, message: String) -> bool {
        let fields = values(&name, &email, &message);
        let schema = FieldSchema::contact();
        validate(&fields, &schema) == validate(&fields, &schema)
    }

    #[quickcheck]
    fn blank_fields_are_exactly_the_required_errors(name: bool, email: bool, message: bool) -> bool {
        let pick = |filled: bool, v: &'static str| if filled { v } else { " " };
        let fields = values(
            pick(name, "Ada"),
            pick(email, "ada@example.com"),
            pick(message, "Hello"),
        );
        let errors = validate(&fields, &FieldSchema::contact());
        errors.contains_key(&FieldName::Name) != name
            && errors.contains_key(&FieldName::Email) != email
            && errors.contains_key(&FieldName::Message) != message
    }

    #[quickcheck]
    fn errors_only_name_declared_fields(name: String, email: String, message: String) -> bool {
        let errors = validate(&values(&name, &email, &message), &FieldSchema::contact());
        errors.keys().all(|k| FieldName::ALL.contains(k))
    }
}
