use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Identifier of one of the contact form's fields.
///
/// Variant order is declaration order, which is also display order and the
/// iteration order of [`FieldValues`](super::FieldValues).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// All fields in declaration order.
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// The identifier used in logs and when parsing field names.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a declared field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid hardcoded regex"));

/// A format predicate applied to non-blank values, independent of required-ness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// `local@domain.tld` shape.
    Email,
}

impl FormatRule {
    /// Returns `true` if `value` satisfies the rule.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_RE.is_match(value.trim()),
        }
    }

    /// Message shown when the rule is violated.
    pub fn message(self) -> &'static str {
        match self {
            Self::Email => "Please provide a valid email",
        }
    }
}

/// Static description of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: FieldName,
    /// Label rendered next to the input.
    pub label: &'static str,
    pub required: bool,
    /// Shown when `required` is violated.
    pub error_message: &'static str,
    /// Hint rendered in an empty input.
    pub placeholder: Option<&'static str>,
    pub format: Option<FormatRule>,
}

static CONTACT_FIELDS: [FieldSpec; 3] = [
    FieldSpec {
        name: FieldName::Name,
        label: "Your Name",
        required: true,
        error_message: "Please provide your name",
        placeholder: None,
        format: None,
    },
    FieldSpec {
        name: FieldName::Email,
        label: "Email",
        required: true,
        error_message: "Please provide your email",
        placeholder: None,
        format: Some(FormatRule::Email),
    },
    FieldSpec {
        name: FieldName::Message,
        label: "Message",
        required: true,
        error_message: "Please write your message",
        placeholder: Some("What do you want to say?"),
        format: None,
    },
];

/// The fixed set of fields making up the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    fields: &'static [FieldSpec],
}

impl Default for FieldSchema {
    fn default() -> Self {
        Self::contact()
    }
}

impl FieldSchema {
    /// The contact form schema: name, email and message, all required.
    pub fn contact() -> Self {
        Self {
            fields: &CONTACT_FIELDS,
        }
    }

    /// Field specs in declaration order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Looks up the [`FieldSpec`] for `name`.
    pub fn field(&self, name: FieldName) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.fields.iter().map(|spec| spec.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_schema_declares_fields_in_order() {
        let names: Vec<FieldName> = FieldSchema::contact().names().collect();
        assert_eq!(names, FieldName::ALL.to_vec());
    }

    #[test]
    fn every_contact_field_is_required() {
        assert!(FieldSchema::contact().fields().iter().all(|f| f.required));
    }

    #[test]
    fn error_messages_match_fields() {
        let schema = FieldSchema::contact();
        let msg = |name| schema.field(name).unwrap().error_message;
        assert_eq!(msg(FieldName::Name), "Please provide your name");
        assert_eq!(msg(FieldName::Email), "Please provide your email");
        assert_eq!(msg(FieldName::Message), "Please write your message");
    }

    #[test]
    fn only_email_has_format_rule() {
        let schema = FieldSchema::contact();
        assert_eq!(schema.field(FieldName::Name).unwrap().format, None);
        assert_eq!(
            schema.field(FieldName::Email).unwrap().format,
            Some(FormatRule::Email)
        );
        assert_eq!(schema.field(FieldName::Message).unwrap().format, None);
    }

    #[test]
    fn field_name_parses_its_own_identifier() {
        for name in FieldName::ALL {
            assert_eq!(name.as_str().parse::<FieldName>(), Ok(name));
        }
    }

    #[test]
    fn field_name_rejects_unknown() {
        assert_eq!(
            "phone".parse::<FieldName>(),
            Err(UnknownField("phone".to_string()))
        );
    }

    #[test]
    fn field_name_parse_is_case_sensitive() {
        assert!("Email".parse::<FieldName>().is_err());
    }

    // --- FormatRule::Email ---

    #[test]
    fn email_rule_accepts_plain_address() {
        assert!(FormatRule::Email.accepts("ada@example.com"));
    }

    #[test]
    fn email_rule_accepts_subdomains_and_plus() {
        assert!(FormatRule::Email.accepts("ada+forms@mail.example.co.uk"));
    }

    #[test]
    fn email_rule_ignores_surrounding_whitespace() {
        assert!(FormatRule::Email.accepts("  ada@example.com "));
    }

    #[test]
    fn email_rule_rejects_missing_at() {
        assert!(!FormatRule::Email.accepts("ada.example.com"));
    }

    #[test]
    fn email_rule_rejects_missing_tld() {
        assert!(!FormatRule::Email.accepts("ada@localhost"));
    }

    #[test]
    fn email_rule_rejects_inner_space() {
        assert!(!FormatRule::Email.accepts("ada lovelace@example.com"));
    }
}
