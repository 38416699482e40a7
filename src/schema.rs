//! Declarative validation schema
//!
//! A pure mapping from field to predicate plus message key, evaluated
//! eagerly on every field change and again when the wizard advances.
//! Fields can be added to the table without touching any control logic.

use crate::draft::{FieldId, Role};
use regex::Regex;
use std::sync::OnceLock;

/// Validation outcome for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// The value satisfies the field's rule
    Valid,
    /// The value violates the rule; the key resolves to a localized message
    Invalid { message_key: &'static str },
}

impl FieldStatus {
    /// Whether the field passed validation
    pub fn is_valid(self) -> bool {
        matches!(self, FieldStatus::Valid)
    }

    /// Message key when invalid
    pub fn message_key(self) -> Option<&'static str> {
        match self {
            FieldStatus::Valid => None,
            FieldStatus::Invalid { message_key } => Some(message_key),
        }
    }
}

/// A single field rule: predicate plus the message shown when it fails
#[derive(Debug)]
pub struct FieldRule {
    pub field: FieldId,
    pub message_key: &'static str,
    check: fn(&str) -> bool,
}

/// The registration schema, one rule per field
#[derive(Debug)]
pub struct Schema {
    rules: [FieldRule; FieldId::COUNT],
}

impl Schema {
    /// Build the registration rule table.
    ///
    /// Password equality is deliberately absent here: it is a cross-field
    /// invariant enforced by the controller at submit time only.
    pub fn registration() -> Self {
        Self {
            rules: [
                FieldRule {
                    field: FieldId::Username,
                    message_key: "msg_username_required",
                    check: non_empty,
                },
                FieldRule {
                    field: FieldId::Email,
                    message_key: "msg_email_invalid",
                    check: email_shape,
                },
                FieldRule {
                    field: FieldId::Phone,
                    message_key: "msg_phone_required",
                    check: non_empty,
                },
                FieldRule {
                    field: FieldId::Role,
                    message_key: "msg_role_required",
                    check: role_member,
                },
                FieldRule {
                    field: FieldId::Password,
                    message_key: "msg_password_required",
                    check: present,
                },
                FieldRule {
                    field: FieldId::ConfirmPassword,
                    message_key: "msg_confirm_password_required",
                    check: present,
                },
            ],
        }
    }

    /// Evaluate one field value against its rule
    pub fn validate(&self, field: FieldId, value: &str) -> FieldStatus {
        let rule = &self.rules[field.index()];
        debug_assert_eq!(rule.field, field);
        if (rule.check)(value) {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid {
                message_key: rule.message_key,
            }
        }
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration()
    }
}

/// Non-empty after trimming (username, phone)
fn non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Non-empty as-is; passwords may legitimately contain only spaces
fn present(value: &str) -> bool {
    !value.is_empty()
}

fn email_shape(value: &str) -> bool {
    email_regex().is_match(value)
}

fn role_member(value: &str) -> bool {
    Role::parse(value).is_some()
}

/// local-part@domain with at least one dot in the domain
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> Schema {
        Schema::registration()
    }

    #[test]
    fn test_required_text_fields() {
        let schema = schema();
        for field in [FieldId::Username, FieldId::Phone, FieldId::Password] {
            assert!(!schema.validate(field, "").is_valid());
            assert!(schema.validate(field, "x").is_valid());
        }
        // whitespace-only is rejected for trimmed fields
        assert!(!schema.validate(FieldId::Username, "   ").is_valid());
        assert!(!schema.validate(FieldId::Phone, " \t").is_valid());
    }

    #[test]
    fn test_email_shape() {
        let schema = schema();
        assert!(schema.validate(FieldId::Email, "a@b.com").is_valid());
        assert!(
            schema
                .validate(FieldId::Email, "hello@sparta-devcamp.com")
                .is_valid()
        );
        assert!(!schema.validate(FieldId::Email, "abc").is_valid());
        assert!(!schema.validate(FieldId::Email, "a@b").is_valid());
        assert!(!schema.validate(FieldId::Email, "@b.com").is_valid());
        assert!(!schema.validate(FieldId::Email, "a b@c.com").is_valid());
        assert!(!schema.validate(FieldId::Email, "").is_valid());
    }

    #[test]
    fn test_role_membership() {
        let schema = schema();
        assert!(schema.validate(FieldId::Role, "admin").is_valid());
        assert!(schema.validate(FieldId::Role, "user").is_valid());
        assert!(!schema.validate(FieldId::Role, "").is_valid());
        assert!(!schema.validate(FieldId::Role, "superuser").is_valid());
    }

    #[test]
    fn test_invalid_status_carries_message_key() {
        let schema = schema();
        let status = schema.validate(FieldId::Email, "abc");
        assert_eq!(status.message_key(), Some("msg_email_invalid"));
        assert_eq!(schema.validate(FieldId::Email, "a@b.com").message_key(), None);
    }

    #[test]
    fn test_rules_cover_all_fields_in_order() {
        let schema = schema();
        for field in FieldId::all() {
            assert_eq!(schema.rules[field.index()].field, *field);
        }
    }
}
