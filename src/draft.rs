//! Data model for the registration draft
//!
//! The draft is the single mutable entity of the wizard: created empty on
//! mount, mutated on every keystroke or selection, discarded on exit.
//! Nothing here is persisted.

use serde::Serialize;

/// Account role selectable in the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Administrator account
    Admin,
    /// Regular user account
    User,
}

const ROLES: [Role; 2] = [Role::Admin, Role::User];

impl Role {
    /// All selectable roles, in display order
    pub fn all() -> &'static [Role] {
        &ROLES
    }

    /// Stable wire/display identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    /// Parse a role identifier; anything outside the member set is `None`
    pub fn parse(value: &str) -> Option<Role> {
        ROLES.iter().copied().find(|role| role.as_str() == value)
    }

    /// Cycle to the next role
    pub fn next(self) -> Role {
        let index = ROLES.iter().position(|role| *role == self).unwrap_or(0);
        ROLES[(index + 1) % ROLES.len()]
    }

    /// Cycle to the previous role
    pub fn prev(self) -> Role {
        let index = ROLES.iter().position(|role| *role == self).unwrap_or(0);
        ROLES[(index + ROLES.len() - 1) % ROLES.len()]
    }
}

/// Identifier for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Username,
    Email,
    Phone,
    Role,
    Password,
    ConfirmPassword,
}

const FIELDS: [FieldId; FieldId::COUNT] = [
    FieldId::Username,
    FieldId::Email,
    FieldId::Phone,
    FieldId::Role,
    FieldId::Password,
    FieldId::ConfirmPassword,
];

impl FieldId {
    /// Number of fields in the form
    pub const COUNT: usize = 6;

    /// All fields, in schema order
    pub fn all() -> &'static [FieldId] {
        &FIELDS
    }

    /// Position in schema order
    pub fn index(self) -> usize {
        match self {
            FieldId::Username => 0,
            FieldId::Email => 1,
            FieldId::Phone => 2,
            FieldId::Role => 3,
            FieldId::Password => 4,
            FieldId::ConfirmPassword => 5,
        }
    }

    /// Whether this field takes free text input (everything except the role)
    pub fn is_text(self) -> bool {
        !matches!(self, FieldId::Role)
    }

    /// Whether this field's value is masked on screen
    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password | FieldId::ConfirmPassword)
    }
}

/// The in-progress, unsaved set of field values for the registration form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Option<Role>,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationDraft {
    /// Text rendition of a field value, as fed to the schema validator.
    /// An unselected role reads as the empty string.
    pub fn field_text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Username => &self.username,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Role => self.role.map(|role| role.as_str()).unwrap_or(""),
            FieldId::Password => &self.password,
            FieldId::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Pretty-printed JSON acknowledgment payload
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("superuser"), None);
        assert_eq!(Role::parse(""), None);
        assert_eq!(Role::parse("Admin"), None);
    }

    #[test]
    fn test_role_cycle() {
        assert_eq!(Role::Admin.next(), Role::User);
        assert_eq!(Role::User.next(), Role::Admin);
        assert_eq!(Role::Admin.prev(), Role::User);
    }

    #[test]
    fn test_field_text_for_unset_role() {
        let draft = RegistrationDraft::default();
        assert_eq!(draft.field_text(FieldId::Role), "");

        let draft = RegistrationDraft {
            role: Some(Role::User),
            ..Default::default()
        };
        assert_eq!(draft.field_text(FieldId::Role), "user");
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let draft = RegistrationDraft {
            username: "홍길동".to_string(),
            confirm_password: "x".to_string(),
            ..Default::default()
        };
        let json = draft.to_json().unwrap();
        assert!(json.contains("\"confirmPassword\""));
        assert!(json.contains("\"username\": \"홍길동\""));
        assert!(json.contains("\"role\": null"));
    }

    #[test]
    fn test_field_order_matches_index() {
        for (position, field) in FieldId::all().iter().enumerate() {
            assert_eq!(field.index(), position);
        }
    }
}
