//! User — a staff account of the education office backoffice.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ParseError;
use crate::id::UserId;

/// Access level of a staff account.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Admin,
    Superadmin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("admin"),
            Self::Superadmin => f.write_str("superadmin"),
        }
    }
}

impl FromStr for Role {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "superadmin" => Ok(Self::Superadmin),
            other => Err(ParseError::Role(other.to_string())),
        }
    }
}

/// Whether an account may sign in. Inactive accounts are bounced back to
/// the sign-in screen by the layout shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Inactive => f.write_str("inactive"),
        }
    }
}

impl FromStr for AccountStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseError::AccountStatus(other.to_string())),
        }
    }
}

/// A staff account as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// Sign-in payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
pub struct Credentials {
    #[validate(email(message = "Email tidak valid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Kata sandi harus setidaknya 6 karakter"))]
    pub password: String,
}

/// Form payload for creating or updating a staff account.
///
/// The credential fields are transient: they are sent to the server on
/// submission and never stored client-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub name: String,
    #[validate(email(message = "Email tidak valid"))]
    pub email: String,
    #[validate(length(min = 6, message = "Kata sandi harus setidaknya 6 karakter"))]
    pub password: String,
    #[validate(length(min = 6, message = "Kata sandi harus setidaknya 6 karakter"))]
    pub confirm_password: String,
    pub role: Role,
}

/// Form payload for editing an existing account's profile.
///
/// Passwords are never edited here, only on creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateForm {
    #[validate(length(min = 1, message = "Wajib diisi"))]
    pub name: String,
    #[validate(email(message = "Email tidak valid"))]
    pub email: String,
    pub role: Role,
}

impl UserUpdateForm {
    /// Seed the form from a fetched account.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::first_messages;

    fn valid_form() -> UserForm {
        UserForm {
            name: "Siti Rahma".to_string(),
            email: "siti@dinas.go.id".to_string(),
            password: "rahasia1".to_string(),
            confirm_password: "rahasia1".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn should_accept_valid_user_form() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn should_reject_short_password_with_length_message() {
        let mut form = valid_form();
        form.password = "abc".to_string();

        let errors = form.validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(
            messages.get("password").map(String::as_str),
            Some("Kata sandi harus setidaknya 6 karakter")
        );
        assert!(!messages.contains_key("name"));
    }

    #[test]
    fn should_reject_malformed_email() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();

        let errors = form.validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(
            messages.get("email").map(String::as_str),
            Some("Email tidak valid")
        );
    }

    #[test]
    fn should_roundtrip_role_through_display_and_from_str() {
        for role in [Role::Admin, Role::Superadmin] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
        assert!("chief".parse::<Role>().is_err());
    }

    #[test]
    fn should_serialize_status_lowercase() {
        let json = serde_json::to_string(&AccountStatus::Inactive).unwrap();
        assert_eq!(json, r#""inactive""#);
    }

    #[test]
    fn should_serialize_form_with_camel_case_keys() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert!(json.get("confirmPassword").is_some());
        assert_eq!(json["role"], "admin");
    }

    #[test]
    fn should_seed_update_form_from_user() {
        let user = User {
            id: UserId::new(),
            name: "Siti Rahma".to_string(),
            email: "siti@dinas.go.id".to_string(),
            role: Role::Superadmin,
            status: AccountStatus::Active,
        };

        let form = UserUpdateForm::from_user(&user);
        assert_eq!(form.name, "Siti Rahma");
        assert_eq!(form.email, "siti@dinas.go.id");
        assert_eq!(form.role, Role::Superadmin);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn should_reject_blank_name_on_update_form() {
        let form = UserUpdateForm {
            name: String::new(),
            email: "siti@dinas.go.id".to_string(),
            role: Role::Admin,
        };

        let errors = form.validate().unwrap_err();
        let messages = first_messages(&errors);
        assert_eq!(messages.get("name").map(String::as_str), Some("Wajib diisi"));
    }
}
