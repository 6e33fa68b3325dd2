//! Ports describing the REST backend as the thunks see it.
//!
//! The dashboard crate implements these traits over its HTTP client. Tests
//! implement them in memory. Every method resolves to a [`GatewayError`]
//! on failure, never a panic or a raw status code.

use std::future::Future;

use eduboard_domain::dashboard::GenderTally;
use eduboard_domain::id::{StudentId, UserId};
use eduboard_domain::page::Paginated;
use eduboard_domain::student::{Student, StudentForm, StudentQuery};
use eduboard_domain::user::{AccountStatus, Credentials, User, UserForm, UserUpdateForm};

/// Message substituted when the backend does not supply one.
pub const FALLBACK_MESSAGE: &str = "An unknown error occurred";

/// A backend failure normalized to a single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Normalize a non-success response body.
    ///
    /// The backend reports failures as `{"msg": "..."}`. Anything else,
    /// including an empty or non-JSON body, maps to [`FALLBACK_MESSAGE`].
    #[must_use]
    pub fn from_error_body(body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            msg: String,
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .map_or_else(|_| FALLBACK_MESSAGE.to_owned(), |body| body.msg);
        Self { message }
    }

    /// Normalize a request that never produced a response.
    #[must_use]
    pub fn transport() -> Self {
        Self {
            message: FALLBACK_MESSAGE.to_owned(),
        }
    }
}

/// Session endpoints.
pub trait AuthGateway {
    /// `POST /login`
    fn login(&self, credentials: &Credentials) -> impl Future<Output = Result<User, GatewayError>>;
    /// `GET /me`
    fn current_user(&self) -> impl Future<Output = Result<User, GatewayError>>;
    /// `DELETE /logout`
    fn logout(&self) -> impl Future<Output = Result<(), GatewayError>>;
}

/// Account management endpoints.
pub trait UserGateway {
    /// `POST /users`
    fn create(&self, form: &UserForm) -> impl Future<Output = Result<User, GatewayError>>;
    /// `GET /users`
    fn list(&self) -> impl Future<Output = Result<Vec<User>, GatewayError>>;
    /// `GET /users/{id}`
    fn get(&self, id: UserId) -> impl Future<Output = Result<User, GatewayError>>;
    /// `PATCH /users/{id}`
    fn update(
        &self,
        id: UserId,
        form: &UserUpdateForm,
    ) -> impl Future<Output = Result<User, GatewayError>>;
    /// `PATCH /users/status/{id}`
    fn change_status(
        &self,
        id: UserId,
        status: AccountStatus,
    ) -> impl Future<Output = Result<(), GatewayError>>;
}

/// Student registry endpoints.
pub trait StudentGateway {
    /// `POST /students`
    fn create(&self, form: &StudentForm) -> impl Future<Output = Result<Student, GatewayError>>;
    /// `GET /students?page=&limit=&search=`
    fn list(
        &self,
        query: &StudentQuery,
    ) -> impl Future<Output = Result<Paginated<Student>, GatewayError>>;
    /// `GET /students/{id}`
    fn get(&self, id: StudentId) -> impl Future<Output = Result<Student, GatewayError>>;
    /// `PATCH /students/{id}`
    fn update(
        &self,
        id: StudentId,
        form: &StudentForm,
    ) -> impl Future<Output = Result<Student, GatewayError>>;
    /// `DELETE /students/{id}`
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<Student, GatewayError>>;
}

/// Aggregate count endpoints for the landing page.
pub trait DashboardGateway {
    /// `GET /dashboard/count-students`
    fn count_students(&self) -> impl Future<Output = Result<u64, GatewayError>>;
    /// `GET /dashboard/count-by-gender`
    fn count_by_gender(&self) -> impl Future<Output = Result<GenderTally, GatewayError>>;
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_MESSAGE, GatewayError};

    #[test]
    fn should_extract_server_message_when_body_has_msg_field() {
        let error = GatewayError::from_error_body(r#"{"msg":"Email sudah terdaftar"}"#);
        assert_eq!(error.message, "Email sudah terdaftar");
    }

    #[test]
    fn should_fall_back_when_body_is_not_json() {
        let error = GatewayError::from_error_body("<html>502 Bad Gateway</html>");
        assert_eq!(error.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn should_fall_back_when_body_is_empty() {
        let error = GatewayError::from_error_body("");
        assert_eq!(error.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn should_fall_back_when_msg_field_is_missing() {
        let error = GatewayError::from_error_body(r#"{"error":"nope"}"#);
        assert_eq!(error.message, FALLBACK_MESSAGE);
    }

    #[test]
    fn should_keep_server_message_when_extra_fields_are_present() {
        let error = GatewayError::from_error_body(r#"{"msg":"Akses terlarang","status":403}"#);
        assert_eq!(error.message, "Akses terlarang");
    }

    #[test]
    fn should_display_as_its_message() {
        let error = GatewayError::new("boom");
        assert_eq!(error.to_string(), "boom");
    }
}
