//! HTTP adapter implementing the store's gateway ports over `gloo-net`.
//!
//! Every request carries cookies (the session lives in an HTTP-only
//! cookie), and every failure is normalized to a [`GatewayError`] before
//! it reaches a slice.

use eduboard_domain::dashboard::GenderTally;
use eduboard_domain::id::{StudentId, UserId};
use eduboard_domain::page::Paginated;
use eduboard_domain::student::{Student, StudentForm, StudentQuery};
use eduboard_domain::user::{AccountStatus, Credentials, User, UserForm, UserUpdateForm};
use eduboard_store::gateway::{
    AuthGateway, DashboardGateway, GatewayError, StudentGateway, UserGateway,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

/// REST client bound to the backoffice API.
#[derive(Debug, Clone)]
pub struct RestGateway {
    base_url: String,
}

impl RestGateway {
    /// Client for the API base URL baked in at compile time.
    ///
    /// Defaults to same-origin paths when `EDUBOARD_API_URL` is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(option_env!("EDUBOARD_API_URL").unwrap_or_default())
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn http_get(&self, path: &str) -> Result<Request, gloo_net::Error> {
        Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .build()
    }

    fn http_delete(&self, path: &str) -> Result<Request, gloo_net::Error> {
        Request::delete(&self.url(path))
            .credentials(RequestCredentials::Include)
            .build()
    }

    fn http_post<B: Serialize>(&self, path: &str, body: &B) -> Result<Request, gloo_net::Error> {
        Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
    }

    fn http_patch<B: Serialize>(&self, path: &str, body: &B) -> Result<Request, gloo_net::Error> {
        Request::patch(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
    }
}

/// Log the underlying failure, then collapse it to the uniform message.
fn transport_error(error: &gloo_net::Error) -> GatewayError {
    leptos::logging::warn!("request failed: {error}");
    GatewayError::transport()
}

/// Check the HTTP response status and extract the `{"msg"}` body if non-2xx.
async fn check(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::from_error_body(&body))
}

/// Issue a request and decode its JSON body.
async fn send<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
) -> Result<T, GatewayError> {
    let request = request.map_err(|error| transport_error(&error))?;
    let response = request
        .send()
        .await
        .map_err(|error| transport_error(&error))?;
    let response = check(response).await?;
    response.json().await.map_err(|error| transport_error(&error))
}

/// Issue a request, keeping only its success or failure.
async fn send_raw(request: Result<Request, gloo_net::Error>) -> Result<(), GatewayError> {
    let request = request.map_err(|error| transport_error(&error))?;
    let response = request
        .send()
        .await
        .map_err(|error| transport_error(&error))?;
    check(response).await?;
    Ok(())
}

/// Percent-encode a query parameter value (handles `+`, `&`, `=`, spaces, etc.).
fn encode_query_value(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('+', "%2B")
        .replace('&', "%26")
        .replace('=', "%3D")
        .replace(' ', "%20")
}

impl AuthGateway for RestGateway {
    async fn login(&self, credentials: &Credentials) -> Result<User, GatewayError> {
        send(self.http_post("/login", credentials)).await
    }

    async fn current_user(&self) -> Result<User, GatewayError> {
        send(self.http_get("/me")).await
    }

    async fn logout(&self) -> Result<(), GatewayError> {
        send_raw(self.http_delete("/logout")).await
    }
}

impl UserGateway for RestGateway {
    async fn create(&self, form: &UserForm) -> Result<User, GatewayError> {
        send(self.http_post("/users", form)).await
    }

    async fn list(&self) -> Result<Vec<User>, GatewayError> {
        send(self.http_get("/users")).await
    }

    async fn get(&self, id: UserId) -> Result<User, GatewayError> {
        send(self.http_get(&format!("/users/{id}"))).await
    }

    async fn update(&self, id: UserId, form: &UserUpdateForm) -> Result<User, GatewayError> {
        send(self.http_patch(&format!("/users/{id}"), form)).await
    }

    async fn change_status(&self, id: UserId, status: AccountStatus) -> Result<(), GatewayError> {
        #[derive(Serialize)]
        struct StatusChange {
            id: UserId,
            status: AccountStatus,
        }

        send_raw(self.http_patch(&format!("/users/status/{id}"), &StatusChange { id, status }))
            .await
    }
}

impl StudentGateway for RestGateway {
    async fn create(&self, form: &StudentForm) -> Result<Student, GatewayError> {
        send(self.http_post("/students", form)).await
    }

    async fn list(&self, query: &StudentQuery) -> Result<Paginated<Student>, GatewayError> {
        let path = format!(
            "/students?page={}&limit={}&search={}",
            query.page,
            query.limit,
            encode_query_value(&query.search)
        );
        send(self.http_get(&path)).await
    }

    async fn get(&self, id: StudentId) -> Result<Student, GatewayError> {
        send(self.http_get(&format!("/students/{id}"))).await
    }

    async fn update(&self, id: StudentId, form: &StudentForm) -> Result<Student, GatewayError> {
        send(self.http_patch(&format!("/students/{id}"), form)).await
    }

    async fn delete(&self, id: StudentId) -> Result<Student, GatewayError> {
        send(self.http_delete(&format!("/students/{id}"))).await
    }
}

impl DashboardGateway for RestGateway {
    async fn count_students(&self) -> Result<u64, GatewayError> {
        send(self.http_get("/dashboard/count-students")).await
    }

    async fn count_by_gender(&self) -> Result<GenderTally, GatewayError> {
        send(self.http_get("/dashboard/count-by-gender")).await
    }
}
