//! Auth slice — the signed-in session and the sign-in/sign-out flows.

use eduboard_domain::user::{Credentials, User};

use crate::gateway::{AuthGateway, GatewayError};
use crate::sequence::RequestSequence;

/// Message shown when sign-out fails. Sign-out never surfaces backend
/// detail; the session is torn down client-side either way.
const SIGN_OUT_FAILED: &str = "An error occurred";
const SIGN_OUT_DONE: &str = "Logout success";

/// Session state. `Default` is the signed-out initial state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

/// Phase transitions of the auth slice.
///
/// Sign-out clears the user on every phase, including pending, so the UI
/// never shows a session that is being torn down.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthAction {
    LoginPending,
    LoginFinished(Result<User, String>),
    CurrentUserPending,
    CurrentUserFinished(Result<User, String>),
    LogoutPending,
    LogoutFinished(Result<(), String>),
    /// Synchronous reset back to the initial state. Not sequenced; pages
    /// dispatch it after they have consumed a terminal flag.
    Reset,
}

/// Pure reducer for the auth slice.
#[must_use]
pub fn reduce(state: AuthState, action: AuthAction) -> AuthState {
    match action {
        AuthAction::LoginPending | AuthAction::CurrentUserPending => AuthState {
            is_loading: true,
            ..state
        },
        AuthAction::LoginFinished(Ok(user)) | AuthAction::CurrentUserFinished(Ok(user)) => {
            AuthState {
                is_loading: false,
                is_success: true,
                user: Some(user),
                ..state
            }
        }
        AuthAction::LoginFinished(Err(message)) | AuthAction::CurrentUserFinished(Err(message)) => {
            AuthState {
                is_loading: false,
                is_error: true,
                message,
                ..state
            }
        }
        AuthAction::LogoutPending => AuthState {
            is_loading: true,
            user: None,
            ..state
        },
        AuthAction::LogoutFinished(Ok(())) => AuthState {
            is_loading: false,
            is_success: true,
            user: None,
            message: SIGN_OUT_DONE.to_owned(),
            ..state
        },
        AuthAction::LogoutFinished(Err(_)) => AuthState {
            is_loading: false,
            is_error: true,
            user: None,
            message: SIGN_OUT_FAILED.to_owned(),
            ..state
        },
        AuthAction::Reset => AuthState::default(),
    }
}

/// Async operations driving the auth slice.
///
/// Each thunk dispatches a pending action, awaits the gateway, and
/// dispatches the terminal action unless a newer auth request superseded
/// it. The raw outcome is also returned so callers can toast or navigate
/// without re-reading the slice.
pub struct AuthThunks<G> {
    gateway: G,
    sequence: RequestSequence,
}

impl<G: AuthGateway> AuthThunks<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn login(
        &self,
        dispatch: impl Fn(AuthAction),
        credentials: Credentials,
    ) -> Result<User, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(AuthAction::LoginPending);
        let outcome = self.gateway.login(&credentials).await;
        if ticket.is_current() {
            dispatch(AuthAction::LoginFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn current_user(
        &self,
        dispatch: impl Fn(AuthAction),
    ) -> Result<User, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(AuthAction::CurrentUserPending);
        let outcome = self.gateway.current_user().await;
        if ticket.is_current() {
            dispatch(AuthAction::CurrentUserFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn logout(&self, dispatch: impl Fn(AuthAction)) -> Result<(), GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(AuthAction::LogoutPending);
        let outcome = self.gateway.logout().await;
        if ticket.is_current() {
            dispatch(AuthAction::LogoutFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }
}
