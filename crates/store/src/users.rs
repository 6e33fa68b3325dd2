//! Users slice — staff account management.

use eduboard_domain::id::UserId;
use eduboard_domain::user::{AccountStatus, User, UserForm, UserUpdateForm};

use crate::gateway::{GatewayError, UserGateway};
use crate::sequence::RequestSequence;

const CREATED: &str = "User successfully created";
const STATUS_CHANGED: &str = "User status successfully changed";

/// Account management state. `users` stays `None` until the first
/// successful list fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<User>,
    pub users: Option<Vec<User>>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

/// Phase transitions of the users slice. All operations share one pending
/// action because they all just raise the loading flag.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    Pending,
    CreateFinished(Result<User, String>),
    ListFinished(Result<Vec<User>, String>),
    GetFinished(Result<User, String>),
    UpdateFinished(Result<User, String>),
    /// Carries the re-fetched full list, not the toggled account.
    ChangeStatusFinished(Result<Vec<User>, String>),
}

/// Pure reducer for the users slice.
///
/// Rejections report a message but never clear the slots, so a failed
/// refresh keeps the last good list on screen. A failed status change
/// does not even report a message; the row simply stays as it was.
#[must_use]
pub fn reduce(state: UserState, action: UserAction) -> UserState {
    match action {
        UserAction::Pending => UserState {
            is_loading: true,
            ..state
        },
        UserAction::CreateFinished(Ok(_)) => UserState {
            is_loading: false,
            is_success: true,
            message: CREATED.to_owned(),
            ..state
        },
        UserAction::ListFinished(Ok(users)) => UserState {
            is_loading: false,
            is_success: true,
            users: Some(users),
            ..state
        },
        UserAction::GetFinished(Ok(user)) | UserAction::UpdateFinished(Ok(user)) => UserState {
            is_loading: false,
            is_success: true,
            user: Some(user),
            ..state
        },
        UserAction::ChangeStatusFinished(Ok(users)) => UserState {
            is_loading: false,
            is_success: true,
            users: Some(users),
            message: STATUS_CHANGED.to_owned(),
            ..state
        },
        UserAction::CreateFinished(Err(message))
        | UserAction::ListFinished(Err(message))
        | UserAction::GetFinished(Err(message))
        | UserAction::UpdateFinished(Err(message)) => UserState {
            is_loading: false,
            is_error: true,
            message,
            ..state
        },
        UserAction::ChangeStatusFinished(Err(_)) => UserState {
            is_loading: false,
            is_error: true,
            ..state
        },
    }
}

/// Async operations driving the users slice.
pub struct UserThunks<G> {
    gateway: G,
    sequence: RequestSequence,
}

impl<G: UserGateway> UserThunks<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn create(
        &self,
        dispatch: impl Fn(UserAction),
        form: UserForm,
    ) -> Result<User, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(UserAction::Pending);
        let outcome = self.gateway.create(&form).await;
        if ticket.is_current() {
            dispatch(UserAction::CreateFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn list(&self, dispatch: impl Fn(UserAction)) -> Result<Vec<User>, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(UserAction::Pending);
        let outcome = self.gateway.list().await;
        if ticket.is_current() {
            dispatch(UserAction::ListFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn get(
        &self,
        dispatch: impl Fn(UserAction),
        id: UserId,
    ) -> Result<User, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(UserAction::Pending);
        let outcome = self.gateway.get(id).await;
        if ticket.is_current() {
            dispatch(UserAction::GetFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn update(
        &self,
        dispatch: impl Fn(UserAction),
        id: UserId,
        form: UserUpdateForm,
    ) -> Result<User, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(UserAction::Pending);
        let outcome = self.gateway.update(id, &form).await;
        if ticket.is_current() {
            dispatch(UserAction::UpdateFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    /// Toggle an account's status, then re-fetch the whole list so every
    /// row reflects the server's view.
    pub async fn change_status(
        &self,
        dispatch: impl Fn(UserAction),
        id: UserId,
        status: AccountStatus,
    ) -> Result<Vec<User>, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(UserAction::Pending);
        let outcome = match self.gateway.change_status(id, status).await {
            Ok(()) => self.gateway.list().await,
            Err(error) => Err(error),
        };
        if ticket.is_current() {
            dispatch(UserAction::ChangeStatusFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }
}
