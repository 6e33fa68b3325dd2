//! Leptos-side wiring of the state layer.
//!
//! Each slice lives in one [`RwSignal`]; views read them, never write.
//! All writes funnel through the dispatch helpers so every transition
//! goes through the pure reducers in `eduboard-store`.

use std::sync::Arc;

use leptos::prelude::*;

use eduboard_domain::dashboard::GenderTally;
use eduboard_domain::id::{StudentId, UserId};
use eduboard_domain::page::Paginated;
use eduboard_domain::student::{Student, StudentForm, StudentQuery};
use eduboard_domain::user::{AccountStatus, Credentials, User, UserForm, UserUpdateForm};
use eduboard_store::auth::{self, AuthAction, AuthState, AuthThunks};
use eduboard_store::dashboard::{self, DashboardAction, DashboardState, DashboardThunks};
use eduboard_store::gateway::GatewayError;
use eduboard_store::students::{self, StudentAction, StudentState, StudentThunks};
use eduboard_store::users::{self, UserAction, UserState, UserThunks};

use crate::api::RestGateway;

/// Handle to every slice signal and its thunks. Cheap to clone; all
/// clones share the same signals and request sequences.
#[derive(Clone)]
pub struct AppStore {
    pub auth: RwSignal<AuthState>,
    pub users: RwSignal<UserState>,
    pub students: RwSignal<StudentState>,
    pub dashboard: RwSignal<DashboardState>,
    auth_thunks: Arc<AuthThunks<RestGateway>>,
    user_thunks: Arc<UserThunks<RestGateway>>,
    student_thunks: Arc<StudentThunks<RestGateway>>,
    dashboard_thunks: Arc<DashboardThunks<RestGateway>>,
}

impl AppStore {
    pub fn new(gateway: RestGateway) -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            users: RwSignal::new(UserState::default()),
            students: RwSignal::new(StudentState::default()),
            dashboard: RwSignal::new(DashboardState::default()),
            auth_thunks: Arc::new(AuthThunks::new(gateway.clone())),
            user_thunks: Arc::new(UserThunks::new(gateway.clone())),
            student_thunks: Arc::new(StudentThunks::new(gateway.clone())),
            dashboard_thunks: Arc::new(DashboardThunks::new(gateway)),
        }
    }

    fn dispatch_auth(&self, action: AuthAction) {
        self.auth
            .update(|state| *state = auth::reduce(std::mem::take(state), action));
    }

    fn dispatch_users(&self, action: UserAction) {
        self.users
            .update(|state| *state = users::reduce(std::mem::take(state), action));
    }

    fn dispatch_students(&self, action: StudentAction) {
        self.students
            .update(|state| *state = students::reduce(std::mem::take(state), action));
    }

    fn dispatch_dashboard(&self, action: DashboardAction) {
        self.dashboard
            .update(|state| *state = dashboard::reduce(std::mem::take(state), action));
    }

    /// Put the auth slice back to its signed-out initial state.
    pub fn reset_auth(&self) {
        self.dispatch_auth(AuthAction::Reset);
    }

    pub async fn login(&self, credentials: Credentials) -> Result<User, GatewayError> {
        self.auth_thunks
            .login(|action| self.dispatch_auth(action), credentials)
            .await
    }

    pub async fn current_user(&self) -> Result<User, GatewayError> {
        self.auth_thunks
            .current_user(|action| self.dispatch_auth(action))
            .await
    }

    pub async fn logout(&self) -> Result<(), GatewayError> {
        self.auth_thunks
            .logout(|action| self.dispatch_auth(action))
            .await
    }

    pub async fn create_user(&self, form: UserForm) -> Result<User, GatewayError> {
        self.user_thunks
            .create(|action| self.dispatch_users(action), form)
            .await
    }

    pub async fn load_users(&self) -> Result<Vec<User>, GatewayError> {
        self.user_thunks
            .list(|action| self.dispatch_users(action))
            .await
    }

    pub async fn load_user(&self, id: UserId) -> Result<User, GatewayError> {
        self.user_thunks
            .get(|action| self.dispatch_users(action), id)
            .await
    }

    pub async fn update_user(&self, id: UserId, form: UserUpdateForm) -> Result<User, GatewayError> {
        self.user_thunks
            .update(|action| self.dispatch_users(action), id, form)
            .await
    }

    pub async fn change_user_status(
        &self,
        id: UserId,
        status: AccountStatus,
    ) -> Result<Vec<User>, GatewayError> {
        self.user_thunks
            .change_status(|action| self.dispatch_users(action), id, status)
            .await
    }

    pub async fn create_student(&self, form: StudentForm) -> Result<Student, GatewayError> {
        self.student_thunks
            .create(|action| self.dispatch_students(action), form)
            .await
    }

    pub async fn load_students(
        &self,
        query: StudentQuery,
    ) -> Result<Paginated<Student>, GatewayError> {
        self.student_thunks
            .list(|action| self.dispatch_students(action), query)
            .await
    }

    pub async fn load_student(&self, id: StudentId) -> Result<Student, GatewayError> {
        self.student_thunks
            .get(|action| self.dispatch_students(action), id)
            .await
    }

    pub async fn update_student(
        &self,
        id: StudentId,
        form: StudentForm,
    ) -> Result<Student, GatewayError> {
        self.student_thunks
            .update(|action| self.dispatch_students(action), id, form)
            .await
    }

    pub async fn delete_student(&self, id: StudentId) -> Result<Student, GatewayError> {
        self.student_thunks
            .delete(|action| self.dispatch_students(action), id)
            .await
    }

    pub async fn load_student_count(&self) -> Result<u64, GatewayError> {
        self.dashboard_thunks
            .count_students(|action| self.dispatch_dashboard(action))
            .await
    }

    pub async fn load_gender_tally(&self) -> Result<GenderTally, GatewayError> {
        self.dashboard_thunks
            .count_by_gender(|action| self.dispatch_dashboard(action))
            .await
    }
}

/// Build the store against the live API and put it in context.
pub fn provide_store() {
    provide_context(AppStore::new(RestGateway::from_env()));
}

/// Grab the store from context. Panics outside [`crate::App`].
pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore should be provided")
}
