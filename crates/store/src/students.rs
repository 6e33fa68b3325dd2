//! Students slice — the trainee registry, its paginated list and the
//! create/update/delete flows.

use eduboard_domain::id::StudentId;
use eduboard_domain::page::Paginated;
use eduboard_domain::student::{Student, StudentForm, StudentQuery};

use crate::gateway::{GatewayError, StudentGateway};
use crate::sequence::RequestSequence;

const CREATED: &str = "Berhasil";

/// Registry state. Pagination metadata mirrors the last successful list
/// response verbatim; a failed refresh clears the rows but keeps the
/// metadata so the pager does not jump around.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentState {
    pub student: Option<Student>,
    pub students: Option<Vec<Student>>,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
    pub total_rows: u64,
    pub total_page: u64,
    pub page: u64,
    pub limit: u64,
}

impl Default for StudentState {
    fn default() -> Self {
        Self {
            student: None,
            students: None,
            is_error: false,
            is_success: false,
            is_loading: false,
            message: String::new(),
            total_rows: 0,
            total_page: 0,
            page: 0,
            limit: 10,
        }
    }
}

/// Phase transitions of the students slice.
#[derive(Debug, Clone, PartialEq)]
pub enum StudentAction {
    Pending,
    CreateFinished(Result<Student, String>),
    ListFinished(Result<Paginated<Student>, String>),
    GetFinished(Result<Student, String>),
    UpdateFinished(Result<Student, String>),
    DeleteFinished(Result<Student, String>),
}

/// Pure reducer for the students slice.
///
/// Every rejection clears the slot the operation would have written, so
/// the detail page never shows a record the server refused to confirm.
/// A successful update raises the flag without touching any slot; the
/// detail page re-reads the form it already holds.
#[must_use]
pub fn reduce(state: StudentState, action: StudentAction) -> StudentState {
    match action {
        StudentAction::Pending => StudentState {
            is_loading: true,
            ..state
        },
        StudentAction::CreateFinished(Ok(_)) => StudentState {
            is_loading: false,
            is_success: true,
            message: CREATED.to_owned(),
            ..state
        },
        StudentAction::ListFinished(Ok(page)) => StudentState {
            is_loading: false,
            is_success: true,
            students: Some(page.result),
            total_rows: page.total_rows,
            total_page: page.total_page,
            page: page.page,
            limit: page.limit,
            ..state
        },
        StudentAction::ListFinished(Err(message)) => StudentState {
            is_loading: false,
            is_error: true,
            message,
            students: None,
            ..state
        },
        StudentAction::GetFinished(Ok(student)) | StudentAction::DeleteFinished(Ok(student)) => {
            StudentState {
                is_loading: false,
                is_success: true,
                student: Some(student),
                ..state
            }
        }
        StudentAction::UpdateFinished(Ok(_)) => StudentState {
            is_loading: false,
            is_success: true,
            ..state
        },
        StudentAction::CreateFinished(Err(message))
        | StudentAction::GetFinished(Err(message))
        | StudentAction::UpdateFinished(Err(message))
        | StudentAction::DeleteFinished(Err(message)) => StudentState {
            is_loading: false,
            is_error: true,
            message,
            student: None,
            ..state
        },
    }
}

/// Previous page index, or `None` at the first page.
#[must_use]
pub fn previous_page(current: u64) -> Option<u64> {
    current.checked_sub(1)
}

/// Next page index, or `None` on or past the last page.
#[must_use]
pub fn next_page(current: u64, total_page: u64) -> Option<u64> {
    (current + 1 < total_page).then_some(current + 1)
}

/// Async operations driving the students slice.
pub struct StudentThunks<G> {
    gateway: G,
    sequence: RequestSequence,
}

impl<G: StudentGateway> StudentThunks<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            sequence: RequestSequence::new(),
        }
    }

    pub async fn create(
        &self,
        dispatch: impl Fn(StudentAction),
        form: StudentForm,
    ) -> Result<Student, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(StudentAction::Pending);
        let outcome = self.gateway.create(&form).await;
        if ticket.is_current() {
            dispatch(StudentAction::CreateFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn list(
        &self,
        dispatch: impl Fn(StudentAction),
        query: StudentQuery,
    ) -> Result<Paginated<Student>, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(StudentAction::Pending);
        let outcome = self.gateway.list(&query).await;
        if ticket.is_current() {
            dispatch(StudentAction::ListFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn get(
        &self,
        dispatch: impl Fn(StudentAction),
        id: StudentId,
    ) -> Result<Student, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(StudentAction::Pending);
        let outcome = self.gateway.get(id).await;
        if ticket.is_current() {
            dispatch(StudentAction::GetFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn update(
        &self,
        dispatch: impl Fn(StudentAction),
        id: StudentId,
        form: StudentForm,
    ) -> Result<Student, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(StudentAction::Pending);
        let outcome = self.gateway.update(id, &form).await;
        if ticket.is_current() {
            dispatch(StudentAction::UpdateFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn delete(
        &self,
        dispatch: impl Fn(StudentAction),
        id: StudentId,
    ) -> Result<Student, GatewayError> {
        let ticket = self.sequence.issue();
        dispatch(StudentAction::Pending);
        let outcome = self.gateway.delete(id).await;
        if ticket.is_current() {
            dispatch(StudentAction::DeleteFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::future::Future;

    use chrono::NaiveDate;
    use eduboard_domain::id::StudentId;
    use eduboard_domain::page::Paginated;
    use eduboard_domain::student::{Gender, Student, StudentForm, StudentQuery};

    use super::{
        StudentAction, StudentState, StudentThunks, next_page, previous_page, reduce,
    };
    use crate::gateway::{GatewayError, StudentGateway};

    fn sample_student(name: &str) -> Student {
        Student {
            id: StudentId::new(),
            name: name.to_string(),
            gender: Gender::Male,
            place_of_birth: "Manado".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2002, 1, 17).unwrap(),
            address: "Jl. Sam Ratulangi No. 12".to_string(),
            phone_number: "081234567890".to_string(),
            email: "budi@example.com".to_string(),
            last_education: "SMA".to_string(),
            school_name: "SMA Negeri 1 Manado".to_string(),
            graduation_year: 2020,
            certificate: "Ijazah".to_string(),
            nik: "1234567890123456".to_string(),
            religion: "Islam".to_string(),
            training_location: "Manado".to_string(),
        }
    }

    fn budi_form() -> StudentForm {
        StudentForm::from_student(&sample_student("Budi"))
    }

    fn page_of(names: &[&str], page: u64) -> Paginated<Student> {
        Paginated {
            result: names.iter().map(|name| sample_student(name)).collect(),
            total_rows: 37,
            total_page: 4,
            page,
            limit: 10,
        }
    }

    struct FakeStudentGateway {
        forms: RefCell<Vec<StudentForm>>,
        queries: RefCell<Vec<StudentQuery>>,
        page: Paginated<Student>,
    }

    impl FakeStudentGateway {
        fn with_page(page: Paginated<Student>) -> Self {
            Self {
                forms: RefCell::new(Vec::new()),
                queries: RefCell::new(Vec::new()),
                page,
            }
        }
    }

    impl StudentGateway for FakeStudentGateway {
        fn create(
            &self,
            form: &StudentForm,
        ) -> impl Future<Output = Result<Student, GatewayError>> {
            self.forms.borrow_mut().push(form.clone());
            let created = sample_student(&form.name);
            async move { Ok(created) }
        }

        fn list(
            &self,
            query: &StudentQuery,
        ) -> impl Future<Output = Result<Paginated<Student>, GatewayError>> {
            self.queries.borrow_mut().push(query.clone());
            let page = self.page.clone();
            async move { Ok(page) }
        }

        fn get(&self, _id: StudentId) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Ok(sample_student("Budi")) }
        }

        fn update(
            &self,
            _id: StudentId,
            form: &StudentForm,
        ) -> impl Future<Output = Result<Student, GatewayError>> {
            self.forms.borrow_mut().push(form.clone());
            let updated = sample_student(&form.name);
            async move { Ok(updated) }
        }

        fn delete(&self, _id: StudentId) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Ok(sample_student("Budi")) }
        }
    }

    /// Holds the first list response behind a oneshot gate so a later
    /// request can overtake it.
    struct GatedListGateway {
        calls: RefCell<u32>,
        gate: RefCell<Option<tokio::sync::oneshot::Receiver<()>>>,
        first: Paginated<Student>,
        second: Paginated<Student>,
    }

    impl StudentGateway for GatedListGateway {
        fn create(
            &self,
            _form: &StudentForm,
        ) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Err(GatewayError::new("unexpected call")) }
        }

        fn list(
            &self,
            _query: &StudentQuery,
        ) -> impl Future<Output = Result<Paginated<Student>, GatewayError>> {
            let call = {
                let mut calls = self.calls.borrow_mut();
                *calls += 1;
                *calls
            };
            let gate = if call == 1 {
                self.gate.borrow_mut().take()
            } else {
                None
            };
            let page = if call == 1 {
                self.first.clone()
            } else {
                self.second.clone()
            };
            async move {
                if let Some(gate) = gate {
                    gate.await.ok();
                }
                Ok(page)
            }
        }

        fn get(&self, _id: StudentId) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Err(GatewayError::new("unexpected call")) }
        }

        fn update(
            &self,
            _id: StudentId,
            _form: &StudentForm,
        ) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Err(GatewayError::new("unexpected call")) }
        }

        fn delete(&self, _id: StudentId) -> impl Future<Output = Result<Student, GatewayError>> {
            async { Err(GatewayError::new("unexpected call")) }
        }
    }

    #[test]
    fn should_keep_message_while_pending() {
        let state = StudentState {
            message: "Berhasil".to_string(),
            ..StudentState::default()
        };

        let state = reduce(state, StudentAction::Pending);
        assert!(state.is_loading);
        assert_eq!(state.message, "Berhasil");
    }

    #[test]
    fn should_merge_pagination_metadata_verbatim() {
        let page = Paginated {
            result: vec![sample_student("Budi")],
            total_rows: 91,
            total_page: 10,
            page: 3,
            limit: 9,
        };

        let state = reduce(StudentState::default(), StudentAction::ListFinished(Ok(page)));
        assert_eq!(state.students.map(|students| students.len()), Some(1));
        assert_eq!(state.total_rows, 91);
        assert_eq!(state.total_page, 10);
        assert_eq!(state.page, 3);
        assert_eq!(state.limit, 9);
    }

    #[test]
    fn should_clear_rows_but_keep_metadata_when_list_fails() {
        let seeded = reduce(
            StudentState::default(),
            StudentAction::ListFinished(Ok(page_of(&["Budi", "Sari"], 2))),
        );

        let state = reduce(
            seeded,
            StudentAction::ListFinished(Err("server down".to_string())),
        );
        assert_eq!(state.students, None);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_rows, 37);
        assert_eq!(state.message, "server down");
    }

    #[test]
    fn should_report_berhasil_without_touching_slots_on_create() {
        let state = StudentState {
            student: Some(sample_student("Sari")),
            ..StudentState::default()
        };

        let state = reduce(
            state,
            StudentAction::CreateFinished(Ok(sample_student("Budi"))),
        );
        assert_eq!(state.message, "Berhasil");
        assert_eq!(state.student.map(|student| student.name), Some("Sari".to_string()));
    }

    #[test]
    fn should_clear_student_when_operation_is_rejected() {
        for action in [
            StudentAction::CreateFinished(Err("nope".to_string())),
            StudentAction::GetFinished(Err("nope".to_string())),
            StudentAction::UpdateFinished(Err("nope".to_string())),
            StudentAction::DeleteFinished(Err("nope".to_string())),
        ] {
            let state = StudentState {
                student: Some(sample_student("Budi")),
                ..StudentState::default()
            };

            let state = reduce(state, action);
            assert_eq!(state.student, None);
            assert_eq!(state.message, "nope");
        }
    }

    #[test]
    fn should_only_raise_flag_on_successful_update() {
        let state = StudentState {
            student: Some(sample_student("Budi")),
            message: "previous".to_string(),
            ..StudentState::default()
        };

        let state = reduce(
            state,
            StudentAction::UpdateFinished(Ok(sample_student("Renamed"))),
        );
        assert!(state.is_success);
        assert_eq!(state.message, "previous");
        assert_eq!(state.student.map(|student| student.name), Some("Budi".to_string()));
    }

    #[test]
    fn should_store_deleted_student_from_payload() {
        let deleted = sample_student("Budi");
        let state = reduce(
            StudentState::default(),
            StudentAction::DeleteFinished(Ok(deleted.clone())),
        );
        assert_eq!(state.student, Some(deleted));
    }

    #[test]
    fn should_set_exactly_one_flag_after_terminal_action() {
        let fulfilled = reduce(
            StudentState::default(),
            StudentAction::GetFinished(Ok(sample_student("Budi"))),
        );
        assert!(fulfilled.is_success && !fulfilled.is_error);

        let rejected = reduce(
            StudentState::default(),
            StudentAction::GetFinished(Err("missing".to_string())),
        );
        assert!(rejected.is_error && !rejected.is_success);
    }

    #[test]
    fn should_guard_pagination_edges() {
        assert_eq!(previous_page(0), None);
        assert_eq!(previous_page(3), Some(2));
        assert_eq!(next_page(0, 4), Some(1));
        assert_eq!(next_page(3, 4), None);
        assert_eq!(next_page(0, 0), None);
    }

    #[tokio::test]
    async fn should_round_trip_create_through_gateway_and_reducer() {
        let thunks = StudentThunks::new(FakeStudentGateway::with_page(page_of(&[], 0)));
        let actions = RefCell::new(Vec::new());

        let form = budi_form();
        let outcome = thunks
            .create(|action| actions.borrow_mut().push(action), form.clone())
            .await;
        assert_eq!(outcome.map(|student| student.name), Ok("Budi".to_string()));
        assert_eq!(thunks.gateway.forms.into_inner(), vec![form]);

        let state = actions
            .into_inner()
            .into_iter()
            .fold(StudentState::default(), reduce);
        assert!(state.is_success && !state.is_error);
        assert_eq!(state.message, "Berhasil");
    }

    #[tokio::test]
    async fn should_forward_first_page_query_when_searching() {
        let thunks = StudentThunks::new(FakeStudentGateway::with_page(page_of(&["Budi"], 0)));
        let actions = RefCell::new(Vec::new());

        let query = StudentQuery {
            search: "budi".to_string(),
            ..StudentQuery::default()
        };
        thunks
            .list(|action| actions.borrow_mut().push(action), query)
            .await
            .unwrap();

        assert_eq!(
            thunks.gateway.queries.into_inner(),
            vec![StudentQuery {
                page: 0,
                limit: 10,
                search: "budi".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn should_drop_stale_list_response_when_superseded() {
        let (release_first, gate) = tokio::sync::oneshot::channel();
        let second = page_of(&["Sari"], 1);
        let thunks = StudentThunks::new(GatedListGateway {
            calls: RefCell::new(0),
            gate: RefCell::new(Some(gate)),
            first: page_of(&["Budi"], 0),
            second: second.clone(),
        });
        let actions = RefCell::new(Vec::new());
        let dispatch = |action| actions.borrow_mut().push(action);

        let stale = thunks.list(&dispatch, StudentQuery::default());
        let fresh = async {
            let outcome = thunks
                .list(
                    &dispatch,
                    StudentQuery {
                        page: 1,
                        ..StudentQuery::default()
                    },
                )
                .await;
            // Only now let the overtaken response land.
            release_first.send(()).ok();
            outcome
        };
        let (stale_outcome, fresh_outcome) = tokio::join!(stale, fresh);
        assert!(stale_outcome.is_ok());
        assert!(fresh_outcome.is_ok());

        let recorded = actions.into_inner();
        assert_eq!(
            recorded,
            vec![
                StudentAction::Pending,
                StudentAction::Pending,
                StudentAction::ListFinished(Ok(second)),
            ]
        );

        let state = recorded.into_iter().fold(StudentState::default(), reduce);
        assert!(!state.is_loading);
        assert_eq!(state.page, 1);
        assert_eq!(
            state.students.map(|students| students[0].name.clone()),
            Some("Sari".to_string())
        );
    }
}
