//! Dashboard slice — aggregate head counts for the landing page.

use eduboard_domain::dashboard::GenderTally;

use crate::gateway::{DashboardGateway, FALLBACK_MESSAGE, GatewayError};
use crate::sequence::RequestSequence;

/// Head counts shown on the landing page cards and the gender breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StudentCounts {
    pub students: u64,
    pub males: u64,
    pub females: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub counts: StudentCounts,
    pub is_error: bool,
    pub is_success: bool,
    pub is_loading: bool,
    pub message: String,
}

/// Phase transitions of the dashboard slice. The two fetches write
/// disjoint fields of [`StudentCounts`] and may resolve in any order.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    Pending,
    CountStudentsFinished(Result<u64, String>),
    CountByGenderFinished(Result<GenderTally, String>),
}

/// Pure reducer for the dashboard slice.
#[must_use]
pub fn reduce(state: DashboardState, action: DashboardAction) -> DashboardState {
    match action {
        DashboardAction::Pending => DashboardState {
            is_loading: true,
            ..state
        },
        DashboardAction::CountStudentsFinished(Ok(total)) => DashboardState {
            is_loading: false,
            is_success: true,
            counts: StudentCounts {
                students: total,
                ..state.counts
            },
            ..state
        },
        DashboardAction::CountByGenderFinished(Ok(tally)) => DashboardState {
            is_loading: false,
            is_success: true,
            counts: StudentCounts {
                males: tally.male,
                females: tally.female,
                ..state.counts
            },
            ..state
        },
        DashboardAction::CountStudentsFinished(Err(message))
        | DashboardAction::CountByGenderFinished(Err(message)) => DashboardState {
            is_loading: false,
            is_error: true,
            message: if message.is_empty() {
                FALLBACK_MESSAGE.to_owned()
            } else {
                message
            },
            ..state
        },
    }
}

/// Async operations driving the dashboard slice.
///
/// The landing page fires both fetches at mount, so each endpoint guards
/// its own sequence; sharing one would let whichever request starts last
/// cancel the other's result.
pub struct DashboardThunks<G> {
    gateway: G,
    students_sequence: RequestSequence,
    gender_sequence: RequestSequence,
}

impl<G: DashboardGateway> DashboardThunks<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            students_sequence: RequestSequence::new(),
            gender_sequence: RequestSequence::new(),
        }
    }

    pub async fn count_students(
        &self,
        dispatch: impl Fn(DashboardAction),
    ) -> Result<u64, GatewayError> {
        let ticket = self.students_sequence.issue();
        dispatch(DashboardAction::Pending);
        let outcome = self.gateway.count_students().await;
        if ticket.is_current() {
            dispatch(DashboardAction::CountStudentsFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }

    pub async fn count_by_gender(
        &self,
        dispatch: impl Fn(DashboardAction),
    ) -> Result<GenderTally, GatewayError> {
        let ticket = self.gender_sequence.issue();
        dispatch(DashboardAction::Pending);
        let outcome = self.gateway.count_by_gender().await;
        if ticket.is_current() {
            dispatch(DashboardAction::CountByGenderFinished(
                outcome.clone().map_err(|error| error.message),
            ));
        }
        outcome
    }
}
