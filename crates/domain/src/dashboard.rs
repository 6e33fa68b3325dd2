//! Aggregate tallies shown on the dashboard landing page.

use serde::{Deserialize, Serialize};

/// Student head count split by gender, as returned by
/// `GET /dashboard/count-by-gender`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderTally {
    pub male: u64,
    pub female: u64,
}
