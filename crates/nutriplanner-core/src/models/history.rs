//! Session history entry model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlanRequest, PlanResponse};

/// One successful submission, recorded immutably in the session history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// 1-based position in the session
    pub number: usize,

    /// Preferences that were submitted
    pub request: PlanRequest,

    /// Partitioned reply
    pub response: PlanResponse,

    /// When the reply was received (UTC)
    pub created_at: Timestamp,
}
