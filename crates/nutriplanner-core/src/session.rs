//! Per-session state: the append-only history and the current planning mode.

use jiff::Timestamp;

use crate::models::{HistoryEntry, PlanRequest, PlanResponse, PlanningMode};

/// State owned by one interactive session.
///
/// Created when the session starts and dropped when it ends; nothing is
/// persisted. History only grows, and only through [`SessionState::record`],
/// which the submission handler calls after a successful generation.
#[derive(Debug, Default)]
pub struct SessionState {
    history: Vec<HistoryEntry>,
    mode: PlanningMode,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current planning mode.
    pub fn mode(&self) -> PlanningMode {
        self.mode
    }

    /// Switches the planning mode.
    pub fn set_mode(&mut self, mode: PlanningMode) {
        self.mode = mode;
    }

    /// Entries in submission order.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Entries newest first.
    pub fn latest_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Appends a completed interaction and returns the stored entry.
    pub(crate) fn record(&mut self, request: PlanRequest, response: PlanResponse) -> &HistoryEntry {
        let entry = HistoryEntry {
            number: self.history.len() + 1,
            request,
            response,
            created_at: Timestamp::now(),
        };
        self.history.push(entry);
        &self.history[self.history.len() - 1]
    }
}
