//! Session history view.

use std::fmt;

use crate::models::HistoryEntry;

/// Heading of the history view.
pub const HISTORY_HEADING: &str = "📜 Histórico de Cardápios Gerados";

/// Shown when nothing has been generated yet.
pub const EMPTY_HISTORY: &str = "Nenhum cardápio gerado nesta sessão ainda.";

/// Newtype wrapper displaying session history newest first.
///
/// Holds the entries in submission order, as returned by
/// [`crate::SessionState::history`].
///
/// # Examples
///
/// ```rust
/// use nutriplanner_core::display::SessionHistory;
/// use nutriplanner_core::SessionState;
///
/// let session = SessionState::new();
/// let output = SessionHistory(session.history()).to_string();
/// assert!(output.contains("Nenhum cardápio gerado nesta sessão ainda."));
/// ```
pub struct SessionHistory<'a>(pub &'a [HistoryEntry]);

impl SessionHistory<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for SessionHistory<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {HISTORY_HEADING}")?;
        writeln!(f)?;

        if self.is_empty() {
            return writeln!(f, "_{EMPTY_HISTORY}_");
        }

        for (i, entry) in self.0.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "---")?;
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
