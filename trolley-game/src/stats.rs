use serde::{Deserialize, Serialize};

use crate::decision::DecisionRecord;

/// Running totals of lives saved and lost across a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub saved: u32,
    pub killed: u32,
}

impl SessionStats {
    pub fn apply(&mut self, record: &DecisionRecord) {
        self.saved = self.saved.saturating_add(record.saved);
        self.killed = self.killed.saturating_add(record.killed);
    }
}
