//! Binary decisions and their resolved outcomes
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::LOG_TARGET_SESSION;
use crate::data::Scenario;
use crate::discomfort::Rating;

/// The user's choice for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    /// Pull the lever, push, or swerve.
    Intervene,
    /// Let events occur.
    Abstain,
}

impl Decision {
    /// Map a trimmed menu entry to a decision; only "1" and "2" are valid.
    #[must_use]
    pub fn from_menu_key(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Intervene),
            "2" => Some(Self::Abstain),
            _ => None,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Intervene => f.write_str("intervene"),
            Self::Abstain => f.write_str("abstain"),
        }
    }
}

/// Outcome of one decision. Lives only for the duration of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub scenario_name: String,
    pub decision: Decision,
    pub saved: u32,
    pub killed: u32,
    /// Filled in when the scenario is completed with a rating.
    #[serde(default)]
    pub discomfort: Option<Rating>,
}

/// Select the saved/killed branch of `scenario` for `decision`.
#[must_use]
pub fn resolve(scenario: &Scenario, decision: Decision) -> DecisionRecord {
    let (saved, killed) = match decision {
        Decision::Intervene => (scenario.saved_if_pull, scenario.killed_if_pull),
        Decision::Abstain => (scenario.saved_if_stay, scenario.killed_if_stay),
    };
    log::debug!(
        target: LOG_TARGET_SESSION,
        "{} | {decision} -> saved {saved}, killed {killed}",
        scenario.name
    );
    DecisionRecord {
        scenario_name: scenario.name.clone(),
        decision,
        saved,
        killed,
        discomfort: None,
    }
}
