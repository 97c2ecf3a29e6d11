//! Philosophical commentary keyed to a scenario's outcome
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::ScenarioKind;

/// How the outcome looks to a pure act utilitarian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilitarianVerdict {
    MoreSaved,
    Even,
    FewerSaved,
}

impl UtilitarianVerdict {
    #[must_use]
    pub fn from_totals(saved: u32, killed: u32) -> Self {
        match saved.cmp(&killed) {
            Ordering::Greater => Self::MoreSaved,
            Ordering::Equal => Self::Even,
            Ordering::Less => Self::FewerSaved,
        }
    }
}

/// The three commentary sections shown after a decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: UtilitarianVerdict,
    pub utilitarian: Vec<String>,
    pub deontology: Vec<String>,
    pub double_effect: Vec<String>,
}

pub const UTILITARIAN_HEADING: &str = "• ACT UTILITARIANISM:";
pub const DEONTOLOGY_HEADING: &str = "• DEONTOLOGY (Kant / Thomson):";
pub const DOUBLE_EFFECT_HEADING: &str = "• MORAL INTUITION / DOCTRINE OF DOUBLE EFFECT:";

/// Build the commentary for an outcome of a scenario of the given kind.
#[must_use]
pub fn evaluate(kind: ScenarioKind, saved: u32, killed: u32) -> Evaluation {
    let verdict = UtilitarianVerdict::from_totals(saved, killed);
    Evaluation {
        verdict,
        utilitarian: utilitarian_lines(verdict, saved, killed),
        deontology: vec![deontology_line(kind).to_string()],
        double_effect: vec![
            "  We judge differently when harm is intended (as a means) versus merely foreseen (side-effect)."
                .to_string(),
        ],
    }
}

fn utilitarian_lines(verdict: UtilitarianVerdict, saved: u32, killed: u32) -> Vec<String> {
    match verdict {
        UtilitarianVerdict::MoreSaved => vec![
            format!("  This maximizes total lives saved ({saved} vs {killed})."),
            "  Classical utilitarianism would call this morally right because the sum is higher."
                .to_string(),
        ],
        UtilitarianVerdict::Even => vec![
            "  Totals are equal here, so utilitarianism is indifferent on numbers alone."
                .to_string(),
            "  This highlights why intention/agency can tip our judgment beyond totals."
                .to_string(),
        ],
        UtilitarianVerdict::FewerSaved => vec![
            "  Fewer lives are saved; utilitarianism would likely reject this action.".to_string(),
        ],
    }
}

const fn deontology_line(kind: ScenarioKind) -> &'static str {
    match kind {
        ScenarioKind::Footbridge => {
            "  Pushing uses a person as a means, which deontological ethics forbids—even to save more."
        }
        ScenarioKind::Switch => {
            "  Switching is often seen as redirecting harm (not using a person as a tool), so it is sometimes permitted."
        }
        ScenarioKind::SelfDriving => {
            "  Questions include whether the passenger is used as a means and whether harm is directly caused by swerving."
        }
        ScenarioKind::EqualOneVsOne => {
            "  With equal totals, intention and agency loom large: causing harm vs. allowing harm."
        }
    }
}
