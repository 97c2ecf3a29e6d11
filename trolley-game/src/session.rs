//! Scenario sequencing and result aggregation for a single run.
//!
//! A [`Session`] walks its catalog exactly once, in order. Each scenario goes
//! through two steps: [`Session::decide`] resolves the user's choice and folds
//! it into the totals, then [`Session::complete_scenario`] attaches the
//! optional discomfort rating and moves on.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::LOG_TARGET_SESSION;
use crate::data::{Scenario, ScenarioCatalog};
use crate::decision::{Decision, DecisionRecord, resolve};
use crate::discomfort::{DiscomfortEntry, DiscomfortLog, Rating};
use crate::stats::SessionStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("every scenario has already been played")]
    Finished,
    #[error("a decision was already made for the current scenario")]
    AlreadyDecided,
    #[error("the current scenario has no decision yet")]
    AwaitingDecision,
}

/// End-of-run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub stats: SessionStats,
    pub decisions: Vec<DecisionRecord>,
    pub most_uncomfortable: Option<DiscomfortEntry>,
}

#[derive(Debug, Clone)]
pub struct Session {
    catalog: ScenarioCatalog,
    cursor: usize,
    pending: Option<DecisionRecord>,
    stats: SessionStats,
    decisions: Vec<DecisionRecord>,
    discomfort: DiscomfortLog,
}

impl Session {
    #[must_use]
    pub fn new(catalog: ScenarioCatalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            pending: None,
            stats: SessionStats::default(),
            decisions: Vec::new(),
            discomfort: DiscomfortLog::new(),
        }
    }

    /// Scenario awaiting a decision or rating, `None` once the run is over.
    #[must_use]
    pub fn current(&self) -> Option<&Scenario> {
        self.catalog.scenarios().get(self.cursor)
    }

    /// Zero-based position of the current scenario and the catalog length.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.catalog.len())
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current().is_none()
    }

    /// Resolve `decision` against the current scenario and add it to the totals.
    ///
    /// # Errors
    ///
    /// Fails if the run is over or the current scenario was already decided.
    pub fn decide(&mut self, decision: Decision) -> Result<&DecisionRecord, SessionError> {
        if self.pending.is_some() {
            return Err(SessionError::AlreadyDecided);
        }
        let scenario = self.current().ok_or(SessionError::Finished)?;
        let record = resolve(scenario, decision);
        self.stats.apply(&record);
        Ok(&*self.pending.insert(record))
    }

    /// Close the current scenario, logging `rating` when one was given.
    ///
    /// # Errors
    ///
    /// Fails if the run is over or no decision was made yet.
    pub fn complete_scenario(&mut self, rating: Option<Rating>) -> Result<(), SessionError> {
        if self.is_finished() {
            return Err(SessionError::Finished);
        }
        let mut record = self.pending.take().ok_or(SessionError::AwaitingDecision)?;
        record.discomfort = rating;
        if let Some(rating) = rating {
            self.discomfort.record(record.scenario_name.clone(), rating);
        }
        self.decisions.push(record);
        self.cursor += 1;
        if self.is_finished() {
            log::info!(
                target: LOG_TARGET_SESSION,
                "session complete: saved {}, killed {}",
                self.stats.saved,
                self.stats.killed
            );
        }
        Ok(())
    }

    #[must_use]
    pub const fn stats(&self) -> SessionStats {
        self.stats
    }

    #[must_use]
    pub fn discomfort(&self) -> &DiscomfortLog {
        &self.discomfort
    }

    #[must_use]
    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }

    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            stats: self.stats,
            decisions: self.decisions.clone(),
            most_uncomfortable: self.discomfort.most_uncomfortable().cloned(),
        }
    }
}
