//! Trolley Problem Engine
//!
//! Platform-agnostic core logic for the trolley problem moral simulator.
//! This crate provides the scenario catalog, decision resolution, commentary
//! selection and session aggregation without any console or platform
//! dependencies.

pub mod constants;
pub mod data;
pub mod decision;
pub mod discomfort;
pub mod evaluation;
pub mod pacing;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use data::{CatalogError, Scenario, ScenarioCatalog, ScenarioKind};
pub use decision::{Decision, DecisionRecord, resolve};
pub use discomfort::{DiscomfortEntry, DiscomfortLog, Rating, RatingError, parse_rating_input};
pub use evaluation::{Evaluation, UtilitarianVerdict, evaluate};
pub use pacing::TextSpeed;
pub use session::{Session, SessionError, SessionSummary};
pub use stats::SessionStats;

/// Trait for abstracting where scenario data comes from
/// Front ends should provide this or use [`EmbeddedData`]
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the scenario catalog from the loader's source
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario data cannot be loaded or validated.
    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error>;
}

/// Loader backed by the catalog compiled into this crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedData;

impl DataLoader for EmbeddedData {
    type Error = CatalogError;

    fn load_catalog(&self) -> Result<ScenarioCatalog, Self::Error> {
        ScenarioCatalog::load_from_static()
    }
}

/// Start a fresh session from the loader's catalog.
///
/// # Errors
///
/// Returns the loader's error if the catalog cannot be loaded.
pub fn start_session<L: DataLoader>(loader: &L) -> Result<Session, L::Error> {
    loader.load_catalog().map(Session::new)
}
