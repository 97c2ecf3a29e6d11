//! Centralized tuning constants for the simulator.
//!
//! Pacing values and rating bounds live here so the interactive layer and the
//! logic layer agree on them without reaching into each other's modules.

// Text pacing ---------------------------------------------------------------
pub(crate) const CINEMATIC_DELAY_MS: u64 = 40;
pub(crate) const STANDARD_DELAY_MS: u64 = 20;
pub(crate) const INSTANT_DELAY_MS: u64 = 0;

/// Pause after the intro banner before the first scenario.
pub const INTRO_PAUSE_MS: u64 = 600;

// Discomfort ratings ---------------------------------------------------------
pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

// Logging targets -------------------------------------------------------------
pub(crate) const LOG_TARGET_CATALOG: &str = "trolley::catalog";
pub(crate) const LOG_TARGET_SESSION: &str = "trolley::session";
