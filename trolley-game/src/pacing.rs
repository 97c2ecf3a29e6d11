//! Text pacing presets
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CINEMATIC_DELAY_MS, INSTANT_DELAY_MS, STANDARD_DELAY_MS};

/// Per-character delay used when rendering narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSpeed {
    Cinematic,
    #[default]
    Standard,
    Instant,
}

impl TextSpeed {
    /// Presets in menu order.
    pub const ALL: [Self; 3] = [Self::Cinematic, Self::Standard, Self::Instant];

    #[must_use]
    pub const fn delay(self) -> Duration {
        Duration::from_millis(match self {
            Self::Cinematic => CINEMATIC_DELAY_MS,
            Self::Standard => STANDARD_DELAY_MS,
            Self::Instant => INSTANT_DELAY_MS,
        })
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cinematic => "cinematic",
            Self::Standard => "standard",
            Self::Instant => "instant",
        }
    }

    #[must_use]
    pub const fn menu_key(self) -> &'static str {
        match self {
            Self::Cinematic => "1",
            Self::Standard => "2",
            Self::Instant => "3",
        }
    }

    #[must_use]
    pub fn from_menu_key(input: &str) -> Option<Self> {
        let key = input.trim();
        Self::ALL.into_iter().find(|speed| speed.menu_key() == key)
    }

    #[must_use]
    pub const fn is_instant(self) -> bool {
        matches!(self, Self::Instant)
    }
}

impl fmt::Display for TextSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
