use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::LOG_TARGET_CATALOG;

const DEFAULT_SCENARIO_DATA: &str = include_str!("../assets/scenarios.json");

/// Moral framing of a scenario; selects the deontology commentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioKind {
    #[serde(rename = "switch")]
    Switch,
    #[serde(rename = "footbridge")]
    Footbridge,
    #[serde(rename = "self-driving")]
    SelfDriving,
    #[serde(rename = "equal-1v1")]
    EqualOneVsOne,
}

impl ScenarioKind {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Switch => "switch",
            Self::Footbridge => "footbridge",
            Self::SelfDriving => "self-driving",
            Self::EqualOneVsOne => "equal-1v1",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One trolley-problem vignette with its two fixed outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub saved_if_pull: u32,
    pub killed_if_pull: u32,
    pub saved_if_stay: u32,
    pub killed_if_stay: u32,
    #[serde(rename = "type")]
    pub kind: ScenarioKind,
}

/// Errors raised when scenario data cannot be turned into a usable catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("scenario data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("scenario catalog is empty")]
    Empty,
    #[error("scenario name {name:?} appears more than once")]
    DuplicateName { name: String },
}

/// Ordered, immutable collection of scenarios traversed once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScenarioCatalog {
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Parse and validate a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed, lists no scenarios, or
    /// repeats a scenario name.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        log::debug!(
            target: LOG_TARGET_CATALOG,
            "loaded {} scenarios",
            catalog.scenarios.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from pre-parsed scenarios.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the list is empty or repeats a scenario name.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> Result<Self, CatalogError> {
        let catalog = Self { scenarios };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load the catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the embedded asset fails validation.
    pub fn load_from_static() -> Result<Self, CatalogError> {
        Self::from_json(DEFAULT_SCENARIO_DATA)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.scenarios.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for scenario in &self.scenarios {
            if !seen.insert(scenario.name.as_str()) {
                return Err(CatalogError::DuplicateName {
                    name: scenario.name.clone(),
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScenarioCatalog {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_lists_four_scenarios_in_order() {
        let catalog = ScenarioCatalog::load_from_static().unwrap();
        let kinds: Vec<ScenarioKind> = catalog.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScenarioKind::Switch,
                ScenarioKind::Footbridge,
                ScenarioKind::SelfDriving,
                ScenarioKind::EqualOneVsOne,
            ]
        );
        assert_eq!(catalog.scenarios()[0].name, "Classic Switch");
    }

    #[test]
    fn kind_uses_hyphenated_wire_names() {
        let kind: ScenarioKind = serde_json::from_str("\"equal-1v1\"").unwrap();
        assert_eq!(kind, ScenarioKind::EqualOneVsOne);
        assert_eq!(
            serde_json::to_string(&ScenarioKind::SelfDriving).unwrap(),
            "\"self-driving\""
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = ScenarioCatalog::from_json(r#"{"scenarios": []}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_names() {
        let scenario = Scenario {
            name: "Twice".to_string(),
            description: String::new(),
            saved_if_pull: 1,
            killed_if_pull: 0,
            saved_if_stay: 0,
            killed_if_stay: 1,
            kind: ScenarioKind::Switch,
        };
        let err = ScenarioCatalog::from_scenarios(vec![scenario.clone(), scenario]).unwrap_err();
        assert!(err.to_string().contains("Twice"));
    }

    #[test]
    fn rejects_unknown_kind() {
        let json = r#"{"scenarios": [{
            "name": "Loop",
            "description": "",
            "saved_if_pull": 1,
            "killed_if_pull": 1,
            "saved_if_stay": 0,
            "killed_if_stay": 1,
            "type": "loop"
        }]}"#;
        assert!(matches!(
            ScenarioCatalog::from_json(json),
            Err(CatalogError::Malformed(_))
        ));
    }
}
