//! # Fixture Source
//!
//! Serves roster records parsed from a JSON document. The default document
//! ships with the binary (`assets/catalog.json`); a different file can be
//! supplied through config.
//!
//! ```json
//! {
//!   "athletes":   [{ "id": "1", "number": "10", "name": "...", "position": "..." }],
//!   "games":      [{ "id": "g1", "name": "...", "date": "2024-03-02" }],
//!   "attributes": { "1": [{ "label": "Height", "primary": "6'6\"", "secondary": "198 cm" }] },
//!   "injuries":   { "1": [{ "type": "Ankle Injuries", "incidents": 0 }] }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use async_trait::async_trait;
use log::{debug, info};
use serde::Deserialize;

use super::source::{DataError, DataSource};
use crate::core::catalog::{Athlete, AttributeEntry, EntityId, Game, InjuryEntry};

const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

#[derive(Debug, Default, Deserialize)]
struct Fixture {
    #[serde(default)]
    athletes: Vec<Athlete>,
    #[serde(default)]
    games: Vec<Game>,
    #[serde(default)]
    attributes: HashMap<String, Vec<AttributeEntry>>,
    #[serde(default)]
    injuries: HashMap<String, Vec<InjuryEntry>>,
}

pub struct FixtureSource {
    name: String,
    fixture: Fixture,
}

impl FixtureSource {
    /// The roster compiled into the binary.
    pub fn bundled() -> Result<Self, DataError> {
        Self::from_json("bundled", BUNDLED_CATALOG)
    }

    pub fn from_path(path: &Path) -> Result<Self, DataError> {
        let contents = fs::read_to_string(path)?;
        info!("Read catalog fixture from {}", path.display());
        Self::from_json(&path.display().to_string(), &contents)
    }

    pub fn from_json(name: &str, json: &str) -> Result<Self, DataError> {
        let fixture: Fixture = serde_json::from_str(json)?;
        debug!(
            "Fixture {}: {} athletes, {} games",
            name,
            fixture.athletes.len(),
            fixture.games.len()
        );
        Ok(Self {
            name: name.to_string(),
            fixture,
        })
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, DataError> {
        Ok(self.fixture.athletes.clone())
    }

    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        Ok(self.fixture.games.clone())
    }

    async fn athlete_attributes(&self, athlete: &EntityId) -> Result<Vec<AttributeEntry>, DataError> {
        Ok(self
            .fixture
            .attributes
            .get(athlete.as_str())
            .cloned()
            .unwrap_or_default())
    }

    async fn athlete_injuries(&self, athlete: &EntityId) -> Result<Vec<InjuryEntry>, DataError> {
        Ok(self
            .fixture
            .injuries
            .get(athlete.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

/// Stands in when no usable source could be built; every call fails with the
/// original reason so the UI shows "load failed" instead of an empty roster.
pub struct UnavailableSource {
    reason: String,
}

impl UnavailableSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail<T>(&self) -> Result<T, DataError> {
        Err(DataError::Unavailable(self.reason.clone()))
    }
}

#[async_trait]
impl DataSource for UnavailableSource {
    fn name(&self) -> &str {
        "unavailable"
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, DataError> {
        self.fail()
    }

    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        self.fail()
    }

    async fn athlete_attributes(&self, _athlete: &EntityId) -> Result<Vec<AttributeEntry>, DataError> {
        self.fail()
    }

    async fn athlete_injuries(&self, _athlete: &EntityId) -> Result<Vec<InjuryEntry>, DataError> {
        self.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::id;

    #[tokio::test]
    async fn test_bundled_fixture_has_roster() {
        let source = FixtureSource::bundled().unwrap();
        let athletes = source.list_athletes().await.unwrap();
        assert_eq!(athletes.len(), 8);
        assert_eq!(athletes[0].name, "John Smith");
        assert!(!source.list_games().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bundled_fixture_details() {
        let source = FixtureSource::bundled().unwrap();
        let attrs = source.athlete_attributes(&id("1")).await.unwrap();
        assert_eq!(attrs[0].label, "Height");
        let injuries = source.athlete_injuries(&id("2")).await.unwrap();
        assert_eq!(injuries.len(), 5);
    }

    #[tokio::test]
    async fn test_missing_details_are_empty() {
        let source = FixtureSource::bundled().unwrap();
        assert!(source.athlete_attributes(&id("8")).await.unwrap().is_empty());
        assert!(source.athlete_injuries(&id("999")).await.unwrap().is_empty());
    }

    #[test]
    fn test_sparse_fixture_parses() {
        let source = FixtureSource::from_json(
            "sparse",
            r#"{ "athletes": [{ "id": "9", "number": "3", "name": "Sam Cole", "position": "Defender" }] }"#,
        )
        .unwrap();
        assert_eq!(source.fixture.athletes.len(), 1);
        assert!(source.fixture.games.is_empty());
        assert_eq!(source.name(), "sparse");
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let result = FixtureSource::from_json(
            "bad",
            r#"{ "athletes": [{ "id": "", "number": "3", "name": "Sam Cole", "position": "Defender" }] }"#,
        );
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_id_with_slash_is_rejected() {
        let result = FixtureSource::from_json(
            "bad",
            r#"{ "athletes": [{ "id": "a/b", "number": "3", "name": "Sam Cole", "position": "Defender" }] }"#,
        );
        match result {
            Err(DataError::Parse(msg)) => assert!(msg.contains("'/'")),
            other => panic!("expected parse error, got {:?}", other.map(|s| s.name)),
        }
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = FixtureSource::from_json(
            "bad",
            r#"{ "games": [{ "id": "g1", "name": "Opener", "date": "March 2nd" }] }"#,
        );
        assert!(matches!(result, Err(DataError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = FixtureSource::from_path(Path::new("/nonexistent/sideline/catalog.json"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[tokio::test]
    async fn test_unavailable_source_always_fails() {
        let source = UnavailableSource::new("no catalog");
        match source.list_athletes().await {
            Err(DataError::Unavailable(reason)) => assert_eq!(reason, "no catalog"),
            other => panic!("expected unavailable, got {other:?}"),
        }
        assert!(source.athlete_injuries(&id("1")).await.is_err());
    }
}
