//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::core::catalog::{
    Athlete, AttributeEntry, Catalog, EntityId, Game, InjuryEntry,
};
use crate::core::navigation::HistoryRouter;
use crate::core::route::Route;
use crate::core::state::{App, LoadState};
use crate::data::{DataError, DataSource, FixtureSource};

pub fn id(raw: &str) -> EntityId {
    EntityId::new(raw).unwrap()
}

pub fn route(path: &str) -> Route {
    Route::parse(path).unwrap()
}

pub fn athlete(id_: &str, number: &str, name: &str, position: &str) -> Athlete {
    Athlete {
        id: id(id_),
        number: number.to_string(),
        name: name.to_string(),
        position: position.to_string(),
    }
}

pub fn game(id_: &str, name: &str, year: i32, month: u32, day: u32) -> Game {
    Game {
        id: id(id_),
        name: name.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
    }
}

fn attribute(label: &str, primary: &str, secondary: &str) -> AttributeEntry {
    AttributeEntry {
        label: label.to_string(),
        primary: primary.to_string(),
        secondary: secondary.to_string(),
    }
}

fn injury(kind: &str, incidents: u32) -> InjuryEntry {
    InjuryEntry {
        kind: kind.to_string(),
        incidents,
    }
}

/// The eight-player roster, three games, and details for athletes 1 and 2.
pub fn sample_catalog() -> Catalog {
    let athletes = [
        athlete("1", "10", "John Smith", "Forward"),
        athlete("2", "7", "Mike Johnson", "Midfielder"),
        athlete("3", "23", "David Wilson", "Defender"),
        athlete("4", "1", "Tom Brown", "Goalkeeper"),
        athlete("5", "9", "Alex Davis", "Forward"),
        athlete("6", "4", "Chris Miller", "Defender"),
        athlete("7", "8", "Ryan Taylor", "Midfielder"),
        athlete("8", "11", "Kevin Lee", "Forward"),
    ];
    let games = [
        game("g1", "Season Opener", 2024, 3, 2),
        game("g2", "City Derby", 2024, 4, 14),
        game("g3", "Cup Quarter Final", 2024, 5, 21),
    ];
    Catalog::new(athletes.into_iter().collect(), games.into_iter().collect())
        .with_attributes(
            id("1"),
            vec![
                attribute("Height", "6'6\"", "198 cm"),
                attribute("Weight", "212 lbs", "96 kg"),
                attribute("Wingspan", "6'11\"", "211 cm"),
            ],
        )
        .with_attributes(id("2"), vec![attribute("Height", "5'11\"", "180 cm")])
        .with_injuries(
            id("1"),
            vec![injury("Ankle Injuries", 0), injury("Leg Injuries", 2)],
        )
        .with_injuries(id("2"), vec![injury("Shoulder Injuries", 1)])
}

/// A source with nothing in it, for tests that never load.
pub struct NoopSource;

#[async_trait]
impl DataSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, DataError> {
        Ok(Vec::new())
    }

    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        Ok(Vec::new())
    }

    async fn athlete_attributes(&self, _athlete: &EntityId) -> Result<Vec<AttributeEntry>, DataError> {
        Ok(Vec::new())
    }

    async fn athlete_injuries(&self, _athlete: &EntityId) -> Result<Vec<InjuryEntry>, DataError> {
        Ok(Vec::new())
    }
}

/// The bundled roster, served after a delay on every call.
pub struct SlowSource {
    delay: Duration,
    inner: FixtureSource,
}

impl SlowSource {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: FixtureSource::bundled().unwrap(),
        }
    }
}

#[async_trait]
impl DataSource for SlowSource {
    fn name(&self) -> &str {
        "slow"
    }

    async fn list_athletes(&self) -> Result<Vec<Athlete>, DataError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_athletes().await
    }

    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        tokio::time::sleep(self.delay).await;
        self.inner.list_games().await
    }

    async fn athlete_attributes(&self, athlete: &EntityId) -> Result<Vec<AttributeEntry>, DataError> {
        self.inner.athlete_attributes(athlete).await
    }

    async fn athlete_injuries(&self, athlete: &EntityId) -> Result<Vec<InjuryEntry>, DataError> {
        self.inner.athlete_injuries(athlete).await
    }
}

/// Creates a test App at "/" with nothing loaded.
pub fn test_app() -> App {
    test_app_at("/")
}

pub fn test_app_at(path: &str) -> App {
    App::new(Arc::new(NoopSource), Box::new(HistoryRouter::new(route(path))))
}

/// A test App at `path` with `sample_catalog()` already loaded.
pub fn loaded_app_at(path: &str) -> App {
    let mut app = test_app_at(path);
    app.catalog = Arc::new(sample_catalog());
    app.load_state = LoadState::Ready;
    app
}
