//! # Entity Catalog
//!
//! Typed, in-memory collections of the records the app presents: athletes,
//! games, and per-athlete attribute rows and injury categories.
//!
//! ```text
//! Catalog (immutable snapshot, shared as Arc<Catalog>)
//! ├── athletes: Collection<Athlete>              // keyed by EntityId
//! ├── games: Collection<Game>                    // keyed by EntityId
//! ├── attributes: HashMap<EntityId, Vec<AttributeRow>>
//! └── injuries: HashMap<EntityId, Vec<InjuryCategory>>
//! ```
//!
//! A snapshot is never mutated after assembly. A reload builds a new one and
//! the reducer swaps it in whole.

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque identifier of an athlete or game.
///
/// Never empty, no surrounding whitespace, no `/`: an id is always exactly
/// one route segment. Compared by value; carries no positional meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    Padded(String),
    Slash(String),
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::Empty => write!(f, "entity id must not be empty"),
            IdError::Padded(raw) => write!(f, "entity id has surrounding whitespace: {raw:?}"),
            IdError::Slash(raw) => write!(f, "entity id must not contain '/': {raw:?}"),
        }
    }
}

impl std::error::Error for IdError {}

impl EntityId {
    pub fn new(raw: impl Into<String>) -> Result<Self, IdError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(IdError::Empty);
        }
        if raw.trim() != raw {
            return Err(IdError::Padded(raw));
        }
        if raw.contains('/') {
            return Err(IdError::Slash(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EntityId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Synthetic identifier for rows the data source delivers without one
/// (attribute rows, injury categories). Assigned when the catalog is built,
/// stable for the life of that snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowId(Uuid);

impl RowId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Athlete {
    pub id: EntityId,
    /// Shirt number as displayed ("10", "07").
    pub number: String,
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: EntityId,
    pub name: String,
    pub date: NaiveDate,
}

impl Game {
    /// Date as shown in lists and matched by search, e.g. "2024-03-15".
    pub fn date_label(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// A measurement row as delivered by a data source (no identity yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeEntry {
    pub label: String,
    pub primary: String,
    pub secondary: String,
}

/// An injury category as delivered by a data source (no identity yet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryEntry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub incidents: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRow {
    pub id: RowId,
    pub label: String,
    pub primary: String,
    pub secondary: String,
}

impl From<AttributeEntry> for AttributeRow {
    fn from(entry: AttributeEntry) -> Self {
        Self {
            id: RowId::generate(),
            label: entry.label,
            primary: entry.primary,
            secondary: entry.secondary,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InjuryCategory {
    pub id: RowId,
    pub kind: String,
    pub incidents: u32,
}

impl InjuryCategory {
    /// "No incidents", "1 incident", "3 incidents".
    pub fn incident_summary(&self) -> String {
        match self.incidents {
            0 => "No incidents".to_string(),
            1 => "1 incident".to_string(),
            n => format!("{n} incidents"),
        }
    }
}

impl From<InjuryEntry> for InjuryCategory {
    fn from(entry: InjuryEntry) -> Self {
        Self {
            id: RowId::generate(),
            kind: entry.kind,
            incidents: entry.incidents,
        }
    }
}

/// Records that carry an `EntityId` and can live in a `Collection`.
pub trait Keyed {
    fn key(&self) -> &EntityId;
}

impl Keyed for Athlete {
    fn key(&self) -> &EntityId {
        &self.id
    }
}

impl Keyed for Game {
    fn key(&self) -> &EntityId {
        &self.id
    }
}

// ============================================================================
// Collection
// ============================================================================

/// Ordered map: insertion order for iteration, `EntityId` index for lookup.
///
/// A record whose id is already present replaces the earlier one in place,
/// so ids stay unique and the first-seen position is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    index: HashMap<EntityId, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, item: T) {
        match self.index.get(item.key()) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(item.key().clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    pub fn get(&self, id: &EntityId) -> Option<&T> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, id: &EntityId) -> bool {
        self.index.contains_key(id)
    }
}

impl<T> Collection<T> {
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Collection::new();
        for item in iter {
            collection.insert(item);
        }
        collection
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable snapshot of everything the app can show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub athletes: Collection<Athlete>,
    pub games: Collection<Game>,
    attributes: HashMap<EntityId, Vec<AttributeRow>>,
    injuries: HashMap<EntityId, Vec<InjuryCategory>>,
}

impl Catalog {
    pub fn new(athletes: Collection<Athlete>, games: Collection<Game>) -> Self {
        Self {
            athletes,
            games,
            attributes: HashMap::new(),
            injuries: HashMap::new(),
        }
    }

    /// Attach an athlete's attribute rows, assigning each a fresh `RowId`.
    pub fn with_attributes(mut self, athlete: EntityId, rows: Vec<AttributeEntry>) -> Self {
        self.attributes
            .insert(athlete, rows.into_iter().map(AttributeRow::from).collect());
        self
    }

    /// Attach an athlete's injury categories, assigning each a fresh `RowId`.
    pub fn with_injuries(mut self, athlete: EntityId, rows: Vec<InjuryEntry>) -> Self {
        self.injuries
            .insert(athlete, rows.into_iter().map(InjuryCategory::from).collect());
        self
    }

    pub fn athlete(&self, id: &EntityId) -> Option<&Athlete> {
        self.athletes.get(id)
    }

    pub fn game(&self, id: &EntityId) -> Option<&Game> {
        self.games.get(id)
    }

    /// Attribute rows for an athlete; empty when none were recorded.
    pub fn attributes(&self, athlete: &EntityId) -> &[AttributeRow] {
        self.attributes.get(athlete).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Injury categories for an athlete; empty when none were recorded.
    pub fn injuries(&self, athlete: &EntityId) -> &[InjuryCategory] {
        self.injuries.get(athlete).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn attribute_row(&self, athlete: &EntityId, row: RowId) -> Option<&AttributeRow> {
        self.attributes(athlete).iter().find(|r| r.id == row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{athlete, id};

    #[test]
    fn test_entity_id_rejects_empty() {
        assert_eq!(EntityId::new(""), Err(IdError::Empty));
        assert_eq!(EntityId::new("   "), Err(IdError::Empty));
        assert_eq!(EntityId::new("7").unwrap().as_str(), "7");
    }

    #[test]
    fn test_entity_id_is_one_route_segment() {
        assert_eq!(EntityId::new("a/b"), Err(IdError::Slash("a/b".into())));
        assert_eq!(EntityId::new("/7"), Err(IdError::Slash("/7".into())));
        assert_eq!(EntityId::new(" 7"), Err(IdError::Padded(" 7".into())));
        assert_eq!(EntityId::new("7\n"), Err(IdError::Padded("7\n".into())));
        assert_eq!(EntityId::new("g-1 b").unwrap().as_str(), "g-1 b");
    }

    #[test]
    fn test_deserialized_id_opens_its_detail_screen() {
        use crate::core::route::{ATHLETE_BASE, Route, Screen};

        let parsed: Result<EntityId, _> = serde_json::from_str("\"a/b\"");
        assert!(parsed.is_err());

        let ok: EntityId = serde_json::from_str("\"a-b\"").unwrap();
        let route = Route::detail(ATHLETE_BASE, &ok);
        assert_eq!(Screen::resolve(&route), Screen::AthleteDetail(ok));
    }

    #[test]
    fn test_entity_id_deserialize_rejects_empty() {
        let parsed: Result<EntityId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_collection_preserves_insertion_order() {
        let collection: Collection<Athlete> = [
            athlete("3", "23", "David Wilson", "Defender"),
            athlete("1", "10", "John Smith", "Forward"),
            athlete("2", "7", "Mike Johnson", "Midfielder"),
        ]
        .into_iter()
        .collect();
        let ids: Vec<&str> = collection.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_collection_lookup_by_id() {
        let collection: Collection<Athlete> =
            [athlete("1", "10", "John Smith", "Forward")].into_iter().collect();
        assert_eq!(collection.get(&id("1")).map(|a| a.name.as_str()), Some("John Smith"));
        assert!(collection.get(&id("999")).is_none());
    }

    #[test]
    fn test_collection_duplicate_id_replaces_in_place() {
        let collection: Collection<Athlete> = [
            athlete("1", "10", "John Smith", "Forward"),
            athlete("2", "7", "Mike Johnson", "Midfielder"),
            athlete("1", "10", "John Smith", "Winger"),
        ]
        .into_iter()
        .collect();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.as_slice()[0].position, "Winger");
    }

    #[test]
    fn test_missing_attributes_are_empty() {
        let catalog = Catalog::default();
        assert!(catalog.attributes(&id("1")).is_empty());
        assert!(catalog.injuries(&id("1")).is_empty());
    }

    #[test]
    fn test_rows_get_distinct_ids() {
        let rows = vec![
            AttributeEntry {
                label: "Height".into(),
                primary: "6'6\"".into(),
                secondary: "198 cm".into(),
            },
            AttributeEntry {
                label: "Weight".into(),
                primary: "212 lbs".into(),
                secondary: "96 kg".into(),
            },
        ];
        let catalog = Catalog::default().with_attributes(id("1"), rows);
        let attrs = catalog.attributes(&id("1"));
        assert_eq!(attrs.len(), 2);
        assert_ne!(attrs[0].id, attrs[1].id);
        assert_eq!(
            catalog.attribute_row(&id("1"), attrs[1].id).map(|r| r.label.as_str()),
            Some("Weight")
        );
    }

    #[test]
    fn test_incident_summary() {
        let mut injury = InjuryCategory::from(InjuryEntry {
            kind: "Ankle Injuries".into(),
            incidents: 0,
        });
        assert_eq!(injury.incident_summary(), "No incidents");
        injury.incidents = 1;
        assert_eq!(injury.incident_summary(), "1 incident");
        injury.incidents = 4;
        assert_eq!(injury.incident_summary(), "4 incidents");
    }

    #[test]
    fn test_game_date_label() {
        let game = Game {
            id: id("g1"),
            name: "Season Opener".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        assert_eq!(game.date_label(), "2024-03-05");
    }
}
