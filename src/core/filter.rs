//! # Filter Engine
//!
//! Case-insensitive, multi-field substring filtering over an in-memory
//! collection. Each screen configures which fields of a record are searched;
//! a record matches when any one of them contains the query.
//!
//! ```text
//! filter(items, "joh", [name, number, position])
//!   "John Smith" / "10" / "Forward"   → kept   (name contains "joh")
//!   "Tom Brown"  / "1"  / "Goalkeeper" → dropped
//! ```
//!
//! Pure and stable: output keeps input order, items are borrowed, never
//! copied or mutated.

use std::borrow::Cow;

use crate::core::catalog::{Athlete, Game};

/// Reads one searchable string out of a record.
pub type Field<T> = for<'a> fn(&'a T) -> Cow<'a, str>;

/// Records that know which of their fields a search box matches against.
pub trait Searchable: Sized + 'static {
    fn search_fields() -> &'static [Field<Self>];
}

/// Returns every item where at least one field contains `query`, ignoring case.
///
/// An empty query keeps everything. `fields` should be non-empty; with no
/// fields a non-empty query matches nothing.
pub fn filter<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    query: &str,
    fields: &[Field<T>],
) -> Vec<&'a T> {
    if query.is_empty() {
        return items.into_iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .into_iter()
        .filter(|item| matches(*item, &needle, fields))
        .collect()
}

/// `filter` using the record type's own search fields.
pub fn search<'a, T: Searchable + 'a>(
    items: impl IntoIterator<Item = &'a T>,
    query: &str,
) -> Vec<&'a T> {
    filter(items, query, T::search_fields())
}

/// `needle` must already be lower-cased.
fn matches<T>(item: &T, needle: &str, fields: &[Field<T>]) -> bool {
    fields
        .iter()
        .any(|field| field(item).to_lowercase().contains(needle))
}

// ── Per-record field sets ───────────────────────────────────────────────────

fn athlete_name(a: &Athlete) -> Cow<'_, str> {
    Cow::Borrowed(&a.name)
}

fn athlete_number(a: &Athlete) -> Cow<'_, str> {
    Cow::Borrowed(&a.number)
}

fn athlete_position(a: &Athlete) -> Cow<'_, str> {
    Cow::Borrowed(&a.position)
}

const ATHLETE_FIELDS: &[Field<Athlete>] = &[athlete_name, athlete_number, athlete_position];

impl Searchable for Athlete {
    fn search_fields() -> &'static [Field<Self>] {
        ATHLETE_FIELDS
    }
}

fn game_name(g: &Game) -> Cow<'_, str> {
    Cow::Borrowed(&g.name)
}

fn game_date(g: &Game) -> Cow<'_, str> {
    Cow::Owned(g.date_label())
}

const GAME_FIELDS: &[Field<Game>] = &[game_name, game_date];

impl Searchable for Game {
    fn search_fields() -> &'static [Field<Self>] {
        GAME_FIELDS
    }
}
