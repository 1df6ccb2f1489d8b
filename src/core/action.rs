//! # Actions
//!
//! Everything that can happen in Sideline becomes an `Action`.
//! User taps an athlete row? That's `Action::OpenEntity(Athlete, id)`.
//! Catalog finishes loading? That's `Action::CatalogLoaded { .. }`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing any I/O the adapter must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use std::sync::Arc;

use log::{debug, info, warn};

use crate::core::catalog::{Catalog, EntityId, RowId};
use crate::core::navigation::EntityKind;
use crate::core::route::{AthleteSection, Screen, TopTab};
use crate::core::state::{App, LoadState};

#[derive(Debug)]
pub enum Action {
    // ── Data ──
    /// Ask for a fresh catalog.
    Reload,
    CatalogLoaded { generation: u64, catalog: Catalog },
    CatalogFailed { generation: u64, error: String },

    // ── Navigation ──
    TopTabPressed(TopTab),
    OpenEntity(EntityKind, EntityId),
    OpenSection(AthleteSection),
    Back,

    // ── In-screen state ──
    QueryChanged(String),
    SelectTab(String),
    NextTab,
    PrevTab,

    // ── Acknowledged only ──
    EditRow(RowId),
    DeleteRow(RowId),
    AddRecord,
    OpenInjury(RowId),
    OpenFilter,

    Quit,
}

/// I/O the adapter performs after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start a catalog load tagged with this generation, cancelling any
    /// load still in flight.
    LoadCatalog(u64),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Reload => begin_load(app),
        Action::CatalogLoaded {
            generation,
            catalog,
        } => {
            if generation != app.load_generation {
                debug!("Dropping stale catalog (generation {generation})");
                return Effect::None;
            }
            info!(
                "Catalog loaded: {} athletes, {} games",
                catalog.athletes.len(),
                catalog.games.len()
            );
            app.catalog = Arc::new(catalog);
            app.load_state = LoadState::Ready;
            app.status_message = format!("{} athletes", app.catalog.athletes.len());
            Effect::None
        }
        Action::CatalogFailed { generation, error } => {
            if generation != app.load_generation {
                debug!("Dropping stale load failure (generation {generation})");
                return Effect::None;
            }
            warn!("Catalog load failed: {}", error);
            app.status_message = format!("Load failed: {error}");
            app.load_state = LoadState::Failed(error);
            Effect::None
        }

        Action::TopTabPressed(tab) => {
            app.navigator().select_top_tab(tab);
            app.sync_route();
            Effect::None
        }
        Action::OpenEntity(kind, id) => {
            let known = match kind {
                EntityKind::Athlete => app.catalog.athletes.contains(&id),
                EntityKind::Game => app.catalog.games.contains(&id),
            };
            if !known {
                warn!("Opening {:?} {} which is not in the catalog", kind, id);
            }
            app.navigator().go_to_detail(kind, &id);
            app.sync_route();
            Effect::None
        }
        Action::OpenSection(section) => {
            let Screen::AthleteDetail(athlete) = app.mounted.screen.clone() else {
                debug!("OpenSection ignored outside an athlete menu");
                return Effect::None;
            };
            if app.navigator().open_section(&athlete, section).is_none() {
                info!("{} pressed for athlete {}: acknowledged", section.title(), athlete);
                app.status_message = format!("{} coming soon", section.title());
            }
            app.sync_route();
            Effect::None
        }
        Action::Back => {
            app.navigator().go_back();
            app.sync_route();
            Effect::None
        }

        Action::QueryChanged(query) => {
            if app.mounted.has_search() {
                app.mounted.query = query;
            }
            Effect::None
        }
        Action::SelectTab(id) => {
            if !app.select_tab(&id) {
                debug!("Ignoring unknown tab {:?}", id);
            }
            Effect::None
        }
        Action::NextTab => {
            if let Some(tabs) = app.mounted.tabs.as_mut() {
                tabs.next();
            }
            Effect::None
        }
        Action::PrevTab => {
            if let Some(tabs) = app.mounted.tabs.as_mut() {
                tabs.prev();
            }
            Effect::None
        }

        Action::EditRow(row) => {
            acknowledge_row(app, "Edit", row);
            Effect::None
        }
        Action::DeleteRow(row) => {
            acknowledge_row(app, "Delete", row);
            Effect::None
        }
        Action::AddRecord => {
            let target = match &app.mounted.screen {
                Screen::Attributes(id) => Some(("measurement", id)),
                Screen::Injuries(id) => Some(("injury", id)),
                _ => None,
            };
            if let Some((what, id)) = target {
                info!("Add {} for athlete {}: acknowledged", what, athlete_name(app, id));
                app.status_message = format!("Add {what}: not available yet");
            }
            Effect::None
        }
        Action::OpenInjury(row) => {
            if let Screen::Injuries(id) = &app.mounted.screen {
                let kind = app
                    .catalog
                    .injuries(id)
                    .iter()
                    .find(|i| i.id == row)
                    .map(|i| i.kind.clone());
                match kind {
                    Some(kind) => {
                        info!("View injury {} for athlete {}: acknowledged", kind, athlete_name(app, id));
                        app.status_message = format!("{kind}: details not available yet");
                    }
                    None => debug!("OpenInjury for unknown row {}", row),
                }
            }
            Effect::None
        }
        Action::OpenFilter => {
            info!("Filter pressed: acknowledged");
            app.status_message = String::from("Filters not available yet");
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Bumps the generation and marks the catalog as loading. Older loads that
/// finish afterwards are ignored.
fn begin_load(app: &mut App) -> Effect {
    app.load_generation += 1;
    app.load_state = if app.has_data() {
        LoadState::Refreshing
    } else {
        LoadState::Loading
    };
    app.status_message = String::from("Loading roster...");
    info!("Requesting catalog from {} (generation {})", app.source.name(), app.load_generation);
    Effect::LoadCatalog(app.load_generation)
}

fn athlete_name(app: &App, id: &EntityId) -> String {
    app.catalog
        .athlete(id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.to_string())
}

/// Edit and delete are not persisted anywhere yet; the request is logged
/// against the row it targets.
fn acknowledge_row(app: &mut App, verb: &str, row: RowId) {
    let Screen::Attributes(athlete) = &app.mounted.screen else {
        debug!("{} ignored outside the attributes screen", verb);
        return;
    };
    match app.catalog.attribute_row(athlete, row) {
        Some(attr) => {
            info!(
                "{} attribute {} for athlete {}: acknowledged",
                verb,
                attr.label,
                athlete_name(app, athlete)
            );
            app.status_message = format!("{verb} {}: not available yet", attr.label);
        }
        None => debug!("{} for unknown row {}", verb, row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::{GAMES_TAB, Listing};
    use crate::test_support::{id, loaded_app_at, route, sample_catalog, test_app, test_app_at};

    #[test]
    fn test_reload_requests_load_with_new_generation() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Reload), Effect::LoadCatalog(1));
        assert_eq!(update(&mut app, Action::Reload), Effect::LoadCatalog(2));
        assert_eq!(app.load_state, LoadState::Loading);
    }

    #[test]
    fn test_catalog_loaded_swaps_snapshot() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::CatalogLoaded {
                generation: 1,
                catalog: sample_catalog(),
            },
        );
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(app.catalog.athletes.len(), 8);
    }

    #[test]
    fn test_stale_catalog_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::CatalogLoaded {
                generation: 1,
                catalog: sample_catalog(),
            },
        );
        assert_eq!(app.load_state, LoadState::Loading);
        assert!(app.catalog.athletes.is_empty());
    }

    #[test]
    fn test_refresh_keeps_previous_snapshot() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::Reload);
        assert_eq!(app.load_state, LoadState::Refreshing);
        assert_eq!(app.listing().len(), 8);
    }

    #[test]
    fn test_load_failure_is_surfaced() {
        let mut app = test_app();
        update(&mut app, Action::Reload);
        update(
            &mut app,
            Action::CatalogFailed {
                generation: 1,
                error: "timed out".into(),
            },
        );
        assert_eq!(app.load_state, LoadState::Failed("timed out".into()));
        assert!(app.status_message.contains("timed out"));
    }

    #[test]
    fn test_top_tab_press_moves_route_and_highlight() {
        let mut app = loaded_app_at("/");
        update(&mut app, Action::TopTabPressed(TopTab::Trainings));
        assert_eq!(app.current_route(), &route("/trainings"));
        assert_eq!(app.active_top_tab(), Some(TopTab::Trainings));
        assert_eq!(app.mounted.screen, Screen::Trainings);
    }

    #[test]
    fn test_open_entity_then_back() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::QueryChanged("joh".into()));
        update(&mut app, Action::OpenEntity(EntityKind::Athlete, id("2")));
        assert_eq!(app.mounted.screen, Screen::AthleteDetail(id("2")));
        assert_eq!(app.active_top_tab(), Some(TopTab::Athlete));

        update(&mut app, Action::Back);
        assert_eq!(app.mounted.screen, Screen::AthleteList);
        // The list remounted fresh
        assert!(app.mounted.query.is_empty());
    }

    #[test]
    fn test_open_unknown_entity_lands_on_not_found_detail() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::OpenEntity(EntityKind::Athlete, id("999")));
        assert_eq!(app.mounted.screen, Screen::AthleteDetail(id("999")));
        assert!(app.catalog.athlete(&id("999")).is_none());
    }

    #[test]
    fn test_back_with_empty_history_is_noop() {
        let mut app = loaded_app_at("/analysis");
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(app.current_route(), &route("/analysis"));
    }

    #[test]
    fn test_open_section_pushes_section_route() {
        let mut app = loaded_app_at("/athlete/1");
        update(&mut app, Action::OpenSection(AthleteSection::Attributes));
        assert_eq!(app.current_route(), &route("/athlete/1/attributes"));
        update(&mut app, Action::Back);
        update(&mut app, Action::OpenSection(AthleteSection::Injuries));
        assert_eq!(app.mounted.screen, Screen::Injuries(id("1")));
    }

    #[test]
    fn test_game_records_is_acknowledged_only() {
        let mut app = loaded_app_at("/athlete/1");
        update(&mut app, Action::OpenSection(AthleteSection::GameRecords));
        assert_eq!(app.current_route(), &route("/athlete/1"));
        assert!(app.status_message.contains("Game Records"));
    }

    #[test]
    fn test_open_section_outside_menu_is_ignored() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::OpenSection(AthleteSection::Attributes));
        assert_eq!(app.current_route(), &route("/athlete"));
    }

    #[test]
    fn test_select_tab_switches_listing() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::SelectTab(GAMES_TAB.into()));
        assert!(matches!(app.listing(), Listing::Games(_)));
        assert_eq!(app.current_route(), &route("/athlete"));
    }

    #[test]
    fn test_select_unknown_tab_keeps_current() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::SelectTab("injuries".into()));
        assert_eq!(app.mounted.active_tab_id(), Some("athletes"));
    }

    #[test]
    fn test_query_survives_tab_switch() {
        let mut app = loaded_app_at("/athlete");
        update(&mut app, Action::QueryChanged("forward".into()));
        assert_eq!(app.listing().len(), 3);
        update(&mut app, Action::NextTab);
        assert_eq!(app.mounted.query, "forward");
        assert!(app.listing().is_empty());
        update(&mut app, Action::PrevTab);
        assert_eq!(app.listing().len(), 3);
    }

    #[test]
    fn test_query_ignored_without_search() {
        let mut app = test_app_at("/trainings");
        update(&mut app, Action::QueryChanged("x".into()));
        assert!(app.mounted.query.is_empty());
    }

    #[test]
    fn test_edit_and_delete_are_acknowledged() {
        let mut app = loaded_app_at("/athlete/1/attributes");
        let row = app.catalog.attributes(&id("1"))[0].id;
        let before = app.catalog.clone();
        update(&mut app, Action::EditRow(row));
        assert!(app.status_message.starts_with("Edit Height"));
        update(&mut app, Action::DeleteRow(row));
        assert!(app.status_message.starts_with("Delete Height"));
        assert_eq!(app.catalog, before);
    }

    #[test]
    fn test_add_and_open_injury_are_acknowledged() {
        let mut app = loaded_app_at("/athlete/1/injuries");
        update(&mut app, Action::AddRecord);
        assert!(app.status_message.contains("injury"));
        let row = app.catalog.injuries(&id("1"))[0].id;
        update(&mut app, Action::OpenInjury(row));
        assert!(app.status_message.starts_with("Ankle Injuries"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
