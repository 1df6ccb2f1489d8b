//! # Mounted Screen
//!
//! The per-screen state that exists while a screen is showing: its sub-tab
//! selection and search query. Created on mount, dropped on unmount, so
//! coming back to a screen starts it fresh.
//!
//! Also resolves what a screen should display from the catalog snapshot,
//! including the explicit "loading", "not found" and "load failed" states.

use crate::core::catalog::{Athlete, Catalog, EntityId, Game};
use crate::core::filter::search;
use crate::core::route::Screen;
use crate::core::state::LoadState;
use crate::core::tabs::{Tab, TabSet, TabSetError, TabState};

pub const ATHLETES_TAB: &str = "athletes";
pub const GAMES_TAB: &str = "games";

/// Sub-tabs of the athlete section.
pub fn athlete_tab_set() -> Result<TabSet, TabSetError> {
    TabSet::new(vec![Tab::new(ATHLETES_TAB, "Athletes"), Tab::new(GAMES_TAB, "Games")])
}

#[derive(Debug, Clone, PartialEq)]
pub struct MountedScreen {
    pub screen: Screen,
    /// Present on screens with a sub-tab strip.
    pub tabs: Option<TabState>,
    pub query: String,
}

impl MountedScreen {
    pub fn mount(screen: Screen) -> Self {
        let tabs = match screen {
            Screen::AthleteList => athlete_tab_set().ok().map(TabState::new),
            _ => None,
        };
        Self {
            screen,
            tabs,
            query: String::new(),
        }
    }

    pub fn has_search(&self) -> bool {
        matches!(self.screen, Screen::AthleteList)
    }

    pub fn active_tab_id(&self) -> Option<&str> {
        self.tabs.as_ref().map(TabState::active_id)
    }

    /// Rows of the list screen under the current sub-tab and query.
    pub fn listing<'a>(&self, catalog: &'a Catalog) -> Listing<'a> {
        match self.active_tab_id() {
            Some(GAMES_TAB) => Listing::Games(search(&catalog.games, &self.query)),
            Some(_) => Listing::Athletes(search(&catalog.athletes, &self.query)),
            None => Listing::None,
        }
    }
}

/// Filtered rows ready to render, borrowed from the catalog.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    Athletes(Vec<&'a Athlete>),
    Games(Vec<&'a Game>),
    None,
}

impl Listing<'_> {
    pub fn len(&self) -> usize {
        match self {
            Listing::Athletes(rows) => rows.len(),
            Listing::Games(rows) => rows.len(),
            Listing::None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Id of the row at `index`, for turning a tap into a navigation.
    pub fn id_at(&self, index: usize) -> Option<&EntityId> {
        match self {
            Listing::Athletes(rows) => rows.get(index).map(|a| &a.id),
            Listing::Games(rows) => rows.get(index).map(|g| &g.id),
            Listing::None => None,
        }
    }
}

/// What a detail screen shows for an id.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<T> {
    Loading,
    Found(T),
    NotFound(EntityId),
    LoadFailed(String),
}

impl<T> DetailView<T> {
    pub fn resolve(
        load: &LoadState,
        id: &EntityId,
        lookup: impl FnOnce(&EntityId) -> Option<T>,
    ) -> Self {
        match load {
            LoadState::Loading => DetailView::Loading,
            LoadState::Failed(reason) => DetailView::LoadFailed(reason.clone()),
            LoadState::Ready | LoadState::Refreshing => match lookup(id) {
                Some(found) => DetailView::Found(found),
                None => DetailView::NotFound(id.clone()),
            },
        }
    }
}
