//! # Application State
//!
//! Core state for Sideline. Domain and navigation only; presentation state
//! (cursor rows, input focus) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn DataSource>   // where the catalog comes from
//! ├── catalog: Arc<Catalog>         // current snapshot, swapped whole
//! ├── load_state: LoadState         // loading / ready / refreshing / failed
//! ├── load_generation: u64          // latest load request wins
//! ├── load_timeout: Duration        // per-load deadline
//! ├── router: Box<dyn Router>       // current path + back-stack
//! ├── mounted: MountedScreen        // sub-tabs + query of the visible screen
//! └── status_message: String        // status line text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{HistoryRouter, Navigator, Router};
use crate::core::route::{Route, Screen, TopTab};
use crate::core::screen::{Listing, MountedScreen};
use crate::data::DataSource;

pub const DEFAULT_LOAD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No snapshot yet.
    Loading,
    Ready,
    /// A reload is in flight; the previous snapshot is still shown.
    Refreshing,
    /// The data source failed. Shown as its own state, never as empty data.
    Failed(String),
}

pub struct App {
    pub source: Arc<dyn DataSource>,
    pub catalog: Arc<Catalog>,
    pub load_state: LoadState,
    pub load_generation: u64,
    pub load_timeout: Duration,
    pub router: Box<dyn Router>,
    pub mounted: MountedScreen,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn DataSource>, router: Box<dyn Router>) -> Self {
        let mounted = MountedScreen::mount(Screen::resolve(router.current()));
        Self {
            source,
            catalog: Arc::new(Catalog::default()),
            load_state: LoadState::Loading,
            load_generation: 0,
            load_timeout: DEFAULT_LOAD_TIMEOUT,
            router,
            mounted,
            status_message: String::from("Loading roster..."),
        }
    }

    pub fn from_config(source: Arc<dyn DataSource>, config: &ResolvedConfig) -> Self {
        let router = HistoryRouter::new(config.start_route.clone());
        let mut app = Self::new(source, Box::new(router));
        app.load_timeout = Duration::from_secs(config.load_timeout_secs);
        app
    }

    pub fn current_route(&self) -> &Route {
        self.router.current()
    }

    /// The bottom-bar tab highlighted at the current location.
    pub fn active_top_tab(&self) -> Option<TopTab> {
        TopTab::active_at(self.router.current())
    }

    pub fn navigator(&mut self) -> Navigator<'_, dyn Router> {
        Navigator::new(self.router.as_mut())
    }

    /// Selects a sub-tab of the mounted screen. Returns false when the screen
    /// has no tabs or `id` is not one of them.
    pub fn select_tab(&mut self, id: &str) -> bool {
        let Some(tabs) = self.mounted.tabs.as_mut() else {
            return false;
        };
        Navigator::new(self.router.as_mut()).select_tab(tabs, id)
    }

    /// Re-reads the router and remounts if the location now resolves to a
    /// different screen. Returns whether a remount happened.
    pub fn sync_route(&mut self) -> bool {
        let screen = Screen::resolve(self.router.current());
        if screen == self.mounted.screen {
            return false;
        }
        debug!("Mounting {:?} at {}", screen, self.router.current());
        self.mounted = MountedScreen::mount(screen);
        true
    }

    /// Rows of the current list screen, filtered by its tab and query.
    pub fn listing(&self) -> Listing<'_> {
        self.mounted.listing(&self.catalog)
    }

    pub fn has_data(&self) -> bool {
        matches!(self.load_state, LoadState::Ready | LoadState::Refreshing)
    }
}
