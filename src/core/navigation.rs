//! # Navigation
//!
//! The route collaborator (`Router`) and the dispatcher that turns user
//! selections into commands for it (`Navigator`).
//!
//! ```text
//! row tap ──► Navigator::go_to_detail ──► Router::navigate(/athlete/7, Push)
//! back    ──► Navigator::go_back      ──► Router::go_back()
//! tab bar ──► Navigator::select_top_tab ─► Router::navigate(/trainings, Push)
//! sub-tab ──► Navigator::select_tab   ──► TabState::select (no route change)
//! ```
//!
//! The navigator holds no location of its own; the router is the only place
//! the current path lives.

use log::{debug, info};

use crate::core::catalog::EntityId;
use crate::core::route::{ATHLETE_BASE, AthleteSection, GAME_BASE, Route, TopTab};
use crate::core::tabs::TabState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavMode {
    /// Go to the route and remember where we came from.
    Push,
    /// Go to the route without growing the back-stack.
    Replace,
}

/// The location collaborator: reports the current path and moves it.
pub trait Router: Send {
    fn current(&self) -> &Route;

    fn navigate(&mut self, route: Route, mode: NavMode);

    /// Pops the back-stack. Returns false, and stays put, when it is empty.
    fn go_back(&mut self) -> bool;

    fn can_go_back(&self) -> bool;
}

/// In-memory router with a stack-style history.
#[derive(Debug, Clone)]
pub struct HistoryRouter {
    current: Route,
    back_stack: Vec<Route>,
}

impl HistoryRouter {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            back_stack: Vec::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }
}

impl Default for HistoryRouter {
    fn default() -> Self {
        Self::new(Route::root())
    }
}

impl Router for HistoryRouter {
    fn current(&self) -> &Route {
        &self.current
    }

    fn navigate(&mut self, route: Route, mode: NavMode) {
        // Re-pushing the current location would only add a dead back step
        if route == self.current {
            debug!("Already at {}, ignoring {:?}", route, mode);
            return;
        }
        let previous = std::mem::replace(&mut self.current, route);
        if mode == NavMode::Push {
            self.back_stack.push(previous);
        }
    }

    fn go_back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(route) => {
                self.current = route;
                true
            }
            None => false,
        }
    }

    fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }
}

/// Kinds of record that have a detail screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Athlete,
    Game,
}

impl EntityKind {
    pub fn base_path(self) -> &'static str {
        match self {
            EntityKind::Athlete => ATHLETE_BASE,
            EntityKind::Game => GAME_BASE,
        }
    }
}

/// Translates selections into router commands.
pub struct Navigator<'r, R: Router + ?Sized> {
    router: &'r mut R,
}

impl<'r, R: Router + ?Sized> Navigator<'r, R> {
    pub fn new(router: &'r mut R) -> Self {
        Self { router }
    }

    /// Pushes `{base}/{id}` for the entity kind. Whether the id exists is the
    /// detail screen's concern; an unknown id renders as not found there.
    pub fn go_to_detail(&mut self, kind: EntityKind, id: &EntityId) -> Route {
        let route = Route::detail(kind.base_path(), id);
        info!("Navigate push {}", route);
        self.router.navigate(route.clone(), NavMode::Push);
        route
    }

    /// Pushes the screen for one section of an athlete's menu. Sections
    /// without a screen are left to the caller and return `None`.
    pub fn open_section(&mut self, athlete: &EntityId, section: AthleteSection) -> Option<Route> {
        let segment = section.segment()?;
        let route = Route::detail(ATHLETE_BASE, athlete).join(segment);
        info!("Navigate push {}", route);
        self.router.navigate(route.clone(), NavMode::Push);
        Some(route)
    }

    /// Pops one step. No-op on an empty back-stack.
    pub fn go_back(&mut self) -> bool {
        let moved = self.router.go_back();
        if moved {
            info!("Navigate back to {}", self.router.current());
        } else {
            debug!("Back ignored: history is empty");
        }
        moved
    }

    /// Bottom tab bar press: the tab's route is pushed.
    pub fn select_top_tab(&mut self, tab: TopTab) -> Route {
        let route = tab.route();
        info!("Tab {} pressed, navigate push {}", tab.label(), route);
        self.router.navigate(route.clone(), NavMode::Push);
        route
    }

    /// In-screen sub-tab press. Only the tab state changes, never the route.
    pub fn select_tab(&mut self, tabs: &mut TabState, id: &str) -> bool {
        tabs.select(id)
    }

    pub fn current(&self) -> &Route {
        self.router.current()
    }
}
