//! # Routes
//!
//! Locations are slash-rooted paths (`/athlete/5/injuries`). This module owns
//! three things about them:
//!
//! - [`Route`]: a validated path value
//! - [`is_active`]: whether a tab's route target matches the current path
//! - [`Screen`]: which screen a path resolves to
//!
//! Matching is segment-aware: `/athlete` is active under `/athlete/5` but not
//! under `/athletes`.

use std::fmt;

use crate::core::catalog::EntityId;

pub const ROOT: &str = "/";
pub const INDEX: &str = "/index";

pub const ATHLETE_BASE: &str = "/athlete";
pub const GAME_BASE: &str = "/games";
pub const TRAININGS: &str = "/trainings";
pub const ANALYSIS: &str = "/analysis";

// ============================================================================
// Route value
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError(String);

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route must start with '/': {:?}", self.0)
    }
}

impl std::error::Error for RouteError {}

/// A normalized path: begins with `/`, no empty segments, no trailing `/`
/// except on the root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// Accepts any slash-rooted path and normalizes it, so `//athlete/` and
    /// `/athlete` are the same route for both matching and resolution.
    pub fn parse(path: impl Into<String>) -> Result<Self, RouteError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(RouteError(path));
        }
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        Ok(Self(format!("/{}", segments.join("/"))))
    }

    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    /// `base` followed by one id segment, e.g. `/athlete/7`.
    pub fn detail(base: &str, id: &EntityId) -> Self {
        Self(format!("{}/{}", base.trim_end_matches('/'), id))
    }

    /// This route with one more segment appended.
    pub fn join(&self, segment: &str) -> Self {
        Self(format!("{}/{}", self.0.trim_end_matches('/'), segment))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ============================================================================
// Route matching
// ============================================================================

/// Whether `target` counts as active at `current`.
///
/// - `/` is active only at `/` and `/index`.
/// - Any other target is active at itself and at any path nested under it
///   on a segment boundary.
pub fn is_active(current: &str, target: &str) -> bool {
    if target == ROOT {
        return current == ROOT || current == INDEX;
    }
    match current.strip_prefix(target) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || target.ends_with('/'),
        None => false,
    }
}

// ============================================================================
// Top-level tab bar
// ============================================================================

/// The persistent bottom tab bar. Each tab is a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTab {
    Home,
    Athlete,
    Trainings,
    Analysis,
}

impl TopTab {
    pub const ALL: [TopTab; 4] = [
        TopTab::Home,
        TopTab::Athlete,
        TopTab::Trainings,
        TopTab::Analysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TopTab::Home => "Home",
            TopTab::Athlete => "Athlete",
            TopTab::Trainings => "Trainings",
            TopTab::Analysis => "Analysis",
        }
    }

    /// Where pressing the tab goes.
    pub fn route(self) -> Route {
        Route(self.targets()[0].to_string())
    }

    /// Every path prefix under which this tab is highlighted. Game detail
    /// pages belong to the Athlete section.
    pub fn targets(self) -> &'static [&'static str] {
        match self {
            TopTab::Home => &[ROOT],
            TopTab::Athlete => &[ATHLETE_BASE, GAME_BASE],
            TopTab::Trainings => &[TRAININGS],
            TopTab::Analysis => &[ANALYSIS],
        }
    }

    pub fn is_active_at(self, current: &Route) -> bool {
        self.targets()
            .iter()
            .any(|target| is_active(current.as_str(), target))
    }

    /// The first tab active at `current`, if any.
    pub fn active_at(current: &Route) -> Option<TopTab> {
        Self::ALL.into_iter().find(|tab| tab.is_active_at(current))
    }
}

// ============================================================================
// Screens
// ============================================================================

/// Sections reachable from an athlete's detail menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AthleteSection {
    Attributes,
    Injuries,
    GameRecords,
}

impl AthleteSection {
    pub const ALL: [AthleteSection; 3] = [
        AthleteSection::Attributes,
        AthleteSection::Injuries,
        AthleteSection::GameRecords,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AthleteSection::Attributes => "Attributes",
            AthleteSection::Injuries => "Injury Records",
            AthleteSection::GameRecords => "Game Records",
        }
    }

    /// Path segment under `/athlete/{id}`, or `None` for sections without a
    /// screen of their own.
    pub fn segment(self) -> Option<&'static str> {
        match self {
            AthleteSection::Attributes => Some("attributes"),
            AthleteSection::Injuries => Some("injuries"),
            AthleteSection::GameRecords => None,
        }
    }
}

fn entity(raw: &str) -> Option<EntityId> {
    EntityId::new(raw).ok()
}

/// What a route resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home,
    AthleteList,
    AthleteDetail(EntityId),
    Attributes(EntityId),
    Injuries(EntityId),
    GameDetail(EntityId),
    Trainings,
    Analysis,
    /// No screen lives at this path.
    Unknown(Route),
}

impl Screen {
    pub fn resolve(route: &Route) -> Screen {
        let segments: Vec<&str> = route.segments().collect();
        let unknown = || Screen::Unknown(route.clone());
        match segments.as_slice() {
            [] | ["index"] => Screen::Home,
            ["athlete"] => Screen::AthleteList,
            ["athlete", raw] => entity(raw).map_or_else(unknown, Screen::AthleteDetail),
            ["athlete", raw, "attributes"] => entity(raw).map_or_else(unknown, Screen::Attributes),
            ["athlete", raw, "injuries"] => entity(raw).map_or_else(unknown, Screen::Injuries),
            ["games", raw] => entity(raw).map_or_else(unknown, Screen::GameDetail),
            ["trainings"] => Screen::Trainings,
            ["analysis"] => Screen::Analysis,
            _ => unknown(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::AthleteList => "Athletes & Games",
            Screen::AthleteDetail(_) => "Athlete Menu",
            Screen::Attributes(_) => "Attributes",
            Screen::Injuries(_) => "Injury Records",
            Screen::GameDetail(_) => "Game",
            Screen::Trainings => "Trainings",
            Screen::Analysis => "Analysis",
            Screen::Unknown(_) => "Not Found",
        }
    }

    /// Drill-down screens show a back affordance.
    pub fn shows_back(&self) -> bool {
        matches!(
            self,
            Screen::AthleteDetail(_)
                | Screen::Attributes(_)
                | Screen::Injuries(_)
                | Screen::GameDetail(_)
                | Screen::Unknown(_)
        )
    }
}
