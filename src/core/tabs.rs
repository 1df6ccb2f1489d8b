//! # Tab / Sub-tab State
//!
//! An ordered, non-empty set of tabs with exactly one active at a time.
//! Selecting an id outside the set is rejected and leaves the state alone,
//! so the UI never highlights a tab it doesn't know about.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub label: String,
}

impl Tab {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSetError {
    Empty,
    DuplicateId(String),
}

impl fmt::Display for TabSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabSetError::Empty => write!(f, "tab set must contain at least one tab"),
            TabSetError::DuplicateId(id) => write!(f, "duplicate tab id: {id}"),
        }
    }
}

impl std::error::Error for TabSetError {}

/// Ordered tabs with unique ids. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
}

impl TabSet {
    pub fn new(tabs: Vec<Tab>) -> Result<Self, TabSetError> {
        if tabs.is_empty() {
            return Err(TabSetError::Empty);
        }
        for (i, tab) in tabs.iter().enumerate() {
            if tabs[..i].iter().any(|t| t.id == tab.id) {
                return Err(TabSetError::DuplicateId(tab.id.clone()));
            }
        }
        Ok(Self { tabs })
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }
}

/// Which tab of a `TabSet` is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabState {
    set: TabSet,
    active: usize,
}

impl TabState {
    /// Starts on the first tab.
    pub fn new(set: TabSet) -> Self {
        Self { set, active: 0 }
    }

    /// Starts on `initial` if it belongs to the set, otherwise on the first tab.
    pub fn with_initial(set: TabSet, initial: &str) -> Self {
        let active = set.position(initial).unwrap_or(0);
        Self { set, active }
    }

    /// Makes `id` active. Returns false and keeps the current tab if `id`
    /// is not in the set.
    pub fn select(&mut self, id: &str) -> bool {
        match self.set.position(id) {
            Some(pos) => {
                self.active = pos;
                true
            }
            None => {
                log::debug!("Rejected unknown tab id {:?}", id);
                false
            }
        }
    }

    /// Swaps in a different tab set. The active id survives if the new set
    /// has it, otherwise the first tab becomes active.
    pub fn reconfigure(&mut self, set: TabSet) {
        let current = self.active().id.clone();
        self.active = set.position(&current).unwrap_or(0);
        self.set = set;
    }

    /// Moves to the next tab, wrapping around.
    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.set.len();
    }

    /// Moves to the previous tab, wrapping around.
    pub fn prev(&mut self) {
        self.active = (self.active + self.set.len() - 1) % self.set.len();
    }

    pub fn active(&self) -> &Tab {
        &self.set.tabs[self.active]
    }

    pub fn active_id(&self) -> &str {
        &self.active().id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    pub fn tabs(&self) -> &[Tab] {
        self.set.tabs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn athlete_tabs() -> TabSet {
        TabSet::new(vec![Tab::new("athletes", "Athletes"), Tab::new("games", "Games")]).unwrap()
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert_eq!(TabSet::new(vec![]), Err(TabSetError::Empty));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = TabSet::new(vec![Tab::new("a", "A"), Tab::new("a", "Again")]);
        assert_eq!(result, Err(TabSetError::DuplicateId("a".into())));
    }

    #[test]
    fn test_initial_state_is_first_tab() {
        let state = TabState::new(athlete_tabs());
        assert_eq!(state.active_id(), "athletes");
    }

    #[test]
    fn test_explicit_initial_tab() {
        let state = TabState::with_initial(athlete_tabs(), "games");
        assert_eq!(state.active_id(), "games");
        let state = TabState::with_initial(athlete_tabs(), "bogus");
        assert_eq!(state.active_id(), "athletes");
    }

    #[test]
    fn test_select_member() {
        let mut state = TabState::new(athlete_tabs());
        assert!(state.select("games"));
        assert_eq!(state.active_id(), "games");
        assert!(state.is_active("games"));
    }

    #[test]
    fn test_select_unknown_keeps_state() {
        let mut state = TabState::new(athlete_tabs());
        state.select("games");
        assert!(!state.select("injuries"));
        assert!(!state.select(""));
        assert_eq!(state.active_id(), "games");
    }

    #[test]
    fn test_reconfigure_falls_back_to_first() {
        let mut state = TabState::with_initial(athlete_tabs(), "games");
        let other = TabSet::new(vec![Tab::new("week", "Week"), Tab::new("month", "Month")]).unwrap();
        state.reconfigure(other);
        assert_eq!(state.active_id(), "week");
    }

    #[test]
    fn test_reconfigure_keeps_shared_id() {
        let mut state = TabState::with_initial(athlete_tabs(), "games");
        let other = TabSet::new(vec![Tab::new("stats", "Stats"), Tab::new("games", "Games")]).unwrap();
        state.reconfigure(other);
        assert_eq!(state.active_id(), "games");
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut state = TabState::new(athlete_tabs());
        state.next();
        assert_eq!(state.active_id(), "games");
        state.next();
        assert_eq!(state.active_id(), "athletes");
        state.prev();
        assert_eq!(state.active_id(), "games");
    }
}
