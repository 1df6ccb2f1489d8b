//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Loading
//!
//! Catalog loads run as tokio tasks and report back through an mpsc channel
//! as `Action::CatalogLoaded` / `Action::CatalogFailed`. Starting a load
//! aborts the one in flight, and the reducer drops any result whose
//! generation is not the latest.
//!
//! ## Redraw Strategy
//!
//! Draws only after an event or a background action arrives. Idle polls
//! wait up to 500ms.

mod component;
mod components;
mod event;
mod input;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::route::Screen;
use crate::core::state::App;
use crate::data::{DataSource, load_with_timeout};
use crate::tui::components::{ListSelection, SearchBar};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands (navigate, open, back).
    Browse,
    /// Keys edit the search query. Esc or Enter returns to Browse.
    Search,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_mode: InputMode,
    pub search: SearchBar,
    /// Cursor of whichever list the current screen shows.
    pub selection: ListSelection,
    /// Screen and sub-tab the presentation state belongs to.
    view: (Screen, Option<String>),
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        let mut tui = Self {
            input_mode: InputMode::Browse,
            search: SearchBar::new("Search by name, number or position..."),
            selection: ListSelection::default(),
            view: Self::view_of(app),
        };
        tui.selection.clamp(input::row_count(app));
        tui
    }

    fn view_of(app: &App) -> (Screen, Option<String>) {
        (
            app.mounted.screen.clone(),
            app.mounted.active_tab_id().map(str::to_string),
        )
    }

    /// Follows the core after an update: a remount clears the search field,
    /// a remount or sub-tab switch puts the cursor back on the first row.
    pub fn sync(&mut self, app: &App) {
        let view = Self::view_of(app);
        if view != self.view {
            if view.0 != self.view.0 {
                self.search.clear();
                self.input_mode = InputMode::Browse;
            }
            self.selection.reset();
            self.view = view;
        }
        self.selection.clamp(input::row_count(app));
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig, source: Arc<dyn DataSource>) -> std::io::Result<()> {
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes: {}", e);
            None
        }
    };

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut active_load: Option<AbortHandle> = None;

    let effect = update(&mut app, Action::Reload);
    apply_effect(&app, effect, &tx, &mut active_load);

    let mut needs_redraw = true;
    let mut should_quit = false;

    while !should_quit {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let area = terminal.get_frame().area();
            let effect = input::handle_event(&mut app, &mut tui, event, area);
            if effect == Effect::Quit {
                should_quit = true;
                break;
            }
            apply_effect(&app, effect, &tx, &mut active_load);
        }

        // Completions from load tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            tui.sync(&app);
            apply_effect(&app, effect, &tx, &mut active_load);
        }
    }

    if let Some(handle) = active_load.take() {
        handle.abort();
    }
    ratatui::restore();
    info!("Sideline shutting down");
    Ok(())
}

fn apply_effect(
    app: &App,
    effect: Effect,
    tx: &mpsc::Sender<Action>,
    active_load: &mut Option<AbortHandle>,
) {
    if let Effect::LoadCatalog(generation) = effect {
        if let Some(previous) = active_load.take() {
            debug!("Aborting in-flight load before generation {}", generation);
            previous.abort();
        }
        *active_load = Some(spawn_load(app, generation, tx.clone()));
    }
}

fn spawn_load(app: &App, generation: u64, tx: mpsc::Sender<Action>) -> AbortHandle {
    info!("Spawning catalog load (generation {})", generation);
    let source = app.source.clone();
    let timeout = app.load_timeout;
    let handle = tokio::spawn(async move {
        let action = match load_with_timeout(source, timeout).await {
            Ok(catalog) => Action::CatalogLoaded {
                generation,
                catalog,
            },
            Err(e) => Action::CatalogFailed {
                generation,
                error: e.to_string(),
            },
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver catalog load result: receiver dropped");
        }
    });
    handle.abort_handle()
}
