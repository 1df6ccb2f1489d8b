//! Turns `TuiEvent`s into core actions, modal on `InputMode`.
//!
//! Keys in browse mode:
//!
//! ```text
//! ↑/↓  move    Enter  open     Esc/Backspace  back    1-4  top tabs
//! Tab  sub-tab /      search   f  filter   e/d/a  edit/delete/add
//! q    quit    Ctrl+R reload   Ctrl+C  quit from anywhere
//! ```

use log::debug;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::catalog::{EntityId, RowId};
use crate::core::navigation::EntityKind;
use crate::core::route::{AthleteSection, Screen, TopTab};
use crate::core::screen::{DetailView, GAMES_TAB};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::SearchEvent;
use crate::tui::event::TuiEvent;
use crate::tui::ui::{self, Hit};
use crate::tui::{InputMode, TuiState};

pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, area: Rect) -> Effect {
    let effect = dispatch(app, tui, event, area);
    tui.sync(app);
    effect
}

fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, area: Rect) -> Effect {
    match event {
        TuiEvent::Resize => return Effect::None,
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Reload => return update(app, Action::Reload),
        TuiEvent::MouseClick(column, row) => return click(app, tui, area, column, row),
        _ => {}
    }

    // The field owns all typing while focused; list movement still works
    if tui.input_mode == InputMode::Search
        && !matches!(
            event,
            TuiEvent::CursorUp | TuiEvent::CursorDown | TuiEvent::NextTab | TuiEvent::PrevTab
        )
    {
        return match tui.search.handle_event(&event) {
            Some(SearchEvent::Changed(query)) => update(app, Action::QueryChanged(query)),
            Some(SearchEvent::Done) => {
                tui.input_mode = InputMode::Browse;
                Effect::None
            }
            None => Effect::None,
        };
    }

    let rows = row_count(app);
    match event {
        TuiEvent::CursorUp => {
            tui.selection.move_up(rows);
            Effect::None
        }
        TuiEvent::CursorDown => {
            tui.selection.move_down(rows);
            Effect::None
        }
        TuiEvent::NextTab => update(app, Action::NextTab),
        TuiEvent::PrevTab => update(app, Action::PrevTab),
        TuiEvent::Submit => activate(app, tui),
        TuiEvent::Escape | TuiEvent::Backspace => update(app, Action::Back),
        TuiEvent::InputChar('q') => update(app, Action::Quit),
        TuiEvent::InputChar('/') if app.mounted.has_search() => {
            focus_search(tui);
            Effect::None
        }
        TuiEvent::InputChar('f') if app.mounted.has_search() => update(app, Action::OpenFilter),
        TuiEvent::InputChar(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            update(app, Action::TopTabPressed(TopTab::ALL[index]))
        }
        TuiEvent::InputChar('e') => match selected_row(app, tui) {
            Some(row) => update(app, Action::EditRow(row)),
            None => Effect::None,
        },
        TuiEvent::InputChar('d') => match selected_row(app, tui) {
            Some(row) => update(app, Action::DeleteRow(row)),
            None => Effect::None,
        },
        TuiEvent::InputChar('a') => update(app, Action::AddRecord),
        // Pasting on a searchable screen goes straight into the field
        TuiEvent::Paste(_) if app.mounted.has_search() => {
            focus_search(tui);
            match tui.search.handle_event(&event) {
                Some(SearchEvent::Changed(query)) => update(app, Action::QueryChanged(query)),
                _ => Effect::None,
            }
        }
        other => {
            debug!("Unhandled event in browse mode: {:?}", other);
            Effect::None
        }
    }
}

fn focus_search(tui: &mut TuiState) {
    tui.input_mode = InputMode::Search;
    tui.search.focused = true;
}

fn click(app: &mut App, tui: &mut TuiState, area: Rect, column: u16, row: u16) -> Effect {
    let rows = row_count(app);
    let Some(hit) = ui::hit_test(area, app, tui, column, row, rows) else {
        return Effect::None;
    };
    debug!("Click hit {:?}", hit);
    match hit {
        Hit::Back => update(app, Action::Back),
        Hit::TopTab(tab) => update(app, Action::TopTabPressed(tab)),
        Hit::SubTab(id) => update(app, Action::SelectTab(id)),
        Hit::Filter => update(app, Action::OpenFilter),
        Hit::Search => {
            focus_search(tui);
            Effect::None
        }
        Hit::Row(index) => {
            tui.selection.select(Some(index));
            activate(app, tui)
        }
    }
}

/// Enter on the selected row.
fn activate(app: &mut App, tui: &TuiState) -> Effect {
    let Some(index) = tui.selection.selected() else {
        return Effect::None;
    };
    let action = match &app.mounted.screen {
        Screen::AthleteList => {
            let kind = if app.mounted.active_tab_id() == Some(GAMES_TAB) {
                EntityKind::Game
            } else {
                EntityKind::Athlete
            };
            app.listing()
                .id_at(index)
                .cloned()
                .map(|id| Action::OpenEntity(kind, id))
        }
        Screen::AthleteDetail(_) => AthleteSection::ALL
            .get(index)
            .map(|section| Action::OpenSection(*section)),
        Screen::Attributes(_) => selected_row(app, tui).map(Action::EditRow),
        Screen::Injuries(_) => selected_row(app, tui).map(Action::OpenInjury),
        _ => None,
    };
    match action {
        Some(action) => update(app, action),
        None => Effect::None,
    }
}

/// Synthetic id of the selected attribute or injury row.
fn selected_row(app: &App, tui: &TuiState) -> Option<RowId> {
    let index = tui.selection.selected()?;
    match &app.mounted.screen {
        Screen::Attributes(id) => app.catalog.attributes(id).get(index).map(|r| r.id),
        Screen::Injuries(id) => app.catalog.injuries(id).get(index).map(|r| r.id),
        _ => None,
    }
}

/// Number of selectable rows on the current screen.
pub fn row_count(app: &App) -> usize {
    let catalog = &app.catalog;
    let athlete_found = |id: &EntityId| {
        matches!(
            DetailView::resolve(&app.load_state, id, |id| catalog.athlete(id)),
            DetailView::Found(_)
        )
    };
    match &app.mounted.screen {
        Screen::AthleteList => app.listing().len(),
        Screen::AthleteDetail(id) if athlete_found(id) => AthleteSection::ALL.len(),
        Screen::Attributes(id) if athlete_found(id) => catalog.attributes(id).len(),
        Screen::Injuries(id) if athlete_found(id) => catalog.injuries(id).len(),
        _ => 0,
    }
}
