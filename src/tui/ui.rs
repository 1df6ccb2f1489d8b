use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::catalog::EntityId;
use crate::core::route::{Screen, TopTab};
use crate::core::screen::{DetailView, GAMES_TAB, MountedScreen};
use crate::core::state::{App, LoadState};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::entity_list::listing_rows;
use crate::tui::components::{
    AthleteMenu, AttributesView, GameDetail, Header, InjuriesView, Placeholder, RowList,
    SearchBar, SubTabs, TabBar,
};

/// Screen regions. Computed the same way for drawing and for hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub sub_tabs: Option<Rect>,
    pub search: Option<Rect>,
    pub body: Rect,
    pub tab_bar: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect, mounted: &MountedScreen) -> Self {
        use Constraint::{Length, Min};
        let tabs_height = if mounted.tabs.is_some() { 1 } else { 0 };
        let search_height = if mounted.has_search() { 3 } else { 0 };
        let [header, sub_tabs, search, body, tab_bar] = Layout::vertical([
            Length(1),
            Length(tabs_height),
            Length(search_height),
            Min(0),
            Length(1),
        ])
        .areas(area);
        Self {
            header,
            sub_tabs: (tabs_height > 0).then_some(sub_tabs),
            search: (search_height > 0).then_some(search),
            body,
            tab_bar,
        }
    }

    /// Where the selectable rows start on the current screen.
    pub fn list_area(&self, screen: &Screen) -> Rect {
        match screen {
            Screen::AthleteDetail(_) => AthleteMenu::menu_area(self.body),
            _ => self.body,
        }
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let layout = ScreenLayout::new(frame.area(), &app.mounted);
    let screen = &app.mounted.screen;

    Header::new(screen.title(), screen.shows_back(), app.status_message.as_str())
        .render(frame, layout.header);

    if let (Some(area), Some(tabs)) = (layout.sub_tabs, app.mounted.tabs.as_ref()) {
        SubTabs::new(tabs).render(frame, area);
    }
    if let Some(area) = layout.search {
        tui.search.render(frame, area);
    }

    draw_body(frame, layout.body, app, tui);

    TabBar::new(app.active_top_tab()).render(frame, layout.tab_bar);
}

fn draw_body(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let catalog = &app.catalog;
    match &app.mounted.screen {
        Screen::Home => Placeholder::new("Welcome Home", "This is your main dashboard").render(frame, area),
        Screen::Trainings => {
            Placeholder::new("Trainings", "Training programs and exercises").render(frame, area)
        }
        Screen::Analysis => {
            Placeholder::new("Analysis", "Performance analytics and reports").render(frame, area)
        }
        Screen::AthleteList => match &app.load_state {
            LoadState::Loading => Placeholder::loading().render(frame, area),
            LoadState::Failed(reason) => Placeholder::load_failed(reason).render(frame, area),
            LoadState::Ready | LoadState::Refreshing => {
                let listing = app.listing();
                let (title, empty) = if app.mounted.active_tab_id() == Some(GAMES_TAB) {
                    ("Games", "No games match your search.")
                } else {
                    ("Athletes", "No athletes match your search.")
                };
                RowList::new(&mut tui.selection, title, listing_rows(&listing, area.width))
                    .empty_message(empty)
                    .help(" / Search  Enter Open  Tab Switch ")
                    .render(frame, area);
            }
        },
        Screen::AthleteDetail(id) => match DetailView::resolve(&app.load_state, id, |id| catalog.athlete(id)) {
            DetailView::Found(athlete) => AthleteMenu::new(athlete, &mut tui.selection).render(frame, area),
            other => draw_missing(frame, area, "Athlete", id, other),
        },
        Screen::Attributes(id) => match DetailView::resolve(&app.load_state, id, |id| catalog.athlete(id)) {
            DetailView::Found(athlete) => {
                AttributesView::new(athlete, catalog.attributes(id), &mut tui.selection).render(frame, area)
            }
            other => draw_missing(frame, area, "Athlete", id, other),
        },
        Screen::Injuries(id) => match DetailView::resolve(&app.load_state, id, |id| catalog.athlete(id)) {
            DetailView::Found(athlete) => {
                InjuriesView::new(athlete, catalog.injuries(id), &mut tui.selection).render(frame, area)
            }
            other => draw_missing(frame, area, "Athlete", id, other),
        },
        Screen::GameDetail(id) => match DetailView::resolve(&app.load_state, id, |id| catalog.game(id)) {
            DetailView::Found(game) => GameDetail::new(game).render(frame, area),
            other => draw_missing(frame, area, "Game", id, other),
        },
        Screen::Unknown(route) => {
            Placeholder::new("Page not found", format!("Nothing lives at {route}")).render(frame, area)
        }
    }
}

fn draw_missing<T>(frame: &mut Frame, area: Rect, what: &str, id: &EntityId, view: DetailView<T>) {
    let mut placeholder = match view {
        DetailView::Loading => Placeholder::loading(),
        DetailView::LoadFailed(reason) => Placeholder::load_failed(&reason),
        DetailView::NotFound(_) | DetailView::Found(_) => Placeholder::not_found(what, id.as_str()),
    };
    placeholder.render(frame, area);
}

/// What a mouse click landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Back,
    TopTab(TopTab),
    SubTab(String),
    Filter,
    Search,
    Row(usize),
}

pub fn hit_test(area: Rect, app: &App, tui: &TuiState, column: u16, row: u16, rows: usize) -> Option<Hit> {
    let layout = ScreenLayout::new(area, &app.mounted);
    let inside = |r: Rect| row >= r.y && row < r.y + r.height && column >= r.x && column < r.x + r.width;

    if inside(layout.tab_bar) {
        return TabBar::tab_at(layout.tab_bar, column).map(Hit::TopTab);
    }
    if inside(layout.header) {
        return Header::is_back_hit(app.mounted.screen.shows_back(), layout.header, column)
            .then_some(Hit::Back);
    }
    if let (Some(r), Some(tabs)) = (layout.sub_tabs, app.mounted.tabs.as_ref())
        && inside(r)
    {
        return SubTabs::tab_at(tabs, r, column).map(Hit::SubTab);
    }
    if let Some(r) = layout.search
        && inside(r)
    {
        return Some(if SearchBar::is_filter_hit(r, column) {
            Hit::Filter
        } else {
            Hit::Search
        });
    }
    let list = layout.list_area(&app.mounted.screen);
    if inside(list) {
        return tui.selection.row_at(list, row, rows).map(Hit::Row);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use crate::test_support::{loaded_app_at, test_app_at};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut tui = TuiState::new(app);
        terminal.draw(|f| draw_ui(f, app, &mut tui)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_home_screen() {
        let text = render(&loaded_app_at("/"));
        assert!(text.contains("Welcome Home"));
        assert!(text.contains("Athlete"));
        assert!(!text.contains("Back"));
    }

    #[test]
    fn test_athlete_list_shows_roster() {
        let text = render(&loaded_app_at("/athlete"));
        assert!(text.contains("John Smith"));
        assert!(text.contains("Kevin Lee"));
        assert!(text.contains("Games"));
        assert!(text.contains("[ Filter ]"));
    }

    #[test]
    fn test_athlete_list_while_loading() {
        let text = render(&test_app_at("/athlete"));
        assert!(text.contains("Loading..."));
        assert!(!text.contains("John Smith"));
    }

    #[test]
    fn test_athlete_list_after_failure() {
        let mut app = test_app_at("/athlete");
        app.load_state = LoadState::Failed("data source unavailable: offline".into());
        let text = render(&app);
        assert!(text.contains("Could not load the roster"));
        assert!(text.contains("offline"));
    }

    #[test]
    fn test_athlete_menu() {
        let text = render(&loaded_app_at("/athlete/2"));
        assert!(text.contains("Back"));
        assert!(text.contains("Mike Johnson"));
        assert!(text.contains("Attributes"));
        assert!(text.contains("Injury Records"));
        assert!(text.contains("Game Records"));
    }

    #[test]
    fn test_unknown_athlete_renders_not_found() {
        let text = render(&loaded_app_at("/athlete/999"));
        assert!(text.contains("Athlete not found"));
    }

    #[test]
    fn test_attributes_and_injuries() {
        let text = render(&loaded_app_at("/athlete/1/attributes"));
        assert!(text.contains("Physical & Performance Measurements"));
        assert!(text.contains("Height"));

        let text = render(&loaded_app_at("/athlete/1/injuries"));
        assert!(text.contains("Ankle Injuries"));
        assert!(text.contains("No incidents"));
        assert!(text.contains("2 incidents"));
    }

    #[test]
    fn test_athlete_without_records_shows_empty_lists() {
        let text = render(&loaded_app_at("/athlete/5/attributes"));
        assert!(text.contains("No measurements recorded."));
    }

    #[test]
    fn test_game_detail() {
        let text = render(&loaded_app_at("/games/g1"));
        assert!(text.contains("Season Opener"));
        assert!(text.contains("2024"));
    }

    #[test]
    fn test_unknown_path() {
        let text = render(&loaded_app_at("/settings"));
        assert!(text.contains("Page not found"));
        assert!(text.contains("/settings"));
    }

    #[test]
    fn test_layout_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let list = ScreenLayout::new(area, &loaded_app_at("/athlete").mounted);
        assert_eq!(list.header.y, 0);
        assert_eq!(list.sub_tabs.map(|r| r.y), Some(1));
        assert_eq!(list.search.map(|r| r.y), Some(2));
        assert_eq!(list.body.y, 5);
        assert_eq!(list.tab_bar.y, 23);

        let home = ScreenLayout::new(area, &loaded_app_at("/").mounted);
        assert_eq!(home.sub_tabs, None);
        assert_eq!(home.body.y, 1);
    }

    #[test]
    fn test_hit_test_regions() {
        let area = Rect::new(0, 0, 80, 24);
        let app = loaded_app_at("/athlete");
        let tui = TuiState::new(&app);
        assert_eq!(hit_test(area, &app, &tui, 30, 23, 8), Some(Hit::TopTab(TopTab::Athlete)));
        assert_eq!(hit_test(area, &app, &tui, 60, 1, 8), Some(Hit::SubTab("games".into())));
        assert_eq!(hit_test(area, &app, &tui, 75, 3, 8), Some(Hit::Filter));
        assert_eq!(hit_test(area, &app, &tui, 10, 3, 8), Some(Hit::Search));
        // body starts at 5, first row below its border
        assert_eq!(hit_test(area, &app, &tui, 10, 6, 8), Some(Hit::Row(0)));
        assert_eq!(hit_test(area, &app, &tui, 10, 8, 8), Some(Hit::Row(2)));
        assert_eq!(hit_test(area, &app, &tui, 2, 0, 8), None);
    }

    #[test]
    fn test_hit_test_back_on_detail() {
        let area = Rect::new(0, 0, 80, 24);
        let app = loaded_app_at("/athlete/1");
        let tui = TuiState::new(&app);
        assert_eq!(hit_test(area, &app, &tui, 2, 0, 3), Some(Hit::Back));
        // menu sits below the 3-line profile
        assert_eq!(hit_test(area, &app, &tui, 5, 5, 3), Some(Hit::Row(0)));
    }
}
