//! # TUI Components
//!
//! All UI pieces for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Receive everything they show as struct fields:
//! - `Header`: title, back affordance and status line
//! - `TabBar`: the four top-level tabs, highlight from the current route
//! - `SubTabs`: sub-tab strip over a borrowed `TabState`
//! - `Placeholder`: centered title/subtitle for empty and error states
//! - `GameDetail`
//!
//! ### Stateful Components
//!
//! - `SearchBar`: owns its buffer, emits `SearchEvent`s
//! - `RowList` and the screens built on it (`AthleteMenu`, `AttributesView`,
//!   `InjuriesView`) borrow a persistent `ListSelection` from `TuiState`
//!
//! ### Props-Based Data Flow
//!
//! Components never reach into `App`. `ui.rs` reads the core state and hands
//! each component exactly what it draws:
//!
//! ```rust,ignore
//! Header::new(screen.title(), screen.shows_back(), &app.status_message)
//!     .render(frame, layout.header);
//! ```

pub mod athlete_menu;
pub mod entity_list;
pub mod game_detail;
pub mod header;
pub mod placeholder;
pub mod records;
pub mod row_list;
pub mod search_bar;
pub mod sub_tabs;
pub mod tab_bar;

pub use athlete_menu::AthleteMenu;
pub use game_detail::GameDetail;
pub use header::Header;
pub use placeholder::Placeholder;
pub use records::{AttributesView, InjuriesView};
pub use row_list::{ListSelection, RowList};
pub use search_bar::{SearchBar, SearchEvent};
pub use sub_tabs::SubTabs;
pub use tab_bar::TabBar;

/// Flattens a test buffer into one string for `contains` assertions.
#[cfg(test)]
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
