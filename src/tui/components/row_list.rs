//! # Row List Component
//!
//! Every selectable list in the app (athletes, games, the athlete menu,
//! attribute rows, injury categories) renders through this.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ListSelection` lives in `TuiState` and survives between frames
//! - `RowList` is created each frame with borrowed state and fresh rows

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};

use crate::tui::component::Component;

/// Cursor over a list whose length can change under it.
#[derive(Debug, Default)]
pub struct ListSelection {
    pub list_state: ListState,
}

impl ListSelection {
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.list_state.select(index);
    }

    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(next));
    }

    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = self.selected().map_or(0, |i| (i + 1).min(len - 1));
        self.list_state.select(Some(next));
    }

    /// Keeps the cursor inside `0..len` after the rows changed, e.g. when
    /// the query narrowed the list.
    pub fn clamp(&mut self, len: usize) {
        match (self.selected(), len) {
            (_, 0) => self.list_state.select(None),
            (None, _) => self.list_state.select(Some(0)),
            (Some(i), _) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }

    /// Row index under a screen row inside a list drawn at `area`.
    pub fn row_at(&self, area: Rect, row: u16, len: usize) -> Option<usize> {
        let first = area.y + 1; // top border
        let last = area.y + area.height.saturating_sub(1);
        if row < first || row >= last {
            return None;
        }
        let index = self.list_state.offset() + (row - first) as usize;
        (index < len).then_some(index)
    }

    pub fn reset(&mut self) {
        self.list_state = ListState::default();
    }
}

/// Transient render wrapper for a bordered, selectable list.
pub struct RowList<'a> {
    state: &'a mut ListSelection,
    title: String,
    rows: Vec<ListItem<'a>>,
    empty_message: &'a str,
    help: Option<&'a str>,
}

impl<'a> RowList<'a> {
    pub fn new(state: &'a mut ListSelection, title: impl Into<String>, rows: Vec<ListItem<'a>>) -> Self {
        Self {
            state,
            title: title.into(),
            rows,
            empty_message: "Nothing to show.",
            help: None,
        }
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    pub fn help(mut self, help: &'a str) -> Self {
        self.help = Some(help);
        self
    }
}

impl Component for RowList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.title))
            .padding(Padding::horizontal(1));
        if let Some(help) = self.help {
            block = block.title_bottom(Line::from(help).centered());
        }

        if self.rows.is_empty() {
            let empty = Paragraph::new(self.empty_message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let list = List::new(std::mem::take(&mut self.rows))
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            );
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

/// Truncate a string to fit within `max_width` chars, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    let count = s.chars().count();
    if count <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let kept: String = s.chars().take(max_width - 3).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_move_within_bounds() {
        let mut sel = ListSelection::default();
        sel.move_down(3);
        assert_eq!(sel.selected(), Some(0));
        sel.move_down(3);
        sel.move_down(3);
        sel.move_down(3);
        assert_eq!(sel.selected(), Some(2));
        sel.move_up(3);
        assert_eq!(sel.selected(), Some(1));
    }

    #[test]
    fn test_moves_on_empty_list_do_nothing() {
        let mut sel = ListSelection::default();
        sel.move_down(0);
        sel.move_up(0);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_clamp_after_list_shrinks() {
        let mut sel = ListSelection::default();
        sel.select(Some(6));
        sel.clamp(3);
        assert_eq!(sel.selected(), Some(2));
        sel.clamp(0);
        assert_eq!(sel.selected(), None);
        sel.clamp(4);
        assert_eq!(sel.selected(), Some(0));
    }

    #[test]
    fn test_row_at_skips_borders() {
        let sel = ListSelection::default();
        let area = Rect::new(0, 5, 40, 6);
        assert_eq!(sel.row_at(area, 5, 10), None);
        assert_eq!(sel.row_at(area, 6, 10), Some(0));
        assert_eq!(sel.row_at(area, 9, 10), Some(3));
        assert_eq!(sel.row_at(area, 10, 10), None);
        assert_eq!(sel.row_at(area, 8, 2), None);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Kevin Lee", 20), "Kevin Lee");
        assert_eq!(truncate_str("Achilles Tendon Injuries", 10), "Achille...");
        assert_eq!(truncate_str("Derby", 2), "..");
    }

    #[test]
    fn test_empty_list_shows_message() {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        let mut sel = ListSelection::default();
        terminal
            .draw(|f| {
                RowList::new(&mut sel, "Athletes", Vec::new())
                    .empty_message("No athletes match.")
                    .render(f, f.area())
            })
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("No athletes match."));
        assert!(text.contains("Athletes"));
    }
}
