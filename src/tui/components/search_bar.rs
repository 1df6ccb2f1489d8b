//! # SearchBar Component
//!
//! Single-line query field with the filter button beside it.
//!
//! The buffer is internal state; `focused` and `placeholder` are props. Every
//! edit emits `SearchEvent::Changed` with the full query so the core can
//! re-filter on each keystroke.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const FILTER_LABEL: &str = "[ Filter ]";
const FILTER_WIDTH: u16 = 12;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    Changed(String),
    /// Enter or Esc: leave the field, keeping the query.
    Done,
}

#[derive(Debug, Default)]
pub struct SearchBar {
    pub buffer: String,
    pub focused: bool,
    pub placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            focused: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.focused = false;
    }

    fn split(area: Rect) -> [Rect; 2] {
        Layout::horizontal([Constraint::Min(0), Constraint::Length(FILTER_WIDTH)]).areas(area)
    }

    /// Whether a click at `column` lands on the filter button.
    pub fn is_filter_hit(area: Rect, column: u16) -> bool {
        let [_, filter] = Self::split(area);
        column >= filter.x && column < filter.x + filter.width
    }
}

impl Component for SearchBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [field_area, filter_area] = Self::split(area);

        let border = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title("Search");

        let field = if self.buffer.is_empty() && !self.focused {
            Paragraph::new(self.placeholder.as_str()).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(self.buffer.as_str())
        };
        frame.render_widget(field.block(block), field_area);

        let button = Paragraph::new(FILTER_LABEL)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(button, filter_area);

        if self.focused {
            let max_x = field_area.x.saturating_add(field_area.width.saturating_sub(2));
            let text_width = u16::try_from(self.buffer.width()).unwrap_or(u16::MAX);
            let x = field_area.x.saturating_add(1).saturating_add(text_width).min(max_x);
            frame.set_cursor_position((x, field_area.y + 1));
        }
    }
}

impl EventHandler for SearchBar {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.push(*c);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Paste(text) => {
                // Single-line field
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                if line.is_empty() {
                    return None;
                }
                self.buffer.push_str(&line);
                Some(SearchEvent::Changed(self.buffer.clone()))
            }
            TuiEvent::Backspace => self
                .buffer
                .pop()
                .map(|_| SearchEvent::Changed(self.buffer.clone())),
            TuiEvent::Submit | TuiEvent::Escape => {
                self.focused = false;
                Some(SearchEvent::Done)
            }
            _ => None,
        }
    }
}
