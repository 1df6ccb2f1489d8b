//! # Header Component
//!
//! One-line bar at the top of every screen: a back affordance on detail
//! screens, the screen title, and the status message on the right.
//!
//! Stateless. All three props come from the core `App`:
//! - `title`: `Screen::title()`
//! - `show_back`: `Screen::shows_back()`
//! - `status_message`: last status set by the reducer

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const BACK_LABEL: &str = "‹ Back";
/// Columns the back affordance occupies, including its trailing gap.
pub const BACK_WIDTH: u16 = 8;

pub struct Header {
    pub title: String,
    pub show_back: bool,
    pub status_message: String,
}

impl Header {
    pub fn new(title: impl Into<String>, show_back: bool, status_message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            show_back,
            status_message: status_message.into(),
        }
    }

    /// Whether a click at `column` in the header row hits the back affordance.
    pub fn is_back_hit(show_back: bool, area: Rect, column: u16) -> bool {
        show_back && column >= area.x && column < area.x + BACK_WIDTH
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let back_width = if self.show_back { BACK_WIDTH } else { 0 };
        let [back_area, title_area] =
            Layout::horizontal([Constraint::Length(back_width), Constraint::Min(0)]).areas(area);

        if self.show_back {
            frame.render_widget(
                Span::styled(BACK_LABEL, Style::default().fg(Color::Cyan)),
                back_area,
            );
        }

        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), title_area);
    }
}
