//! # Tab Bar Component
//!
//! The bottom bar with the four top-level tabs. The highlighted tab is a
//! prop computed by the core from the current route, so drill-down screens
//! keep their section highlighted.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::route::TopTab;
use crate::tui::component::Component;

pub struct TabBar {
    pub active: Option<TopTab>,
}

impl TabBar {
    pub fn new(active: Option<TopTab>) -> Self {
        Self { active }
    }

    fn slots(area: Rect) -> [Rect; 4] {
        Layout::horizontal([Constraint::Ratio(1, 4); 4]).areas(area)
    }

    /// The tab under `column`, if the click landed inside the bar.
    pub fn tab_at(area: Rect, column: u16) -> Option<TopTab> {
        Self::slots(area)
            .iter()
            .position(|slot| column >= slot.x && column < slot.x + slot.width)
            .map(|i| TopTab::ALL[i])
    }
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (i, (tab, slot)) in TopTab::ALL.iter().zip(Self::slots(area)).enumerate() {
            let style = if self.active == Some(*tab) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let label = format!("{} {}", i + 1, tab.label());
            frame.render_widget(
                Paragraph::new(label).style(style).alignment(Alignment::Center),
                slot,
            );
        }
    }
}
