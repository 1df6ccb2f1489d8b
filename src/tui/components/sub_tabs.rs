//! Sub-tab strip for screens that carry a `TabState`.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Paragraph;

use crate::core::tabs::TabState;
use crate::tui::component::Component;

pub struct SubTabs<'a> {
    state: &'a TabState,
}

impl<'a> SubTabs<'a> {
    pub fn new(state: &'a TabState) -> Self {
        Self { state }
    }

    fn slots(area: Rect, count: usize) -> Vec<Rect> {
        let count = count.max(1) as u32;
        Layout::horizontal((0..count).map(|_| Constraint::Ratio(1, count)))
            .split(area)
            .to_vec()
    }

    /// Id of the tab under `column`.
    pub fn tab_at(state: &TabState, area: Rect, column: u16) -> Option<String> {
        let tabs = state.tabs();
        Self::slots(area, tabs.len())
            .iter()
            .position(|slot| column >= slot.x && column < slot.x + slot.width)
            .and_then(|i| tabs.get(i))
            .map(|tab| tab.id.clone())
    }
}

impl Component for SubTabs<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tabs = self.state.tabs();
        for (tab, slot) in tabs.iter().zip(Self::slots(area, tabs.len())) {
            let style = if self.state.is_active(&tab.id) {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(
                Paragraph::new(tab.label.as_str())
                    .style(style)
                    .alignment(Alignment::Center),
                slot,
            );
        }
    }
}
