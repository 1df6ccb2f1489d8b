//! Athlete detail screen: who the athlete is, and the menu of sections.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{ListItem, Paragraph};

use crate::core::catalog::Athlete;
use crate::core::route::AthleteSection;
use crate::tui::component::Component;
use crate::tui::components::row_list::{ListSelection, RowList};

pub struct AthleteMenu<'a> {
    athlete: &'a Athlete,
    selection: &'a mut ListSelection,
}

impl<'a> AthleteMenu<'a> {
    pub fn new(athlete: &'a Athlete, selection: &'a mut ListSelection) -> Self {
        Self { athlete, selection }
    }

    /// Area of the section list within the screen body.
    pub fn menu_area(area: Rect) -> Rect {
        let [_, menu] = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);
        menu
    }
}

impl Component for AthleteMenu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [profile_area, menu_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

        let profile = vec![
            Line::from(Span::styled(
                self.athlete.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("#{} · {}", self.athlete.number, self.athlete.position),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(Paragraph::new(profile), profile_area);

        let rows = AthleteSection::ALL
            .iter()
            .map(|section| ListItem::new(format!("{}  ›", section.title())))
            .collect();
        RowList::new(self.selection, "Athlete Menu", rows)
            .help(" Enter Open  Esc Back ")
            .render(frame, menu_area);
    }
}
