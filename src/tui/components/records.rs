//! Attribute and injury record screens for one athlete.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::core::catalog::{Athlete, AttributeRow, InjuryCategory};
use crate::tui::component::Component;
use crate::tui::components::row_list::{ListSelection, RowList, truncate_str};

const LABEL_WIDTH: usize = 18;

pub struct AttributesView<'a> {
    athlete: &'a Athlete,
    rows: &'a [AttributeRow],
    selection: &'a mut ListSelection,
}

impl<'a> AttributesView<'a> {
    pub fn new(athlete: &'a Athlete, rows: &'a [AttributeRow], selection: &'a mut ListSelection) -> Self {
        Self {
            athlete,
            rows,
            selection,
        }
    }
}

impl Component for AttributesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = self
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<LABEL_WIDTH$}", truncate_str(&row.label, LABEL_WIDTH))),
                    Span::styled(row.primary.clone(), Style::default().fg(Color::White)),
                    Span::styled(format!("  {}", row.secondary.trim()), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();
        RowList::new(
            self.selection,
            format!("{}: Physical & Performance Measurements", self.athlete.name),
            items,
        )
        .empty_message("No measurements recorded.")
        .help(" e Edit  d Delete  a Add New Measurement  Esc Back ")
        .render(frame, area);
    }
}

pub struct InjuriesView<'a> {
    athlete: &'a Athlete,
    rows: &'a [InjuryCategory],
    selection: &'a mut ListSelection,
}

impl<'a> InjuriesView<'a> {
    pub fn new(athlete: &'a Athlete, rows: &'a [InjuryCategory], selection: &'a mut ListSelection) -> Self {
        Self {
            athlete,
            rows,
            selection,
        }
    }
}

impl Component for InjuriesView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items = self
            .rows
            .iter()
            .map(|injury| {
                let summary_style = if injury.incidents > 0 {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{}  ", injury.kind)),
                    Span::styled(injury.incident_summary(), summary_style),
                ]))
            })
            .collect();
        RowList::new(self.selection, format!("{}: Injury Records", self.athlete.name), items)
            .empty_message("No injury categories recorded.")
            .help(" Enter View  a Add Injury  Esc Back ")
            .render(frame, area);
    }
}
