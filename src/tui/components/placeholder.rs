//! # Placeholder Component
//!
//! Centered title and subtitle. Used for the sections that have no content
//! yet and for the loading, not-found and load-failed states.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Muted,
    Error,
}

pub struct Placeholder {
    title: String,
    subtitle: String,
    tone: Tone,
}

impl Placeholder {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            tone: Tone::Normal,
        }
    }

    pub fn loading() -> Self {
        Self::new("Loading...", "Fetching the roster").tone(Tone::Muted)
    }

    pub fn not_found(what: &str, id: &str) -> Self {
        Self::new(format!("{what} not found"), format!("No record with id \"{id}\"")).tone(Tone::Muted)
    }

    pub fn load_failed(reason: &str) -> Self {
        Self::new("Could not load the roster", format!("{reason} (Ctrl+R to retry)")).tone(Tone::Error)
    }

    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }
}

impl Component for Placeholder {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_color = match self.tone {
            Tone::Normal => Color::Yellow,
            Tone::Muted => Color::Gray,
            Tone::Error => Color::Red,
        };
        let lines = vec![
            Line::from(Span::styled(
                self.title.clone(),
                Style::default().fg(title_color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.subtitle.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}
