use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::core::catalog::Game;
use crate::tui::component::Component;

pub struct GameDetail<'a> {
    game: &'a Game,
}

impl<'a> GameDetail<'a> {
    pub fn new(game: &'a Game) -> Self {
        Self { game }
    }
}

impl Component for GameDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                self.game.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.game.date.format("%A, %B %-d, %Y").to_string(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::uniform(1));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
