//! Rows for the athlete section's list, one per filtered record.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;

use crate::core::catalog::{Athlete, Game};
use crate::core::screen::Listing;
use crate::tui::components::row_list::truncate_str;

const NUMBER_WIDTH: usize = 5;
const DATE_WIDTH: usize = 10;

pub fn listing_rows<'a>(listing: &Listing<'a>, width: u16) -> Vec<ListItem<'a>> {
    // borders + padding + highlight gap
    let inner = (width as usize).saturating_sub(4);
    match listing {
        Listing::Athletes(rows) => rows.iter().map(|a| athlete_row(a, inner)).collect(),
        Listing::Games(rows) => rows.iter().map(|g| game_row(g, inner)).collect(),
        Listing::None => Vec::new(),
    }
}

fn athlete_row(athlete: &Athlete, inner: usize) -> ListItem<'static> {
    let position_width = athlete.position.chars().count();
    let name_width = inner.saturating_sub(NUMBER_WIDTH + position_width + 2);
    let name = truncate_str(&athlete.name, name_width);
    ListItem::new(Line::from(vec![
        Span::styled(
            format!("{:<w$}", format!("#{}", athlete.number), w = NUMBER_WIDTH),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!("{name:<name_width$}  ")),
        Span::styled(athlete.position.clone(), Style::default().fg(Color::DarkGray)),
    ]))
}

fn game_row(game: &Game, inner: usize) -> ListItem<'static> {
    let name_width = inner.saturating_sub(DATE_WIDTH + 2);
    let name = truncate_str(&game.name, name_width);
    ListItem::new(Line::from(vec![
        Span::raw(format!("{name:<name_width$}  ")),
        Span::styled(game.date_label(), Style::default().fg(Color::DarkGray)),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{athlete, game};

    #[test]
    fn test_one_row_per_record() {
        let a = athlete("1", "10", "John Smith", "Forward");
        let b = athlete("2", "7", "Mike Johnson", "Midfielder");
        assert_eq!(listing_rows(&Listing::Athletes(vec![&a, &b]), 60).len(), 2);
        assert!(listing_rows(&Listing::None, 60).is_empty());
    }

    #[test]
    fn test_game_row_shows_date() {
        let g = game("g1", "Season Opener", 2024, 3, 2);
        let row = game_row(&g, 40);
        let line: String = format!("{:?}", row);
        assert!(line.contains("2024-03-02"));
    }
}
