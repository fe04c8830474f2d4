//! TUI rendering with ratatui
//!
//! The screen is a header, the feedback grid, suggestion/history panels,
//! an input line and a status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Tile, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};
use std::rc::Rc;

const TILE_WIDTH: u16 = 7;

fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Grid
            Constraint::Min(8),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(area)
}

fn grid_block() -> Block<'static> {
    Block::default()
        .title(" Your Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Screen areas of the grid tiles, left to right
///
/// Rendering and mouse hit-testing both use this, so a click always lands
/// on the tile drawn under it.
#[must_use]
pub fn tile_areas(screen: Rect) -> [Rect; WORD_LENGTH] {
    let inner = grid_block().inner(screen_chunks(screen)[1]);
    let tiles = Layout::horizontal([Constraint::Length(TILE_WIDTH); WORD_LENGTH])
        .flex(Flex::Center)
        .spacing(1_u16)
        .split(inner);
    std::array::from_fn(|i| tiles[i])
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = screen_chunks(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Suggestions
            Constraint::Percentage(50), // History and messages
        ])
        .split(chunks[2]);

    render_suggestions(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE RANKER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

const fn tile_color(tile: Tile) -> Color {
    match tile {
        Tile::Correct => Color::Green,
        Tile::Present => Color::Yellow,
        Tile::Absent => Color::DarkGray,
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    f.render_widget(grid_block(), area);

    let Some(word) = &app.word else {
        let inner = grid_block().inner(area);
        let empty = Paragraph::new("No suggestion available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Red));
        f.render_widget(empty, inner);
        return;
    };

    let editing = app.input_mode == InputMode::Grid;
    for (i, tile_area) in tile_areas(f.area()).into_iter().enumerate() {
        let letter = char::from(word.char_at(i)).to_ascii_uppercase();
        let border = if editing && i == app.selected {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(tile_color(app.feedback.tile(i)))
        };
        let tile = Paragraph::new(letter.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Black)
                    .bg(tile_color(app.feedback.tile(i)))
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if editing && i == app.selected {
                        BorderType::Thick
                    } else {
                        BorderType::Plain
                    })
                    .border_style(border),
            );
        f.render_widget(tile, tile_area);
    }
}

fn render_suggestions(f: &mut Frame, app: &App, area: Rect) {
    let top = app.engine.top(app.top);

    let content: Vec<Line> = if top.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates remain",
            Style::default().fg(Color::Red),
        ))]
    } else {
        top.iter()
            .enumerate()
            .map(|(i, ranked)| {
                let bar_len = ((ranked.score / WORD_LENGTH as f64).max(0.0) * 12.0) as usize;
                let bar =
                    "█".repeat(bar_len.min(12)) + &"░".repeat(12_usize.saturating_sub(bar_len));
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{:>2}. ", i + 1)),
                    Span::styled(ranked.word.text().to_uppercase(), style),
                    Span::styled(format!(" {bar}"), Style::default().fg(Color::Cyan)),
                    Span::raw(format!(" {:.3}", ranked.score)),
                ])
            })
            .collect()
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(format!(" Suggestions ({} candidates) ", app.engine.pool_size()))
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Pool gauge
            Constraint::Percentage(50), // History
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_pool_gauge(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_pool_gauge(f: &mut Frame, app: &App, area: Rect) {
    let total = app.engine.dictionary().len().max(1);
    let remaining = app.engine.pool_size();
    let eliminated_pct = ((total - remaining.min(total)) * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated_pct)
        .label(format!("{remaining}/{total} words remain"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                i + 1,
                entry.guess.word.text().to_uppercase(),
                entry.guess.feedback.to_emoji(),
                entry.candidates_before,
                entry.candidates_after
            ))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Grid => (
            " Mark the colours, then Enter | TAB to enter the word you played ",
            app.feedback.to_string(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Enter Word Played (5 letters) | ESC to cancel ",
            app.manual_word.clone(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let stats_text = format!(
        "Solved: {} | Avg guesses: {:.2}",
        app.stats.games_won,
        app.stats.average_guesses()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.input_mode {
        InputMode::Solved => "q: Quit | n: New Game | u: Undo",
        InputMode::ManualWord => "Enter: Use word | Esc: Cancel",
        InputMode::Grid => {
            "←/→: Select | Space/1-5/Click: Colour | Enter: Submit | u: Undo | q: Quit"
        }
    };
    f.render_widget(
        Paragraph::new(help_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Position;

    #[test]
    fn tiles_are_disjoint_and_inside_grid() {
        let screen = Rect::new(0, 0, 80, 24);
        let grid = screen_chunks(screen)[1];
        let tiles = tile_areas(screen);

        for pair in tiles.windows(2) {
            assert!(pair[0].right() <= pair[1].x);
        }
        for tile in tiles {
            assert_eq!(tile.width, TILE_WIDTH);
            assert!(grid.contains(Position::new(tile.x, tile.y)));
        }
    }
}
