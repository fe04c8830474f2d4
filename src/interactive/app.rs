//! TUI application state and logic

use crate::core::{Feedback, Guess, WORD_LENGTH, Word};
use crate::solver::Engine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Position, Rect},
};
use std::io;

/// Application state
pub struct App<'a> {
    pub engine: Engine<'a>,
    /// Word shown in the grid: the top suggestion or a manually entered word
    pub word: Option<Word>,
    /// Feedback being edited for `word`
    pub feedback: Feedback,
    /// Grid position the keyboard acts on
    pub selected: usize,
    /// Number of suggestions listed
    pub top: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Editing feedback tiles in the grid
    Grid,
    ManualWord,
    Solved,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Guess,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_won: usize,
    pub total_guesses: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_guesses as f64 / self.games_won as f64
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a [Word], top: usize) -> Self {
        let mut app = Self {
            engine: Engine::new(dictionary),
            word: None,
            feedback: Feedback::default(),
            selected: 0,
            top,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Grid,
            manual_word: String::new(),
        };
        app.add_message(
            "Welcome! Play the suggested word, then mark each letter's colour.",
            MessageStyle::Info,
        );
        app.add_message(
            "Click a tile or press Space/1-5 to cycle its colour, Enter to submit.",
            MessageStyle::Info,
        );
        app.load_suggestion();
        app
    }

    /// Put the best-ranked candidate into the grid with blank feedback
    fn load_suggestion(&mut self) {
        self.word = self.engine.best().map(|r| r.word.clone());
        self.feedback = Feedback::default();
        self.selected = 0;
        if self.word.is_none() {
            self.add_message(
                "No suggestion available - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            );
        }
    }

    /// Advance the colour of the tile at `position`
    pub fn cycle_tile(&mut self, position: usize) {
        if self.input_mode != InputMode::Grid || self.word.is_none() || position >= WORD_LENGTH {
            return;
        }
        self.selected = position;
        self.feedback.cycle(position);
    }

    /// Record the grid word with its feedback and recompute the ranking
    pub fn submit(&mut self) {
        let Some(word) = self.word.clone() else {
            self.add_message("No word to submit!", MessageStyle::Error);
            return;
        };

        let guess = Guess::new(word, self.feedback);
        let candidates_before = self.engine.pool_size();
        debug!("submitting {guess}");
        self.engine.record(guess.clone());
        let candidates_after = self.engine.pool_size();

        self.history.push(HistoryEntry {
            guess: guess.clone(),
            candidates_before,
            candidates_after,
        });

        if guess.feedback.is_solved() {
            let guess_count = self.history.len();
            self.stats.games_won += 1;
            self.stats.total_guesses += guess_count;
            self.input_mode = InputMode::Solved;

            let celebration = match guess_count {
                1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                3 => "✨ SPLENDID! Three guesses! ✨",
                4 => "👏 GREAT JOB! Four guesses! 👏",
                5 => "🎉 NICE WORK! Five guesses! 🎉",
                6 => "😅 PHEW! Got it in six! 😅",
                _ => "🎊 SOLVED! 🎊",
            };
            self.add_message(celebration, MessageStyle::Success);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            return;
        }

        self.load_suggestion();
        if candidates_after > 0 {
            self.add_message(
                &format!("{candidates_after} candidates remaining"),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        self.engine.reset();
        self.history.clear();
        self.messages.clear();
        self.manual_word.clear();
        self.input_mode = InputMode::Grid;
        self.add_message("New game started!", MessageStyle::Info);
        self.load_suggestion();
    }

    /// Take back the last guess and put it into the grid for editing
    pub fn undo_last(&mut self) {
        let Some(guess) = self.engine.undo() else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
            return;
        };
        self.history.pop();
        if self.input_mode == InputMode::Solved {
            self.stats.games_won -= 1;
            self.stats.total_guesses -= self.history.len() + 1;
        }
        self.input_mode = InputMode::Grid;
        self.word = Some(guess.word);
        self.feedback = guess.feedback;
        self.selected = 0;
        self.add_message("Undone! Fix the colours and press Enter.", MessageStyle::Info);
    }

    /// Replace the grid word with the one typed in manual mode
    pub fn use_manual_word(&mut self) {
        match Word::new(self.manual_word.as_str()) {
            Ok(word) => {
                self.add_message(
                    &format!("Using: {}", word.text().to_uppercase()),
                    MessageStyle::Success,
                );
                self.word = Some(word);
                self.feedback = Feedback::default();
                self.selected = 0;
                self.input_mode = InputMode::Grid;
                self.manual_word.clear();
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Solved => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n' | 'r') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Grid => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n' | 'r') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                KeyCode::Left => self.selected = self.selected.saturating_sub(1),
                KeyCode::Right => self.selected = (self.selected + 1).min(WORD_LENGTH - 1),
                KeyCode::Char(' ') | KeyCode::Up | KeyCode::Down => self.cycle_tile(self.selected),
                KeyCode::Char(c @ '1'..='5') => {
                    self.cycle_tile(usize::from(c as u8 - b'1'));
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => {
                    self.input_mode = InputMode::ManualWord;
                    self.add_message("Enter the word you played (5 letters)", MessageStyle::Info);
                }
                _ => {}
            },
            InputMode::ManualWord => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Grid;
                    self.manual_word.clear();
                    self.add_message("Cancelled manual word entry", MessageStyle::Info);
                }
                KeyCode::Char(c) => {
                    if self.manual_word.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                        self.manual_word.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.manual_word.pop();
                }
                KeyCode::Enter => self.use_manual_word(),
                _ => {}
            },
        }
    }

    /// Left clicks on a grid tile cycle its colour
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);
        if let Some(index) = super::rendering::tile_areas(screen)
            .iter()
            .position(|area| area.contains(position))
        {
            self.cycle_tile(index);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut screen = Rect::default();

    loop {
        terminal.draw(|f| {
            screen = f.area();
            super::rendering::ui(f, &app);
        })?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, screen),
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
