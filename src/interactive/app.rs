//! TUI application state and logic

use crate::commands::GameConfig;
use crate::core::{GameState, Guess};
use crate::league::{GameId, HistoryEntry, League};
use crate::wordlists::Pokedex;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub league: League,
    pub pokedex: &'a Pokedex,
    pub user: String,
    pub game: Option<GameId>,
    pub input_mode: InputMode,
    pub word_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Letter,
    Word,
    GameOver,
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
    pub total_games: usize,
    pub games_won: usize,
    pub total_score: f64,
}

impl<'a> App<'a> {
    /// Create the app and register the configured player
    ///
    /// # Errors
    ///
    /// Returns an error if the player cannot be registered.
    pub fn new(config: &GameConfig, pokedex: &'a Pokedex) -> Result<Self> {
        let mut league = League::new(config.attempts);
        league.create_user(&config.user, config.email.as_deref())?;

        Ok(Self {
            league,
            pokedex,
            user: config.user.clone(),
            game: None,
            input_mode: InputMode::Letter,
            word_buffer: String::new(),
            messages: vec![Message {
                text: format!("Welcome, {}! Guess the Pokémon.", config.user),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Engine state of the current game
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.game.and_then(|id| self.league.game_state(id).ok())
    }

    /// Moves of the current game
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        self.game
            .and_then(|id| self.league.game_history(id).ok())
            .unwrap_or(&[])
    }

    /// Cancel the current game if still open and start a new one
    pub fn new_game(&mut self) {
        if let Some(id) = self.game.take()
            && let Ok(view) = self.league.cancel_game(id)
            && !view.game_over
        {
            self.add_message(&view.message, MessageStyle::Info);
        }

        match self
            .league
            .new_random_game(&self.user, self.pokedex, &mut rand::rng())
        {
            Ok(view) => {
                self.game = Some(view.key);
                self.input_mode = InputMode::Letter;
                self.word_buffer.clear();
                self.add_message(&view.message, MessageStyle::Info);
            }
            Err(e) => {
                warn!("could not start a game: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Submit a guess to the current game
    pub fn submit(&mut self, guess: &Guess) {
        let Some(id) = self.game else {
            self.add_message("No game in progress. Press Ctrl-N.", MessageStyle::Error);
            return;
        };

        let view = match self.league.guess(id, guess) {
            Ok(view) => view,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        let won = self.state().is_some_and(GameState::won);
        let style = if view.game_over {
            if won {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            }
        } else if view.message.starts_with("Correct") {
            MessageStyle::Success
        } else if view.message.starts_with("Incorrect") {
            MessageStyle::Error
        } else {
            MessageStyle::Info
        };
        self.add_message(&view.message, style);

        // Scores are only recorded on the guess that ends the game
        if view.game_over && self.input_mode != InputMode::GameOver {
            self.stats.total_games += 1;
            if won {
                self.stats.games_won += 1;
            }
            if let Some(entry) = self.league.scores().last() {
                self.stats.total_score += entry.score;
            }
            if !won && let Some(state) = self.state() {
                let target = state.target();
                self.add_message(&format!("It was {target}!"), MessageStyle::Info);
            }
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            self.input_mode = InputMode::GameOver;
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Letter => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Tab => {
                    self.input_mode = InputMode::Word;
                    self.add_message("Type the whole name, Enter to submit", MessageStyle::Info);
                }
                KeyCode::Char(c) => self.submit(&Guess::Letter(c.to_string())),
                _ => {}
            },
            InputMode::Word => match key.code {
                KeyCode::Esc | KeyCode::Tab => {
                    self.input_mode = InputMode::Letter;
                    self.word_buffer.clear();
                }
                KeyCode::Char(c) => self.word_buffer.push(c),
                KeyCode::Backspace => {
                    self.word_buffer.pop();
                }
                KeyCode::Enter => {
                    let word = std::mem::take(&mut self.word_buffer);
                    self.input_mode = InputMode::Letter;
                    self.submit(&Guess::Word(word));
                }
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
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
    app.new_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
