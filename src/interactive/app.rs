//! TUI application state and logic

use crate::commands::find_solutions;
use crate::game::{GameSession, Submission};
use crate::validation::Dictionary;
use crate::wordlists::StartWords;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::error;

/// Application state
pub struct App<'a> {
    pub session: GameSession<&'a Dictionary>,
    pub dictionary: &'a Dictionary,
    pub source: &'a StartWords,
    pub input: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    /// Best score possible for the current root word
    pub max_score: usize,
    pub rounds_played: usize,
    pub should_quit: bool,
}

/// A rejection shown as a popup until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
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

impl<'a> App<'a> {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if no root word can be obtained from `source`.
    pub fn new(dictionary: &'a Dictionary, source: &'a StartWords) -> Result<Self> {
        let session = GameSession::new(dictionary, source)?;

        let mut app = Self {
            session,
            dictionary,
            source,
            input: String::new(),
            alert: None,
            messages: Vec::new(),
            max_score: 0,
            rounds_played: 1,
            should_quit: false,
        };
        app.refresh_max_score();
        app.add_message(
            "Welcome! Spell words using the letters of the root word.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    pub fn submit_input(&mut self) {
        match self.session.submit(&self.input) {
            Submission::Ignored => {}
            Submission::Accepted { word, score } => {
                self.input.clear();
                self.add_message(
                    &format!("+{} for '{word}' (score: {score})", word.chars().count()),
                    MessageStyle::Success,
                );
            }
            Submission::Rejected(rejection) => {
                // Input is kept so the player can fix it
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(self.session.root_word()),
                });
            }
        }
    }

    pub fn new_round(&mut self) {
        match self.session.start_round(self.source) {
            Ok(()) => {
                self.rounds_played += 1;
                self.input.clear();
                self.alert = None;
                self.refresh_max_score();
                self.add_message(
                    &format!(
                        "New round: {}",
                        self.session.root_word().text().to_uppercase()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                error!("Could not start a new round: {err}");
                self.add_message(
                    &format!("Could not start a new round: {err}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
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

    /// Handle a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.push(c);
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }

    fn refresh_max_score(&mut self) {
        self.max_score = find_solutions(self.session.root_word().text(), self.dictionary)
            .map_or(0, |solutions| solutions.max_score);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, mut app: App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = next_event()? {
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
