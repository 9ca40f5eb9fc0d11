//! TUI application state and logic

use crate::core::{RoundEngine, normalize};
use crate::dictionary::Dictionary;
use crate::source::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<D, S> {
    pub engine: RoundEngine<D>,
    pub source: S,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub rounds_played: usize,
    pub should_quit: bool,
}

/// Modal error shown after a rejected word
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

impl<D: Dictionary, S: WordSource> App<D, S> {
    #[must_use]
    pub fn new(engine: RoundEngine<D>, source: S) -> Self {
        Self {
            engine,
            source,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            rounds_played: 1,
            should_quit: false,
        }
    }

    /// Submit the input buffer as a word
    ///
    /// Accepted words clear the buffer. Rejected words open an alert and keep
    /// the buffer so the player can fix the word.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();
        match self.engine.submit(&input) {
            Ok(Some(scores)) => {
                let word = normalize(&input);
                self.add_message(
                    &format!("+{} {}", word.chars().count(), word),
                    MessageStyle::Success,
                );
                tracing::trace!(round = scores.round, "input accepted");
                self.input_buffer.clear();
            }
            Ok(None) => self.input_buffer.clear(),
            Err(rejection) => {
                let word = normalize(&input);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(&word, self.engine.root_word()),
                });
                self.add_message(
                    &format!("{word}: {}", rejection.title()),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Start a new round with a fresh root word
    pub fn new_round(&mut self) {
        self.engine.next_round(&mut self.source);
        self.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.add_message(
            &format!("New word: {}", self.engine.root_word()),
            MessageStyle::Info,
        );
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// React to a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any key dismisses the alert
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
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
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, S: WordSource>(app: App<D, S>) -> Result<App<D, S>> {
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

    res
}

fn run_app<B, D, S>(terminal: &mut Terminal<B>, mut app: App<D, S>) -> Result<App<D, S>>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    S: WordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}
