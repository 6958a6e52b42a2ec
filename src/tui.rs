//! TUI (Terminal User Interface) module for Word Scramble
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! The UI follows these state transitions:
//! - `EnteringWord` → (rejected submission) → `ShowingAlert` → any key → `EnteringWord`
//! - Accepted submissions and restarts stay in `EnteringWord`

use crate::game_state::{GameInterface, UserAction};
use crate::rules::Rejection;
use crate::session::{Accepted, Session};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const MAX_INPUT_LENGTH: usize = 32;
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;
const ALERT_WIDTH: u16 = 50;
const ALERT_HEIGHT: u16 = 7;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const BADGE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Cyan);

#[derive(Debug, Clone, PartialEq, Eq)]
enum TuiState {
    EnteringWord,
    /// A rejection is on screen; the next key press dismisses it
    ShowingAlert { title: String, message: String },
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    root_word: &'a str,
    score: usize,
    used_words: &'a [String],
    current_input: &'a str,
    state: &'a TuiState,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Manages terminal rendering, input handling, and game state display.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    root_word: String,
    score: usize,
    used_words: Vec<String>,
    current_input: String,
    state: TuiState,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            root_word: String::new(),
            score: 0,
            used_words: Vec::new(),
            current_input: String::new(),
            state: TuiState::EnteringWord,
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn sync_session(&mut self, session: &Session) {
        self.root_word = session.root_word().to_string();
        self.score = session.score();
        self.used_words = session.used_words().to_vec();
    }

    /// Draw the current UI state to the terminal.
    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            root_word: &self.root_word,
            score: self.score,
            used_words: &self.used_words,
            current_input: &self.current_input,
            state: &self.state,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Root word
                Constraint::Length(3), // Input
                Constraint::Length(3), // Score
                Constraint::Min(5),    // Used words
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0], ctx.root_word);
        Self::render_input(f, chunks[1], ctx.current_input);
        Self::render_score(f, chunks[2], ctx.score);
        Self::render_used_words(f, chunks[3], ctx.used_words);
        Self::render_status(f, chunks[4], ctx.status);
        Self::render_instructions(f, chunks[5], ctx.state);

        if let TuiState::ShowingAlert { title, message } = ctx.state {
            Self::render_alert(f, title, message);
        }
    }

    fn render_title(f: &mut Frame, area: Rect, root_word: &str) {
        let title = Paragraph::new(root_word.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Word Scramble"));
        f.render_widget(title, area);
    }

    fn render_input(f: &mut Frame, area: Rect, current_input: &str) {
        let line = Line::from(vec![
            Span::raw(current_input),
            Span::styled("_", Style::new().add_modifier(Modifier::SLOW_BLINK)),
        ]);
        let input = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Enter your word"));
        f.render_widget(input, area);
    }

    fn render_score(f: &mut Frame, area: Rect, score: usize) {
        let paragraph = Paragraph::new(format!("Score: {score}"))
            .style(INFO_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_used_words(f: &mut Frame, area: Rect, used_words: &[String]) {
        let items: Vec<ListItem> = used_words
            .iter()
            .map(|word| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!(" {:>2} ", word.chars().count()), BADGE_STYLE),
                    Span::raw(" "),
                    Span::raw(word.as_str()),
                ]))
            })
            .collect();
        let title = format!("Your words ({})", used_words.len());
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
        f.render_widget(list, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: &TuiState) {
        let text = match state {
            TuiState::EnteringWord => "ENTER: Submit | CTRL-R: New root word | ESC: Quit",
            TuiState::ShowingAlert { .. } => "Press any key to continue",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_alert(f: &mut Frame, title: &str, message: &str) {
        let area = Self::centered_rect(f.area(), ALERT_WIDTH, ALERT_HEIGHT);
        let lines = vec![
            Line::from(""),
            Line::from(Span::raw(message)),
            Line::from(""),
            Line::from(Span::styled("OK", SUCCESS_STYLE)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, ERROR_STYLE)),
            );
        f.render_widget(Clear, area);
        f.render_widget(paragraph, area);
    }

    fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [rect] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(row);
        rect
    }

    fn handle_input(&mut self) -> Result<Option<UserAction>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        let Event::Key(key) = event::read()? else {
            debug_log!("handle_input() - Ignoring non-key event");
            return Ok(None);
        };

        // Only process Press events, ignore Release and Repeat to avoid double input
        if key.kind != event::KeyEventKind::Press {
            return Ok(None);
        }

        // Alt-tab can leave replacement or control characters behind
        if let KeyCode::Char(c) = key.code
            && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
        {
            debug_log!("handle_input() - Ignoring invalid character: {:?}", c);
            return Ok(None);
        }

        match self.state {
            TuiState::EnteringWord => Ok(self.handle_word_input(key)),
            TuiState::ShowingAlert { .. } => {
                self.dismiss_alert();
                Ok(None)
            }
        }
    }

    fn handle_word_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!(
            "handle_word_input() - key: {:?}, current_input: '{}'",
            key.code,
            self.current_input
        );

        match key.code {
            KeyCode::Char('r' | 'R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                info_log!("handle_word_input() - CTRL-R pressed, returning Restart");
                Some(UserAction::Restart)
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) if self.current_input.chars().count() < MAX_INPUT_LENGTH => {
                self.current_input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                None
            }
            KeyCode::Enter => {
                let word = std::mem::take(&mut self.current_input);
                info_log!("handle_word_input() - Submitting '{}'", word);
                Some(UserAction::Submit(word))
            }
            KeyCode::Esc => {
                info_log!("handle_word_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            _ => None,
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn show_alert(&mut self, title: String, message: String) {
        self.state = TuiState::ShowingAlert { title, message };
    }

    fn dismiss_alert(&mut self) {
        self.state = TuiState::EnteringWord;
        self.status = "Try another word".to_string();
    }
}

impl GameInterface for TuiInterface {
    fn display_session(&mut self, session: &Session) {
        self.sync_session(session);
        self.status = format!("Find words hidden in {}", session.root_word().to_uppercase());
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.handle_input() {
                Ok(Some(action)) => {
                    info_log!("read_action() - Action received: {:?}", action);
                    return Some(action);
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("Terminal input error: {e}");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_accepted(&mut self, accepted: &Accepted, session: &Session) {
        self.sync_session(session);
        self.status = format!("+{} for '{}'", accepted.score_delta, accepted.word);
        self.draw_or_log();
    }

    fn display_rejection(&mut self, rejection: Rejection, session: &Session) {
        self.sync_session(session);
        self.status = rejection.title();
        self.show_alert(rejection.title(), rejection.message(session.root_word()));
        self.draw_or_log();
    }

    fn display_new_game_message(&mut self, session: &Session) {
        self.sync_session(session);
        self.current_input.clear();
        self.state = TuiState::EnteringWord;
        self.status = format!(
            "New game - find words hidden in {}",
            session.root_word().to_uppercase()
        );
        self.draw_or_log();
    }

    fn display_exit_message(&mut self) {
        self.status = "Exiting...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
