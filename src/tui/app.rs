use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::field::{FieldEvent, Surface, TagInput};
use crate::util::unicode;

use super::input;
use super::render;
use super::theme::Theme;

/// Errors from the terminal session.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
}

/// The concrete edit widget: a single-line buffer with a byte-offset caret.
/// This is the "node" the controlled field borrows through [`Surface`].
#[derive(Debug, Default)]
pub struct EntryState {
    text: String,
    caret: usize,
    focused: bool,
}

impl EntryState {
    pub fn new() -> Self {
        EntryState {
            text: String::new(),
            caret: 0,
            focused: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Mirror the externally-owned value into the buffer, keeping the caret
    /// in bounds and on a grapheme boundary.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(self.text.len());
        while !self.text.is_char_boundary(self.caret) {
            self.caret -= 1;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.caret, c);
        self.caret += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.caret) {
            self.text.drain(prev..self.caret);
            self.caret = prev;
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.text, self.caret) {
            self.caret = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.text, self.caret) {
            self.caret = next;
        }
    }

    pub fn move_home(&mut self) {
        self.caret = 0;
    }

    pub fn move_end(&mut self) {
        self.caret = self.text.len();
    }
}

impl Surface for EntryState {
    fn caret(&self) -> usize {
        self.caret
    }

    fn focus_to_end(&mut self) {
        self.focused = true;
        self.caret = self.text.len();
    }

    fn insert_plain(&mut self, text: &str) {
        self.text.insert_str(self.caret, text);
        self.caret += text.len();
    }
}

/// Demo application state: the embedding host a real caller would be.
pub struct App {
    pub field: TagInput,
    /// The externally-owned current value — the single source of truth the
    /// entry buffer mirrors.
    pub value: String,
    pub entry: EntryState,
    pub selected: Vec<String>,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(tag_names: Vec<String>, theme: Theme) -> Self {
        App {
            field: TagInput::new(tag_names),
            value: String::new(),
            entry: EntryState::new(),
            selected: Vec::new(),
            theme,
            should_quit: false,
        }
    }

    /// Apply field events in order. `Change` lands in the owned value (and is
    /// mirrored back into the buffer) before any `Select` or `Refocus` that
    /// follows it.
    pub fn apply(&mut self, events: Vec<FieldEvent>) {
        for event in events {
            match event {
                FieldEvent::Change(value) => {
                    self.value = value;
                    self.entry.set_text(&self.value);
                }
                FieldEvent::Select(tag) => {
                    if !self.selected.contains(&tag) {
                        self.selected.push(tag);
                    }
                    // The caller's usual reaction to a commit: back to Empty.
                    self.value.clear();
                    self.entry.set_text("");
                }
                FieldEvent::Refocus => self.entry.focus_to_end(),
            }
        }
    }
}

/// Run the demo application
pub fn run(tag_names: Vec<String>, theme: Theme) -> Result<(), Error> {
    let mut app = App::new(tag_names, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            LeaveAlternateScreen,
            DisableBracketedPaste,
            DisableMouseCapture
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Error> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(
            vec!["JavaScript".to_string(), "Java".to_string(), "Ruby".to_string()],
            Theme::default(),
        )
    }

    #[test]
    fn change_mirrors_value_into_buffer() {
        let mut app = app();
        app.apply(vec![FieldEvent::Change("java".to_string())]);
        assert_eq!(app.value, "java");
        assert_eq!(app.entry.text(), "java");
    }

    #[test]
    fn select_records_tag_and_resets_to_empty() {
        let mut app = app();
        app.apply(vec![
            FieldEvent::Change("Ruby".to_string()),
            FieldEvent::Select("Ruby".to_string()),
            FieldEvent::Refocus,
        ]);
        assert_eq!(app.selected, vec!["Ruby".to_string()]);
        assert_eq!(app.value, "");
        assert_eq!(app.entry.text(), "");
        assert_eq!(app.entry.caret(), 0);
        assert!(app.entry.is_focused());
    }

    #[test]
    fn select_deduplicates() {
        let mut app = app();
        app.apply(vec![FieldEvent::Select("Ruby".to_string())]);
        app.apply(vec![FieldEvent::Select("Ruby".to_string())]);
        assert_eq!(app.selected.len(), 1);
    }

    #[test]
    fn refocus_collapses_caret_to_end() {
        let mut app = app();
        app.apply(vec![FieldEvent::Change("JavaScript".to_string())]);
        app.entry.move_home();
        app.apply(vec![FieldEvent::Refocus]);
        assert_eq!(app.entry.caret(), "JavaScript".len());
    }

    #[test]
    fn set_text_clamps_caret_to_boundary() {
        let mut entry = EntryState::new();
        entry.set_text("你好");
        entry.move_end();
        assert_eq!(entry.caret(), 6);
        entry.set_text("你");
        assert_eq!(entry.caret(), 3);
    }
}
