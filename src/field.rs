//! The tag entry component: suggestion lookup, key interception, and the
//! commit/complete rules. Toolkit-independent — everything that touches the
//! concrete edit widget goes through [`Surface`].

use crossterm::event::{KeyCode, KeyEvent};

/// Host-toolkit services the field needs from its surrounding edit surface.
///
/// The field is controlled and owns no text, so caret queries, focus
/// placement, and paste insertion are delegated to whatever holds the actual
/// widget. Tests drive this with an in-memory fake.
pub trait Surface {
    /// Caret offset in bytes from the start of the entry text.
    fn caret(&self) -> usize;
    /// Focus the field and collapse the caret to the end of its text.
    fn focus_to_end(&mut self);
    /// Insert already-sanitized plain text at the caret.
    fn insert_plain(&mut self, text: &str);
}

/// An output of the field. The host applies these in order: a `Change` must
/// land in the externally-owned value before any `Select` or `Refocus` that
/// follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    /// The text changed without completing a tag; carries the trimmed text
    /// the host should adopt as its value.
    Change(String),
    /// A tag was committed.
    Select(String),
    /// Focus the field with the caret at the end of its (updated) text.
    Refocus,
}

/// Result of offering a key event to the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key consumed; apply the events in order.
    Handled(Vec<FieldEvent>),
    /// Not intercepted; the host's default handling runs.
    Ignored,
}

/// What an intercepted key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Submit,
    CompleteAndSubmit,
    CompleteIfAtEnd,
}

/// Resolve a key event to its action, once per event. Modifiers are ignored
/// on purpose: Shift+Tab completes like Tab.
fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    match key.code {
        KeyCode::Enter => Some(KeyAction::Submit),
        KeyCode::Tab => Some(KeyAction::CompleteAndSubmit),
        KeyCode::Right => Some(KeyAction::CompleteIfAtEnd),
        _ => None,
    }
}

fn normalized(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Reduce clipboard content to plain text: newlines become spaces, carriage
/// returns and other control characters are dropped.
pub fn sanitize_paste(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\n' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// A tag entry field with inline autocomplete.
///
/// The field holds only the candidate pool. The current value is owned by the
/// host and passed into every call; the field derives the suggestion from it
/// and translates input events into [`FieldEvent`]s.
pub struct TagInput {
    tag_names: Vec<String>,
}

impl TagInput {
    pub fn new(tag_names: Vec<String>) -> Self {
        TagInput { tag_names }
    }

    /// Replace the candidate pool.
    pub fn set_tag_names(&mut self, tag_names: Vec<String>) {
        self.tag_names = tag_names;
    }

    pub fn tag_names(&self) -> &[String] {
        &self.tag_names
    }

    /// First candidate (in pool order) whose trimmed, lower-cased form starts
    /// with the trimmed, lower-cased value. An empty value matches nothing.
    pub fn suggestion(&self, value: &str) -> Option<&str> {
        if value.is_empty() {
            return None;
        }
        let prefix = normalized(value);
        self.tag_names
            .iter()
            .find(|name| normalized(name).starts_with(&prefix))
            .map(String::as_str)
    }

    /// The part of the suggestion beyond what is already typed — the ghost
    /// text hint. `None` when there is no suggestion.
    pub fn ghost_remainder(&self, value: &str) -> Option<&str> {
        let suggestion = self.suggestion(value)?;
        let typed = value.chars().count();
        let split = suggestion
            .char_indices()
            .nth(typed)
            .map_or(suggestion.len(), |(i, _)| i);
        Some(&suggestion[split..])
    }

    /// Offer a key event to the field. Enter submits the current value, Tab
    /// completes the suggestion and submits it, Right completes only when the
    /// caret sits at the end of the value (mid-text it is cursor movement and
    /// stays with the host). Anything else is `Ignored`.
    pub fn handle_key(&self, value: &str, surface: &dyn Surface, key: &KeyEvent) -> KeyOutcome {
        match key_action(key) {
            Some(KeyAction::Submit) => KeyOutcome::Handled(self.submit(value)),
            Some(KeyAction::CompleteAndSubmit) => {
                KeyOutcome::Handled(self.complete_suggestion(value, true))
            }
            Some(KeyAction::CompleteIfAtEnd) => {
                if surface.caret() != value.len() {
                    return KeyOutcome::Ignored;
                }
                KeyOutcome::Handled(self.complete_suggestion(value, false))
            }
            None => KeyOutcome::Ignored,
        }
    }

    /// Interpret the entry text after an edit. A trailing comma commits the
    /// text before it, provided that text is non-empty once trimmed; exactly
    /// one comma is stripped. Everything else is an uncommitted change
    /// carrying the trimmed text.
    pub fn text_changed(&self, text: &str) -> FieldEvent {
        if let Some(stripped) = text.strip_suffix(',')
            && !stripped.trim().is_empty()
        {
            return FieldEvent::Select(stripped.trim().to_string());
        }
        FieldEvent::Change(text.trim().to_string())
    }

    /// Commit the current value as a selected tag. Emits nothing when the
    /// value is only whitespace. Safe to call with no originating key event.
    pub fn submit(&self, value: &str) -> Vec<FieldEvent> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        vec![FieldEvent::Select(trimmed.to_string())]
    }

    /// Complete the current suggestion: adopt the full suggestion as the new
    /// value, optionally commit it, then refocus with the caret at the end.
    /// No-op when the value is empty or nothing matches. The `Refocus` comes
    /// last — the host must apply the state update before the focus side
    /// effect.
    pub fn complete_suggestion(&self, value: &str, and_submit: bool) -> Vec<FieldEvent> {
        if value.is_empty() {
            return Vec::new();
        }
        let Some(suggestion) = self.suggestion(value) else {
            return Vec::new();
        };
        let suggestion = suggestion.to_string();
        let mut events = vec![FieldEvent::Change(suggestion.clone())];
        if and_submit {
            events.extend(self.submit(&suggestion));
        }
        events.push(FieldEvent::Refocus);
        events
    }
}
