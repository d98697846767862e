use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::field::{self, KeyOutcome, Surface};

use super::app::App;

/// Handle a key event: the field gets first refusal, the host performs
/// default editing for everything the field ignores.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Demo chrome: quit keys, handled before the field sees anything
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.should_quit = true;
            return;
        }
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            return;
        }
        _ => {}
    }

    match app.field.handle_key(&app.value, &app.entry, &key) {
        KeyOutcome::Handled(events) => app.apply(events),
        KeyOutcome::Ignored => edit_entry(app, key),
    }
}

/// Bracketed paste: reduce to plain text, insert at the caret, then run the
/// text-change rule exactly as if the user had typed it.
pub fn handle_paste(app: &mut App, text: &str) {
    let plain = field::sanitize_paste(text);
    if plain.is_empty() {
        return;
    }
    app.entry.insert_plain(&plain);
    sync_text_change(app);
}

/// Click anywhere in the demo refocuses the field with the caret at the end.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(_) = mouse.kind {
        app.entry.focus_to_end();
    }
}

/// Default single-line editing for keys the field does not intercept.
fn edit_entry(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.entry.insert_char(c);
            sync_text_change(app);
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            app.entry.backspace();
            sync_text_change(app);
        }
        (_, KeyCode::Left) => app.entry.move_left(),
        // Only reachable mid-text: the field claims Right at the end
        (_, KeyCode::Right) => app.entry.move_right(),
        (_, KeyCode::Home) => app.entry.move_home(),
        (_, KeyCode::End) => app.entry.move_end(),
        _ => {}
    }
}

/// Re-enter the field's text-change rule after a buffer edit and apply the
/// resulting event (comma commit or plain change).
fn sync_text_change(app: &mut App) {
    let event = app.field.text_changed(app.entry.text());
    app.apply(vec![event]);
}
