use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::field::Surface;
use crate::util::unicode;

use super::app::App;

const PROMPT: &str = "\u{276F} ";
const PLACEHOLDER: &str = "Enter a tag name\u{2026}";

/// Main render function — selected tags, the entry field, and a hint row
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // selected tag chips
            Constraint::Length(1), // entry field
            Constraint::Min(0),    // fill
            Constraint::Length(1), // hint row
        ])
        .split(area);

    render_chips(frame, app, chunks[0]);
    render_entry(frame, app, chunks[1]);
    render_hints(frame, app, chunks[3]);
}

/// The committed tags, one colored chip each.
pub fn render_chips(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let mut spans = vec![Span::styled(
        "Tags ",
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    if app.selected.is_empty() {
        spans.push(Span::styled(
            "(none)",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        for (i, tag) in app.selected.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            spans.push(Span::styled(
                format!("#{}", tag),
                Style::default().fg(app.theme.chip_color(i)).bg(bg),
            ));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The entry line: prompt, typed value with a block caret, then the ghost
/// remainder of the best suggestion (or the placeholder when empty).
pub fn render_entry(frame: &mut Frame, app: &App, area: Rect) {
    let paragraph =
        Paragraph::new(entry_line(app)).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}

fn entry_line(app: &App) -> Line<'static> {
    let theme = &app.theme;
    let bg = theme.background;
    let value = app.value.as_str();
    let caret = app.entry.caret().min(value.len());
    let focused = app.entry.is_focused();

    let text_style = Style::default().fg(theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(theme.dim).bg(bg);
    let caret_style = Style::default().fg(bg).bg(theme.text_bright);
    // Caret resting on ghost/placeholder cells keeps the dim tone
    let ghost_caret_style = Style::default().fg(bg).bg(theme.dim);

    let mut spans = vec![Span::styled(
        PROMPT,
        Style::default().fg(theme.highlight).bg(bg),
    )];

    if value.is_empty() {
        push_with_caret_overlay(&mut spans, PLACEHOLDER, dim_style, ghost_caret_style, focused);
        return Line::from(spans);
    }

    let before = &value[..caret];
    if !before.is_empty() {
        spans.push(Span::styled(before.to_string(), text_style));
    }

    if caret < value.len() {
        // Caret mid-text: invert the grapheme under it
        let under = unicode::grapheme_at(value, caret);
        spans.push(Span::styled(
            under.to_string(),
            if focused { caret_style } else { text_style },
        ));
        let after = &value[caret + under.len()..];
        if !after.is_empty() {
            spans.push(Span::styled(after.to_string(), text_style));
        }
        if let Some(ghost) = app.field.ghost_remainder(value)
            && !ghost.is_empty()
        {
            spans.push(Span::styled(ghost.to_string(), dim_style));
        }
    } else {
        // Caret at the end: it rests on the first ghost cell, or on a blank
        match app.field.ghost_remainder(value) {
            Some(ghost) if !ghost.is_empty() => {
                push_with_caret_overlay(&mut spans, ghost, dim_style, ghost_caret_style, focused);
            }
            _ => {
                if focused {
                    spans.push(Span::styled(" ".to_string(), caret_style));
                }
            }
        }
    }

    Line::from(spans)
}

/// Push `text` with its first grapheme styled as the caret cell.
fn push_with_caret_overlay(
    spans: &mut Vec<Span<'static>>,
    text: &str,
    base_style: Style,
    caret_style: Style,
    focused: bool,
) {
    if !focused {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    }
    let head = unicode::grapheme_at(text, 0);
    spans.push(Span::styled(head.to_string(), caret_style));
    let tail = &text[head.len()..];
    if !tail.is_empty() {
        spans.push(Span::styled(tail.to_string(), base_style));
    }
}

/// Bottom hint row: key help on the left, tag count on the right.
pub fn render_hints(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let hint = "Enter commit  Tab complete  , commits  Esc quit";

    let mut spans = vec![Span::styled(hint, dim)];
    let count = match app.selected.len() {
        1 => "1 tag".to_string(),
        n => format!("{} tags", n),
    };
    let used = unicode::display_width(hint) + unicode::display_width(&count);
    if used < area.width as usize {
        let padding = area.width as usize - used;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(count, dim));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::theme::Theme;
    use insta::assert_snapshot;

    /// Render into an in-memory buffer and return plain text (no styles).
    fn render_to_string<F>(w: u16, h: u16, f: F) -> String
    where
        F: FnOnce(&mut ratatui::Frame, Rect),
    {
        use ratatui::Terminal;
        use ratatui::backend::TestBackend;

        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                f(frame, area);
            })
            .unwrap();

        let buf = terminal.backend().buffer().clone();
        let w = buf.area.width as usize;
        let lines: Vec<String> = buf
            .content
            .chunks(w)
            .map(|row| {
                let s: String = row.iter().map(|cell| cell.symbol()).collect();
                s.trim_end().to_string()
            })
            .collect();

        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);
        lines[..end].join("\n")
    }

    fn app() -> App {
        App::new(
            vec!["JavaScript".to_string(), "Java".to_string(), "Ruby".to_string()],
            Theme::default(),
        )
    }

    fn type_value(app: &mut App, value: &str) {
        use crate::field::FieldEvent;
        app.apply(vec![FieldEvent::Change(value.to_string()), FieldEvent::Refocus]);
    }

    #[test]
    fn entry_shows_ghost_remainder_after_value() {
        let mut app = app();
        type_value(&mut app, "java");
        let output = render_to_string(30, 1, |frame, area| render_entry(frame, &app, area));
        assert_snapshot!(output, @"❯ javaScript");
    }

    #[test]
    fn entry_shows_placeholder_when_empty() {
        let app = app();
        let output = render_to_string(30, 1, |frame, area| render_entry(frame, &app, area));
        assert_snapshot!(output, @"❯ Enter a tag name…");
    }

    #[test]
    fn entry_without_match_shows_value_only() {
        let mut app = app();
        type_value(&mut app, "perl");
        let output = render_to_string(30, 1, |frame, area| render_entry(frame, &app, area));
        assert_snapshot!(output, @"❯ perl");
    }

    #[test]
    fn chips_row_lists_committed_tags() {
        let mut app = app();
        app.selected = vec!["Ruby".to_string(), "Go".to_string()];
        let output = render_to_string(30, 1, |frame, area| render_chips(frame, &app, area));
        assert_snapshot!(output, @"Tags #Ruby #Go");
    }

    #[test]
    fn full_render_stacks_chips_entry_and_hints() {
        let mut app = app();
        type_value(&mut app, "ru");
        let output = render_to_string(50, 5, |frame, _area| render(frame, &app));
        assert!(output.contains("Tags (none)"));
        assert!(output.contains("\u{276F} ruby"));
        assert!(output.contains("Esc quit"));
    }
}
