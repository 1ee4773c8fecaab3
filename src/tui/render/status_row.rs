use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, EditTarget, Mode, View};

use super::spans_width;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (mut spans, hint) = match app.mode {
        Mode::Navigate => {
            let spans = match &app.status_message {
                Some(msg) => vec![Span::styled(
                    format!(" {}", msg),
                    Style::default().fg(app.theme.red).bg(bg),
                )],
                None => Vec::new(),
            };
            (spans, navigate_hint(app.view))
        }
        Mode::Edit(target) => {
            let spans = vec![Span::styled(
                format!(" editing {}", edit_label(target)),
                Style::default().fg(app.theme.text_bright).bg(bg),
            )];
            let hint = match target {
                EditTarget::Search => "Enter/Esc done",
                EditTarget::Contact(_) => "Enter next  Tab to button  Esc done",
                EditTarget::Name | EditTarget::RepoUser => "Enter confirm  Esc cancel",
            };
            (spans, hint)
        }
    };

    let content_width = spans_width(&spans);
    let hint_width = hint.chars().count() + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn navigate_hint(view: View) -> &'static str {
    match view {
        View::About => "e name  b/i/a level  ? help",
        View::Projects => "f filter  s sort  / search  v hide  ? help",
        View::Skills => "arrows move  Enter pin  +/- strength  ? help",
        View::Repos => "u user  r refresh  ? help",
        View::Contact => "jk move  Enter edit/send  ? help",
    }
}

fn edit_label(target: EditTarget) -> &'static str {
    match target {
        EditTarget::Name => "name",
        EditTarget::Search => "search",
        EditTarget::RepoUser => "GitHub user",
        EditTarget::Contact(field) => field.label(),
    }
}
