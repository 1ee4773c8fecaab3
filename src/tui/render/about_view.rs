use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::ExperienceLevel;
use crate::tui::app::{App, EditTarget, Mode};

use super::EDIT_CURSOR;

/// Render the about view: display name form and experience level selector
pub fn render_about_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut lines: Vec<Line> = vec![Line::from(""), Line::from(Span::styled(" Your name", header_style))];

    // Name field
    if app.mode == Mode::Edit(EditTarget::Name) {
        lines.push(Line::from(vec![
            Span::styled("   ", text_style),
            Span::styled(
                app.edit_buffer.clone(),
                Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg),
            ),
            Span::styled(EDIT_CURSOR, Style::default().fg(app.theme.highlight).bg(bg)),
        ]));
    } else if app.prefs.username.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("   (not set)", dim_style),
            Span::styled("  e to edit", dim_style),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::styled(format!("   {}", app.prefs.username), text_style),
            Span::styled("  e to edit", dim_style),
        ]));
    }
    if let Some(feedback) = app.greeting_feedback {
        lines.push(Line::from(Span::styled(
            format!("   {}", feedback),
            Style::default().fg(app.theme.green).bg(bg),
        )));
    }
    lines.push(Line::from(""));

    // Experience level selector
    lines.push(Line::from(Span::styled(" Experience level", header_style)));
    let current = app.prefs.experience_level;
    let mut spans = vec![Span::styled("  ", text_style)];
    for level in ExperienceLevel::ALL {
        let selected = level == current;
        let marker = if selected { "(\u{2022})" } else { "( )" };
        let style = if selected {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD)
        } else {
            text_style
        };
        spans.push(Span::styled(format!(" {} {}", marker, level_label(level)), style));
    }
    spans.push(Span::styled("   b/i/a or \u{2190}/\u{2192}", dim_style));
    lines.push(Line::from(spans));
    lines.push(Line::from(Span::styled(format!("   {}", current.message()), text_style)));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn level_label(level: ExperienceLevel) -> &'static str {
    match level {
        ExperienceLevel::Beginner => "Beginner",
        ExperienceLevel::Intermediate => "Intermediate",
        ExperienceLevel::Advanced => "Advanced",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    #[test]
    fn shows_level_and_message() {
        let mut app = test_app();
        app.apply_level(ExperienceLevel::Advanced);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_about_view(frame, &app, area);
        });
        assert!(output.contains("(\u{2022}) Advanced"));
        assert!(output.contains("( ) Beginner"));
        assert!(output.contains("Highlighting more advanced"));
    }

    #[test]
    fn shows_name_feedback() {
        let mut app = test_app();
        app.submit_name("Grace");
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_about_view(frame, &app, area);
        });
        assert!(output.contains("Grace"));
        assert!(output.contains("Nice to meet you!"));
    }

    #[test]
    fn editing_shows_buffer() {
        let mut app = test_app();
        app.begin_edit(EditTarget::Name);
        app.edit_buffer = "Lin".into();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_about_view(frame, &app, area);
        });
        assert!(output.contains("Lin\u{258C}"));
        assert!(!output.contains("(not set)"));
    }
}
