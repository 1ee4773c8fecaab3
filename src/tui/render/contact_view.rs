use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::contact::{ContactField, MIN_MESSAGE_CHARS};
use crate::tui::app::{App, CONTACT_SEND_INDEX, CONTACT_SUCCESS, EditTarget, Mode};
use crate::util::unicode::truncate_to_width;

use super::EDIT_CURSOR;

/// Render the contact form: three fields with inline errors and a send button
pub fn render_contact_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let label_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let error_style = Style::default().fg(app.theme.red).bg(bg);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, field) in ContactField::ALL.iter().enumerate() {
        let is_cursor = app.contact.cursor == i;
        let marker = if is_cursor { "\u{25B8} " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!(" {}", marker), Style::default().fg(app.theme.highlight).bg(bg)),
            Span::styled(field.label(), label_style),
        ]));

        let editing = app.mode == Mode::Edit(EditTarget::Contact(*field));
        let value = if editing {
            app.edit_buffer.as_str()
        } else {
            app.contact.form.field(*field)
        };
        let value_bg = if is_cursor {
            app.theme.selection_bg
        } else {
            bg
        };
        let mut value_spans = vec![
            Span::styled("    ", Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(value, width.saturating_sub(6)),
                Style::default().fg(app.theme.text).bg(value_bg),
            ),
        ];
        if editing {
            value_spans.push(Span::styled(EDIT_CURSOR, Style::default().fg(app.theme.highlight).bg(bg)));
        } else if value.is_empty() {
            value_spans.push(Span::styled(placeholder(*field), dim_style));
        }
        lines.push(Line::from(value_spans));

        if let Some(message) = app.contact.errors.message_for(*field) {
            lines.push(Line::from(Span::styled(format!("    {}", message), error_style)));
        }
        lines.push(Line::from(""));
    }

    // Send button
    let on_send = app.contact.cursor == CONTACT_SEND_INDEX;
    let button_style = if on_send {
        Style::default()
            .fg(app.theme.background)
            .bg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.highlight).bg(bg)
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {}", if on_send { "\u{25B8} " } else { "  " }),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled("[ Send ]", button_style),
    ]));

    if let Some(feedback) = app.contact.feedback {
        let color = if feedback == CONTACT_SUCCESS {
            app.theme.green
        } else {
            app.theme.red
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", feedback),
            Style::default().fg(color).bg(bg),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn placeholder(field: ContactField) -> String {
    match field {
        ContactField::Name => "Your name".to_string(),
        ContactField::Email => "you@example.com".to_string(),
        ContactField::Message => format!("At least {} characters", MIN_MESSAGE_CHARS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::CONTACT_FAILURE;
    use crate::tui::test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_contact_view(frame, app, area);
        })
    }

    #[test]
    fn empty_form_shows_placeholders() {
        let app = test_app();
        let output = render(&app);
        assert!(output.contains("you@example.com"));
        assert!(output.contains("[ Send ]"));
    }

    #[test]
    fn failed_submit_shows_only_failing_fields() {
        let mut app = test_app();
        app.contact.form.name = "Ada".into();
        app.contact.form.email = "not-an-email".into();
        app.contact.form.message = "short".into();
        app.submit_contact();
        let output = render(&app);
        assert!(!output.contains("Name is required."));
        assert!(output.contains("Please enter a valid email address."));
        assert!(output.contains("Message should be at least 20 characters long."));
        assert!(output.contains(CONTACT_FAILURE));
        assert!(output.contains("not-an-email"));
    }

    #[test]
    fn successful_submit_clears_form() {
        let mut app = test_app();
        app.contact.form.name = "Ada".into();
        app.contact.form.email = "ada@example.com".into();
        app.contact.form.message = "Enjoyed the heatmap, great work!".into();
        app.submit_contact();
        let output = render(&app);
        assert!(output.contains("Thank you! Your message has been (pretend) sent."));
        assert!(!output.contains("ada@example.com"));
    }
}
