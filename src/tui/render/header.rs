use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ThemeMode;
use crate::ops::elapsed::format_elapsed;
use crate::tui::app::{App, View};

use super::spans_width;

/// Render the header: view tabs with the theme indicator, the greeting with
/// the elapsed time, and a separator line
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // greeting
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_greeting(frame, app, chunks[1]);

    let sep = Paragraph::new(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    frame.render_widget(sep, chunks[2]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));

    let mut spans: Vec<Span> = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled(" ", bg_style),
    ];

    for view in View::ALL.iter() {
        let style = tab_style(app, app.view == *view);
        spans.push(Span::styled(format!(" {} ", view.title()), style));
        spans.push(sep.clone());
    }

    // Theme indicator, right-aligned
    let (icon, other) = match app.prefs.theme {
        ThemeMode::Dark => ("\u{263E}", ThemeMode::Light),
        ThemeMode::Light => ("\u{2600}", ThemeMode::Dark),
    };
    let indicator = vec![
        Span::styled(icon, Style::default().fg(app.theme.yellow).bg(bg)),
        Span::styled(
            format!(" Switch to {} mode ", other),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ];
    let used = spans_width(&spans);
    let indicator_width = spans_width(&indicator);
    let width = area.width as usize;
    if used + indicator_width < width {
        spans.push(Span::styled(" ".repeat(width - used - indicator_width), bg_style));
        spans.extend(indicator);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), area);
}

fn render_greeting(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let name = if app.prefs.username.is_empty() {
        "there"
    } else {
        app.prefs.username.as_str()
    };

    let mut spans = vec![
        Span::styled(" Hello, ", Style::default().fg(app.theme.text).bg(bg)),
        Span::styled(
            name.to_string(),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("!", Style::default().fg(app.theme.text).bg(bg)),
    ];

    let elapsed = format!(
        "You have been here for {}. ",
        format_elapsed(app.elapsed())
    );
    let used = spans_width(&spans);
    let elapsed_width = elapsed.chars().count();
    let width = area.width as usize;
    if used + elapsed_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - elapsed_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(elapsed, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(app.theme.background)
    }
}
