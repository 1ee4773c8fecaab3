use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Project;
use crate::tui::app::{App, EditTarget, Mode};
use crate::tui::reveal::visible_fraction;
use crate::util::unicode::truncate_to_width;

use super::{EDIT_CURSOR, reveal_style, scroll_to_cursor};

/// Rows per project card, including the blank spacer
const CARD_HEIGHT: usize = 4;
/// Rows above the card list (controls line + blank)
const LIST_TOP: u16 = 2;

pub fn render_projects_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    if !app.prefs.show_projects {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                " Projects are hidden. Press v to show them.",
                dim_style,
            )),
        ])
        .style(Style::default().bg(bg));
        frame.render_widget(hint, area);
        return;
    }

    render_controls(frame, app, Rect { height: 1, ..area });

    if area.height <= LIST_TOP {
        return;
    }
    let list_area = Rect {
        y: area.y + LIST_TOP,
        height: area.height - LIST_TOP,
        ..area
    };

    let projects: Vec<Project> = app.visible_projects().into_iter().cloned().collect();
    if projects.is_empty() {
        let empty = Paragraph::new(Span::styled(" No projects match your filters.", dim_style))
            .style(Style::default().bg(bg));
        frame.render_widget(empty, list_area);
        return;
    }

    let viewport = list_area.height as usize;
    let page = viewport / CARD_HEIGHT;
    app.project_cursor = app.project_cursor.min(projects.len() - 1);
    app.project_scroll = scroll_to_cursor(app.project_scroll, app.project_cursor, page);

    // Register every card, then report how much of each is on screen
    let now = Instant::now();
    let mut intersections = Vec::with_capacity(projects.len());
    for (i, project) in projects.iter().enumerate() {
        let key = card_key(project);
        app.reveal.observe(&key);
        let top = (i as isize - app.project_scroll as isize) * CARD_HEIGHT as isize;
        intersections.push((key, visible_fraction(top, CARD_HEIGHT - 1, viewport)));
    }
    app.reveal.update(&intersections, now);

    for (i, project) in projects.iter().enumerate().skip(app.project_scroll) {
        let offset = (i - app.project_scroll) * CARD_HEIGHT;
        if offset >= viewport {
            break;
        }
        let reveal = app.reveal.reveal(&card_key(project), now);
        let card_area = Rect {
            y: list_area.y + offset as u16,
            height: (CARD_HEIGHT - 1).min(viewport - offset) as u16,
            ..list_area
        };
        render_card(frame, app, project, i == app.project_cursor, reveal, card_area);
    }
}

fn card_key(project: &Project) -> String {
    format!("project:{}", project.id)
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let value = Style::default().fg(app.theme.text_bright).bg(bg);

    let mut spans = vec![
        Span::styled(" Filter: ", label),
        Span::styled(app.prefs.project_filter.to_string(), value),
        Span::styled("  Sort: ", label),
        Span::styled(app.prefs.project_sort.to_string(), value),
        Span::styled("  Search: ", label),
    ];
    if app.mode == Mode::Edit(EditTarget::Search) {
        spans.push(Span::styled(
            app.edit_buffer.clone(),
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg),
        ));
        spans.push(Span::styled(EDIT_CURSOR, Style::default().fg(app.theme.highlight).bg(bg)));
    } else if app.search.is_empty() {
        spans.push(Span::styled("(none)", label));
    } else {
        spans.push(Span::styled(app.search.clone(), value));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);
}

fn render_card(
    frame: &mut Frame,
    app: &App,
    project: &Project,
    is_cursor: bool,
    reveal: crate::tui::reveal::Reveal,
    area: Rect,
) {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let theme = &app.theme;
    let Some(title_style) = reveal_style(
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        reveal,
        theme,
    ) else {
        return;
    };
    let text_style = reveal_style(Style::default().fg(theme.text).bg(bg), reveal, theme)
        .unwrap_or_default();
    let badge_style = reveal_style(
        Style::default().fg(theme.project_type_color(project.kind)).bg(bg),
        reveal,
        theme,
    )
    .unwrap_or_default();
    let marker_style = Style::default()
        .fg(if is_cursor { theme.highlight } else { theme.background })
        .bg(bg);

    let width = area.width as usize;
    let tags = if project.tags.is_empty() {
        "-".to_string()
    } else {
        project.tags.join(", ")
    };

    let lines = vec![
        Line::from(vec![
            Span::styled("\u{258E}", marker_style),
            Span::styled(truncate_to_width(&project.title, width.saturating_sub(2)), title_style),
        ]),
        Line::from(vec![
            Span::styled("\u{258E}", marker_style),
            Span::styled("Type: ", text_style),
            Span::styled(project.kind.as_str(), badge_style),
            Span::styled(
                format!(
                    " | Level: {} | Date: {}",
                    project.level,
                    project.display_date()
                ),
                text_style,
            ),
        ]),
        Line::from(vec![
            Span::styled("\u{258E}", marker_style),
            Span::styled(
                truncate_to_width(&format!("Tags: {}", tags), width.saturating_sub(2)),
                text_style,
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
