use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{MAX_STRENGTH, Skill, SkillFocus};
use crate::ops::skills::GRID_COLUMNS;
use crate::tui::app::App;
use crate::tui::reveal::{Reveal, visible_fraction};
use crate::util::unicode::{fit_to_width, truncate_to_width};

use super::{reveal_style, scroll_to_cursor};

/// Rows per heatmap cell (bordered, three content rows)
const CELL_HEIGHT: usize = 5;
/// Rows above the grid (threshold + focus line, blank)
const GRID_TOP: u16 = 2;

/// Render the skills heatmap as a grid of `GRID_COLUMNS` columns
pub fn render_skills_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    render_controls(frame, app, Rect { height: 1, ..area });

    if area.height <= GRID_TOP {
        return;
    }
    let grid_area = Rect {
        y: area.y + GRID_TOP,
        height: area.height - GRID_TOP,
        ..area
    };

    let skills: Vec<Skill> = app.visible_skills().into_iter().cloned().collect();
    if skills.is_empty() {
        let empty = Paragraph::new(Span::styled(
            " No skills at this strength. Press - to lower the threshold.",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, grid_area);
        return;
    }

    let viewport = grid_area.height as usize;
    let rows_per_page = viewport / CELL_HEIGHT;
    let selected_row = app.skills_selection / GRID_COLUMNS;
    app.skills_scroll = scroll_to_cursor(app.skills_scroll, selected_row, rows_per_page);

    let now = Instant::now();
    let mut intersections = Vec::with_capacity(skills.len());
    for (i, skill) in skills.iter().enumerate() {
        let key = cell_key(skill);
        app.reveal.observe(&key);
        let row = (i / GRID_COLUMNS) as isize - app.skills_scroll as isize;
        intersections.push((key, visible_fraction(row * CELL_HEIGHT as isize, CELL_HEIGHT, viewport)));
    }
    app.reveal.update(&intersections, now);

    let cell_width = grid_area.width / GRID_COLUMNS as u16;
    for (i, skill) in skills.iter().enumerate() {
        let row = i / GRID_COLUMNS;
        if row < app.skills_scroll {
            continue;
        }
        let offset = (row - app.skills_scroll) * CELL_HEIGHT;
        if offset >= viewport {
            break;
        }
        let col = (i % GRID_COLUMNS) as u16;
        let cell_area = Rect {
            x: grid_area.x + col * cell_width,
            y: grid_area.y + offset as u16,
            width: cell_width,
            height: CELL_HEIGHT.min(viewport - offset) as u16,
        };
        let reveal = app.reveal.reveal(&cell_key(skill), now);
        render_cell(frame, app, skill, i == app.skills_selection, reveal, cell_area);
    }
}

fn cell_key(skill: &Skill) -> String {
    format!("skill:{}", skill.name)
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focus = match app.prefs.skills_focus {
        SkillFocus::All => "All focus areas".to_string(),
        SkillFocus::Category(c) => format!("Focus pinned: {}", c),
    };
    let spans = vec![
        Span::styled(
            format!(" Showing strength {}+", app.prefs.skills_threshold),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ),
        Span::styled("  \u{00B7}  ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(focus, Style::default().fg(app.theme.purple).bg(bg)),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)), area);
}

fn render_cell(
    frame: &mut Frame,
    app: &App,
    skill: &Skill,
    is_selected: bool,
    reveal: Reveal,
    area: Rect,
) {
    let theme = &app.theme;
    let bg = if is_selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let border_style = if is_selected {
        Style::default()
            .fg(theme.selection_border)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.dim).bg(bg)
    };
    let Some(name_style) = reveal_style(
        Style::default()
            .fg(theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
        reveal,
        theme,
    ) else {
        return;
    };
    let strength_style = reveal_style(
        Style::default().fg(theme.strength_color(skill.strength)).bg(bg),
        reveal,
        theme,
    )
    .unwrap_or_default();
    let note_style = reveal_style(Style::default().fg(theme.text).bg(bg), reveal, theme)
        .unwrap_or_default();
    let category_style = reveal_style(
        Style::default().fg(theme.category_color(skill.category)).bg(bg),
        reveal,
        theme,
    )
    .unwrap_or_default();

    let inner = area.width.saturating_sub(2) as usize;
    let bar = "#".repeat(skill.strength as usize);
    let bar_width = MAX_STRENGTH as usize;
    let name_width = inner.saturating_sub(bar_width + 1);

    let lines = vec![
        Line::from(vec![
            Span::styled(fit_to_width(&skill.name, name_width), name_style),
            Span::styled(" ", note_style),
            Span::styled(bar, strength_style),
        ]),
        Line::from(Span::styled(truncate_to_width(&skill.note, inner), note_style)),
        Line::from(Span::styled(skill.category.as_str(), category_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
