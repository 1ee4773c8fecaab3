use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, View};

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(60, 80, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    // Context-sensitive help
    lines.push(Line::from(Span::styled(
        format!(" {}", app.view.title()),
        header_style,
    )));
    let bindings: &[(&str, &str)] = match app.view {
        View::About => &[
            (" e", "Edit your name"),
            (" b/i/a", "Beginner / intermediate / advanced"),
            (" \u{2190}\u{2192}/hl", "Previous / next level"),
        ],
        View::Projects => &[
            (" f", "Cycle type filter"),
            (" s", "Cycle sort order"),
            (" /", "Search titles and tags"),
            (" Esc", "Clear search"),
            (" v", "Show / hide projects"),
            (" \u{2191}\u{2193}/jk", "Move between cards"),
        ],
        View::Skills => &[
            (" \u{2190}\u{2191}\u{2192}\u{2193}", "Move in the grid"),
            (" Enter", "Pin / unpin the category"),
            (" f", "Cycle focus area"),
            (" +/-", "Raise / lower minimum strength"),
        ],
        View::Repos => &[
            (" u", "Edit GitHub username"),
            (" r", "Refresh repositories"),
            (" \u{2191}\u{2193}/jk", "Scroll"),
        ],
        View::Contact => &[
            (" \u{2191}\u{2193}/jk", "Move between fields"),
            (" Enter", "Edit field / send"),
            (" G", "Jump to send"),
            (" s", "Send"),
        ],
    };
    for (key, desc) in bindings {
        add_binding(&mut lines, key, desc, key_style, desc_style);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " 1-5", "Switch view", key_style, desc_style);
    add_binding(&mut lines, " Tab", "Next view", key_style, desc_style);
    add_binding(&mut lines, " t", "Toggle light / dark theme", key_style, desc_style);
    add_binding(&mut lines, " ?", "Toggle this help", key_style, desc_style);
    add_binding(&mut lines, " q", "Quit", key_style, desc_style);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.selection_border).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle using percentages of the available area
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
