pub mod about_view;
pub mod contact_view;
pub mod header;
pub mod help_overlay;
pub mod projects_view;
pub mod repos_view;
pub mod skills_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;

use super::app::{App, View};
use super::reveal::Reveal;
use super::theme::Theme;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // tabs + greeting + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match app.view {
        View::About => about_view::render_about_view(frame, app, chunks[1]),
        View::Projects => projects_view::render_projects_view(frame, app, chunks[1]),
        View::Skills => skills_view::render_skills_view(frame, app, chunks[1]),
        View::Repos => repos_view::render_repos_view(frame, app, chunks[1]),
        View::Contact => contact_view::render_contact_view(frame, app, chunks[1]),
    }

    // Help overlay (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Total display width of a run of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| crate::util::unicode::display_width(&s.content))
        .sum()
}

/// Style for a card given its reveal state. `None` means do not draw it.
/// The first half of the fade draws everything dim.
pub(super) fn reveal_style(style: Style, reveal: Reveal, theme: &Theme) -> Option<Style> {
    match reveal {
        Reveal::Hidden => None,
        Reveal::Fading(p) if p < 0.5 => Some(style.fg(theme.dim)),
        Reveal::Fading(_) | Reveal::Visible => Some(style),
    }
}

/// Keep `cursor` within a window of `page` items starting at `scroll`
pub(super) fn scroll_to_cursor(scroll: usize, cursor: usize, page: usize) -> usize {
    let page = page.max(1);
    if cursor < scroll {
        cursor
    } else if cursor >= scroll + page {
        cursor + 1 - page
    } else {
        scroll
    }
}

/// The text cursor drawn after an edit buffer
pub(super) const EDIT_CURSOR: &str = "\u{258C}";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    #[test]
    fn scroll_follows_cursor() {
        assert_eq!(scroll_to_cursor(0, 2, 4), 0);
        assert_eq!(scroll_to_cursor(0, 5, 4), 2);
        assert_eq!(scroll_to_cursor(3, 1, 4), 1);
        assert_eq!(scroll_to_cursor(0, 3, 0), 3);
    }

    #[test]
    fn reveal_style_dims_early_fade() {
        let theme = Theme::dark();
        let base = Style::default().fg(theme.text);
        assert_eq!(reveal_style(base, Reveal::Hidden, &theme), None);
        assert_eq!(
            reveal_style(base, Reveal::Fading(0.1), &theme),
            Some(base.fg(theme.dim))
        );
        assert_eq!(reveal_style(base, Reveal::Visible, &theme), Some(base));
    }

    #[test]
    fn every_view_renders() {
        let mut app = test_app();
        for view in View::ALL {
            app.view = view;
            let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
            assert!(output.contains(view.title()), "{:?}:\n{}", view, output);
        }
    }

    #[test]
    fn help_overlay_draws_on_top() {
        let mut app = test_app();
        app.show_help = true;
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.contains("Key Bindings"));
    }
}
