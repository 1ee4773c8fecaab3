use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::io::fetcher::RequestState;
use crate::model::RepoSummary;
use crate::tui::app::{App, EditTarget, Mode};
use crate::util::unicode::{truncate_to_width, wrap_words};

use super::EDIT_CURSOR;

/// Rows per repository card: name, description, stats, url, spacer
const CARD_HEIGHT: usize = 5;

/// Render the repository viewer: username field, status line, cards
pub fn render_repos_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let label = Style::default().fg(app.theme.dim).bg(bg);
    let state = app.repo_state();

    let mut lines: Vec<Line> = Vec::new();

    // Username field
    let mut user_spans = vec![Span::styled(" GitHub user: ", label)];
    if app.mode == Mode::Edit(EditTarget::RepoUser) {
        user_spans.push(Span::styled(
            app.edit_buffer.clone(),
            Style::default().fg(app.theme.text_bright).bg(app.theme.selection_bg),
        ));
        user_spans.push(Span::styled(EDIT_CURSOR, Style::default().fg(app.theme.highlight).bg(bg)));
    } else if app.repo_username.is_empty() {
        user_spans.push(Span::styled("(none)", label));
    } else {
        user_spans.push(Span::styled(
            app.repo_username.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    lines.push(Line::from(user_spans));

    // Status
    let status_color = match state {
        RequestState::Failed { .. } | RequestState::MissingUsername => app.theme.red,
        RequestState::Pending { .. } => app.theme.yellow,
        _ => app.theme.text,
    };
    lines.push(Line::from(Span::styled(
        format!(" {}", state.status_text()),
        Style::default().fg(status_color).bg(bg),
    )));
    if let RequestState::Failed { error, .. } = state
        && !matches!(error, crate::io::github::RepoError::NotFound)
    {
        lines.push(Line::from(Span::styled(format!(" {}", error), label)));
    }
    lines.push(Line::from(""));

    if let RequestState::Loaded { repos, .. } = state
        && repos.is_empty()
    {
        lines.push(Line::from(Span::styled(" No public repositories found.", label)));
    }

    let width = area.width as usize;
    let budget = (area.height as usize).saturating_sub(lines.len());
    let per_page = (budget / CARD_HEIGHT).max(1);
    for repo in state.repos().iter().skip(app.repo_scroll).take(per_page) {
        push_card(&mut lines, app, repo, width);
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn push_card(lines: &mut Vec<Line>, app: &App, repo: &RepoSummary, width: usize) {
    let bg = app.theme.background;
    let inner = width.saturating_sub(3);
    let text = Style::default().fg(app.theme.text).bg(bg);

    lines.push(Line::from(Span::styled(
        format!(" \u{25C6} {}", truncate_to_width(&repo.name, inner)),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    let description = wrap_words(repo.description_or_fallback(), inner)
        .into_iter()
        .next()
        .unwrap_or_default();
    lines.push(Line::from(Span::styled(format!("   {}", description), text)));
    lines.push(Line::from(vec![
        Span::styled("   Stars: ", text),
        Span::styled(
            repo.stargazers_count.to_string(),
            Style::default().fg(app.theme.yellow).bg(bg),
        ),
        Span::styled(format!(" | Updated: {}", repo.display_updated()), text),
    ]));
    lines.push(Line::from(Span::styled(
        format!("   {}", truncate_to_width(&repo.html_url, inner)),
        Style::default().fg(app.theme.blue).bg(bg),
    )));
    lines.push(Line::from(""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::tui::test_helpers::{TERM_H, TERM_W, render_to_string, test_app};

    fn render(app: &App) -> String {
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_repos_view(frame, app, area);
        })
    }

    #[test]
    fn missing_username_prompt() {
        let app = test_app();
        let output = render(&app);
        assert!(output.contains("GitHub user: (none)"));
        assert!(output.contains("Please enter a GitHub username."));
    }

    #[test]
    fn loaded_repos_render_as_cards() {
        let mut app = test_app();
        app.repo_username = "octocat".into();
        app.refresh_repos();
        assert!(app.fetcher.wait(Duration::from_secs(5)));
        let output = render(&app);
        assert!(output.contains("Showing most recently updated repositories for @octocat."));
        assert!(output.contains("hello"));
        assert!(output.contains("Stars: "));
        assert!(output.contains("https://github.com/hello/hello"));
    }

    #[test]
    fn failure_shows_diagnostic() {
        let mut app = test_app();
        app.repo_username = "broken".into();
        app.refresh_repos();
        assert!(app.fetcher.wait(Duration::from_secs(5)));
        let output = render(&app);
        assert!(output.contains("Sorry, GitHub data is unavailable right now."));
        assert!(output.contains("GitHub API error: 500"));
    }

    #[test]
    fn not_found_has_no_cards() {
        let mut app = test_app();
        app.repo_username = "ghost".into();
        app.refresh_repos();
        assert!(app.fetcher.wait(Duration::from_secs(5)));
        let output = render(&app);
        assert!(output.contains("GitHub user not found."));
        assert!(!output.contains("Stars:"));
    }
}
