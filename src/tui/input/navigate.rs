use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::ExperienceLevel;
use crate::ops::contact::ContactField;
use crate::ops::skills::GridMove;
use crate::tui::app::{App, CONTACT_SEND_INDEX, EditTarget, View};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    if handle_global(app, key) {
        return;
    }
    match app.view {
        View::About => handle_about(app, key),
        View::Projects => handle_projects(app, key),
        View::Skills => handle_skills(app, key),
        View::Repos => handle_repos(app, key),
        View::Contact => handle_contact(app, key),
    }
}

/// Keys that work in every view. Returns true if consumed.
fn handle_global(app: &mut App, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => app.show_help = true,
        (_, KeyCode::Char('t')) => app.toggle_theme(),
        (_, KeyCode::Tab) => app.view = app.view.next(),
        (_, KeyCode::BackTab) => app.view = app.view.prev(),
        (_, KeyCode::Char(c @ '1'..='5')) => {
            let idx = c as usize - '1' as usize;
            app.view = View::ALL[idx];
        }
        _ => return false,
    }
    true
}

fn handle_about(app: &mut App, key: KeyEvent) {
    let current = app.prefs.experience_level;
    let pos = ExperienceLevel::ALL
        .iter()
        .position(|l| *l == current)
        .unwrap_or(0);
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => app.begin_edit(EditTarget::Name),
        KeyCode::Char('b') => app.apply_level(ExperienceLevel::Beginner),
        KeyCode::Char('i') => app.apply_level(ExperienceLevel::Intermediate),
        KeyCode::Char('a') => app.apply_level(ExperienceLevel::Advanced),
        KeyCode::Left | KeyCode::Char('h') => {
            app.apply_level(ExperienceLevel::ALL[pos.saturating_sub(1)]);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let last = ExperienceLevel::ALL.len() - 1;
            app.apply_level(ExperienceLevel::ALL[(pos + 1).min(last)]);
        }
        _ => {}
    }
}

fn handle_projects(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => app.begin_edit(EditTarget::Search),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('s') => app.cycle_sort(),
        KeyCode::Char('v') => app.toggle_projects(),
        KeyCode::Esc => app.set_search(""),
        KeyCode::Down | KeyCode::Char('j') => app.move_project_cursor(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_project_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.move_project_cursor(isize::MIN / 2),
        KeyCode::Char('G') | KeyCode::End => app.move_project_cursor(isize::MAX / 2),
        _ => {}
    }
}

fn handle_skills(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_skill_selection(GridMove::Left),
        KeyCode::Right | KeyCode::Char('l') => app.move_skill_selection(GridMove::Right),
        KeyCode::Up | KeyCode::Char('k') => app.move_skill_selection(GridMove::Up),
        KeyCode::Down | KeyCode::Char('j') => app.move_skill_selection(GridMove::Down),
        KeyCode::Enter => app.toggle_selected_focus(),
        KeyCode::Char('f') => app.cycle_skills_focus(),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.set_skills_threshold(app.prefs.skills_threshold.saturating_add(1));
        }
        KeyCode::Char('-') => {
            app.set_skills_threshold(app.prefs.skills_threshold.saturating_sub(1));
        }
        _ => {}
    }
}

fn handle_repos(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') | KeyCode::Char('/') => app.begin_edit(EditTarget::RepoUser),
        KeyCode::Char('r') | KeyCode::Enter => app.refresh_repos(),
        KeyCode::Down | KeyCode::Char('j') => {
            let max = app.repo_state().repos().len().saturating_sub(1);
            app.repo_scroll = (app.repo_scroll + 1).min(max);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.repo_scroll = app.repo_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_contact(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            app.contact.cursor = (app.contact.cursor + 1).min(CONTACT_SEND_INDEX);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.contact.cursor = app.contact.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') => app.contact.cursor = 0,
        KeyCode::Char('G') => app.contact.cursor = CONTACT_SEND_INDEX,
        KeyCode::Enter => match ContactField::ALL.get(app.contact.cursor) {
            Some(field) => app.begin_edit(EditTarget::Contact(*field)),
            None => app.submit_contact(),
        },
        KeyCode::Char('s') => app.submit_contact(),
        _ => {}
    }
}
