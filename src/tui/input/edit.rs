use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::contact::ContactField;
use crate::tui::app::{App, EditTarget, Mode};

/// Single-line text editing. Search and contact fields update live; name
/// and repository username commit on Enter.
pub(super) fn handle_edit(app: &mut App, target: EditTarget, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.mode = Mode::Navigate;
            app.edit_buffer.clear();
        }
        KeyCode::Enter | KeyCode::Tab => commit(app, target, key.code == KeyCode::Tab),
        KeyCode::Backspace => {
            app.edit_buffer.pop();
            apply_live(app, target);
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.clear();
            apply_live(app, target);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.push(c);
            apply_live(app, target);
        }
        _ => {}
    }
}

fn apply_live(app: &mut App, target: EditTarget) {
    match target {
        EditTarget::Search => {
            let text = app.edit_buffer.clone();
            app.set_search(&text);
        }
        EditTarget::Contact(field) => {
            *app.contact.form.field_mut(field) = app.edit_buffer.clone();
        }
        EditTarget::Name | EditTarget::RepoUser => {}
    }
}

fn commit(app: &mut App, target: EditTarget, by_tab: bool) {
    let text = std::mem::take(&mut app.edit_buffer);
    app.mode = Mode::Navigate;
    match target {
        EditTarget::Name => app.submit_name(&text),
        EditTarget::Search => app.set_search(&text),
        EditTarget::RepoUser => {
            app.repo_username = text;
            app.refresh_repos();
        }
        EditTarget::Contact(field) => {
            *app.contact.form.field_mut(field) = text;
            let idx = ContactField::ALL
                .iter()
                .position(|f| *f == field)
                .unwrap_or(0);
            match ContactField::ALL.get(idx + 1) {
                Some(next) => {
                    app.contact.cursor = idx + 1;
                    app.begin_edit(EditTarget::Contact(*next));
                }
                // Leaving the last field: Enter submits, Tab moves to the button
                None => {
                    app.contact.cursor = idx + 1;
                    if !by_tab {
                        app.submit_contact();
                    }
                }
            }
        }
    }
}
