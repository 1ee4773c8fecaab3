use std::collections::HashMap;
use std::sync::Arc;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::fetcher::fakes::{FakeSource, sample_repo};
use crate::io::github::RepoError;
use crate::io::prefs_io::MemoryStore;
use crate::model::{AppConfig, Catalog};
use crate::tui::app::{App, AppContext};

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Context over the seed catalog with a fake repository source.
/// "octocat" has one repo, "broken" fails, anyone else is not found.
pub fn test_context(store: MemoryStore) -> AppContext {
    let mut responses = HashMap::new();
    responses.insert("octocat".to_string(), Ok(vec![sample_repo("hello")]));
    responses.insert(
        "broken".to_string(),
        Err(RepoError::RequestFailed("GitHub API error: 500".into())),
    );
    AppContext {
        catalog: Catalog::default(),
        config: AppConfig::default(),
        store: Box::new(store),
        source: Arc::new(FakeSource { responses }),
        github_user: None,
    }
}

pub fn test_app_with(store: MemoryStore) -> App {
    App::new(test_context(store))
}

/// A started App with default preferences
pub fn test_app() -> App {
    let mut app = test_app_with(MemoryStore::default());
    app.start();
    app
}
