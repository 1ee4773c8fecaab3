use std::sync::Arc;
use std::sync::mpsc;

use super::github::{RepoError, RepoSource};
use crate::model::repo::RepoSummary;

/// Lifecycle of the repository list shown in the UI
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A refresh was asked for with an empty username
    MissingUsername,
    Pending {
        username: String,
    },
    Loaded {
        username: String,
        repos: Vec<RepoSummary>,
    },
    Failed {
        username: String,
        error: RepoError,
    },
}

impl RequestState {
    /// Status line shown above the repository cards
    pub fn status_text(&self) -> String {
        match self {
            RequestState::Idle => String::new(),
            RequestState::MissingUsername => "Please enter a GitHub username.".to_string(),
            RequestState::Pending { .. } => "Loading latest repositories...".to_string(),
            RequestState::Loaded { username, .. } => {
                format!("Showing most recently updated repositories for @{}.", username)
            }
            RequestState::Failed {
                error: RepoError::NotFound,
                ..
            } => "GitHub user not found. Please check the username.".to_string(),
            RequestState::Failed { .. } => {
                "Sorry, GitHub data is unavailable right now. Please try again later.".to_string()
            }
        }
    }

    /// Repositories to render as cards (empty unless loaded)
    pub fn repos(&self) -> &[RepoSummary] {
        match self {
            RequestState::Loaded { repos, .. } => repos,
            _ => &[],
        }
    }
}

/// Message sent from a fetch worker back to the UI thread.
struct FetchDone {
    generation: u64,
    username: String,
    result: Result<Vec<RepoSummary>, RepoError>,
}

/// Runs repository fetches off the UI thread.
///
/// Every request gets a new generation; a newer request supersedes any
/// pending one and late responses from older generations are dropped.
pub struct RepoFetcher {
    source: Arc<dyn RepoSource>,
    tx: mpsc::Sender<FetchDone>,
    rx: mpsc::Receiver<FetchDone>,
    generation: u64,
    state: RequestState,
}

impl RepoFetcher {
    pub fn new(source: Arc<dyn RepoSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        RepoFetcher {
            source,
            tx,
            rx,
            generation: 0,
            state: RequestState::Idle,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Start fetching repositories for `username`, superseding any pending
    /// request. An empty username only sets `MissingUsername`.
    pub fn request(&mut self, username: &str) {
        self.generation += 1;
        let username = username.trim().to_string();
        if username.is_empty() {
            self.state = RequestState::MissingUsername;
            return;
        }

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let worker_username = username.clone();
        let spawned = std::thread::Builder::new()
            .name("repo-fetch".into())
            .spawn(move || {
                let result = source.fetch_repos(&worker_username);
                // Receiver gone means the app is shutting down
                let _ = tx.send(FetchDone {
                    generation,
                    username: worker_username,
                    result,
                });
            });

        self.state = match spawned {
            Ok(_) => {
                log::debug!(
                    "event=repo_request module=fetcher status=pending generation={}",
                    generation
                );
                RequestState::Pending { username }
            }
            Err(e) => RequestState::Failed {
                username,
                error: RepoError::RequestFailed(format!("could not start fetch: {}", e)),
            },
        };
    }

    /// Non-blocking poll for finished fetches. Returns true if the state
    /// changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            changed |= self.apply(done);
        }
        changed
    }

    /// Block until the current request settles or `timeout` passes
    #[cfg(test)]
    pub fn wait(&mut self, timeout: std::time::Duration) -> bool {
        let deadline = std::time::Instant::now() + timeout;
        while matches!(self.state, RequestState::Pending { .. }) {
            let left = deadline.saturating_duration_since(std::time::Instant::now());
            match self.rx.recv_timeout(left) {
                Ok(done) => {
                    self.apply(done);
                }
                Err(_) => return false,
            }
        }
        true
    }

    fn apply(&mut self, done: FetchDone) -> bool {
        if done.generation != self.generation {
            log::debug!(
                "event=repo_request module=fetcher status=superseded generation={} current={}",
                done.generation,
                self.generation
            );
            return false;
        }
        self.state = match done.result {
            Ok(repos) => RequestState::Loaded {
                username: done.username,
                repos,
            },
            Err(error) => {
                if let RepoError::RequestFailed(ref detail) = error {
                    log::error!(
                        "event=repo_request module=fetcher status=error detail={}",
                        detail
                    );
                }
                RequestState::Failed {
                    username: done.username,
                    error,
                }
            }
        };
        true
    }
}
