use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::{self, PREFS_FILE};
use crate::io::fetcher::{RepoFetcher, RequestState};
use crate::io::github::{GithubClient, RepoSource};
use crate::io::prefs_io::{FileStore, PreferenceStore, load_preferences};
use crate::model::prefs::keys;
use crate::model::{
    AppConfig, Catalog, ExperienceLevel, Preferences, Project, ProjectFilter, Skill, SkillFocus,
    UiConfig, clamp_threshold,
};
use crate::ops::contact::{ContactErrors, ContactField, ContactForm, validate_contact};
use crate::ops::projects::compute_visible_projects;
use crate::ops::skills::{self, GridMove, compute_visible_skills};

use super::input;
use super::render;
use super::reveal::{RevealObserver, observer_for};
use super::theme::Theme;

/// Redraw cadence; also drives the elapsed-time display
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    About,
    Projects,
    Skills,
    Repos,
    Contact,
}

impl View {
    pub const ALL: [View; 5] = [
        View::About,
        View::Projects,
        View::Skills,
        View::Repos,
        View::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            View::About => "About",
            View::Projects => "Projects",
            View::Skills => "Skills",
            View::Repos => "Repos",
            View::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        View::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Text field being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Name,
    Search,
    RepoUser,
    Contact(ContactField),
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit(EditTarget),
}

/// Contact form state. `cursor` 0..=2 are fields, 3 is the send button.
#[derive(Debug, Clone, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub errors: ContactErrors,
    pub feedback: Option<&'static str>,
    pub cursor: usize,
}

pub const CONTACT_SEND_INDEX: usize = 3;

pub const CONTACT_SUCCESS: &str = "Thank you! Your message has been (pretend) sent.";
pub const CONTACT_FAILURE: &str = "Please fix the highlighted errors before submitting.";

/// Everything needed to build an `App`
pub struct AppContext {
    pub catalog: Catalog,
    pub config: AppConfig,
    pub store: Box<dyn PreferenceStore>,
    pub source: Arc<dyn RepoSource>,
    /// Overrides `config.github.username`
    pub github_user: Option<String>,
}

/// Main application state
pub struct App {
    pub catalog: Catalog,
    pub prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    pub ui_config: UiConfig,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    pub session_start: Instant,
    /// Feedback under the name field
    pub greeting_feedback: Option<&'static str>,
    /// Current (trimmed) project search text
    pub search: String,
    pub project_cursor: usize,
    pub project_scroll: usize,
    pub skills_selection: usize,
    pub skills_scroll: usize,
    pub contact: ContactState,
    /// Username in the repositories view input
    pub repo_username: String,
    pub repo_scroll: usize,
    pub fetcher: RepoFetcher,
    pub reveal: Box<dyn RevealObserver>,
    /// Text being typed in Edit mode
    pub edit_buffer: String,
    /// Transient error shown in the status row
    pub status_message: Option<String>,
}

impl App {
    pub fn new(ctx: AppContext) -> Self {
        let prefs = load_preferences(ctx.store.as_ref());
        let theme = Theme::for_mode(prefs.theme, &ctx.config.ui);
        let reveal = observer_for(&ctx.config.ui);
        let repo_username = ctx
            .github_user
            .unwrap_or_else(|| ctx.config.github.username.clone());

        App {
            catalog: ctx.catalog,
            prefs,
            store: ctx.store,
            ui_config: ctx.config.ui,
            theme,
            view: View::About,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            session_start: Instant::now(),
            greeting_feedback: None,
            search: String::new(),
            project_cursor: 0,
            project_scroll: 0,
            skills_selection: 0,
            skills_scroll: 0,
            contact: ContactState::default(),
            repo_username,
            repo_scroll: 0,
            fetcher: RepoFetcher::new(ctx.source),
            reveal,
            edit_buffer: String::new(),
            status_message: None,
        }
    }

    /// Startup hook: initialize each component in order
    pub fn start(&mut self) {
        if !self.prefs.username.is_empty() {
            self.greeting_feedback = Some("Welcome back!");
        }
        self.apply_level(self.prefs.experience_level);
        self.clamp_skills_selection();
        self.refresh_repos();
        log::info!(
            "event=app_ready module=app status=ok theme={} level={} filter={}",
            self.prefs.theme,
            self.prefs.experience_level,
            self.prefs.project_filter
        );
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        if self.fetcher.poll() {
            self.repo_scroll = 0;
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.session_start.elapsed()
    }

    /// Persist one preference. Failures are logged and surfaced in the
    /// status row; the in-memory value is kept either way.
    fn persist(&mut self, key: &str) {
        let Some(value) = self.prefs.value_of(key) else {
            return;
        };
        if let Err(e) = self.store.set(key, &value) {
            log::error!(
                "event=prefs_save module=app status=error key={} error={}",
                key,
                e
            );
            self.status_message = Some(format!("Could not save preferences: {}", e));
        }
    }

    // -----------------------------------------------------------------------
    // Theme
    // -----------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.toggled();
        self.persist(keys::THEME);
        self.theme = Theme::for_mode(self.prefs.theme, &self.ui_config);
    }

    // -----------------------------------------------------------------------
    // Greeting
    // -----------------------------------------------------------------------

    pub fn submit_name(&mut self, input: &str) {
        let value = input.trim();
        if value.is_empty() {
            self.greeting_feedback = Some("Please enter a name.");
            return;
        }
        self.prefs.username = value.to_string();
        self.persist(keys::USERNAME);
        self.greeting_feedback = Some("Nice to meet you!");
    }

    // -----------------------------------------------------------------------
    // Experience level
    // -----------------------------------------------------------------------

    /// Select a level: persists it and overwrites the project filter
    pub fn apply_level(&mut self, level: ExperienceLevel) {
        self.prefs.experience_level = level;
        self.persist(keys::EXPERIENCE_LEVEL);
        self.set_filter(level.implied_filter());
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub fn visible_projects(&self) -> Vec<&Project> {
        compute_visible_projects(
            &self.catalog.projects,
            self.prefs.project_filter,
            &self.search,
            self.prefs.project_sort,
        )
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.prefs.project_filter = filter;
        self.persist(keys::PROJECT_FILTER);
        self.reset_project_cursor();
    }

    pub fn cycle_filter(&mut self) {
        self.set_filter(self.prefs.project_filter.next());
    }

    pub fn cycle_sort(&mut self) {
        self.prefs.project_sort = self.prefs.project_sort.next();
        self.persist(keys::PROJECT_SORT);
        self.reset_project_cursor();
    }

    pub fn set_search(&mut self, text: &str) {
        self.search = text.trim().to_string();
        self.reset_project_cursor();
    }

    /// Hiding leaves cursor and scroll untouched
    pub fn toggle_projects(&mut self) {
        self.prefs.show_projects = !self.prefs.show_projects;
        self.persist(keys::SHOW_PROJECTS);
    }

    pub fn move_project_cursor(&mut self, delta: isize) {
        let len = self.visible_projects().len();
        if len == 0 {
            self.project_cursor = 0;
            return;
        }
        let next = (self.project_cursor as isize + delta).clamp(0, len as isize - 1);
        self.project_cursor = next as usize;
    }

    fn reset_project_cursor(&mut self) {
        self.project_cursor = 0;
        self.project_scroll = 0;
    }

    // -----------------------------------------------------------------------
    // Skills
    // -----------------------------------------------------------------------

    pub fn visible_skills(&self) -> Vec<&Skill> {
        compute_visible_skills(
            &self.catalog.skills,
            self.prefs.skills_focus,
            self.prefs.skills_threshold,
        )
    }

    pub fn move_skill_selection(&mut self, mv: GridMove) {
        let len = self.visible_skills().len();
        self.skills_selection = skills::move_selection(self.skills_selection, len, mv);
    }

    /// Enter on the selected cell toggles its category as the focus
    pub fn toggle_selected_focus(&mut self) {
        let category = match self.visible_skills().get(self.skills_selection) {
            Some(skill) => skill.category,
            None => return,
        };
        self.set_skills_focus(skills::toggle_focus(self.prefs.skills_focus, category));
    }

    pub fn set_skills_focus(&mut self, focus: SkillFocus) {
        self.prefs.skills_focus = focus;
        self.persist(keys::SKILLS_FOCUS);
        self.skills_selection = 0;
        self.skills_scroll = 0;
    }

    pub fn cycle_skills_focus(&mut self) {
        self.set_skills_focus(self.prefs.skills_focus.next());
    }

    pub fn set_skills_threshold(&mut self, threshold: u8) {
        self.prefs.skills_threshold = clamp_threshold(threshold);
        self.persist(keys::SKILLS_THRESHOLD);
        self.skills_selection = 0;
        self.skills_scroll = 0;
    }

    fn clamp_skills_selection(&mut self) {
        let len = self.visible_skills().len();
        self.skills_selection = skills::clamp_selection(self.skills_selection, len);
    }

    // -----------------------------------------------------------------------
    // Contact
    // -----------------------------------------------------------------------

    pub fn submit_contact(&mut self) {
        let errors = validate_contact(&self.contact.form);
        if errors.is_empty() {
            log::info!("event=contact_submit module=app status=ok");
            self.contact = ContactState {
                feedback: Some(CONTACT_SUCCESS),
                ..ContactState::default()
            };
        } else {
            log::debug!("event=contact_submit module=app status=invalid");
            self.contact.errors = errors;
            self.contact.feedback = Some(CONTACT_FAILURE);
        }
    }

    // -----------------------------------------------------------------------
    // Repositories
    // -----------------------------------------------------------------------

    pub fn refresh_repos(&mut self) {
        let username = self.repo_username.trim().to_string();
        self.repo_username = username.clone();
        self.repo_scroll = 0;
        self.fetcher.request(&username);
    }

    pub fn repo_state(&self) -> &RequestState {
        self.fetcher.state()
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Enter Edit mode with the buffer seeded from the field's current value
    pub fn begin_edit(&mut self, target: EditTarget) {
        self.edit_buffer = match target {
            EditTarget::Name => self.prefs.username.clone(),
            EditTarget::Search => self.search.clone(),
            EditTarget::RepoUser => self.repo_username.clone(),
            EditTarget::Contact(field) => self.contact.form.field(field).to_string(),
        };
        self.mode = Mode::Edit(target);
    }
}

/// Run the TUI application
pub fn run(
    config_dir: &Path,
    github_user: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = config_io::read_config(config_dir)?;
    let catalog = config_io::load_catalog(&config)?;
    let store = FileStore::open(&config_dir.join(PREFS_FILE));
    let source = GithubClient::new(&config.github)?;

    let mut app = App::new(AppContext {
        catalog,
        config,
        store: Box::new(store),
        source: Arc::new(source),
        github_user,
    });
    app.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!(
        "event=app_exit module=app status=ok elapsed_secs={}",
        app.elapsed().as_secs()
    );
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.tick();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(FRAME_INTERVAL)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
