use std::path::{Path, PathBuf};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, PREFS_FILE};
use crate::io::github::{GithubClient, RepoError, RepoSource};
use crate::io::prefs_io::{FileStore, load_preferences};
use crate::model::{
    AppConfig, Catalog, Preferences, ProjectFilter, SkillFocus, SortOrder, clamp_threshold,
};
use crate::ops::contact::{ContactForm, validate_contact};
use crate::ops::projects::compute_visible_projects;
use crate::ops::skills::compute_visible_skills;
use crate::util::unicode::display_width;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = resolve_config_dir(&cli);

    match cli.command {
        // No subcommand → launch TUI
        None => crate::tui::run(&dir, cli.github_user),
        Some(cmd) => match cmd {
            Commands::Projects(args) => cmd_projects(&dir, args, json),
            Commands::Skills(args) => cmd_skills(&dir, args, json),
            Commands::Repos(args) => cmd_repos(&dir, args, cli.github_user, json),
            Commands::Contact(args) => cmd_contact(args, json),
        },
    }
}

/// Config directory for this invocation (-C, then XDG, then ~/.config)
pub fn resolve_config_dir(cli: &Cli) -> PathBuf {
    config_io::config_dir(cli.config_dir.as_deref().map(Path::new))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_context(dir: &Path) -> Result<(AppConfig, Catalog, Preferences), Box<dyn std::error::Error>> {
    let config = config_io::read_config(dir)?;
    let catalog = config_io::load_catalog(&config)?;
    let store = FileStore::open(&dir.join(PREFS_FILE));
    let prefs = load_preferences(&store);
    Ok((config, catalog, prefs))
}

fn parse_filter(s: &str) -> Result<ProjectFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown filter '{}' (expected all, frontend, fullstack, practice)", s))
}

fn parse_focus(s: &str) -> Result<SkillFocus, String> {
    s.parse()
        .map_err(|_| format!("unknown focus '{}' (expected all, frontend, backend, tooling)", s))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_projects(dir: &Path, args: ProjectsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, catalog, prefs) = load_context(dir)?;
    let filter = match args.filter.as_deref() {
        Some(f) => parse_filter(f)?,
        None => prefs.project_filter,
    };
    let sort = match args.sort.as_deref() {
        Some(s) => SortOrder::parse_lenient(s),
        None => prefs.project_sort,
    };
    let search = args.search.as_deref().unwrap_or("").trim().to_string();

    let visible = compute_visible_projects(&catalog.projects, filter, &search, sort);
    log::debug!(
        "event=cli_projects module=cli status=ok filter={} sort={} count={}",
        filter,
        sort,
        visible.len()
    );

    if json {
        let out = ProjectListJson {
            filter: filter.to_string(),
            sort: sort.to_string(),
            search,
            projects: visible,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if visible.is_empty() {
        println!("No projects match your filters.");
    } else {
        let title_w = visible
            .iter()
            .map(|p| display_width(&p.title))
            .max()
            .unwrap_or(0);
        for project in &visible {
            println!("{}", format_project_line(project, title_w));
        }
    }
    Ok(())
}

fn cmd_skills(dir: &Path, args: SkillsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (_, catalog, prefs) = load_context(dir)?;
    let focus = match args.focus.as_deref() {
        Some(f) => parse_focus(f)?,
        None => prefs.skills_focus,
    };
    let min = args.min.map(clamp_threshold).unwrap_or(prefs.skills_threshold);

    let visible = compute_visible_skills(&catalog.skills, focus, min);

    if json {
        let out = SkillListJson {
            focus: focus.to_string(),
            min_strength: min,
            skills: visible,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        let focus_label = match focus {
            SkillFocus::All => "All focus areas".to_string(),
            SkillFocus::Category(c) => format!("Focus pinned: {}", c),
        };
        println!("Showing strength {}+ ({})", min, focus_label);
        let name_w = visible
            .iter()
            .map(|s| display_width(&s.name))
            .max()
            .unwrap_or(0);
        for skill in &visible {
            println!("{}", format_skill_line(skill, name_w));
        }
    }
    Ok(())
}

fn cmd_repos(
    dir: &Path,
    args: ReposArgs,
    github_user: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, _, _) = load_context(dir)?;
    let username = args
        .username
        .or(github_user)
        .unwrap_or_else(|| config.github.username.clone());
    let username = username.trim();
    if username.is_empty() {
        return Err("Please enter a GitHub username.".into());
    }

    let client = GithubClient::new(&config.github)?;
    let repos = match client.fetch_repos(username) {
        Ok(repos) => repos,
        Err(RepoError::NotFound) => {
            return Err("GitHub user not found. Please check the username.".into());
        }
        Err(RepoError::RequestFailed(detail)) => {
            log::error!(
                "event=cli_repos module=cli status=error username={} error={}",
                username,
                detail
            );
            return Err(format!(
                "Sorry, GitHub data is unavailable right now. Please try again later. ({})",
                detail
            )
            .into());
        }
    };

    if json {
        let out = RepoListJson {
            username,
            repos: &repos,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if repos.is_empty() {
        println!("No public repositories found.");
    } else {
        println!(
            "Showing most recently updated repositories for @{}.",
            username
        );
        for repo in &repos {
            println!();
            for line in format_repo(repo) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

fn cmd_contact(args: ContactArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        message: args.message,
    };
    let errors = validate_contact(&form);

    if json {
        println!("{}", serde_json::to_string_pretty(&contact_to_json(&errors))?);
    } else if errors.is_empty() {
        println!("Thank you! Your message has been (pretend) sent.");
    } else {
        for err in contact_to_json(&errors).errors {
            println!("{}: {}", err.field, err.message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err("Please fix the highlighted errors before submitting.".into())
    }
}
