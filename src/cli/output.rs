use serde::Serialize;

use crate::model::{Project, RepoSummary, Skill};
use crate::ops::contact::{ContactErrors, ContactField};
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectListJson<'a> {
    pub filter: String,
    pub sort: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    pub projects: Vec<&'a Project>,
}

#[derive(Serialize)]
pub struct SkillListJson<'a> {
    pub focus: String,
    pub min_strength: u8,
    pub skills: Vec<&'a Skill>,
}

#[derive(Serialize)]
pub struct RepoListJson<'a> {
    pub username: &'a str,
    pub repos: &'a [RepoSummary],
}

#[derive(Serialize)]
pub struct ContactResultJson {
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorJson>,
}

#[derive(Serialize)]
pub struct FieldErrorJson {
    pub field: String,
    pub message: String,
}

pub fn contact_to_json(errors: &ContactErrors) -> ContactResultJson {
    ContactResultJson {
        valid: errors.is_empty(),
        errors: ContactField::ALL
            .iter()
            .filter_map(|field| {
                errors.message_for(*field).map(|msg| FieldErrorJson {
                    field: field.label().to_lowercase(),
                    message: msg.to_string(),
                })
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per project: date, type, title, tags
pub fn format_project_line(project: &Project, title_w: usize) -> String {
    let tags = if project.tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", project.tags.join(", "))
    };
    format!(
        "{}  {:<9}  {}{}",
        project.date.format("%Y-%m-%d"),
        project.kind.as_str(),
        fit_to_width(&project.title, title_w),
        tags
    )
    .trim_end()
    .to_string()
}

/// One line per skill: strength bar, name, category
pub fn format_skill_line(skill: &Skill, name_w: usize) -> String {
    format!(
        "{:<5}  {}  {}",
        "#".repeat(skill.strength as usize),
        fit_to_width(&skill.name, name_w),
        skill.category.as_str()
    )
}

/// Card-style block for a repository
pub fn format_repo(repo: &RepoSummary) -> Vec<String> {
    vec![
        repo.name.clone(),
        format!("  {}", repo.description_or_fallback()),
        format!(
            "  Stars: {} | Updated: {}",
            repo.stargazers_count,
            repo.display_updated()
        ),
        format!("  {}", repo.html_url),
    ]
}
