use std::collections::HashSet;

use chrono::NaiveDate;

use super::level::ExperienceLevel;
use super::project::{Project, ProjectType};
use super::skill::{MAX_STRENGTH, MIN_STRENGTH, Skill, SkillCategory};

/// Problems found while validating a catalog supplied from config
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate project id {0}")]
    DuplicateProjectId(u32),
    #[error("skill '{name}' has strength {strength}; expected 1..=5")]
    StrengthOutOfRange { name: String, strength: u8 },
}

/// The static record set shown by the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            projects: seed_projects(),
            skills: seed_skills(),
        }
    }
}

impl Catalog {
    /// Build a catalog, replacing the seed projects/skills with the given
    /// lists when they are non-empty.
    pub fn with_overrides(projects: Vec<Project>, skills: Vec<Skill>) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::default();
        if !projects.is_empty() {
            catalog.projects = projects;
        }
        if !skills.is_empty() {
            catalog.skills = skills;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut ids = HashSet::new();
        for p in &self.projects {
            if !ids.insert(p.id) {
                return Err(CatalogError::DuplicateProjectId(p.id));
            }
        }
        for s in &self.skills {
            if !(MIN_STRENGTH..=MAX_STRENGTH).contains(&s.strength) {
                return Err(CatalogError::StrengthOutOfRange {
                    name: s.name.clone(),
                    strength: s.strength,
                });
            }
        }
        Ok(())
    }
}

fn project(
    id: u32,
    title: &str,
    kind: ProjectType,
    level: ExperienceLevel,
    (y, m, d): (i32, u32, u32),
    tags: &[&str],
) -> Project {
    Project {
        id,
        title: title.to_string(),
        kind,
        level,
        // Seed dates are literal and always valid
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn seed_projects() -> Vec<Project> {
    use ExperienceLevel::*;
    use ProjectType::*;
    vec![
        project(1, "Landing Page UI", Frontend, Beginner, (2024, 1, 12), &["HTML", "CSS", "responsive"]),
        project(2, "Portfolio Website", Frontend, Intermediate, (2024, 2, 3), &["HTML", "CSS", "JavaScript"]),
        project(3, "Weather Dashboard", Fullstack, Intermediate, (2024, 3, 22), &["API", "JavaScript", "JSON"]),
        project(4, "Node.js API Practice", Practice, Advanced, (2024, 4, 5), &["Node.js", "REST", "backend"]),
        project(5, "JavaScript Mini Games", Practice, Beginner, (2024, 1, 28), &["logic", "DOM", "events"]),
    ]
}

fn skill(name: &str, category: SkillCategory, strength: u8, note: &str) -> Skill {
    Skill {
        name: name.to_string(),
        category,
        strength,
        note: note.to_string(),
    }
}

fn seed_skills() -> Vec<Skill> {
    use SkillCategory::*;
    vec![
        skill("HTML and CSS", Frontend, 5, "Semantic HTML and modern layouts."),
        skill("Design Systems", Frontend, 4, "Reusable components and tokens."),
        skill("Accessibility", Frontend, 4, "Keyboard-first, semantic patterns."),
        skill("JavaScript (ESNext)", Frontend, 5, "State, events, and performance."),
        skill("APIs and JSON", Backend, 4, "REST patterns and error handling."),
        skill("Node.js Basics", Backend, 3, "Express-style routing and testing."),
        skill("Data Modeling", Backend, 3, "Shaping data contracts for UI."),
        skill("Tooling and DX", Tooling, 4, "Linters, formatters, and scripts."),
        skill("Git and Workflow", Tooling, 5, "Branching, reviews, deployment."),
    ]
}
