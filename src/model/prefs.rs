use std::fmt;
use std::str::FromStr;

use super::level::ExperienceLevel;
use super::project::{ProjectFilter, SortOrder};
use super::skill::{MAX_STRENGTH, MIN_STRENGTH, SkillFocus};

/// Persisted preference keys. Values are always stored as strings.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const USERNAME: &str = "username";
    pub const PROJECT_FILTER: &str = "projectFilter";
    pub const PROJECT_SORT: &str = "projectSort";
    pub const SHOW_PROJECTS: &str = "showProjects";
    pub const EXPERIENCE_LEVEL: &str = "experienceLevel";
    pub const SKILLS_FOCUS: &str = "skillsFocus";
    pub const SKILLS_THRESHOLD: &str = "skillsThreshold";
}

/// Two-valued visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => Err(()),
        }
    }
}

/// The full preference set, decoded from string values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub theme: ThemeMode,
    pub username: String,
    pub project_filter: ProjectFilter,
    pub project_sort: SortOrder,
    pub show_projects: bool,
    pub experience_level: ExperienceLevel,
    pub skills_focus: SkillFocus,
    pub skills_threshold: u8,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: ThemeMode::Dark,
            username: String::new(),
            project_filter: ProjectFilter::All,
            project_sort: SortOrder::Newest,
            show_projects: true,
            experience_level: ExperienceLevel::Beginner,
            skills_focus: SkillFocus::All,
            skills_threshold: MIN_STRENGTH,
        }
    }
}

impl Preferences {
    /// Decode preferences from a key lookup. Missing or unparseable values
    /// fall back to the per-key default.
    pub fn decode<'a, F>(get: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let d = Preferences::default();
        Preferences {
            theme: get(keys::THEME)
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.theme),
            username: get(keys::USERNAME).map(str::to_string).unwrap_or(d.username),
            project_filter: get(keys::PROJECT_FILTER)
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.project_filter),
            project_sort: get(keys::PROJECT_SORT)
                .map(SortOrder::parse_lenient)
                .unwrap_or(d.project_sort),
            // Anything other than "false" keeps the section visible
            show_projects: get(keys::SHOW_PROJECTS).is_none_or(|v| v != "false"),
            experience_level: get(keys::EXPERIENCE_LEVEL)
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.experience_level),
            skills_focus: get(keys::SKILLS_FOCUS)
                .and_then(|v| v.parse().ok())
                .unwrap_or(d.skills_focus),
            skills_threshold: get(keys::SKILLS_THRESHOLD)
                .and_then(|v| v.trim().parse::<u8>().ok())
                .map(clamp_threshold)
                .unwrap_or(d.skills_threshold),
        }
    }

    /// Encode every preference as (key, string value)
    pub fn encode(&self) -> Vec<(&'static str, String)> {
        vec![
            (keys::THEME, self.theme.to_string()),
            (keys::USERNAME, self.username.clone()),
            (keys::PROJECT_FILTER, self.project_filter.to_string()),
            (keys::PROJECT_SORT, self.project_sort.to_string()),
            (keys::SHOW_PROJECTS, self.show_projects.to_string()),
            (keys::EXPERIENCE_LEVEL, self.experience_level.to_string()),
            (keys::SKILLS_FOCUS, self.skills_focus.to_string()),
            (keys::SKILLS_THRESHOLD, self.skills_threshold.to_string()),
        ]
    }

    /// String value for a single key, as it would be persisted
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.encode()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Clamp a threshold into the valid strength range
pub fn clamp_threshold(value: u8) -> u8 {
    value.clamp(MIN_STRENGTH, MAX_STRENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::ProjectType;
    use crate::model::skill::SkillCategory;
    use std::collections::HashMap;

    fn decode_map(pairs: &[(&str, &str)]) -> Preferences {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Preferences::decode(|k| map.get(k).map(|s| s.as_str()))
    }

    #[test]
    fn empty_store_gives_defaults() {
        assert_eq!(decode_map(&[]), Preferences::default());
    }

    #[test]
    fn decodes_all_keys() {
        let prefs = decode_map(&[
            ("theme", "light"),
            ("username", "Ada"),
            ("projectFilter", "practice"),
            ("projectSort", "az"),
            ("showProjects", "false"),
            ("experienceLevel", "advanced"),
            ("skillsFocus", "backend"),
            ("skillsThreshold", "4"),
        ]);
        assert_eq!(prefs.theme, ThemeMode::Light);
        assert_eq!(prefs.username, "Ada");
        assert_eq!(
            prefs.project_filter,
            ProjectFilter::Type(ProjectType::Practice)
        );
        assert_eq!(prefs.project_sort, SortOrder::Az);
        assert!(!prefs.show_projects);
        assert_eq!(prefs.experience_level, ExperienceLevel::Advanced);
        assert_eq!(
            prefs.skills_focus,
            SkillFocus::Category(SkillCategory::Backend)
        );
        assert_eq!(prefs.skills_threshold, 4);
    }

    #[test]
    fn invalid_values_fall_back_per_key() {
        let prefs = decode_map(&[
            ("theme", "sepia"),
            ("projectFilter", "games"),
            ("showProjects", "yes"),
            ("skillsThreshold", "many"),
        ]);
        assert_eq!(prefs.theme, ThemeMode::Dark);
        assert_eq!(prefs.project_filter, ProjectFilter::All);
        assert!(prefs.show_projects);
        assert_eq!(prefs.skills_threshold, 1);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(decode_map(&[("skillsThreshold", "9")]).skills_threshold, 5);
        assert_eq!(decode_map(&[("skillsThreshold", "0")]).skills_threshold, 1);
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let prefs = decode_map(&[("theme", "light"), ("skillsFocus", "tooling")]);
        let encoded: HashMap<String, String> = prefs
            .encode()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        let decoded = Preferences::decode(|k| encoded.get(k).map(|s| s.as_str()));
        assert_eq!(decoded, prefs);
    }

    #[test]
    fn theme_toggle() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
