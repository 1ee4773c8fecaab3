use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::project::Project;
use super::skill::Skill;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Replaces the seed projects when non-empty
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Replaces the seed skills when non-empty
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Username pre-filled in the repositories view
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_per_page")]
    pub per_page: u8,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            username: String::new(),
            api_base: default_api_base(),
            per_page: default_per_page(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub reveal_on_scroll: bool,
    /// Hex color overrides keyed by palette slot
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            reveal_on_scroll: true,
            colors: HashMap::new(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u8 {
    6
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::project::ProjectType;

    #[test]
    fn empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.github.api_base, "https://api.github.com");
        assert_eq!(config.github.per_page, 6);
        assert_eq!(config.github.timeout_secs, 10);
        assert!(config.github.username.is_empty());
        assert!(config.ui.reveal_on_scroll);
        assert!(config.projects.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let text = r##"
[github]
username = "octocat"
per_page = 3

[ui]
reveal_on_scroll = false

[ui.colors]
highlight = "#112233"

[[projects]]
id = 7
title = "Compiler"
type = "practice"
level = "advanced"
date = "2025-06-01"
tags = ["rust"]

[[skills]]
name = "Rust"
category = "backend"
strength = 4
"##;
        let config: AppConfig = toml::from_str(text).unwrap();
        assert_eq!(config.github.username, "octocat");
        assert_eq!(config.github.per_page, 3);
        assert!(!config.ui.reveal_on_scroll);
        assert_eq!(config.ui.colors.get("highlight").unwrap(), "#112233");
        assert_eq!(config.projects[0].kind, ProjectType::Practice);
        assert_eq!(config.projects[0].date.to_string(), "2025-06-01");
        assert_eq!(config.skills[0].note, "");
    }
}
