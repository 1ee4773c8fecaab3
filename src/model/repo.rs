use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A public repository as returned by the GitHub users/{name}/repos endpoint.
/// Unknown fields in the response are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    pub updated_at: DateTime<Utc>,
    pub html_url: String,
}

impl RepoSummary {
    pub fn description_or_fallback(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => "No description provided.",
        }
    }

    pub fn display_updated(&self) -> String {
        self.updated_at.format("%b %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1296269,
            "name": "Hello-World",
            "description": null,
            "stargazers_count": 80,
            "updated_at": "2011-01-26T19:14:43Z",
            "html_url": "https://github.com/octocat/Hello-World",
            "fork": false
        }
    ]"#;

    #[test]
    fn parses_github_payload() {
        let repos: Vec<RepoSummary> = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(repos.len(), 1);
        let r = &repos[0];
        assert_eq!(r.name, "Hello-World");
        assert_eq!(r.stargazers_count, 80);
        assert_eq!(r.description_or_fallback(), "No description provided.");
        assert_eq!(r.display_updated(), "Jan 26, 2011");
    }
}
