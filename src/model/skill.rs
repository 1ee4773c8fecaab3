use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Skill strength bounds (inclusive)
pub const MIN_STRENGTH: u8 = 1;
pub const MAX_STRENGTH: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Tooling,
}

impl SkillCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tooling => "tooling",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(SkillCategory::Frontend),
            "backend" => Ok(SkillCategory::Backend),
            "tooling" => Ok(SkillCategory::Tooling),
            _ => Err(()),
        }
    }
}

/// A strength-rated skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: SkillCategory,
    pub strength: u8,
    #[serde(default)]
    pub note: String,
}

/// Category filter pinned on the skills heatmap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFocus {
    #[default]
    All,
    Category(SkillCategory),
}

impl SkillFocus {
    pub fn next(self) -> Self {
        match self {
            SkillFocus::All => SkillFocus::Category(SkillCategory::Frontend),
            SkillFocus::Category(SkillCategory::Frontend) => {
                SkillFocus::Category(SkillCategory::Backend)
            }
            SkillFocus::Category(SkillCategory::Backend) => {
                SkillFocus::Category(SkillCategory::Tooling)
            }
            SkillFocus::Category(SkillCategory::Tooling) => SkillFocus::All,
        }
    }

    pub fn matches(self, category: SkillCategory) -> bool {
        match self {
            SkillFocus::All => true,
            SkillFocus::Category(c) => c == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SkillFocus::All => "all",
            SkillFocus::Category(c) => c.as_str(),
        }
    }
}

impl fmt::Display for SkillFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillFocus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(SkillFocus::All);
        }
        s.parse().map(SkillFocus::Category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_parse() {
        assert_eq!("all".parse::<SkillFocus>(), Ok(SkillFocus::All));
        assert_eq!(
            "tooling".parse::<SkillFocus>(),
            Ok(SkillFocus::Category(SkillCategory::Tooling))
        );
        assert!("design".parse::<SkillFocus>().is_err());
    }

    #[test]
    fn focus_cycle_returns_to_all() {
        let f = SkillFocus::All.next().next().next().next();
        assert_eq!(f, SkillFocus::All);
    }
}
