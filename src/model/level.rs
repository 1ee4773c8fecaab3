use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::project::{ProjectFilter, ProjectType};

/// Visitor experience level. Selecting one picks a canned message and
/// an implied project filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => {
                "Showing beginner-friendly projects with lots of visual feedback and simple layouts."
            }
            ExperienceLevel::Intermediate => {
                "Showing a mix of real-world and practice projects with some JavaScript logic."
            }
            ExperienceLevel::Advanced => {
                "Highlighting more advanced and technical projects that focus on APIs and architecture."
            }
        }
    }

    pub fn implied_filter(self) -> ProjectFilter {
        match self {
            ExperienceLevel::Beginner => ProjectFilter::Type(ProjectType::Frontend),
            ExperienceLevel::Intermediate => ProjectFilter::All,
            ExperienceLevel::Advanced => ProjectFilter::Type(ProjectType::Fullstack),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(()),
        }
    }
}
