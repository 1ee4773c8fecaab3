use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::level::ExperienceLevel;

/// Category tag of a catalog project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Frontend,
    Fullstack,
    Practice,
}

impl ProjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectType::Frontend => "frontend",
            ProjectType::Fullstack => "fullstack",
            ProjectType::Practice => "practice",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontend" => Ok(ProjectType::Frontend),
            "fullstack" => Ok(ProjectType::Fullstack),
            "practice" => Ok(ProjectType::Practice),
            _ => Err(()),
        }
    }
}

/// A single portfolio project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ProjectType,
    pub level: ExperienceLevel,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Project {
    /// Display form of the date, e.g. "Jan 12, 2024"
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// Which project types are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Type(ProjectType),
}

impl ProjectFilter {
    /// Cycle order used by the filter key: all → frontend → fullstack → practice → all
    pub fn next(self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Type(ProjectType::Frontend),
            ProjectFilter::Type(ProjectType::Frontend) => {
                ProjectFilter::Type(ProjectType::Fullstack)
            }
            ProjectFilter::Type(ProjectType::Fullstack) => {
                ProjectFilter::Type(ProjectType::Practice)
            }
            ProjectFilter::Type(ProjectType::Practice) => ProjectFilter::All,
        }
    }

    pub fn matches(self, kind: ProjectType) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Type(t) => t == kind,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Type(t) => t.as_str(),
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(ProjectFilter::All);
        }
        s.parse().map(ProjectFilter::Type)
    }
}

/// Ordering applied to the visible project list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    Az,
    Za,
    /// Catalog order, used for any unrecognised sort value
    Catalog,
}

impl SortOrder {
    /// Cycle order used by the sort key (skips `Catalog`)
    pub fn next(self) -> Self {
        match self {
            SortOrder::Newest => SortOrder::Oldest,
            SortOrder::Oldest => SortOrder::Az,
            SortOrder::Az => SortOrder::Za,
            SortOrder::Za | SortOrder::Catalog => SortOrder::Newest,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::Az => "az",
            SortOrder::Za => "za",
            SortOrder::Catalog => "catalog",
        }
    }

    /// Parse a sort value. Never fails: unknown values mean catalog order.
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "newest" => SortOrder::Newest,
            "oldest" => SortOrder::Oldest,
            "az" => SortOrder::Az,
            "za" => SortOrder::Za,
            _ => SortOrder::Catalog,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
