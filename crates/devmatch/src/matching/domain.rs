use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered developers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeveloperId(pub String);

impl fmt::Display for DeveloperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier wrapper for registered projects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-folded skill identity.
///
/// Matching is insensitive to letter case only: the entire name is
/// lower-cased, never trimmed or fuzz-matched. Two entries whose names differ
/// only in case refer to the same skill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SkillKey(String);

impl SkillKey {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Career-level snapshot of a developer, independent of individual skills.
///
/// `role` is carried through for display and never enters scoring arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    pub name: String,
    pub role: String,
    pub total_career_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
}

/// One skill a developer claims, with self-assessed level and hands-on years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
    pub experience_years: f64,
    pub is_primary: bool,
}

impl SkillEntry {
    pub fn key(&self) -> SkillKey {
        SkillKey::new(&self.name)
    }
}

/// Coarse skill taxonomy carried from intake; informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Tool,
    Other,
}

impl SkillCategory {
    /// Lenient mapping from the upstream type strings; unknown values fall
    /// back to `Other`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "language" => SkillCategory::Language,
            "framework" => SkillCategory::Framework,
            "db" | "database" => SkillCategory::Database,
            "tool" => SkillCategory::Tool,
            _ => SkillCategory::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SkillCategory::Language => "language",
            SkillCategory::Framework => "framework",
            SkillCategory::Database => "database",
            SkillCategory::Tool => "tool",
            SkillCategory::Other => "other",
        }
    }
}

/// Non-skill thresholds a project imposes on every candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMinimums {
    pub min_total_career: f64,
}

/// One skill a project asks for: minimum level and years, relative weight,
/// and whether falling short disqualifies the candidate outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: String,
    pub category: SkillCategory,
    pub min_level: u8,
    pub min_years: f64,
    pub weight: u32,
    pub mandatory: bool,
}

impl SkillRequirement {
    pub fn key(&self) -> SkillKey {
        SkillKey::new(&self.skill)
    }
}

/// Whether a project is still accepting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    Archived,
}

impl ProjectStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ProjectStatus::Open => "open",
            ProjectStatus::Archived => "archived",
        }
    }
}
