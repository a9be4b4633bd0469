use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{
    DeveloperProfile, ProjectMinimums, SkillCategory, SkillEntry, SkillRequirement,
};

/// Validation errors raised while admitting upstream profile documents.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("payload is not valid JSON for this document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("developer name is blank")]
    BlankDeveloperName,
    #[error("company name is blank")]
    BlankCompanyName,
    #[error("project name is blank")]
    BlankProjectName,
    #[error("skill name at position {index} is blank")]
    BlankSkillName { index: usize },
    #[error("skill {skill} level {level} is outside 1-5")]
    LevelOutOfRange { skill: String, level: i64 },
    #[error("requirement {skill} minimum level {min_level} is outside 0-5")]
    MinLevelOutOfRange { skill: String, min_level: i64 },
    #[error("skill {skill} years must be a non-negative finite number")]
    InvalidYears { skill: String },
    #[error("requirement {skill} minimum years must be a non-negative finite number")]
    InvalidMinimumYears { skill: String },
    #[error("total career years must be a non-negative finite number")]
    InvalidCareerYears,
    #[error("minimum total career must be a non-negative finite number")]
    InvalidCareerMinimum,
    #[error("requirement {skill} has invalid weight {weight}")]
    InvalidWeight { skill: String, weight: i64 },
}

/// Developer document shape emitted by the upstream extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeveloperSubmission {
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub total_career_years: f64,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub skills: Vec<SkillSubmission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSubmission {
    pub name: String,
    #[serde(default = "default_category", rename = "type")]
    pub category: String,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default, deserialize_with = "flag_from_any")]
    pub is_primary: bool,
}

/// Project document shape emitted by the upstream extraction service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub company_name: String,
    #[serde(default)]
    pub industry: Option<String>,
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub min_total_career: f64,
    #[serde(default)]
    pub requirements: Vec<RequirementSubmission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementSubmission {
    pub skill: String,
    #[serde(default = "default_category", rename = "type")]
    pub category: String,
    #[serde(default = "default_min_level")]
    pub min_level: i64,
    #[serde(default)]
    pub min_years: f64,
    #[serde(default = "default_weight")]
    pub weight: i64,
    #[serde(default = "default_mandatory", deserialize_with = "flag_from_any")]
    pub mandatory: bool,
}

/// Validated developer intake output, pending id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperDraft {
    pub profile: DeveloperProfile,
    pub skills: Vec<SkillEntry>,
}

/// Validated project intake output, pending id assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    pub project_name: String,
    pub description: String,
    pub minimums: ProjectMinimums,
    pub requirements: Vec<SkillRequirement>,
}

/// Parse and validate a developer document in one step.
pub fn developer_from_json(payload: &str) -> Result<DeveloperDraft, IntakeError> {
    let submission: DeveloperSubmission = serde_json::from_str(payload)?;
    developer_from_submission(submission)
}

/// Parse and validate a project document in one step.
pub fn project_from_json(payload: &str) -> Result<ProjectDraft, IntakeError> {
    let submission: ProjectSubmission = serde_json::from_str(payload)?;
    project_from_submission(submission)
}

/// Convert an already-deserialized developer submission into domain records.
///
/// Skill names are trimmed and deduplicated case-insensitively, the later
/// entry replacing the earlier one in place, mirroring the upsert behavior of
/// upstream stores.
pub fn developer_from_submission(
    submission: DeveloperSubmission,
) -> Result<DeveloperDraft, IntakeError> {
    let name = submission.name.trim();
    if name.is_empty() {
        return Err(IntakeError::BlankDeveloperName);
    }

    if !nonnegative_finite(submission.total_career_years) {
        return Err(IntakeError::InvalidCareerYears);
    }

    let mut skills: Vec<SkillEntry> = Vec::with_capacity(submission.skills.len());
    for (index, skill) in submission.skills.into_iter().enumerate() {
        let skill_name = skill.name.trim();
        if skill_name.is_empty() {
            return Err(IntakeError::BlankSkillName { index });
        }
        if !(1..=5).contains(&skill.level) {
            return Err(IntakeError::LevelOutOfRange {
                skill: skill_name.to_string(),
                level: skill.level,
            });
        }
        if !nonnegative_finite(skill.experience_years) {
            return Err(IntakeError::InvalidYears {
                skill: skill_name.to_string(),
            });
        }

        upsert_skill(
            &mut skills,
            SkillEntry {
                name: skill_name.to_string(),
                category: SkillCategory::parse(&skill.category),
                level: skill.level as u8,
                experience_years: skill.experience_years,
                is_primary: skill.is_primary,
            },
        );
    }

    Ok(DeveloperDraft {
        profile: DeveloperProfile {
            name: name.to_string(),
            role: submission.role.trim().to_string(),
            total_career_years: submission.total_career_years,
            headline: trimmed_optional(submission.headline),
        },
        skills,
    })
}

/// Convert an already-deserialized project submission into domain records.
pub fn project_from_submission(submission: ProjectSubmission) -> Result<ProjectDraft, IntakeError> {
    let company_name = submission.company_name.trim();
    if company_name.is_empty() {
        return Err(IntakeError::BlankCompanyName);
    }

    let project_name = submission.project_name.trim();
    if project_name.is_empty() {
        return Err(IntakeError::BlankProjectName);
    }

    if !nonnegative_finite(submission.min_total_career) {
        return Err(IntakeError::InvalidCareerMinimum);
    }

    let mut requirements: Vec<SkillRequirement> =
        Vec::with_capacity(submission.requirements.len());
    for (index, requirement) in submission.requirements.into_iter().enumerate() {
        let skill_name = requirement.skill.trim();
        if skill_name.is_empty() {
            return Err(IntakeError::BlankSkillName { index });
        }
        if !(0..=5).contains(&requirement.min_level) {
            return Err(IntakeError::MinLevelOutOfRange {
                skill: skill_name.to_string(),
                min_level: requirement.min_level,
            });
        }
        if !nonnegative_finite(requirement.min_years) {
            return Err(IntakeError::InvalidMinimumYears {
                skill: skill_name.to_string(),
            });
        }
        let weight = u32::try_from(requirement.weight).map_err(|_| IntakeError::InvalidWeight {
            skill: skill_name.to_string(),
            weight: requirement.weight,
        })?;

        upsert_requirement(
            &mut requirements,
            SkillRequirement {
                skill: skill_name.to_string(),
                category: SkillCategory::parse(&requirement.category),
                min_level: requirement.min_level as u8,
                min_years: requirement.min_years,
                weight,
                mandatory: requirement.mandatory,
            },
        );
    }

    Ok(ProjectDraft {
        company_name: company_name.to_string(),
        industry: trimmed_optional(submission.industry),
        project_name: project_name.to_string(),
        description: submission.description,
        minimums: ProjectMinimums {
            min_total_career: submission.min_total_career,
        },
        requirements,
    })
}

fn upsert_skill(skills: &mut Vec<SkillEntry>, entry: SkillEntry) {
    match skills.iter_mut().find(|held| held.key() == entry.key()) {
        Some(existing) => *existing = entry,
        None => skills.push(entry),
    }
}

fn upsert_requirement(requirements: &mut Vec<SkillRequirement>, requirement: SkillRequirement) {
    match requirements
        .iter_mut()
        .find(|held| held.key() == requirement.key())
    {
        Some(existing) => *existing = requirement,
        None => requirements.push(requirement),
    }
}

fn nonnegative_finite(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn trimmed_optional(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn default_role() -> String {
    "etc".to_string()
}

fn default_category() -> String {
    "etc".to_string()
}

const fn default_level() -> i64 {
    3
}

const fn default_min_level() -> i64 {
    3
}

const fn default_weight() -> i64 {
    1
}

const fn default_mandatory() -> bool {
    true
}

/// Upstream documents carry flags both as JSON booleans and as 0/1 integers.
fn flag_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl serde::de::Visitor<'_> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a boolean or a 0/1 integer")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
            Ok(value != 0)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
            Ok(value != 0)
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
            Ok(value != 0.0)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}
