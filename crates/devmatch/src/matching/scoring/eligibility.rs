use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::super::domain::{
    DeveloperProfile, ProjectMinimums, SkillEntry, SkillKey, SkillRequirement,
};

/// Enumerates the gates that can disqualify a candidate before any weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectionReason {
    CareerBelowMinimum {
        required_years: f64,
        actual_years: f64,
    },
    MissingMandatorySkill {
        skill: String,
    },
    SkillLevelBelowMinimum {
        skill: String,
        required: u8,
        actual: u8,
    },
    SkillYearsBelowMinimum {
        skill: String,
        required_years: f64,
        actual_years: f64,
    },
}

impl RejectionReason {
    pub fn summary(&self) -> String {
        match self {
            RejectionReason::CareerBelowMinimum {
                required_years,
                actual_years,
            } => format!(
                "total career below minimum required (required {:.1}, actual {:.1})",
                required_years, actual_years
            ),
            RejectionReason::MissingMandatorySkill { skill } => {
                format!("mandatory skill {skill} is missing")
            }
            RejectionReason::SkillLevelBelowMinimum {
                skill,
                required,
                actual,
            } => format!(
                "mandatory skill {skill} below required level (required {required}, actual {actual})"
            ),
            RejectionReason::SkillYearsBelowMinimum {
                skill,
                required_years,
                actual_years,
            } => format!(
                "mandatory skill {skill} below required experience (required {:.1}, actual {:.1})",
                required_years, actual_years
            ),
        }
    }
}

/// Runs the career gate, then every mandatory requirement in requirement
/// order. The first unmet gate aborts the whole evaluation; optional
/// requirements are never checked here.
pub(crate) fn clear_gates(
    developer: &DeveloperProfile,
    held: &HashMap<SkillKey, &SkillEntry>,
    minimums: &ProjectMinimums,
    requirements: &[SkillRequirement],
) -> Result<(), RejectionReason> {
    if developer.total_career_years < minimums.min_total_career {
        return Err(RejectionReason::CareerBelowMinimum {
            required_years: minimums.min_total_career,
            actual_years: developer.total_career_years,
        });
    }

    for requirement in requirements.iter().filter(|r| r.mandatory) {
        let entry = match held.get(&requirement.key()) {
            Some(entry) => entry,
            None => {
                return Err(RejectionReason::MissingMandatorySkill {
                    skill: requirement.skill.clone(),
                })
            }
        };

        if entry.level < requirement.min_level {
            return Err(RejectionReason::SkillLevelBelowMinimum {
                skill: requirement.skill.clone(),
                required: requirement.min_level,
                actual: entry.level,
            });
        }

        if entry.experience_years < requirement.min_years {
            return Err(RejectionReason::SkillYearsBelowMinimum {
                skill: requirement.skill.clone(),
                required_years: requirement.min_years,
                actual_years: entry.experience_years,
            });
        }
    }

    Ok(())
}
