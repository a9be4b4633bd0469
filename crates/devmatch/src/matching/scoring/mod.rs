mod eligibility;
mod fit;

pub use eligibility::RejectionReason;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::{DeveloperProfile, ProjectMinimums, SkillEntry, SkillKey, SkillRequirement};

/// Fixed first line of every eligible explanation.
const EXPLANATION_HEADER: &str = "skill match breakdown:";

/// Scores one developer against one project.
///
/// Pure and synchronous: no I/O, no retained state, safe to call from any
/// number of threads at once. Ineligibility is a normal outcome carrying
/// score 0 and a reason, never an error. Requirement order determines the
/// order of explanation lines but not the final score; duplicate skill names
/// collapse case-insensitively with the last entry winning.
pub fn score_match(
    developer: &DeveloperProfile,
    skills: &[SkillEntry],
    minimums: &ProjectMinimums,
    requirements: &[SkillRequirement],
) -> MatchOutcome {
    let held: HashMap<SkillKey, &SkillEntry> =
        skills.iter().map(|entry| (entry.key(), entry)).collect();

    if let Err(reason) = eligibility::clear_gates(developer, &held, minimums, requirements) {
        return MatchOutcome {
            score: 0,
            decision: MatchDecision::Ineligible(reason),
            assessments: Vec::new(),
        };
    }

    let (assessments, score) = fit::weigh_requirements(&held, requirements);

    MatchOutcome {
        score,
        decision: MatchDecision::Eligible,
        assessments,
    }
}

/// Eligibility verdict for a scored (developer, project) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchDecision {
    Eligible,
    Ineligible(RejectionReason),
}

impl MatchDecision {
    pub fn summary(&self) -> String {
        match self {
            MatchDecision::Eligible => "eligible".to_string(),
            MatchDecision::Ineligible(reason) => reason.summary(),
        }
    }
}

/// Per-requirement contribution to the weighted fit, allowing transparent
/// audits of how a score came to be.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementAssessment {
    pub skill: String,
    pub weight: u32,
    pub mandatory: bool,
    pub credit: RequirementCredit,
}

/// How a single requirement was credited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RequirementCredit {
    /// The developer holds the skill; both ratios are capped at 1.0.
    Held {
        level: u8,
        min_level: u8,
        level_ratio: f64,
        years: f64,
        min_years: f64,
        years_ratio: f64,
    },
    /// The developer lacks the skill. Recorded for optional requirements
    /// only; mandatory gaps are rejected during gating.
    Absent,
}

impl RequirementAssessment {
    /// One explanation line in the fixed breakdown format.
    pub fn detail(&self) -> String {
        match &self.credit {
            RequirementCredit::Held {
                level,
                min_level,
                level_ratio,
                years,
                min_years,
                years_ratio,
            } => format!(
                "- {}: level {}/{} ({:.2}), years {:.1}/{:.1} ({:.2}), weight {}",
                self.skill, level, min_level, level_ratio, years, min_years, years_ratio,
                self.weight
            ),
            RequirementCredit::Absent => format!("- {}: absent (optional)", self.skill),
        }
    }
}

/// Final verdict for one (developer, project) pair: bounded integer score,
/// eligibility decision, and the per-requirement audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub score: u8,
    pub decision: MatchDecision,
    pub assessments: Vec<RequirementAssessment>,
}

impl MatchOutcome {
    pub fn is_eligible(&self) -> bool {
        matches!(self.decision, MatchDecision::Eligible)
    }

    pub fn band(&self) -> FitBand {
        FitBand::for_score(self.score)
    }

    /// Renders the human-readable breakdown: the rejection reason alone for
    /// ineligible pairs, otherwise the fixed header plus one line per
    /// assessed requirement in requirement order.
    pub fn explanation(&self) -> String {
        match &self.decision {
            MatchDecision::Ineligible(reason) => reason.summary(),
            MatchDecision::Eligible => {
                let mut text = String::from(EXPLANATION_HEADER);
                for assessment in &self.assessments {
                    text.push('\n');
                    text.push_str(&assessment.detail());
                }
                text
            }
        }
    }
}

/// Recommendation tier derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBand {
    Strong,
    Recommended,
    Conditional,
    NotRecommended,
}

impl FitBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 85 {
            FitBand::Strong
        } else if score >= 70 {
            FitBand::Recommended
        } else if score >= 50 {
            FitBand::Conditional
        } else {
            FitBand::NotRecommended
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            FitBand::Strong => "strong",
            FitBand::Recommended => "recommended",
            FitBand::Conditional => "conditional",
            FitBand::NotRecommended => "not_recommended",
        }
    }
}
