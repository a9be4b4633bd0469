use std::collections::HashMap;

use super::super::domain::{SkillEntry, SkillKey, SkillRequirement};
use super::{RequirementAssessment, RequirementCredit};

/// Accumulates capped level/years ratios, weighted per requirement, and
/// resolves the bounded 0-100 score in one final rounding step.
pub(crate) fn weigh_requirements(
    held: &HashMap<SkillKey, &SkillEntry>,
    requirements: &[SkillRequirement],
) -> (Vec<RequirementAssessment>, u8) {
    let mut assessments = Vec::new();
    let mut earned = 0.0_f64;
    let mut attainable = 0.0_f64;

    for requirement in requirements {
        attainable += f64::from(requirement.weight) * 2.0;

        let entry = match held.get(&requirement.key()) {
            Some(entry) => *entry,
            None => {
                // Gating already rejected mandatory absences; only optional
                // gaps earn an assessment line.
                if !requirement.mandatory {
                    assessments.push(RequirementAssessment {
                        skill: requirement.skill.clone(),
                        weight: requirement.weight,
                        mandatory: false,
                        credit: RequirementCredit::Absent,
                    });
                }
                continue;
            }
        };

        let level_ratio = capped_ratio(f64::from(entry.level), f64::from(requirement.min_level));
        let years_ratio = capped_ratio(entry.experience_years, requirement.min_years);
        earned += (level_ratio + years_ratio) * f64::from(requirement.weight);

        assessments.push(RequirementAssessment {
            skill: requirement.skill.clone(),
            weight: requirement.weight,
            mandatory: requirement.mandatory,
            credit: RequirementCredit::Held {
                level: entry.level,
                min_level: requirement.min_level,
                level_ratio,
                years: entry.experience_years,
                min_years: requirement.min_years,
                years_ratio,
            },
        });
    }

    // Each requirement contributes at most (1.0 + 1.0) * weight, so the
    // quotient never exceeds 1.0 and the cast stays within 0-100.
    let score = if attainable > 0.0 {
        ((earned / attainable) * 100.0).round() as u8
    } else {
        0
    };

    (assessments, score)
}

/// A zero minimum is trivially satisfied; otherwise the fraction of the
/// minimum attained, capped so exceeding it earns no bonus.
fn capped_ratio(actual: f64, minimum: f64) -> f64 {
    if minimum > 0.0 {
        (actual / minimum).min(1.0)
    } else {
        1.0
    }
}
