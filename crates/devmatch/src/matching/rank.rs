use serde::{Deserialize, Serialize};

use super::domain::DeveloperId;
use super::repository::{DeveloperRecord, ProjectRecord};
use super::scoring::{score_match, MatchOutcome};

const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;
const MAX_RECOMMENDATION_LIMIT: usize = 20;

/// Sizing policy for recommendation lists.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationPolicy {
    default_limit: usize,
    max_limit: usize,
}

impl RecommendationPolicy {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        let max_limit = if max_limit == 0 {
            MAX_RECOMMENDATION_LIMIT
        } else {
            max_limit
        };
        let default_limit = if default_limit == 0 {
            DEFAULT_RECOMMENDATION_LIMIT.min(max_limit)
        } else {
            default_limit.min(max_limit)
        };

        Self {
            default_limit,
            max_limit,
        }
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    pub fn max_limit(&self) -> usize {
        self.max_limit
    }

    /// Clamp a requested list size into 1..=max, falling back to the default
    /// when the caller does not ask for one.
    pub fn resolve(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).clamp(1, self.max_limit)
    }
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RECOMMENDATION_LIMIT, MAX_RECOMMENDATION_LIMIT)
    }
}

/// A scored candidate that survived the eligibility gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub developer: DeveloperRecord,
    pub outcome: MatchOutcome,
}

impl RankedMatch {
    pub fn view(&self) -> RecommendationView {
        RecommendationView {
            developer_id: self.developer.id.clone(),
            name: self.developer.profile.name.clone(),
            role: self.developer.profile.role.clone(),
            score: self.outcome.score,
            band: self.outcome.band().label(),
            explanation: self.outcome.explanation(),
        }
    }
}

/// Sanitized recommendation row for presentation layers.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationView {
    pub developer_id: DeveloperId,
    pub name: String,
    pub role: String,
    pub score: u8,
    pub band: &'static str,
    pub explanation: String,
}

/// Score every candidate against the project and keep the eligible ones,
/// best first.
///
/// Candidates scoring 0 (ineligible, or nothing attainable) are dropped.
/// The sort is stable, so equal scores keep registration order. The list is
/// truncated to `limit`.
pub fn rank_candidates(
    project: &ProjectRecord,
    developers: &[DeveloperRecord],
    limit: usize,
) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = developers
        .iter()
        .filter_map(|developer| {
            let outcome = score_match(
                &developer.profile,
                &developer.skills,
                &project.minimums,
                &project.requirements,
            );
            if outcome.score > 0 {
                Some(RankedMatch {
                    developer: developer.clone(),
                    outcome,
                })
            } else {
                None
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.outcome.score.cmp(&a.outcome.score));
    ranked.truncate(limit);
    ranked
}
