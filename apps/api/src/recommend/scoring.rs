//! Rule-based course scoring: deterministic, additive, fully offline.
//!
//! Each rule that fires appends one reason string; the reason order is part
//! of the contract surfaced to the student, so rules always run in the same
//! sequence: interest match, requirement fulfillment, no-prerequisite,
//! foundational.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::course::CourseRecord;
use crate::requirements::Requirements;

/// Multiplier applied to the matched category's interest score.
const INTEREST_MULTIPLIER: f64 = 10.0;
/// Fixed bonus for a course whose category has an outstanding requirement.
const REQUIREMENT_BONUS: f64 = 20.0;
/// Fixed bonus for a course with no prerequisites.
const NO_PREREQ_BONUS: f64 = 15.0;
/// Fixed bonus for a foundational (101-level) course.
const FOUNDATIONAL_BONUS: f64 = 10.0;

/// One ranked course with the reasons each scoring rule recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub course: CourseRecord,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Scores every record and returns the top `top_n`, highest first.
///
/// Scores are plain sums, never capped or normalized. The sort is stable:
/// equal scores keep the order the records came in. `top_n` larger than the
/// record count returns everything; empty input returns an empty list.
pub fn score_and_rank(
    records: &[CourseRecord],
    interest_scores: &HashMap<String, f64>,
    requirements: &Requirements,
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    let mut scored: Vec<ScoredRecommendation> = records
        .iter()
        .map(|record| score_course(record, interest_scores, requirements))
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_n);
    scored
}

fn score_course(
    record: &CourseRecord,
    interest_scores: &HashMap<String, f64>,
    requirements: &Requirements,
) -> ScoredRecommendation {
    let mut score = 0.0;
    let mut reasons = Vec::new();

    if let Some(interest) = interest_scores.get(&record.category) {
        let contribution = interest * INTEREST_MULTIPLIER;
        score += contribution;
        reasons.push(format!(
            "Matches your interest in {} (score: {:.1})",
            record.category, contribution
        ));
    }

    let required = requirements.credits_for(&record.category);
    if required > 0 {
        score += REQUIREMENT_BONUS;
        reasons.push(format!(
            "Fulfills {} requirement ({} credits needed)",
            record.category, required
        ));
    }

    if record.prerequisites.is_empty() {
        score += NO_PREREQ_BONUS;
        reasons.push("No prerequisites required".to_string());
    }

    if record.code.contains("101") {
        score += FOUNDATIONAL_BONUS;
        reasons.push("Foundational course".to_string());
    }

    ScoredRecommendation {
        course: record.clone(),
        score,
        reasons,
    }
}
