//! Course evaluation backends behind one trait.
//!
//! `RuleBasedEvaluator` is the deterministic default. `ClaudeEvaluator` asks
//! the model to re-rank the catalog and degrades to the rule-based result
//! whenever the call or its output is unusable, so callers never see an
//! evaluation error. `AppState` carries an `Arc<dyn CourseEvaluator>`,
//! selected once at startup.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::catalog::tokenizer::render_catalog;
use crate::llm_client::LlmClient;
use crate::models::course::CourseRecord;
use crate::recommend::prompts::{EVALUATE_PROMPT_TEMPLATE, EVALUATE_SYSTEM};
use crate::recommend::scoring::{score_and_rank, ScoredRecommendation};
use crate::requirements::Requirements;

#[async_trait]
pub trait CourseEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        records: &[CourseRecord],
        interest_scores: &HashMap<String, f64>,
        requirements: &Requirements,
        top_n: usize,
    ) -> Vec<ScoredRecommendation>;
}

/// The deterministic scorer behind the evaluator interface.
pub struct RuleBasedEvaluator;

#[async_trait]
impl CourseEvaluator for RuleBasedEvaluator {
    async fn evaluate(
        &self,
        records: &[CourseRecord],
        interest_scores: &HashMap<String, f64>,
        requirements: &Requirements,
        top_n: usize,
    ) -> Vec<ScoredRecommendation> {
        score_and_rank(records, interest_scores, requirements, top_n)
    }
}

/// Model-assisted evaluator. Strictly optional: every failure path returns
/// the rule-based result instead.
pub struct ClaudeEvaluator {
    llm: LlmClient,
}

impl ClaudeEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

/// Shape the model is asked to return, one object per recommended course.
#[derive(Debug, Deserialize)]
struct ModelRecommendation {
    code: String,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    reasons: Vec<String>,
}

#[async_trait]
impl CourseEvaluator for ClaudeEvaluator {
    async fn evaluate(
        &self,
        records: &[CourseRecord],
        interest_scores: &HashMap<String, f64>,
        requirements: &Requirements,
        top_n: usize,
    ) -> Vec<ScoredRecommendation> {
        if records.is_empty() {
            return Vec::new();
        }

        let prompt = build_prompt(records, interest_scores, requirements, top_n);
        match self
            .llm
            .call_json::<Vec<ModelRecommendation>>(&prompt, EVALUATE_SYSTEM)
            .await
        {
            Ok(items) => {
                let mapped = map_to_records(items, records, top_n);
                if mapped.is_empty() {
                    warn!("Model returned no usable recommendations; using rule-based scoring");
                    score_and_rank(records, interest_scores, requirements, top_n)
                } else {
                    mapped
                }
            }
            Err(e) => {
                warn!("Model evaluation failed ({e}); using rule-based scoring");
                score_and_rank(records, interest_scores, requirements, top_n)
            }
        }
    }
}

fn build_prompt(
    records: &[CourseRecord],
    interest_scores: &HashMap<String, f64>,
    requirements: &Requirements,
    top_n: usize,
) -> String {
    EVALUATE_PROMPT_TEMPLATE
        .replace("{top_n}", &top_n.to_string())
        .replace(
            "{interest_scores}",
            &serde_json::to_string_pretty(interest_scores).unwrap_or_default(),
        )
        .replace(
            "{requirements}",
            &serde_json::to_string_pretty(requirements).unwrap_or_default(),
        )
        .replace("{courses}", &render_catalog(records))
}

/// Resolves model output back to catalog records by course code.
/// Codes that match nothing in the catalog are dropped.
fn map_to_records(
    items: Vec<ModelRecommendation>,
    records: &[CourseRecord],
    top_n: usize,
) -> Vec<ScoredRecommendation> {
    let mut mapped = Vec::new();
    for item in items {
        let course = match records.iter().find(|r| r.code == item.code) {
            Some(course) => course.clone(),
            None => continue,
        };
        mapped.push(ScoredRecommendation {
            course,
            score: item.score,
            reasons: item.reasons,
        });
        if mapped.len() == top_n {
            break;
        }
    }
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_catalog;

    fn model_item(code: &str, score: f64) -> ModelRecommendation {
        ModelRecommendation {
            code: code.to_string(),
            score,
            reasons: vec!["Strong match".to_string()],
        }
    }

    #[test]
    fn test_map_to_records_resolves_known_codes() {
        let records = sample_catalog();
        let mapped = map_to_records(vec![model_item("CS101", 92.0)], &records, 5);
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].course.name, "Introduction to Computer Science");
        assert_eq!(mapped[0].score, 92.0);
        assert_eq!(mapped[0].reasons, vec!["Strong match"]);
    }

    #[test]
    fn test_map_to_records_drops_unknown_codes() {
        let records = sample_catalog();
        let mapped = map_to_records(
            vec![model_item("BIO999", 90.0), model_item("MATH101", 80.0)],
            &records,
            5,
        );
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped[0].course.code, "MATH101");
    }

    #[test]
    fn test_map_to_records_stops_at_top_n() {
        let records = sample_catalog();
        let items = vec![
            model_item("CS101", 90.0),
            model_item("MATH101", 85.0),
            model_item("ENG101", 80.0),
        ];
        let mapped = map_to_records(items, &records, 2);
        assert_eq!(mapped.len(), 2);
    }

    #[test]
    fn test_map_to_records_all_unknown_is_empty() {
        let records = sample_catalog();
        let mapped = map_to_records(vec![model_item("BIO999", 90.0)], &records, 5);
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_model_recommendation_tolerates_missing_fields() {
        let item: ModelRecommendation = serde_json::from_str(r#"{"code": "CS101"}"#).unwrap();
        assert_eq!(item.code, "CS101");
        assert_eq!(item.score, 0.0);
        assert!(item.reasons.is_empty());
    }

    #[test]
    fn test_build_prompt_substitutes_every_placeholder() {
        let records = sample_catalog();
        let interests = HashMap::from([("Mathematics".to_string(), 5.0)]);
        let prompt = build_prompt(&records, &interests, &Requirements::default(), 5);

        assert!(!prompt.contains("{top_n}"));
        assert!(!prompt.contains("{interest_scores}"));
        assert!(!prompt.contains("{requirements}"));
        assert!(!prompt.contains("{courses}"));
        assert!(prompt.contains("Course Code: CS101"));
        assert!(prompt.contains("Mathematics"));
    }

    #[tokio::test]
    async fn test_rule_based_evaluator_matches_score_and_rank() {
        let records = sample_catalog();
        let interests = HashMap::from([("Computer Science".to_string(), 3.0)]);
        let requirements = Requirements::default();

        let via_trait = RuleBasedEvaluator
            .evaluate(&records, &interests, &requirements, 5)
            .await;
        let direct = score_and_rank(&records, &interests, &requirements, 5);

        assert_eq!(via_trait.len(), direct.len());
        for (a, b) in via_trait.iter().zip(direct.iter()) {
            assert_eq!(a.course.code, b.course.code);
            assert_eq!(a.score, b.score);
            assert_eq!(a.reasons, b.reasons);
        }
    }
}
