//! Graduation-requirement targets: per-category credit counts plus totals.

pub mod handlers;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized graduation requirements.
/// A category absent from `categories` requires 0 credits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub total_credits: u32,
    pub completed_credits: u32,
    pub categories: HashMap<String, u32>,
}

impl Requirements {
    /// Builds requirements from the loosely-typed map the client submits:
    /// one flat object mixing the `total_credits` / `completed_credits`
    /// scalars with per-category credit targets.
    ///
    /// Non-numeric values are dropped; negative values clamp to 0;
    /// fractional values truncate to whole credits.
    pub fn from_raw(raw: &Map<String, Value>) -> Self {
        let mut requirements = Requirements::default();

        for (key, value) in raw {
            let credits = match as_credits(value) {
                Some(credits) => credits,
                None => continue,
            };
            match key.as_str() {
                "total_credits" => requirements.total_credits = credits,
                "completed_credits" => requirements.completed_credits = credits,
                _ => {
                    requirements.categories.insert(key.clone(), credits);
                }
            }
        }

        requirements
    }

    /// Required credits for a category; absent categories require none.
    pub fn credits_for(&self, category: &str) -> u32 {
        self.categories.get(category).copied().unwrap_or(0)
    }
}

fn as_credits(value: &Value) -> Option<u32> {
    let number = value.as_f64()?;
    if !number.is_finite() {
        return None;
    }
    Some(number.max(0.0) as u32)
}
