//! Axum route handler for GPA calculation.
//!
//! This is the validation boundary: raw user-submitted values are converted
//! to well-typed numbers here, failing fast, so the arithmetic core never
//! sees malformed input.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::gpa::{compute, compute_cumulative, CumulativeGpaResult, GpaResult, GradeEntry};

/// Raw grade entry as submitted. Credits arrive as an arbitrary JSON value
/// and are validated before use.
#[derive(Debug, Deserialize)]
pub struct RawGradeEntry {
    pub grade: String,
    pub credits: Value,
}

#[derive(Debug, Deserialize)]
pub struct GpaRequest {
    #[serde(default)]
    pub grades: Vec<RawGradeEntry>,
    pub prior_gpa: Option<Value>,
    pub prior_credits: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GpaResponse {
    Cumulative(CumulativeGpaResult),
    Term(GpaResult),
}

/// POST /api/v1/gpa
///
/// Computes a term GPA, or a cumulative GPA when prior credits are provided.
pub async fn handle_gpa(Json(req): Json<GpaRequest>) -> Result<Json<GpaResponse>, AppError> {
    let grades = req
        .grades
        .iter()
        .map(|raw| {
            Ok(GradeEntry {
                grade: raw.grade.clone(),
                credits: numeric_field("credits", &raw.credits)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    let prior_gpa = match &req.prior_gpa {
        Some(value) => numeric_field("prior_gpa", value)?,
        None => 0.0,
    };
    let prior_credits = match &req.prior_credits {
        Some(value) => numeric_field("prior_credits", value)?,
        None => 0.0,
    };

    let response = if prior_credits > 0.0 {
        GpaResponse::Cumulative(compute_cumulative(prior_gpa, prior_credits, &grades))
    } else {
        GpaResponse::Term(compute(&grades))
    };

    Ok(Json(response))
}

/// Accepts a JSON number or a numeric string; anything else, and any negative
/// or non-finite value, is a validation error.
fn numeric_field(field: &str, value: &Value) -> Result<f64, AppError> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let number =
        number.ok_or_else(|| AppError::Validation(format!("{field} must be a number")))?;
    if !number.is_finite() || number < 0.0 {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_field_accepts_numbers_and_numeric_strings() {
        assert_eq!(numeric_field("credits", &json!(3)).unwrap(), 3.0);
        assert_eq!(numeric_field("credits", &json!(3.5)).unwrap(), 3.5);
        assert_eq!(numeric_field("credits", &json!("4")).unwrap(), 4.0);
        assert_eq!(numeric_field("credits", &json!(" 2.5 ")).unwrap(), 2.5);
    }

    #[test]
    fn test_numeric_field_rejects_non_numeric_values() {
        assert!(numeric_field("credits", &json!("three")).is_err());
        assert!(numeric_field("credits", &json!(true)).is_err());
        assert!(numeric_field("credits", &json!(null)).is_err());
        assert!(numeric_field("credits", &json!([3])).is_err());
    }

    #[test]
    fn test_numeric_field_rejects_negative_values() {
        assert!(numeric_field("credits", &json!(-1)).is_err());
        assert!(numeric_field("credits", &json!("-2.5")).is_err());
    }
}
