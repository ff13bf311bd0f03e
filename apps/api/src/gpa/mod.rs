//! GPA arithmetic on a standard 4.0-anchored scale.
//!
//! Pure functions over well-typed numeric input; the HTTP boundary in
//! `handlers` validates raw user-submitted values before anything here runs.

pub mod handlers;

use serde::{Deserialize, Serialize};

/// Letter grade to grade-point mapping. Entries with a grade outside this
/// table are skipped entirely: they contribute neither credits nor points.
const GRADE_POINTS: &[(&str, f64)] = &[
    ("A+", 4.0),
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("F", 0.0),
];

fn grade_points(grade: &str) -> Option<f64> {
    let normalized = grade.trim().to_uppercase();
    GRADE_POINTS
        .iter()
        .find(|(letter, _)| *letter == normalized)
        .map(|(_, points)| *points)
}

/// One graded course: letter grade plus credit hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeEntry {
    pub grade: String,
    pub credits: f64,
}

/// Term GPA summary. All fields derived, never independently mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpaResult {
    pub gpa: f64,
    pub total_credits: f64,
    pub grade_points: f64,
}

/// Cumulative GPA across a prior record and a new term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativeGpaResult {
    pub cumulative_gpa: f64,
    pub total_credits: f64,
    pub total_grade_points: f64,
    pub semester_gpa: f64,
}

/// Computes the GPA for one set of graded courses.
pub fn compute(grades: &[GradeEntry]) -> GpaResult {
    let mut total_credits = 0.0;
    let mut total_grade_points = 0.0;

    for entry in grades {
        let points = match grade_points(&entry.grade) {
            Some(points) => points,
            None => continue,
        };
        total_credits += entry.credits;
        total_grade_points += points * entry.credits;
    }

    let gpa = if total_credits > 0.0 {
        total_grade_points / total_credits
    } else {
        0.0
    };

    GpaResult {
        gpa: round2(gpa),
        total_credits,
        grade_points: round2(total_grade_points),
    }
}

/// Folds a new term into a prior cumulative record.
///
/// Prior grade points are reconstructed as `prior_gpa * prior_credits`; the
/// term result is reported unchanged alongside the combined figures.
pub fn compute_cumulative(
    prior_gpa: f64,
    prior_credits: f64,
    new_grades: &[GradeEntry],
) -> CumulativeGpaResult {
    let prior_grade_points = prior_gpa * prior_credits;
    let term = compute(new_grades);

    let total_credits = prior_credits + term.total_credits;
    let total_grade_points = prior_grade_points + term.grade_points;
    let cumulative_gpa = if total_credits > 0.0 {
        total_grade_points / total_credits
    } else {
        0.0
    };

    CumulativeGpaResult {
        cumulative_gpa: round2(cumulative_gpa),
        total_credits,
        total_grade_points: round2(total_grade_points),
        semester_gpa: term.gpa,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(letter: &str, credits: f64) -> GradeEntry {
        GradeEntry {
            grade: letter.to_string(),
            credits,
        }
    }

    #[test]
    fn test_empty_grades_yield_zeroes() {
        let result = compute(&[]);
        assert_eq!(
            result,
            GpaResult {
                gpa: 0.0,
                total_credits: 0.0,
                grade_points: 0.0
            }
        );
    }

    #[test]
    fn test_a_and_b_average_to_three_point_five() {
        let result = compute(&[grade("A", 3.0), grade("B", 3.0)]);
        assert_eq!(result.gpa, 3.5);
        assert_eq!(result.total_credits, 6.0);
        assert_eq!(result.grade_points, 21.0);
    }

    #[test]
    fn test_plus_and_minus_variants_resolve() {
        assert_eq!(compute(&[grade("A-", 3.0)]).gpa, 3.7);
        assert_eq!(compute(&[grade("B+", 3.0)]).gpa, 3.3);
        assert_eq!(compute(&[grade("F", 3.0)]).gpa, 0.0);
    }

    #[test]
    fn test_lowercase_grades_are_normalized() {
        let result = compute(&[grade("a-", 3.0)]);
        assert_eq!(result.gpa, 3.7);
    }

    #[test]
    fn test_unknown_grade_is_skipped_entirely() {
        let result = compute(&[grade("Z", 3.0), grade("A", 3.0)]);
        assert_eq!(result.total_credits, 3.0);
        assert_eq!(result.gpa, 4.0);
    }

    #[test]
    fn test_all_unknown_grades_behave_like_empty_input() {
        let result = compute(&[grade("Z", 3.0), grade("pass", 4.0)]);
        assert_eq!(result.gpa, 0.0);
        assert_eq!(result.total_credits, 0.0);
        assert_eq!(result.grade_points, 0.0);
    }

    #[test]
    fn test_zero_credit_entry_counts_no_weight() {
        let result = compute(&[grade("A", 0.0), grade("B", 3.0)]);
        assert_eq!(result.gpa, 3.0);
        assert_eq!(result.total_credits, 3.0);
    }

    #[test]
    fn test_gpa_rounds_to_two_decimals() {
        // 3.3*3 + 2.0*3 = 15.9 over 6 credits = 2.65
        let result = compute(&[grade("B+", 3.0), grade("C", 3.0)]);
        assert_eq!(result.gpa, 2.65);
        assert_eq!(result.grade_points, 15.9);
    }

    #[test]
    fn test_cumulative_combines_prior_and_new_term() {
        let result = compute_cumulative(3.0, 30.0, &[grade("A", 3.0)]);
        assert_eq!(result.total_credits, 33.0);
        assert_eq!(result.total_grade_points, 102.0);
        assert_eq!(result.cumulative_gpa, 3.09);
        assert_eq!(result.semester_gpa, 4.0);
    }

    #[test]
    fn test_cumulative_with_no_history_matches_term_gpa() {
        let result = compute_cumulative(0.0, 0.0, &[grade("B", 3.0)]);
        assert_eq!(result.cumulative_gpa, 3.0);
        assert_eq!(result.semester_gpa, 3.0);
    }

    #[test]
    fn test_cumulative_of_nothing_is_zero() {
        let result = compute_cumulative(0.0, 0.0, &[]);
        assert_eq!(result.cumulative_gpa, 0.0);
        assert_eq!(result.total_credits, 0.0);
    }
}
