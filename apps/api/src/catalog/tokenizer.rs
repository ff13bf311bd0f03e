//! Plain-text rendering of course records for the evaluation prompt, plus an
//! approximate, model-agnostic token count.

use crate::models::course::CourseRecord;

/// Renders a single record as a labeled text block.
pub fn render_course(course: &CourseRecord) -> String {
    let prerequisites = if course.prerequisites.is_empty() {
        "None".to_string()
    } else {
        course.prerequisites.join(", ")
    };
    format!(
        "Course Code: {}\nCourse Name: {}\nDescription: {}\nCredits: {}\nPrerequisites: {}\nCategory: {}\n",
        course.code, course.name, course.description, course.credits, prerequisites, course.category
    )
}

/// Renders a whole catalog, one block per record.
pub fn render_catalog(courses: &[CourseRecord]) -> String {
    courses
        .iter()
        .map(render_course)
        .collect::<Vec<_>>()
        .join("\n---\n")
}

/// Approximate token count: whitespace-delimited words. Close enough for
/// prompt sizing and reporting without tying the count to any one model.
pub fn approx_token_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn math101() -> CourseRecord {
        CourseRecord {
            code: "MATH101".to_string(),
            name: "Calculus I".to_string(),
            description: "Introduction to differential calculus".to_string(),
            credits: 4,
            prerequisites: Vec::new(),
            category: "Mathematics".to_string(),
        }
    }

    #[test]
    fn test_render_course_labels_every_field() {
        let text = render_course(&math101());
        assert!(text.contains("Course Code: MATH101"));
        assert!(text.contains("Course Name: Calculus I"));
        assert!(text.contains("Description: Introduction to differential calculus"));
        assert!(text.contains("Credits: 4"));
        assert!(text.contains("Prerequisites: None"));
        assert!(text.contains("Category: Mathematics"));
    }

    #[test]
    fn test_render_course_joins_prerequisites() {
        let mut course = math101();
        course.prerequisites = vec!["CS201".to_string(), "MATH101".to_string()];
        assert!(render_course(&course).contains("Prerequisites: CS201, MATH101"));
    }

    #[test]
    fn test_render_catalog_separates_records() {
        let catalog = vec![math101(), math101()];
        let text = render_catalog(&catalog);
        assert_eq!(text.matches("\n---\n").count(), 1);
    }

    #[test]
    fn test_approx_token_count_splits_on_whitespace() {
        assert_eq!(approx_token_count("a few  short\twords\nhere"), 5);
        assert_eq!(approx_token_count(""), 0);
    }
}
