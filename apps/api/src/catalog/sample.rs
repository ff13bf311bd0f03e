//! Built-in sample catalog, used whenever no uploaded document yields records.

use crate::models::course::CourseRecord;

fn course(
    code: &str,
    name: &str,
    description: &str,
    credits: u32,
    prerequisites: &[&str],
    category: &str,
) -> CourseRecord {
    CourseRecord {
        code: code.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        credits,
        prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
        category: category.to_string(),
    }
}

/// The fixed reference catalog: ten courses across six categories, enough to
/// exercise every scoring rule (prerequisite chains, 101-level codes, mixed
/// categories) without a real document.
pub fn sample_catalog() -> Vec<CourseRecord> {
    vec![
        course(
            "CS101",
            "Introduction to Computer Science",
            "Fundamental concepts of programming and computer science",
            3,
            &[],
            "Computer Science",
        ),
        course(
            "CS201",
            "Data Structures",
            "Study of data structures and algorithms",
            3,
            &["CS101"],
            "Computer Science",
        ),
        course(
            "MATH101",
            "Calculus I",
            "Introduction to differential calculus",
            4,
            &[],
            "Mathematics",
        ),
        course(
            "MATH201",
            "Calculus II",
            "Introduction to integral calculus",
            4,
            &["MATH101"],
            "Mathematics",
        ),
        course(
            "ENG101",
            "English Composition",
            "Writing and critical thinking",
            3,
            &[],
            "English",
        ),
        course(
            "PHY101",
            "Physics I",
            "Mechanics and thermodynamics",
            4,
            &["MATH101"],
            "Physics",
        ),
        course(
            "CS301",
            "Algorithms",
            "Algorithm design and analysis",
            3,
            &["CS201", "MATH101"],
            "Computer Science",
        ),
        course(
            "CS401",
            "Artificial Intelligence",
            "Introduction to AI concepts and machine learning",
            3,
            &["CS301"],
            "Computer Science",
        ),
        course(
            "HIST101",
            "World History",
            "Survey of world history",
            3,
            &[],
            "History",
        ),
        course(
            "ART101",
            "Introduction to Art",
            "Basic principles of art and design",
            3,
            &[],
            "Art",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_size_is_stable() {
        assert_eq!(sample_catalog().len(), 10);
        assert_eq!(sample_catalog(), sample_catalog());
    }

    #[test]
    fn test_every_sample_code_contains_a_digit() {
        for record in sample_catalog() {
            assert!(
                record.code.chars().any(|c| c.is_ascii_digit()),
                "code {} has no digit",
                record.code
            );
        }
    }

    #[test]
    fn test_prerequisites_reference_known_codes() {
        let catalog = sample_catalog();
        for record in &catalog {
            for prereq in &record.prerequisites {
                assert!(
                    catalog.iter().any(|r| &r.code == prereq),
                    "{} requires unknown course {}",
                    record.code,
                    prereq
                );
            }
        }
    }
}
