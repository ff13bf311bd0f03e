// Prompt constants for the Claude course evaluator.

/// System prompt for course evaluation. Enforces JSON-only output.
pub const EVALUATE_SYSTEM: &str =
    "You are an expert academic advisor helping students select courses. \
    You MUST respond with valid JSON only: a JSON array of recommendation objects. \
    Do NOT include any text outside the JSON array. \
    Do NOT use markdown code fences.";

/// Evaluation prompt template. Replace `{top_n}`, `{interest_scores}`,
/// `{requirements}` and `{courses}` before sending.
pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"Based on the student's interests and graduation requirements, recommend the top {top_n} courses.

Student Interest Scores:
{interest_scores}

Graduation Requirements:
{requirements}

Available Courses:
{courses}

Recommend {top_n} courses that best match the student's interests and help fulfill their graduation requirements. Respond with a JSON array of objects, each containing:
- "code": the course code, exactly as listed above
- "score": a number from 0 to 100
- "reasons": an array of short reason strings
"#;
