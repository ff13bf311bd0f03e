//! Interest questionnaire: the fixed question bank and score aggregation.

pub mod handlers;

use std::collections::HashMap;

use serde::Deserialize;

/// One question: display text, answer token to credited categories, weight.
#[derive(Debug, Clone)]
pub struct Question {
    pub text: &'static str,
    pub weight: f64,
    answers: &'static [(&'static str, &'static [&'static str])],
}

impl Question {
    /// Valid answer tokens, in declaration order.
    pub fn options(&self) -> Vec<&'static str> {
        self.answers.iter().map(|(answer, _)| *answer).collect()
    }

    /// Categories credited by a normalized answer token. Unknown answers
    /// credit nothing.
    pub fn categories_for(&self, answer: &str) -> &'static [&'static str] {
        self.answers
            .iter()
            .find(|(candidate, _)| *candidate == answer)
            .map(|(_, categories)| *categories)
            .unwrap_or(&[])
    }
}

/// The fixed question bank, in presentation order. `question_id` in a
/// submitted answer is an index into this slice.
pub fn question_bank() -> &'static [Question] {
    QUESTIONS
}

const QUESTIONS: &[Question] = &[
    Question {
        text: "Do you enjoy working with technology and computers?",
        weight: 3.0,
        answers: &[("yes", &["Computer Science"]), ("no", &[])],
    },
    Question {
        text: "Are you interested in solving mathematical problems?",
        weight: 2.0,
        answers: &[
            ("yes", &["Mathematics", "Computer Science", "Physics"]),
            ("no", &[]),
        ],
    },
    Question {
        text: "Do you enjoy writing and communication?",
        weight: 2.0,
        answers: &[("yes", &["English"]), ("no", &[])],
    },
    Question {
        text: "Are you interested in understanding how the physical world works?",
        weight: 2.0,
        answers: &[("yes", &["Physics"]), ("no", &[])],
    },
    Question {
        text: "Do you have an interest in history and social studies?",
        weight: 1.0,
        answers: &[("yes", &["History"]), ("no", &[])],
    },
    Question {
        text: "Are you creative and interested in visual arts?",
        weight: 1.0,
        answers: &[("yes", &["Art"]), ("no", &[])],
    },
    Question {
        text: "Do you want to learn about artificial intelligence and machine learning?",
        weight: 3.0,
        answers: &[("yes", &["Computer Science"]), ("no", &[])],
    },
    Question {
        text: "Do you prefer theoretical or practical courses?",
        weight: 2.0,
        answers: &[
            ("theoretical", &["Mathematics", "Physics"]),
            ("practical", &["Computer Science", "Art"]),
        ],
    },
    Question {
        text: "Do you enjoy problem-solving and logical thinking?",
        weight: 2.0,
        answers: &[("yes", &["Computer Science", "Mathematics"]), ("no", &[])],
    },
    Question {
        text: "Are you interested in a career in technology?",
        weight: 3.0,
        answers: &[("yes", &["Computer Science"]), ("no", &[])],
    },
];

/// A submitted questionnaire answer. The id is signed so out-of-range values
/// of either sign are skipped rather than rejected at deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    pub answer: String,
}

/// Accumulates per-category interest scores from submitted answers.
///
/// Out-of-range question ids and unrecognized answers contribute nothing.
/// Pure summation: the order answers arrive in does not affect the result.
pub fn aggregate(answers: &[Answer], bank: &[Question]) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> = HashMap::new();

    for answer in answers {
        let question = match usize::try_from(answer.question_id)
            .ok()
            .and_then(|id| bank.get(id))
        {
            Some(question) => question,
            None => continue,
        };
        let token = answer.answer.trim().to_lowercase();
        for category in question.categories_for(&token) {
            *scores.entry((*category).to_string()).or_insert(0.0) += question.weight;
        }
    }

    scores
}
