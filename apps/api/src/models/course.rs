use serde::{Deserialize, Serialize};

pub const DEFAULT_CREDITS: u32 = 3;
pub const DEFAULT_CATEGORY: &str = "General";

/// One catalog entry. Built once by the segmenter, immutable afterwards.
///
/// `code` is the catalog-unique identifier and always contains at least one
/// digit; the segmenter discards lines that cannot produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub credits: u32,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    pub category: String,
}

impl CourseRecord {
    /// A record with everything except code and name defaulted.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: String::new(),
            credits: DEFAULT_CREDITS,
            prerequisites: Vec::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}
