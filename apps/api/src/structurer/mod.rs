//! AI resume structuring.
//!
//! Turns raw resume text into a loosely-typed JSON record. The schema is NOT
//! guaranteed: the model drifts on key names and field shapes run to run,
//! which is why everything downstream goes through `portfolio::normalize`
//! before a template ever sees it.

use serde_json::{json, Map, Value};

use crate::llm_client::{LlmClient, LlmError};
use crate::structurer::prompts::{RESUME_STRUCTURE_PROMPT, RESUME_STRUCTURE_SYSTEM};

pub mod prompts;

/// Longest summary carried into a fallback record.
const FALLBACK_SUMMARY_CHARS: usize = 800;

/// Asks the LLM to structure raw resume text.
///
/// Returns `Ok(None)` when the model produced nothing usable (empty or
/// non-object output); callers substitute `fallback_record` so the pipeline
/// always has a normalizable input. Transport and parse failures are real
/// errors and bubble up.
pub async fn structure_resume(
    raw_text: &str,
    llm: &LlmClient,
) -> Result<Option<Map<String, Value>>, LlmError> {
    let prompt = RESUME_STRUCTURE_PROMPT.replace("{resume_text}", raw_text);
    let parsed: Value = llm.call_json(&prompt, RESUME_STRUCTURE_SYSTEM).await?;

    Ok(match parsed {
        Value::Object(record) if !record.is_empty() => Some(record),
        _ => None,
    })
}

/// Minimal valid record used when structuring returns nothing: the raw text
/// becomes the summary and every section is present but empty, so a portfolio
/// can still be generated.
pub fn fallback_record(raw_text: &str) -> Map<String, Value> {
    let summary: String = raw_text.trim().chars().take(FALLBACK_SUMMARY_CHARS).collect();

    let mut record = Map::new();
    record.insert(
        "personal_info".to_string(),
        json!({"name": "Candidate", "email": "", "phone": ""}),
    );
    record.insert("summary".to_string(), Value::String(summary));
    for section in ["work_experience", "internships", "projects", "education"] {
        record.insert(section.to_string(), Value::Array(Vec::new()));
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_record_has_all_sections() {
        let record = fallback_record("Jane Doe. Rust engineer.");
        assert_eq!(record["summary"], "Jane Doe. Rust engineer.");
        assert_eq!(record["personal_info"]["name"], "Candidate");
        for section in ["work_experience", "internships", "projects", "education"] {
            assert_eq!(record[section], Value::Array(Vec::new()));
        }
    }

    #[test]
    fn test_fallback_summary_truncated_on_char_boundary() {
        let long = "é".repeat(2000);
        let record = fallback_record(&long);
        let summary = record["summary"].as_str().unwrap();
        assert_eq!(summary.chars().count(), FALLBACK_SUMMARY_CHARS);
    }

    #[test]
    fn test_fallback_summary_trims_whitespace() {
        let record = fallback_record("   \n  text  \n ");
        assert_eq!(record["summary"], "text");
    }

    #[test]
    fn test_fallback_on_empty_text_is_still_valid() {
        let record = fallback_record("");
        assert_eq!(record["summary"], "");
        assert!(record["projects"].is_array());
    }
}
