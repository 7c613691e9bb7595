//! Mock interview engine.
//!
//! Drives a text interview against a job description: the chat endpoint asks
//! the next question given the transcript so far, the summarize endpoint
//! scores the finished session. Both are prompt-in, JSON-out calls through
//! `llm_client`. Proctoring counters arrive from the client and are folded
//! into the summary prompt; a session terminated by proctoring may be
//! summarized even with an empty transcript.

use serde::{Deserialize, Serialize};

use crate::interview::prompts::{
    INTERVIEW_CHAT_PROMPT, INTERVIEW_CHAT_SYSTEM, INTERVIEW_SUMMARY_PROMPT,
    INTERVIEW_SUMMARY_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};

pub mod handlers;
pub mod prompts;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Next interviewer turn produced by the chat call.
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Client-side proctoring counters accumulated during the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProctoringData {
    #[serde(default)]
    pub tab_switch_count: u32,
    #[serde(default)]
    pub phone_detection_count: u32,
    #[serde(default)]
    pub no_person_warnings: u32,
    #[serde(default)]
    pub multiple_person_warnings: u32,
    #[serde(default)]
    pub termination_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub overall_score: i32,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub overall_feedback: String,
}

/// Asks the model for the next interview question given the transcript so far.
pub async fn next_question(
    llm: &LlmClient,
    job_description: &str,
    history: &[ChatMessage],
    difficulty: &str,
) -> Result<ChatReply, LlmError> {
    let prompt = build_chat_prompt(job_description, history, difficulty);
    llm.call_json(&prompt, INTERVIEW_CHAT_SYSTEM).await
}

/// Scores a finished session. `proctoring` is optional; when present its
/// counters are surfaced to the model alongside the transcript.
pub async fn summarize(
    llm: &LlmClient,
    job_description: &str,
    history: &[ChatMessage],
    proctoring: Option<&ProctoringData>,
) -> Result<InterviewSummary, LlmError> {
    let prompt = build_summary_prompt(job_description, history, proctoring);
    llm.call_json(&prompt, INTERVIEW_SUMMARY_SYSTEM).await
}

/// A summary without a transcript is only meaningful when proctoring
/// terminated the session early.
pub fn can_summarize(history: &[ChatMessage], proctoring: Option<&ProctoringData>) -> bool {
    !history.is_empty() || proctoring.is_some_and(|p| p.termination_reason.is_some())
}

fn build_chat_prompt(job_description: &str, history: &[ChatMessage], difficulty: &str) -> String {
    INTERVIEW_CHAT_PROMPT
        .replace("{job_description}", job_description)
        .replace("{difficulty}", difficulty)
        .replace("{transcript}", &format_transcript(history))
}

fn build_summary_prompt(
    job_description: &str,
    history: &[ChatMessage],
    proctoring: Option<&ProctoringData>,
) -> String {
    INTERVIEW_SUMMARY_PROMPT
        .replace("{job_description}", job_description)
        .replace("{transcript}", &format_transcript(history))
        .replace("{proctoring_report}", &format_proctoring(proctoring))
}

fn format_transcript(history: &[ChatMessage]) -> String {
    if history.is_empty() {
        return "(no messages)".to_string();
    }
    history
        .iter()
        .map(|m| format!("{}: {}", m.role, m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_proctoring(proctoring: Option<&ProctoringData>) -> String {
    let Some(p) = proctoring else {
        return "(no proctoring data)".to_string();
    };
    let mut report = format!(
        "tab switches: {}, phone detections: {}, no-person warnings: {}, multiple-person warnings: {}",
        p.tab_switch_count,
        p.phone_detection_count,
        p.no_person_warnings,
        p.multiple_person_warnings
    );
    if let Some(reason) = &p.termination_reason {
        report.push_str(&format!("\nsession terminated early: {reason}"));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn msg(role: &str, content: &str) -> ChatMessage {
        ChatMessage {
            role: role.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_can_summarize_with_transcript() {
        assert!(can_summarize(&[msg("assistant", "Tell me about yourself")], None));
    }

    #[test]
    fn test_cannot_summarize_empty_transcript_without_termination() {
        assert!(!can_summarize(&[], None));
        assert!(!can_summarize(&[], Some(&ProctoringData::default())));
    }

    #[test]
    fn test_can_summarize_empty_transcript_when_terminated() {
        let proctoring = ProctoringData {
            termination_reason: Some("phone detected".to_string()),
            ..ProctoringData::default()
        };
        assert!(can_summarize(&[], Some(&proctoring)));
    }

    #[test]
    fn test_chat_prompt_carries_jd_difficulty_and_transcript() {
        let history = [msg("assistant", "First question?"), msg("user", "My answer")];
        let prompt = build_chat_prompt("Senior Rust Engineer", &history, "hard");
        assert!(prompt.contains("Senior Rust Engineer"));
        assert!(prompt.contains("hard"));
        assert!(prompt.contains("assistant: First question?"));
        assert!(prompt.contains("user: My answer"));
    }

    #[test]
    fn test_empty_transcript_has_placeholder() {
        assert_eq!(format_transcript(&[]), "(no messages)");
    }

    #[test]
    fn test_summary_prompt_includes_proctoring_counts_and_reason() {
        let proctoring = ProctoringData {
            tab_switch_count: 3,
            termination_reason: Some("left the tab".to_string()),
            ..ProctoringData::default()
        };
        let prompt = build_summary_prompt("Backend role", &[], Some(&proctoring));
        assert!(prompt.contains("tab switches: 3"));
        assert!(prompt.contains("session terminated early: left the tab"));
    }

    #[test]
    fn test_summary_prompt_without_proctoring_notes_absence() {
        let prompt = build_summary_prompt("Backend role", &[msg("user", "hi")], None);
        assert!(prompt.contains("(no proctoring data)"));
    }

    #[test]
    fn test_proctoring_deserializes_with_missing_counters() {
        let p: ProctoringData = serde_json::from_str(r#"{"tab_switch_count": 2}"#).unwrap();
        assert_eq!(p.tab_switch_count, 2);
        assert_eq!(p.phone_detection_count, 0);
        assert!(p.termination_reason.is_none());
    }
}
