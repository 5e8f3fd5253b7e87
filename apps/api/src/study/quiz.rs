//! Quiz output parsing. The model is asked for a bare JSON array; anything
//! else is rejected rather than partially returned.

use serde::{Deserialize, Serialize};

use crate::llm_client::{strip_json_fences, GenerationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    /// Only present for multiple-choice quizzes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub answer: String,
    #[serde(default)]
    pub explanation: String,
}

pub fn parse_quiz(raw: &str) -> Result<Vec<QuizQuestion>, GenerationError> {
    let text = strip_json_fences(raw);

    if !text.starts_with('[') || !text.ends_with(']') {
        return Err(GenerationError::MalformedOutput(
            "quiz response is not a JSON array".to_string(),
        ));
    }

    let questions: Vec<QuizQuestion> = serde_json::from_str(text)
        .map_err(|e| GenerationError::MalformedOutput(format!("quiz JSON did not parse: {e}")))?;

    if questions.is_empty() {
        return Err(GenerationError::MalformedOutput(
            "quiz response contained no questions".to_string(),
        ));
    }

    Ok(questions)
}
