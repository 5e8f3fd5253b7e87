//! Prompt Builder — renders the fixed template for an operation.
//!
//! Pure and deterministic. User-supplied strings are inserted verbatim: no
//! escaping, trimming or length limits are applied here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generation::prompts::{
    COVER_LETTER_TEMPLATE, CV_ANALYSIS_TEMPLATE, DEFAULT_MOTIVATION_CONTEXT,
    FILL_BLANKS_FORMAT, JOB_DESCRIPTION_TEMPLATE, MOOD_SUPPORT_TEMPLATE, MOTIVATION_TEMPLATE,
    MULTIPLE_CHOICE_FORMAT, QUIZ_SYSTEM, QUIZ_TEMPLATE, SHORT_ANSWER_FORMAT, STUDY_BREAK_PROMPT,
};
use crate::generation::OperationKind;

/// Question style requested for a generated quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizType {
    MultipleChoice,
    FillBlanks,
    ShortAnswer,
}

impl QuizType {
    fn question_style(self) -> &'static str {
        match self {
            QuizType::MultipleChoice => "multiple choice",
            QuizType::FillBlanks => "fill-in-the-blank",
            QuizType::ShortAnswer => "short answer",
        }
    }

    fn question_format(self) -> &'static str {
        match self {
            QuizType::MultipleChoice => MULTIPLE_CHOICE_FORMAT,
            QuizType::FillBlanks => FILL_BLANKS_FORMAT,
            QuizType::ShortAnswer => SHORT_ANSWER_FORMAT,
        }
    }
}

impl FromStr for QuizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple-choice" => Ok(QuizType::MultipleChoice),
            "fill-blanks" => Ok(QuizType::FillBlanks),
            "short-answer" => Ok(QuizType::ShortAnswer),
            other => Err(format!("Invalid quiz type '{other}'")),
        }
    }
}

/// Typed inputs for each operation. The variant determines the operation kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInputs {
    CvAnalysis {
        cv_text: String,
    },
    JobDescription {
        role: String,
        years_experience: u32,
    },
    CoverLetter {
        cv_text: String,
        job_description: String,
        company_name: String,
    },
    Quiz {
        notes_text: String,
        quiz_type: QuizType,
    },
    MoodSupport {
        message: String,
    },
    StudyBreak,
    Motivation {
        /// Blank context falls back to a generic student goal.
        context: Option<String>,
    },
}

impl PromptInputs {
    pub fn kind(&self) -> OperationKind {
        match self {
            PromptInputs::CvAnalysis { .. } => OperationKind::CvAnalysis,
            PromptInputs::JobDescription { .. } => OperationKind::JobDescription,
            PromptInputs::CoverLetter { .. } => OperationKind::CoverLetter,
            PromptInputs::Quiz { .. } => OperationKind::Quiz,
            PromptInputs::MoodSupport { .. } => OperationKind::MoodSupport,
            PromptInputs::StudyBreak => OperationKind::StudyBreak,
            PromptInputs::Motivation { .. } => OperationKind::Motivation,
        }
    }
}

/// Renders the instruction string for `inputs`.
pub fn build_prompt(inputs: &PromptInputs) -> String {
    match inputs {
        PromptInputs::CvAnalysis { cv_text } => {
            render(CV_ANALYSIS_TEMPLATE, &[("cv_text", cv_text)])
        }
        PromptInputs::JobDescription {
            role,
            years_experience,
        } => render(
            JOB_DESCRIPTION_TEMPLATE,
            &[
                ("role", role),
                ("years_experience", &years_experience.to_string()),
            ],
        ),
        PromptInputs::CoverLetter {
            cv_text,
            job_description,
            company_name,
        } => render(
            COVER_LETTER_TEMPLATE,
            &[
                ("cv_text", cv_text),
                ("job_description", job_description),
                ("company_name", company_name),
            ],
        ),
        PromptInputs::Quiz {
            notes_text,
            quiz_type,
        } => render(
            QUIZ_TEMPLATE,
            &[
                ("system", QUIZ_SYSTEM),
                ("question_style", quiz_type.question_style()),
                ("notes_text", notes_text),
                ("question_format", quiz_type.question_format()),
            ],
        ),
        PromptInputs::MoodSupport { message } => {
            render(MOOD_SUPPORT_TEMPLATE, &[("message", message)])
        }
        PromptInputs::StudyBreak => STUDY_BREAK_PROMPT.to_string(),
        PromptInputs::Motivation { context } => {
            let context = context
                .as_deref()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or(DEFAULT_MOTIVATION_CONTEXT);
            render(MOTIVATION_TEMPLATE, &[("context", context)])
        }
    }
}

/// Single-pass placeholder substitution. Inserted values are never rescanned,
/// so user text containing `{cv_text}` or similar is kept literally.
fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(
        template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>(),
    );
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let substituted = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, close))
        });

        match substituted {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
