// Prompt-to-text pipeline shared by every feature.
// Builder renders the template, pipeline sends it through the configured TextGenerator.

pub mod builder;
pub mod pipeline;
pub mod prompts;

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::llm_client::GenerationError;

pub use builder::{build_prompt, PromptInputs, QuizType};
pub use pipeline::run_generation;

/// Which fixed use case a request represents. Selects the template and the
/// default generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    CvAnalysis,
    JobDescription,
    CoverLetter,
    Quiz,
    MoodSupport,
    StudyBreak,
    Motivation,
}

impl OperationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::CvAnalysis => "cv_analysis",
            OperationKind::JobDescription => "job_description",
            OperationKind::CoverLetter => "cover_letter",
            OperationKind::Quiz => "quiz",
            OperationKind::MoodSupport => "mood_support",
            OperationKind::StudyBreak => "study_break",
            OperationKind::Motivation => "motivation",
        }
    }

    /// Fixed per-operation defaults sent to the endpoint.
    pub fn default_parameters(self) -> GenerationParameters {
        let (max_tokens, stop_sequences): (u32, &[&str]) = match self {
            OperationKind::CvAnalysis | OperationKind::JobDescription => (500, &[]),
            OperationKind::CoverLetter => (800, &[]),
            OperationKind::Quiz => (1000, &["\n\n"]),
            OperationKind::MoodSupport | OperationKind::Motivation => (150, &[]),
            OperationKind::StudyBreak => (100, &[]),
        };

        GenerationParameters {
            max_tokens,
            temperature: DEFAULT_TEMPERATURE,
            sampling_k: 0,
            stop_sequences: stop_sequences.iter().map(|s| s.to_string()).collect(),
            likelihoods: LikelihoodMode::None,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Per-token likelihood reporting requested from the endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LikelihoodMode {
    #[default]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParameters {
    pub max_tokens: u32,
    /// Must lie in [0, 1].
    pub temperature: f32,
    /// 0 disables top-k sampling.
    pub sampling_k: u32,
    pub stop_sequences: BTreeSet<String>,
    pub likelihoods: LikelihoodMode,
}

impl GenerationParameters {
    pub fn temperature_in_range(&self) -> bool {
        (0.0..=1.0).contains(&self.temperature)
    }
}

/// A rendered prompt plus the parameters it is sent with. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    kind: OperationKind,
    rendered_prompt: String,
    parameters: GenerationParameters,
}

impl GenerationRequest {
    /// Fails with `InvalidParameters` when the temperature is outside [0, 1].
    pub fn new(
        kind: OperationKind,
        rendered_prompt: String,
        parameters: GenerationParameters,
    ) -> Result<Self, GenerationError> {
        if !parameters.temperature_in_range() {
            return Err(GenerationError::InvalidParameters(format!(
                "temperature {} is outside [0, 1]",
                parameters.temperature
            )));
        }

        Ok(Self {
            kind,
            rendered_prompt,
            parameters,
        })
    }

    /// Renders `inputs` and attaches the defaults for its kind.
    pub fn from_inputs(inputs: &PromptInputs) -> Result<Self, GenerationError> {
        let kind = inputs.kind();
        Self::new(kind, build_prompt(inputs), kind.default_parameters())
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn rendered_prompt(&self) -> &str {
        &self.rendered_prompt
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.parameters
    }
}

/// The first candidate returned by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub text: String,
}
