//! Builder → Client for a single user action.

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::generation::{GenerationRequest, GenerationResult, PromptInputs};
use crate::llm_client::{GenerationError, TextGenerator};

/// Renders the prompt for `inputs` and sends it through `generator` once.
///
/// Every call is independent: nothing is cached between actions, even for
/// identical inputs.
pub async fn run_generation(
    generator: &dyn TextGenerator,
    inputs: &PromptInputs,
) -> Result<GenerationResult, GenerationError> {
    let request = GenerationRequest::from_inputs(inputs)?;
    let span = info_span!(
        "generation",
        action_id = %Uuid::new_v4(),
        kind = %request.kind()
    );

    async move {
        debug!(
            prompt_chars = request.rendered_prompt().len(),
            max_tokens = request.parameters().max_tokens,
            "dispatching generation request"
        );

        match generator.generate(&request).await {
            Ok(result) => {
                info!(output_chars = result.text.len(), "generation finished");
                Ok(result)
            }
            Err(e) => {
                warn!("generation failed: {e}");
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}
