//! Axum route handlers for the study and wellbeing tools.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::{run_generation, PromptInputs, QuizType};
use crate::routes::form::{extract_upload, UploadForm};
use crate::state::AppState;
use crate::study::quiz::{parse_quiz, QuizQuestion};

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MoodResponse {
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct StudyBreakResponse {
    pub suggestion: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MotivationRequest {
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MotivationResponse {
    pub message: String,
}

/// POST /api/generate-quiz
///
/// Multipart fields: `notes` (PDF) and `quizType`.
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<QuizResponse>, AppError> {
    let form = UploadForm::collect(multipart, state.config.max_upload_bytes).await?;
    let notes = form.require_file("notes")?;
    let quiz_type: QuizType = form
        .require_text("quizType")?
        .trim()
        .parse()
        .map_err(AppError::Validation)?;

    let notes_text = extract_upload(notes, state.config.page_separator).await?;
    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::Quiz {
            notes_text,
            quiz_type,
        },
    )
    .await?;

    let questions = parse_quiz(&result.text)?;
    Ok(Json(QuizResponse { questions }))
}

/// POST /api/analyze-mood
pub async fn handle_analyze_mood(
    State(state): State<AppState>,
    payload: Result<Json<MoodRequest>, JsonRejection>,
) -> Result<Json<MoodResponse>, AppError> {
    let Json(request) = payload?;
    let message = request
        .text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("text cannot be empty".to_string()))?;

    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::MoodSupport { message },
    )
    .await?;

    Ok(Json(MoodResponse {
        response: result.text.trim().to_string(),
    }))
}

/// POST /api/generate-break
pub async fn handle_generate_break(
    State(state): State<AppState>,
) -> Result<Json<StudyBreakResponse>, AppError> {
    let result = run_generation(state.generator.as_ref(), &PromptInputs::StudyBreak).await?;

    Ok(Json(StudyBreakResponse {
        suggestion: result.text.trim().to_string(),
    }))
}

/// POST /api/generate-motivation
///
/// `context` is optional; a missing or empty body uses a generic student goal.
pub async fn handle_generate_motivation(
    State(state): State<AppState>,
    request: Option<Json<MotivationRequest>>,
) -> Result<Json<MotivationResponse>, AppError> {
    let Json(request) = request.unwrap_or_default();

    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::Motivation {
            context: request.context,
        },
    )
    .await?;

    Ok(Json(MotivationResponse {
        message: result.text.trim().to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::generation::prompts::DEFAULT_MOTIVATION_CONTEXT;
    use crate::generation::OperationKind;
    use crate::routes::build_router;
    use crate::test_support::{
        multipart_body, multipart_content_type, pdf_with_pages, test_state, Part,
        ScriptedGenerator,
    };

    async fn send(generator: Arc<ScriptedGenerator>, request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state(generator))
            .oneshot(request)
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn quiz_request(quiz_type: &str) -> Request<Body> {
        let pdf = pdf_with_pages(&["The mitochondria is the powerhouse of the cell"]);
        Request::post("/api/generate-quiz")
            .header(header::CONTENT_TYPE, multipart_content_type())
            .body(Body::from(multipart_body(&[
                Part::File("notes", &pdf),
                Part::Text("quizType", quiz_type),
            ])))
            .unwrap()
    }

    #[tokio::test]
    async fn test_quiz_returns_parsed_questions() {
        let generator = Arc::new(ScriptedGenerator::replying(
            r#"[{"question": "What is the powerhouse of the cell?", "answer": "Mitochondria", "explanation": "From the notes"}]"#,
        ));
        let (status, body) = send(generator.clone(), quiz_request("short-answer")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["questions"][0]["answer"], "Mitochondria");

        let calls = generator.calls();
        assert_eq!(calls[0].kind(), OperationKind::Quiz);
        assert!(calls[0].rendered_prompt().contains("powerhouse of the cell"));
    }

    #[tokio::test]
    async fn test_quiz_with_unknown_type_is_not_dispatched() {
        let generator = Arc::new(ScriptedGenerator::replying("[]"));
        let (status, _) = send(generator.clone(), quiz_request("essay")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_quiz_with_prose_output_is_a_generation_error() {
        let generator = Arc::new(ScriptedGenerator::replying("Sure! Here are some questions."));
        let (status, body) = send(generator, quiz_request("multiple-choice")).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.get("questions").is_none());
    }

    #[tokio::test]
    async fn test_mood_response_is_trimmed() {
        let generator = Arc::new(ScriptedGenerator::replying("  You are doing well.\n"));
        let request = Request::post("/api/analyze-mood")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"text": "Exams are stressing me out"}).to_string()))
            .unwrap();
        let (status, body) = send(generator.clone(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "You are doing well.");
        assert!(generator.calls()[0]
            .rendered_prompt()
            .contains("Exams are stressing me out"));
    }

    #[tokio::test]
    async fn test_break_needs_no_input() {
        let generator = Arc::new(ScriptedGenerator::replying("Stretch for two minutes."));
        let request = Request::post("/api/generate-break").body(Body::empty()).unwrap();
        let (status, body) = send(generator.clone(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["suggestion"], "Stretch for two minutes.");
        assert_eq!(generator.calls()[0].parameters().max_tokens, 100);
    }

    #[tokio::test]
    async fn test_motivation_without_body_uses_default_context() {
        let generator = Arc::new(ScriptedGenerator::replying("Keep going!"));
        let request = Request::post("/api/generate-motivation")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(generator.clone(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Keep going!");
        assert!(generator.calls()[0]
            .rendered_prompt()
            .contains(DEFAULT_MOTIVATION_CONTEXT));
    }

    #[tokio::test]
    async fn test_mood_with_wrongly_typed_text_is_a_validation_error() {
        let generator = Arc::new(ScriptedGenerator::replying("unused"));
        let request = Request::post("/api/analyze-mood")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({"text": 5}).to_string()))
            .unwrap();
        let (status, body) = send(generator.clone(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(generator.calls().is_empty());
    }
}
