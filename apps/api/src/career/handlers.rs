//! Axum route handlers for the career tools.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::{run_generation, PromptInputs};
use crate::routes::form::{extract_upload, UploadForm};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CvAnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub role: Option<String>,
    /// Signed so a negative value reaches validation instead of failing deserialization.
    pub experience: Option<i64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDescriptionResponse {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-cv
///
/// Multipart field `cv`: the résumé PDF.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CvAnalysisResponse>, AppError> {
    let form = UploadForm::collect(multipart, state.config.max_upload_bytes).await?;
    let cv = form.require_file("cv")?;

    let cv_text = extract_upload(cv, state.config.page_separator).await?;
    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::CvAnalysis { cv_text },
    )
    .await?;

    Ok(Json(CvAnalysisResponse {
        analysis: result.text,
    }))
}

/// POST /api/generate-jd
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    payload: Result<Json<JobDescriptionRequest>, JsonRejection>,
) -> Result<Json<JobDescriptionResponse>, AppError> {
    let Json(request) = payload?;
    let role = request
        .role
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Validation("role cannot be empty".to_string()))?;
    let years_experience = request
        .experience
        .ok_or_else(|| AppError::Validation("experience is required".to_string()))
        .and_then(|years| {
            u32::try_from(years).map_err(|_| {
                AppError::Validation("experience must be a whole number of years ≥ 0".to_string())
            })
        })?;

    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::JobDescription {
            role,
            years_experience,
        },
    )
    .await?;

    Ok(Json(JobDescriptionResponse {
        job_description: result.text,
    }))
}

/// POST /api/generate-cover-letter
///
/// Multipart fields: `cv` (PDF), `jobDescription`, `companyName`.
/// All three are checked before the document is read.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let form = UploadForm::collect(multipart, state.config.max_upload_bytes).await?;
    let cv = form.require_file("cv")?;
    let job_description = form.require_text("jobDescription")?;
    let company_name = form.require_text("companyName")?;

    let cv_text = extract_upload(cv, state.config.page_separator).await?;
    let result = run_generation(
        state.generator.as_ref(),
        &PromptInputs::CoverLetter {
            cv_text,
            job_description,
            company_name,
        },
    )
    .await?;

    Ok(Json(CoverLetterResponse {
        cover_letter: result.text,
    }))
}
