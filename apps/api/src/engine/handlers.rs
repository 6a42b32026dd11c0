//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::assembler::assemble;
use crate::engine::pools::{certifications_for, skills_for};
use crate::engine::role::{classify_role, RoleKey};
use crate::errors::AppError;
use crate::models::resume::{ResumeInput, ResumeRecord};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    pub job_title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyResponse {
    pub role: RoleKey,
    pub suggested_skills: Vec<String>,
    pub suggested_certifications: Vec<String>,
}

/// POST /api/v1/resumes/generate
///
/// Runs the full assembly pipeline: validate identity fields → classify role
/// → merge skills/certifications → build summary → seeded highlight and
/// company-point selection. Returns the complete record in one round-trip.
pub async fn handle_generate(
    State(_state): State<AppState>,
    Json(input): Json<ResumeInput>,
) -> Result<Json<ResumeRecord>, AppError> {
    let record = assemble(&input)?;
    info!(
        "assembled resume: title='{}' skills={} highlights={} companies={}",
        record.title,
        record.skills.len(),
        record.experience_points.len(),
        record.company_responsibilities.len()
    );
    Ok(Json(record))
}

/// POST /api/v1/resumes/classify
///
/// Previews the role a title resolves to, plus the suggested skill and
/// certification chips — lets the form render role-safe options before the
/// user submits.
pub async fn handle_classify(
    State(_state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let role = classify_role(&request.job_title);
    Ok(Json(ClassifyResponse {
        role,
        suggested_skills: skills_for(role).iter().map(|s| s.to_string()).collect(),
        suggested_certifications: certifications_for(role)
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }))
}
