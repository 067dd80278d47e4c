use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::parser::ResumeUpload;
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;

/// Largest accepted résumé upload.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const RESUME_FIELD: &str = "resume";

/// POST /api/parse-resume
///
/// Multipart form with a `resume` file field. Parser failures never reach the
/// client; only a missing or oversized file is rejected.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ResumeData>, AppError> {
    let mut multipart = multipart?;
    let mut upload: Option<ResumeUpload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("resume").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read uploaded file: {e}")))?;
        upload = Some(ResumeUpload::new(file_name, bytes));
    }

    let upload = upload
        .filter(|u| !u.bytes.is_empty())
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if upload.bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "File too large. Maximum size is 10MB".to_string(),
        ));
    }

    info!(
        "Analyzing résumé {} ({} bytes)",
        upload.file_name,
        upload.bytes.len()
    );
    let analysis = state.analyzer.analyze(&upload).await;
    info!(
        "Résumé {} analyzed via {}: {} ({}/100)",
        upload.file_name,
        analysis.source.label(),
        analysis.data.likely_field,
        analysis.data.score
    );

    state.conversation_log.record_resume_analysis(
        &upload.file_name,
        analysis.source.label(),
        &analysis.data,
    );

    Ok(Json(analysis.data))
}
