use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};

use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::search::SearchQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    #[serde(default)]
    pub query: String,
    pub location: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CourseSearchParams {
    #[serde(default)]
    pub query: String,
}

/// GET /api/jobs
/// Returns the first provider's raw payload.
pub async fn handle_job_search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<JobSearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = SearchQuery {
        query: params.query.trim().to_string(),
        location: params
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty()),
    };

    match state.job_search.search(&query).await {
        Ok(hit) => {
            info!("Job search for '{}' served by {}", query.query, hit.provider);
            Ok(Json(hit.payload))
        }
        Err(e) => {
            error!("Job search failed: {e}");
            Err(AppError::Upstream("Failed to fetch jobs".to_string()))
        }
    }
}

/// GET /api/courses
pub async fn handle_course_search(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<CourseSearchParams>,
) -> Result<Json<Value>, AppError> {
    let query = SearchQuery {
        query: params.query.trim().to_string(),
        location: None,
    };

    match state.course_search.search(&query).await {
        Ok(hit) => {
            info!("Course search for '{}' served by {}", query.query, hit.provider);
            Ok(Json(hit.payload))
        }
        Err(e) => {
            error!("Course search failed: {e}");
            Err(AppError::Upstream("Failed to fetch courses".to_string()))
        }
    }
}
