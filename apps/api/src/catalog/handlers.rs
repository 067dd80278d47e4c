use axum::Json;
use serde::Deserialize;

use crate::catalog::courses::{get_courses, DEFAULT_COURSE_LIMIT};
use crate::catalog::jobs::{get_jobs, DEFAULT_JOB_LIMIT};
use crate::errors::AppError;
use crate::extract::ApiQuery;
use crate::models::catalog::{Course, Job, WorkModeFilter};
use crate::models::domain::Domain;

/// Hard cap on `limit` query parameters.
const MAX_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendationQuery {
    pub field: Option<String>,
    pub work_mode: Option<String>,
    pub min_salary: Option<u32>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CourseRecommendationQuery {
    pub field: Option<String>,
    pub limit: Option<usize>,
}

/// GET /api/recommendations/jobs
pub async fn handle_job_recommendations(
    ApiQuery(params): ApiQuery<JobRecommendationQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let work_mode = match params.work_mode.as_deref() {
        None => WorkModeFilter::All,
        Some(name) => WorkModeFilter::from_name(name).ok_or_else(|| {
            AppError::Validation(format!(
                "Unknown workMode '{name}'; expected All, Remote, Hybrid or On-site"
            ))
        })?,
    };
    let domain = Domain::from_name_or_default(params.field.as_deref());
    let limit = params.limit.unwrap_or(DEFAULT_JOB_LIMIT).min(MAX_LIMIT);

    Ok(Json(get_jobs(
        domain,
        work_mode,
        params.min_salary.unwrap_or(0),
        limit,
    )))
}

/// GET /api/recommendations/courses
pub async fn handle_course_recommendations(
    ApiQuery(params): ApiQuery<CourseRecommendationQuery>,
) -> Json<Vec<Course>> {
    let domain = Domain::from_name_or_default(params.field.as_deref());
    let limit = params.limit.unwrap_or(DEFAULT_COURSE_LIMIT).min(MAX_LIMIT);
    Json(get_courses(domain, limit))
}
