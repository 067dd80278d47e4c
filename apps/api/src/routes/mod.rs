pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::{handle_parse_resume, MAX_UPLOAD_BYTES};
use crate::assistant::handlers as assistant;
use crate::catalog::handlers as catalog;
use crate::search::handlers as search;
use crate::state::AppState;

/// Room for multipart framing on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé analysis
        .route(
            "/api/parse-resume",
            post(handle_parse_resume)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
        // Assistant
        .route("/api/chat", post(assistant::handle_chat))
        .route("/api/chatbot", post(assistant::handle_chatbot))
        .route("/api/chat/sessions", post(assistant::handle_create_session))
        .route(
            "/api/chat/sessions/:id/messages",
            post(assistant::handle_session_message),
        )
        .route(
            "/api/chat/sessions/:id/history",
            get(assistant::handle_session_history),
        )
        // Live search
        .route("/api/jobs", get(search::handle_job_search))
        .route("/api/courses", get(search::handle_course_search))
        // Static catalog
        .route(
            "/api/recommendations/jobs",
            get(catalog::handle_job_recommendations),
        )
        .route(
            "/api/recommendations/courses",
            get(catalog::handle_course_recommendations),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::analyzer::ResumeAnalyzer;
    use crate::analysis::parser::LlmResumeParser;
    use crate::assistant::history::InMemoryHistoryStore;
    use crate::assistant::{prompts, ChatAssistant};
    use crate::db::ConversationLog;
    use crate::llm_client::unconfigured_client;
    use crate::search::testing::StubProvider;
    use crate::search::ProviderChain;

    fn test_state() -> AppState {
        let llm = unconfigured_client();
        AppState {
            analyzer: Arc::new(ResumeAnalyzer::new(Arc::new(LlmResumeParser::new(
                llm.clone(),
            )))),
            assistant: Arc::new(ChatAssistant::new(
                llm.clone(),
                Arc::new(InMemoryHistoryStore::new()),
                10,
            )),
            llm,
            job_search: Arc::new(ProviderChain::new(
                "jobs",
                vec![
                    StubProvider::failing("jsearch", 403),
                    StubProvider::ok("remoteok", json!([{"position": "Rust Engineer"}])),
                ],
            )),
            course_search: Arc::new(ProviderChain::new(
                "courses",
                vec![
                    StubProvider::failing("udemy", 500),
                    StubProvider::failing("coursedog", 502),
                ],
            )),
            conversation_log: ConversationLog::default(),
        }
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(build_router(test_state()), get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "skillgpt-api");
    }

    #[tokio::test]
    async fn test_chatbot_requires_all_parameters() {
        let request = json_request(
            "POST",
            "/api/chatbot",
            json!({"skills": ["Rust"], "requestType": "project_ideas"}),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required parameters");
    }

    #[tokio::test]
    async fn test_chatbot_rejects_unknown_request_type() {
        let request = json_request(
            "POST",
            "/api/chatbot",
            json!({"skills": ["Rust"], "resumeText": "cv", "requestType": "salary_advice"}),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request type");
    }

    #[tokio::test]
    async fn test_chatbot_model_failure_is_generic_500() {
        let request = json_request(
            "POST",
            "/api/chatbot",
            json!({"skills": ["Rust"], "resumeText": "cv", "requestType": "project_help"}),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to process request");
    }

    #[tokio::test]
    async fn test_stateless_chat_validates_and_hides_model_errors() {
        let app = build_router(test_state());

        let (status, _) = send(
            app.clone(),
            json_request("POST", "/api/chat", json!({"messages": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(
            app,
            json_request(
                "POST",
                "/api/chat",
                json!({"messages": [{"role": "user", "content": "hi"}]}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Error processing your request");
        assert_eq!(body["code"], "LLM_ERROR");
    }

    #[tokio::test]
    async fn test_session_chat_uses_canned_reply_and_keeps_history() {
        let app = build_router(test_state());

        let (status, created) = send(
            app.clone(),
            json_request("POST", "/api/chat/sessions", json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let session_id = created["sessionId"].as_str().unwrap().to_string();

        let (status, turn) = send(
            app.clone(),
            json_request(
                "POST",
                &format!("/api/chat/sessions/{session_id}/messages"),
                json!({"message": "Any resume tips?"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(turn["role"], "assistant");
        assert_eq!(turn["content"], prompts::RESUME_REPLY);

        let (status, history) = send(
            app,
            get_request(&format!("/api/chat/sessions/{session_id}/history?limit=1")),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let history = history.as_array().unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["role"], "assistant");
    }

    #[tokio::test]
    async fn test_job_search_falls_through_to_second_provider() {
        let (status, body) = send(
            build_router(test_state()),
            get_request("/api/jobs?query=rust&location=Berlin"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["position"], "Rust Engineer");
    }

    #[tokio::test]
    async fn test_course_search_exhaustion_is_500() {
        let (status, body) = send(
            build_router(test_state()),
            get_request("/api/courses?query=python"),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to fetch courses");
        assert_eq!(body["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_job_recommendations_filter() {
        let (status, body) = send(
            build_router(test_state()),
            get_request("/api/recommendations/jobs?workMode=Remote&minSalary=8000"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let jobs = body.as_array().unwrap();
        assert!(!jobs.is_empty());
        for job in jobs {
            assert_eq!(job["workMode"], "Remote");
            assert!(job["salary"].as_u64().unwrap() >= 8000);
        }
    }

    #[tokio::test]
    async fn test_job_recommendations_reject_unknown_work_mode() {
        let (status, _) = send(
            build_router(test_state()),
            get_request("/api/recommendations/jobs?workMode=Moon"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    fn assert_validation_body(status: StatusCode, body: &Value) {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["error"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_query_returns_json_error() {
        let (status, body) = send(
            build_router(test_state()),
            get_request("/api/recommendations/jobs?minSalary=abc"),
        )
        .await;
        assert_validation_body(status, &body);

        let (status, body) = send(
            build_router(test_state()),
            get_request("/api/chat/sessions/s1/history?limit=-3"),
        )
        .await;
        assert_validation_body(status, &body);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_json_error() {
        let request = json_request(
            "POST",
            "/api/chatbot",
            json!({"skills": "Rust", "resumeText": "cv", "requestType": "project_ideas"}),
        );
        let (status, body) = send(build_router(test_state()), request).await;
        assert_validation_body(status, &body);

        let missing_content_type = Request::builder()
            .method("POST")
            .uri("/api/chat")
            .body(Body::from(r#"{"messages": []}"#))
            .unwrap();
        let (status, body) = send(build_router(test_state()), missing_content_type).await;
        assert_validation_body(status, &body);
    }

    #[tokio::test]
    async fn test_non_multipart_upload_returns_json_error() {
        let request = json_request("POST", "/api/parse-resume", json!({"resume": "cv"}));
        let (status, body) = send(build_router(test_state()), request).await;
        assert_validation_body(status, &body);
    }

    fn multipart_request(field: &str, file_name: &str, content: &str) -> Request<Body> {
        let boundary = "skillgpt-test-boundary";
        let body = format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {content}\r\n\
             --{boundary}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/parse-resume")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_parse_resume_without_file_is_400() {
        let request = multipart_request("document", "cv.txt", "hello");
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No file provided");
    }

    #[tokio::test]
    async fn test_parse_resume_falls_back_when_model_is_unavailable() {
        let request = multipart_request("resume", "jane_doe.txt", "Skills: React, Node.js");
        let (status, body) = send(build_router(test_state()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Doe");
        assert_eq!(body["likelyField"], "Web Development");
        assert_eq!(body["score"], 85);
        assert_eq!(body["matchConfidence"], 90);
    }
}
