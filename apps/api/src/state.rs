use std::sync::Arc;

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::assistant::ChatAssistant;
use crate::db::ConversationLog;
use crate::llm_client::LlmClient;
use crate::search::ProviderChain;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ResumeAnalyzer>,
    pub assistant: Arc<ChatAssistant>,
    /// Used directly by the stateless chat and project-advisor endpoints.
    pub llm: LlmClient,
    /// JSearch, then RemoteOK.
    pub job_search: Arc<ProviderChain>,
    /// Udemy, then Coursedog.
    pub course_search: Arc<ProviderChain>,
    pub conversation_log: ConversationLog,
}
