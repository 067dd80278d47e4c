mod analysis;
mod assistant;
mod catalog;
mod config;
mod db;
mod errors;
mod extract;
mod llm_client;
mod models;
mod routes;
mod search;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::analysis::parser::{CommandParser, LlmResumeParser, ResumeParser};
use crate::assistant::history::{ChatHistoryStore, InMemoryHistoryStore, RedisHistoryStore};
use crate::assistant::ChatAssistant;
use crate::config::Config;
use crate::db::{create_pool, ConversationLog};
use crate::llm_client::{LlmClient, LlmSettings};
use crate::routes::build_router;
use crate::search::providers::{
    build_search_client, CoursedogProvider, JSearchProvider, RemoteOkProvider, UdemyProvider,
};
use crate::search::{ProviderChain, SearchProvider};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting SkillGPT API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(LlmSettings {
        provider: config.ai_provider,
        api_key: config.ai_api_key.clone(),
        model: config.ai_model.clone(),
        base_url: config.ai_base_url.clone(),
    })?;
    if config.ai_api_key.is_some() {
        info!(
            "LLM client initialized (provider: {}, model: {})",
            llm.provider().as_str(),
            llm.model()
        );
    } else {
        warn!("AI_API_KEY not set; chat and résumé parsing will use fallbacks");
    }

    // Résumé parser: external command when configured, otherwise the model
    let parser: Arc<dyn ResumeParser> = match config.resume_parser_command.as_deref().and_then(|cmd| {
        CommandParser::new(cmd, Duration::from_secs(config.resume_parser_timeout_secs))
    }) {
        Some(command) => Arc::new(command),
        None => Arc::new(LlmResumeParser::new(llm.clone())),
    };
    let analyzer = ResumeAnalyzer::new(parser);
    info!("Résumé parser: {}", analyzer.parser_name());

    // Optional PostgreSQL conversation log
    let pool = match config.database_url.as_deref() {
        Some(url) => match create_pool(url).await {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!("PostgreSQL unavailable, persistence disabled: {e}");
                None
            }
        },
        None => None,
    };
    let conversation_log = ConversationLog::new(pool);
    if !conversation_log.is_enabled() {
        info!("Conversation log disabled");
    }

    // Chat history: Redis when reachable, otherwise in-process
    let history = build_history_store(config.redis_url.as_deref()).await;
    let assistant = ChatAssistant::new(llm.clone(), history, config.chat_context_turns);
    info!("Chat history backend: {}", assistant.history_backend());

    // External search chains
    let search_client = build_search_client(Duration::from_secs(config.search_timeout_secs))?;
    let job_providers: Vec<Arc<dyn SearchProvider>> = vec![
        Arc::new(JSearchProvider::new(
            search_client.clone(),
            config.rapidapi_key.clone(),
        )),
        Arc::new(RemoteOkProvider::new(search_client.clone())),
    ];
    let course_providers: Vec<Arc<dyn SearchProvider>> = vec![
        Arc::new(UdemyProvider::new(search_client.clone())),
        Arc::new(CoursedogProvider::new(search_client)),
    ];
    let job_search = ProviderChain::new("jobs", job_providers);
    let course_search = ProviderChain::new("courses", course_providers);
    info!(
        "Search chains: jobs {:?}, courses {:?}",
        job_search.provider_names(),
        course_search.provider_names()
    );

    // Build app state
    let state = AppState {
        analyzer: Arc::new(analyzer),
        assistant: Arc::new(assistant),
        llm,
        job_search: Arc::new(job_search),
        course_search: Arc::new(course_search),
        conversation_log,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_history_store(redis_url: Option<&str>) -> Arc<dyn ChatHistoryStore> {
    let Some(url) = redis_url else {
        return Arc::new(InMemoryHistoryStore::new());
    };

    let connected = match redis::Client::open(url) {
        Ok(client) => RedisHistoryStore::connect(&client).await,
        Err(e) => Err(e.into()),
    };

    match connected {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!("Redis unavailable, keeping chat history in memory: {e}");
            Arc::new(InMemoryHistoryStore::new())
        }
    }
}
