use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{debug, info, warn};

use crate::models::resume::ResumeData;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// One project-advisor exchange, as stored in `chatbot_conversations`.
#[derive(Debug, Clone)]
pub struct ChatbotExchange {
    pub skills: Vec<String>,
    pub resume_text: String,
    pub request_type: &'static str,
    pub response: String,
}

/// Insert-only, fire-and-forget log of user-facing results.
/// Writes run on spawned tasks; failures are logged and never reach the caller.
#[derive(Clone, Default)]
pub struct ConversationLog {
    pool: Option<PgPool>,
}

impl ConversationLog {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    pub fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    pub fn record_chatbot_exchange(&self, exchange: ChatbotExchange) {
        let Some(pool) = self.pool.clone() else {
            debug!("Persistence disabled; chatbot exchange not stored");
            return;
        };

        tokio::spawn(async move {
            let result = sqlx::query(
                r#"
                INSERT INTO chatbot_conversations (skills, resume_text, request_type, response)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(&exchange.skills)
            .bind(&exchange.resume_text)
            .bind(exchange.request_type)
            .bind(&exchange.response)
            .execute(&pool)
            .await;

            if let Err(e) = result {
                warn!("Failed to store chatbot exchange: {e}");
            }
        });
    }

    pub fn record_resume_analysis(&self, file_name: &str, source: &'static str, data: &ResumeData) {
        let Some(pool) = self.pool.clone() else {
            debug!("Persistence disabled; résumé analysis not stored");
            return;
        };

        let file_name = file_name.to_string();
        let data = data.clone();

        tokio::spawn(async move {
            let result = sqlx::query(
                r#"
                INSERT INTO resume_analyses (file_name, source, likely_field, score, data)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(&file_name)
            .bind(source)
            .bind(data.likely_field.as_str())
            .bind(i16::from(data.score))
            .bind(Json(&data))
            .execute(&pool)
            .await;

            if let Err(e) = result {
                warn!("Failed to store résumé analysis for {file_name}: {e}");
            }
        });
    }
}
