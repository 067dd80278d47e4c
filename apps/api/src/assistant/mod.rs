//! Career Assistant: session chat and the project advisor.
//!
//! Chat flow: append user turn → load recent context → system prompt + context
//! → LLM. When the model is unreachable a canned reply keyed on the user's
//! message is returned instead, so a session never surfaces a model error.

use std::sync::Arc;

use tracing::{info, warn};

use crate::llm_client::{ChatMessage, ChatRole, LlmClient};
use crate::models::chat::ChatTurn;

pub mod advisor;
pub mod handlers;
pub mod history;
pub mod prompts;

use history::{ChatHistoryStore, HistoryError};

pub struct ChatAssistant {
    llm: LlmClient,
    history: Arc<dyn ChatHistoryStore>,
    context_turns: usize,
}

impl ChatAssistant {
    pub fn new(llm: LlmClient, history: Arc<dyn ChatHistoryStore>, context_turns: usize) -> Self {
        Self {
            llm,
            history,
            context_turns: context_turns.max(1),
        }
    }

    pub fn history_backend(&self) -> &'static str {
        self.history.name()
    }

    /// Records the user's message, answers it, and records the answer.
    /// History failures are logged and the conversation continues without them.
    pub async fn send_message(&self, session_id: &str, text: &str) -> ChatTurn {
        let user_turn = ChatTurn::new(ChatRole::User, text);

        if let Err(e) = self.history.append(session_id, user_turn.clone()).await {
            warn!("Failed to store user turn for session {session_id}: {e}");
        }

        let recent = match self.history.recent(session_id, self.context_turns).await {
            Ok(turns) => turns,
            Err(e) => {
                warn!("Failed to load history for session {session_id}: {e}");
                Vec::new()
            }
        };
        let context = build_context(recent, user_turn, self.context_turns);

        let mut messages = Vec::with_capacity(context.len() + 1);
        messages.push(ChatMessage::system(prompts::CAREER_ASSISTANT_SYSTEM));
        messages.extend(context.iter().map(ChatTurn::as_message));

        let reply = match self.llm.chat(&messages).await {
            Ok(reply) => reply,
            Err(e) => {
                info!("Chat model unavailable for session {session_id} ({e}); using canned reply");
                canned_reply(text).to_string()
            }
        };

        let assistant_turn = ChatTurn::new(ChatRole::Assistant, reply);
        if let Err(e) = self
            .history
            .append(session_id, assistant_turn.clone())
            .await
        {
            warn!("Failed to store assistant turn for session {session_id}: {e}");
        }

        assistant_turn
    }

    pub async fn history(&self, session_id: &str, limit: usize) -> Result<Vec<ChatTurn>, HistoryError> {
        self.history.recent(session_id, limit).await
    }
}

/// Recent turns capped at `limit`, always ending with `user_turn` even when
/// the store did not record it.
fn build_context(mut recent: Vec<ChatTurn>, user_turn: ChatTurn, limit: usize) -> Vec<ChatTurn> {
    if recent.last().map(|t| t.id) != Some(user_turn.id) {
        recent.push(user_turn);
    }
    let start = recent.len().saturating_sub(limit.max(1));
    recent.split_off(start)
}

/// Picks a canned reply from keywords in the user's message.
pub fn canned_reply(message: &str) -> &'static str {
    let lower = message.to_lowercase();
    if lower.contains("resume") {
        prompts::RESUME_REPLY
    } else if lower.contains("interview") {
        prompts::INTERVIEW_REPLY
    } else if lower.contains("skill") || lower.contains("learn") {
        prompts::SKILLS_REPLY
    } else {
        prompts::GENERIC_REPLY
    }
}
