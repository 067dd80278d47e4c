//! Session-scoped chat history stores.
//!
//! Every read and write is keyed by session id; there is no process-wide
//! conversation. Stores keep at most `MAX_TURNS_PER_SESSION` turns per session
//! and drop the oldest first. Sessions expire after a week without writes.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::models::chat::ChatTurn;

pub const MAX_TURNS_PER_SESSION: usize = 200;
/// Idle Redis sessions expire after seven days.
const SESSION_TTL_SECS: i64 = 7 * 24 * 60 * 60;
const KEY_PREFIX: &str = "skillgpt:chat";

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Stored turn is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait ChatHistoryStore: Send + Sync {
    fn name(&self) -> &'static str;

    async fn append(&self, session_id: &str, turn: ChatTurn) -> Result<(), HistoryError>;

    /// The `limit` most recent turns, oldest first.
    async fn recent(&self, session_id: &str, limit: usize) -> Result<Vec<ChatTurn>, HistoryError>;
}

// ────────────────────────────────────────────────────────────────────────────
// In-memory
// ────────────────────────────────────────────────────────────────────────────

/// Sessions kept in memory before the least recently used one is evicted.
pub const MAX_SESSIONS: usize = 10_000;
/// Idle in-memory sessions expire after seven days, matching Redis.
const SESSION_IDLE_TTL: Duration = Duration::from_secs(SESSION_TTL_SECS as u64);

struct SessionLog {
    turns: Vec<ChatTurn>,
    last_seen: Instant,
}

pub struct InMemoryHistoryStore {
    sessions: RwLock<HashMap<String, SessionLog>>,
    max_sessions: usize,
    idle_ttl: Duration,
}

impl Default for InMemoryHistoryStore {
    fn default() -> Self {
        Self::with_limits(MAX_SESSIONS, SESSION_IDLE_TTL)
    }
}

impl InMemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_sessions: usize, idle_ttl: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
            idle_ttl,
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops idle sessions, then the least recently used ones until a new
    /// session fits.
    fn make_room(&self, sessions: &mut HashMap<String, SessionLog>, now: Instant) {
        let before = sessions.len();
        sessions.retain(|_, log| now.duration_since(log.last_seen) < self.idle_ttl);

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, log)| log.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {evicted} in-memory chat sessions");
        }
    }
}

#[async_trait]
impl ChatHistoryStore for InMemoryHistoryStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn append(&self, session_id: &str, turn: ChatTurn) -> Result<(), HistoryError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        if !sessions.contains_key(session_id) {
            self.make_room(&mut sessions, now);
        }

        let log = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| SessionLog {
                turns: Vec::new(),
                last_seen: now,
            });
        log.last_seen = now;
        log.turns.push(turn);
        if log.turns.len() > MAX_TURNS_PER_SESSION {
            let excess = log.turns.len() - MAX_TURNS_PER_SESSION;
            log.turns.drain(..excess);
        }
        Ok(())
    }

    async fn recent(&self, session_id: &str, limit: usize) -> Result<Vec<ChatTurn>, HistoryError> {
        let sessions = self.sessions.read().await;
        let turns = match sessions.get(session_id) {
            Some(log) if log.last_seen.elapsed() < self.idle_ttl => log.turns.as_slice(),
            _ => &[][..],
        };
        let start = turns.len().saturating_sub(limit);
        Ok(turns[start..].to_vec())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Redis
// ────────────────────────────────────────────────────────────────────────────

/// One Redis list per session, each element a JSON-encoded `ChatTurn`.
pub struct RedisHistoryStore {
    conn: redis::aio::MultiplexedConnection,
}

impl RedisHistoryStore {
    pub async fn connect(client: &redis::Client) -> Result<Self, HistoryError> {
        let conn = client.get_multiplexed_async_connection().await?;
        Ok(Self { conn })
    }

    fn key(session_id: &str) -> String {
        format!("{KEY_PREFIX}:{session_id}")
    }
}

#[async_trait]
impl ChatHistoryStore for RedisHistoryStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn append(&self, session_id: &str, turn: ChatTurn) -> Result<(), HistoryError> {
        let key = Self::key(session_id);
        let encoded = serde_json::to_string(&turn)?;
        let mut conn = self.conn.clone();

        redis::pipe()
            .atomic()
            .rpush(&key, encoded)
            .ignore()
            .ltrim(&key, -(MAX_TURNS_PER_SESSION as isize), -1)
            .ignore()
            .expire(&key, SESSION_TTL_SECS)
            .ignore()
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }

    async fn recent(&self, session_id: &str, limit: usize) -> Result<Vec<ChatTurn>, HistoryError> {
        if limit == 0 {
            return Ok(Vec::new());
        }
        let mut conn = self.conn.clone();
        let raw: Vec<String> = conn
            .lrange(Self::key(session_id), -(limit as isize), -1)
            .await?;

        raw.iter()
            .map(|item| serde_json::from_str(item).map_err(HistoryError::from))
            .collect()
    }
}
