//! External Search: live job and course lookups through ordered provider chains.
//!
//! Each provider is tried in its own error boundary. The first successful
//! payload is returned untouched; when every provider fails the caller gets an
//! aggregated error and no further retries happen.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub mod handlers;
pub mod providers;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned status {0}")]
    Status(u16),

    #[error("Unexpected payload: {0}")]
    Payload(String),
}

#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub query: String,
    pub location: Option<String>,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError>;
}

#[derive(Debug)]
pub struct SearchHit {
    pub provider: &'static str,
    pub payload: Value,
}

#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: &'static str,
    pub error: SearchError,
}

#[derive(Debug, Error)]
#[error("all search providers failed: {}", summarize(.failures))]
pub struct ChainError {
    pub failures: Vec<ProviderFailure>,
}

fn summarize(failures: &[ProviderFailure]) -> String {
    if failures.is_empty() {
        return "no providers configured".to_string();
    }
    failures
        .iter()
        .map(|f| format!("{}: {}", f.provider, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Providers in priority order.
pub struct ProviderChain {
    label: &'static str,
    providers: Vec<Arc<dyn SearchProvider>>,
}

impl ProviderChain {
    pub fn new(label: &'static str, providers: Vec<Arc<dyn SearchProvider>>) -> Self {
        Self { label, providers }
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub async fn search(&self, query: &SearchQuery) -> Result<SearchHit, ChainError> {
        let mut failures = Vec::new();

        for provider in &self.providers {
            match provider.search(query).await {
                Ok(payload) => {
                    return Ok(SearchHit {
                        provider: provider.name(),
                        payload,
                    });
                }
                Err(error) => {
                    warn!("{} provider {} failed: {error}", self.label, provider.name());
                    failures.push(ProviderFailure {
                        provider: provider.name(),
                        error,
                    });
                }
            }
        }

        Err(ChainError { failures })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::StubProvider;
    use super::*;
    use serde_json::json;

    fn query() -> SearchQuery {
        SearchQuery {
            query: "rust".to_string(),
            location: None,
        }
    }

    #[tokio::test]
    async fn test_first_success_wins() {
        let primary = StubProvider::ok("primary", json!({"data": [1]}));
        let secondary = StubProvider::ok("secondary", json!({"data": [2]}));
        let chain = ProviderChain::new("jobs", vec![primary.clone(), secondary.clone()]);

        let hit = chain.search(&query()).await.unwrap();
        assert_eq!(hit.provider, "primary");
        assert_eq!(hit.payload, json!({"data": [1]}));
        assert_eq!(secondary.call_count(), 0);
    }

    #[tokio::test]
    async fn test_falls_through_to_secondary() {
        let primary = StubProvider::failing("primary", 503);
        let secondary = StubProvider::ok("secondary", json!([]));
        let chain = ProviderChain::new("courses", vec![primary.clone(), secondary.clone()]);

        let hit = chain.search(&query()).await.unwrap();
        assert_eq!(hit.provider, "secondary");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
    }

    #[tokio::test]
    async fn test_all_failures_are_aggregated_without_retry() {
        let primary = StubProvider::failing("primary", 500);
        let secondary = StubProvider::failing("secondary", 403);
        let chain = ProviderChain::new("jobs", vec![primary.clone(), secondary.clone()]);

        let err = chain.search(&query()).await.unwrap_err();
        assert_eq!(err.failures.len(), 2);
        assert_eq!(err.failures[0].provider, "primary");
        assert_eq!(primary.call_count(), 1);
        assert_eq!(secondary.call_count(), 1);
        let message = err.to_string();
        assert!(message.contains("primary: Provider returned status 500"));
        assert!(message.contains("secondary: Provider returned status 403"));
    }

    #[tokio::test]
    async fn test_empty_chain_fails() {
        let chain = ProviderChain::new("jobs", vec![]);
        let err = chain.search(&query()).await.unwrap_err();
        assert!(err.failures.is_empty());
        assert!(err.to_string().contains("no providers configured"));
    }
}
