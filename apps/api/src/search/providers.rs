use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::search::{SearchError, SearchProvider, SearchQuery};

const JSEARCH_URL: &str = "https://jsearch.p.rapidapi.com/search";
const JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";
const REMOTEOK_URL: &str = "https://remoteok.com/api";
const UDEMY_URL: &str = "https://www.udemy.com/api-2.0/courses/";
const COURSEDOG_URL: &str = "https://www.coursedog.com/api/v1/courses";

const USER_AGENT: &str = concat!("skillgpt/", env!("CARGO_PKG_VERSION"));
/// RemoteOK results returned per search.
const REMOTEOK_LIMIT: usize = 20;

/// Shared HTTP client for all search providers.
pub fn build_search_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

async fn read_json(response: Response) -> Result<Value, SearchError> {
    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Status(status.as_u16()));
    }
    Ok(response.json::<Value>().await?)
}

// ────────────────────────────────────────────────────────────────────────────
// Jobs
// ────────────────────────────────────────────────────────────────────────────

/// JSearch on RapidAPI. Requires `RAPIDAPI_KEY`.
pub struct JSearchProvider {
    client: Client,
    api_key: Option<String>,
}

impl JSearchProvider {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl SearchProvider for JSearchProvider {
    fn name(&self) -> &'static str {
        "jsearch"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SearchError::NotConfigured("RAPIDAPI_KEY"))?;

        let text = match query.location.as_deref() {
            Some(location) => format!("{} in {}", query.query, location),
            None => query.query.clone(),
        };

        let response = self
            .client
            .get(JSEARCH_URL)
            .query(&[("query", text.as_str()), ("page", "1"), ("num_pages", "1")])
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", JSEARCH_HOST)
            .send()
            .await?;

        read_json(response).await
    }
}

/// RemoteOK public feed, filtered locally by the query text.
/// Location is ignored; every listing is remote.
pub struct RemoteOkProvider {
    client: Client,
}

impl RemoteOkProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for RemoteOkProvider {
    fn name(&self) -> &'static str {
        "remoteok"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        let response = self.client.get(REMOTEOK_URL).send().await?;
        let feed = read_json(response).await?;
        filter_remoteok_feed(feed, &query.query)
    }
}

/// The feed is an array whose first element is a legal notice, not a job.
fn filter_remoteok_feed(feed: Value, query: &str) -> Result<Value, SearchError> {
    let Value::Array(entries) = feed else {
        return Err(SearchError::Payload("RemoteOK feed is not an array".to_string()));
    };

    let needle = query.trim().to_lowercase();
    let jobs: Vec<Value> = entries
        .into_iter()
        .skip(1)
        .filter(|job| needle.is_empty() || remoteok_job_matches(job, &needle))
        .take(REMOTEOK_LIMIT)
        .collect();

    Ok(Value::Array(jobs))
}

fn remoteok_job_matches(job: &Value, needle: &str) -> bool {
    let in_text = ["position", "company", "description"].iter().any(|key| {
        job.get(*key)
            .and_then(Value::as_str)
            .map(|s| s.to_lowercase().contains(needle))
            .unwrap_or(false)
    });
    let in_tags = job
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .any(|t| t.to_lowercase().contains(needle))
        })
        .unwrap_or(false);
    in_text || in_tags
}

// ────────────────────────────────────────────────────────────────────────────
// Courses
// ────────────────────────────────────────────────────────────────────────────

/// Udemy public course search, free courses only.
pub struct UdemyProvider {
    client: Client,
}

impl UdemyProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for UdemyProvider {
    fn name(&self) -> &'static str {
        "udemy"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(UDEMY_URL)
            .query(&[
                ("search", query.query.as_str()),
                ("page_size", "10"),
                ("price", "price-free"),
            ])
            .header("Accept", "application/json, text/plain, */*")
            .send()
            .await?;

        read_json(response).await
    }
}

pub struct CoursedogProvider {
    client: Client,
}

impl CoursedogProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for CoursedogProvider {
    fn name(&self) -> &'static str {
        "coursedog"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Value, SearchError> {
        let response = self
            .client
            .get(COURSEDOG_URL)
            .query(&[("q", query.query.as_str())])
            .send()
            .await?;

        read_json(response).await
    }
}
