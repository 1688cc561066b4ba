//! HTTP implementation of the joke collaborator.
//!
//! Calls the icanhazdadjoke Slack endpoint, which wraps the joke in a
//! Slack-style attachments array.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::{JokeError, JokeFetcher};

const DAD_JOKE_URL: &str = "https://icanhazdadjoke.com/slack";

#[derive(Debug, Deserialize)]
struct SlackJokeResponse {
    attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Deserialize)]
struct SlackAttachment {
    text: String,
}

/// Joke fetcher backed by icanhazdadjoke.com.
#[derive(Debug, Clone)]
pub struct DadJokeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DadJokeClient {
    pub fn new() -> Self {
        Self::with_endpoint(DAD_JOKE_URL)
    }

    /// Use a non-default endpoint (tests point this at a local server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for DadJokeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl JokeFetcher for DadJokeClient {
    async fn fetch_joke(&self) -> Result<String, JokeError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body: SlackJokeResponse = response.json().await?;
        body.attachments
            .into_iter()
            .next()
            .map(|attachment| attachment.text)
            .ok_or(JokeError::EmptyResponse)
    }
}
