mod config;
mod error;

pub use config::Config;
pub use error::*;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use tgrelay_common::event::MemberEvent;


/// Posts one event record per call to the configured endpoint.
pub struct Forwarder {
    client: reqwest::Client,
    post_url: String,
    auth_token: String,
}

impl Forwarder {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            post_url: config.post_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// One POST, no retries. A 2xx/3xx status is a success; anything else,
    /// including network-level failures, is an error for the caller to
    /// report.
    pub async fn forward(&self, event: &MemberEvent) -> ForwardResult<StatusCode> {
        let response = self
            .client
            .post(&self.post_url)
            .header(AUTHORIZATION, &self.auth_token)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(ForwardError::Status(status));
        }

        Ok(status)
    }
}
