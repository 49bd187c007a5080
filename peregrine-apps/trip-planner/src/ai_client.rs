//!  Peregrine Trip Planner
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! # OpenRouter Completion Client
//!
//! Effectful (network) operations for the language-model provider.
//! One fixed system instruction, one user prompt per category, one text
//! completion back.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use wreq::redirect::Policy;

pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const PLANNER_MODEL: &str = "meta-llama/llama-3.1-8b-instruct";

const SYSTEM_INSTRUCTION: &str = "You are a professional AI travel planner.";
const TEMPERATURE: f64 = 0.7;

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: CompletionMessage,
}

#[derive(Deserialize)]
struct CompletionMessage {
    content: String,
}

#[derive(Clone)]
pub struct OpenRouterClient {
    client: Arc<wreq::Client>,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, timeout_secs: u64) -> Result<Self> {
        Self::with_base_url(api_key, OPENROUTER_BASE_URL, timeout_secs)
    }

    pub fn with_base_url(api_key: String, base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = wreq::Client::builder()
            .redirect(Policy::default())
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client: Arc::new(client),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: PLANNER_MODEL.to_string(),
        })
    }

    /// Send one user prompt and return the completion text.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let payload = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_INSTRUCTION,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
        };

        let http_start = std::time::Instant::now();
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload)
            .send()
            .await
            .context("Completion request failed")?;

        let status = response.status();
        let body = response.text().await.context("Read body")?;
        tracing::debug!(
            "[complete] HTTP {} in {:?}: {} KB",
            status.as_u16(),
            http_start.elapsed(),
            body.len() / 1024
        );

        if !status.is_success() {
            let body_preview = body.chars().take(500).collect::<String>();
            bail!("HTTP error {}: {}", status, body_preview);
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).context("Completion response is not valid JSON")?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .context("Completion had no choices")
    }
}
