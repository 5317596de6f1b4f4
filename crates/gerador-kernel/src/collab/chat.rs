//! OpenAI-compatible chat-completions collaborator.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{CollabError, Suggester, Translator};
use crate::config::AiConfig;

const TRANSLATE_PROMPT: &str = "You are a command line translator. The user will provide a DOS \
command that they want to run, but their operating system might not support DOS commands. \
Translate the DOS command into the appropriate command for their operating system. \
Reply with the command only.";

const SUGGEST_PROMPT: &str = "You are a helpful assistant designed to suggest DOS commands to \
users. Based on the partial command provided by the user, suggest a list of possible DOS \
commands that the user might be trying to type. Reply with a JSON array of strings.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Translator and suggester backed by a chat-completions endpoint.
pub struct ChatCollaborator {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl ChatCollaborator {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from config, reading the key from the configured env var.
    pub fn from_config(ai: &AiConfig) -> Result<Self, CollabError> {
        let api_key = std::env::var(&ai.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CollabError::MissingApiKey(ai.api_key_env.clone()))?;
        Ok(Self::new(&ai.endpoint, &ai.model, api_key))
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, CollabError> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage { role: "system", content: system },
                ChatMessage { role: "user", content: user },
            ],
            temperature: 0.2,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CollabError::Response(format!("{status}: {body}")));
        }

        let body: ChatResponse = response.json().await?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default())
    }
}

#[async_trait]
impl Translator for ChatCollaborator {
    async fn translate(&self, dos_command: &str) -> Result<String, CollabError> {
        let reply = self
            .complete(TRANSLATE_PROMPT, &format!("DOS command: {dos_command}"))
            .await?;
        Ok(strip_fences(&reply).to_string())
    }
}

#[async_trait]
impl Suggester for ChatCollaborator {
    async fn suggest(&self, partial_command: &str) -> Result<Vec<String>, CollabError> {
        let reply = self
            .complete(SUGGEST_PROMPT, &format!("Partial Command: {partial_command}"))
            .await?;
        Ok(parse_suggestions(&reply))
    }
}

/// Models like to wrap commands in markdown code fences.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed.trim_matches('`');
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Drop a language tag on the opening fence.
    match inner.split_once('\n') {
        Some((tag, body)) if !tag.contains(' ') => body.trim(),
        _ => inner.trim(),
    }
}

/// A JSON array if the model complied, otherwise one suggestion per line.
fn parse_suggestions(reply: &str) -> Vec<String> {
    let body = strip_fences(reply);
    if let Ok(list) = serde_json::from_str::<Vec<String>>(body) {
        return list;
    }
    body.lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', ' ']).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
