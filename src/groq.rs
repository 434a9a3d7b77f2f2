use reqwest::Client;

use crate::{
    config::Config,
    error::PlaylistError,
    models::{
        request_model::{ChatMessage, ChatRequest},
        response_model::{ChatResponse, ErrorResponse},
    },
    normalize::normalize,
    playlist::Playlist,
    prompt::{PlaylistRequest, SYSTEM_PROMPT},
};

const TEMPERATURE: f64 = 0.7;
const MAX_COMPLETION_TOKENS: u32 = 200;
const TOP_P: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct ChatClient {
    config: Config,
    client: Client,
}

impl ChatClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn complete(&self, system: &str, user: &str) -> Result<String, PlaylistError> {
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: TEMPERATURE,
            max_completion_tokens: MAX_COMPLETION_TOKENS,
            top_p: TOP_P,
            stop: None,
            stream: false,
        };

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(PlaylistError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = serde_json::from_str(&text)?;

        Ok(completion.into_text())
    }
}

pub async fn generate_playlist(
    client: ChatClient,
    request: PlaylistRequest,
) -> Result<Playlist, PlaylistError> {
    let user_message = request.user_message();
    tracing::info!(theme = %request.theme, artist = %request.artist, "requesting playlist");

    let raw = client.complete(SYSTEM_PROMPT, &user_message).await?;
    tracing::debug!(raw = %raw, "raw text received from model");

    let playlist = normalize(&raw)?;
    tracing::info!(songs = playlist.len(), "playlist generated");

    Ok(playlist)
}
