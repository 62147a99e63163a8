//! OpenAI-compatible chat client shared by the LLM interpreter.
//!
//! Gemini is reached through Google's OpenAI-compatible endpoint, so all
//! three providers speak the same `/chat/completions` dialect.

use serde::Deserialize;
use serde_json::json;

use crate::config::LlmConfig;
use crate::error::ApiError;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
const GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";
const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Builds the HTTP client used for provider calls.
pub fn build_client(llm: &LlmConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(llm.timeout)
        .build()
        .map_err(|err| ApiError::Internal(format!("failed to build http client: {}", err)))
}

/// Resolves the chat-completions URL for the configured provider.
pub fn chat_endpoint(llm: &LlmConfig) -> Result<String, ApiError> {
    let provider = llm.provider.as_deref().unwrap_or_default();
    let base_url = match provider {
        "gemini" => llm
            .api_base_url
            .clone()
            .unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
        "openrouter" => llm
            .api_base_url
            .clone()
            .unwrap_or_else(|| OPENROUTER_BASE_URL.to_string()),
        "openai_compatible" => llm.api_base_url.clone().ok_or_else(|| {
            ApiError::BadRequest(
                "openai_compatible provider requires SITEEDIT_LLM_BASE_URL".to_string(),
            )
        })?,
        other => {
            return Err(ApiError::BadRequest(format!(
                "unsupported provider '{}': use gemini, openrouter or openai_compatible",
                other
            )))
        }
    };

    Ok(format!("{}/chat/completions", base_url.trim_end_matches('/')))
}

/// Chat request asking for a JSON object reply.
fn request_body(llm: &LlmConfig, user_message: &str) -> serde_json::Value {
    let model = llm.model.clone().unwrap_or_else(|| {
        if llm.provider.as_deref() == Some("gemini") {
            GEMINI_DEFAULT_MODEL.to_string()
        } else {
            String::new()
        }
    });

    let mut messages = Vec::new();
    if let Some(system_prompt) = llm.system_prompt.clone() {
        messages.push(json!({
            "role": "system",
            "content": system_prompt
        }));
    }
    messages.push(json!({
        "role": "user",
        "content": user_message
    }));

    json!({
        "model": model,
        "messages": messages,
        "response_format": { "type": "json_object" }
    })
}

/// Sends one user message and returns the assistant's reply text.
pub async fn run_external_chat_json(
    client: &reqwest::Client,
    llm: &LlmConfig,
    user_message: &str,
) -> Result<String, ApiError> {
    let endpoint = chat_endpoint(llm)?;
    let api_key = llm.api_key.clone().unwrap_or_default();
    let body = request_body(llm, user_message);

    let mut req = client
        .post(endpoint)
        .header("Authorization", format!("Bearer {}", api_key))
        .header("Content-Type", "application/json")
        .json(&body);

    if llm.provider.as_deref() == Some("openrouter") {
        req = req
            .header("HTTP-Referer", "https://localhost:8000")
            .header("X-Title", "siteedit");
    }

    let response = req
        .send()
        .await
        .map_err(|err| ApiError::Provider(format!("provider request failed: {}", err)))?;

    let status = response.status();
    let body_text = response
        .text()
        .await
        .map_err(|err| ApiError::Provider(format!("provider response read failed: {}", err)))?;

    if !status.is_success() {
        return Err(ApiError::Provider(format!(
            "provider request failed ({}): {}",
            status, body_text
        )));
    }

    assistant_content(&body_text)
}

/// Pulls the first non-empty assistant message out of a completion body.
pub fn assistant_content(body_text: &str) -> Result<String, ApiError> {
    let parsed: OpenAiCompatibleChatResponse = serde_json::from_str(body_text)
        .map_err(|err| ApiError::Provider(format!("provider response parse failed: {}", err)))?;

    parsed
        .choices
        .first()
        .and_then(|choice| choice.message.content.clone())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            ApiError::Provider("provider response missing assistant content".to_string())
        })
}

#[derive(Debug, Deserialize)]
struct OpenAiCompatibleChatResponse {
    choices: Vec<OpenAiCompatibleChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiCompatibleChoice {
    message: OpenAiCompatibleMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiCompatibleMessage {
    content: Option<String>,
}
