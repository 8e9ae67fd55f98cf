use serde::{Deserialize, Serialize};

use crate::models::context::UserContext;

/// Model identifier the chat backend serves.
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// System prompt used when no user session is active (guest chat).
pub const FALLBACK_SYSTEM_PROMPT: &str = "당신은 친근하고 전문적인 금융 AI 상담사 마이키우Me입니다. 사용자의 질문에 정확하고 도움이 되는 답변을 제공해주세요.";

/// Message role, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Request body the chat backend accepts at `POST /chat`.
///
/// Transport is the frontend's job; this crate only assembles the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    pub stream: bool,
}

impl ChatRequest {
    /// Build the request for one user turn.
    ///
    /// With an active session the rendered context prompt rides along as the
    /// system message, personalizing the advisor; without one the generic
    /// advisor prompt is used instead.
    #[must_use]
    pub fn for_user_message(context: Option<&UserContext>, user_message: &str) -> Self {
        let system = match context {
            Some(ctx) => ctx.context_prompt.clone(),
            None => FALLBACK_SYSTEM_PROMPT.to_string(),
        };

        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user_message)],
            model: DEFAULT_MODEL.to_string(),
            stream: false,
        }
    }
}

/// Response body the chat backend returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}
