//! Conversational assistant embedded in the app.
//!
//! The assistant backend is opaque: a prompt goes in, a reply comes out.
//! [`ChatSession`] keeps the transcript and turns backend failures into the
//! fixed fallback replies shown to the donor.

mod command;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub use command::CommandAssistant;

pub const GREETING: &str =
    "Hello! I'm HemoBot. Ask me anything about blood donation eligibility or the process.";

pub const SYSTEM_INSTRUCTION: &str = "You are HemoBot, a knowledgeable and empathetic assistant \
for a blood donation application. Your goal is to answer questions about donor eligibility, \
preparation, and the donation process briefly and clearly. If asked about medical advice, \
strictly advise consulting a doctor.";

pub const UNAVAILABLE_REPLY: &str = "AI Service Unavailable: Missing API Key.";
pub const CONNECTION_REPLY: &str = "I'm having trouble connecting to the knowledge base right now.";
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response.";

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("assistant is not configured")]
    NotConfigured,
    #[error("assistant backend failed: {0}")]
    Backend(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Text-in/text-out assistant backend.
pub trait Assistant {
    fn ask(&self, prompt: &str, system_instruction: &str) -> Result<String, AssistantError>;
}

impl<A: Assistant + ?Sized> Assistant for Box<A> {
    fn ask(&self, prompt: &str, system_instruction: &str) -> Result<String, AssistantError> {
        (**self).ask(prompt, system_instruction)
    }
}

/// Backend used when nothing is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableAssistant;

impl Assistant for UnavailableAssistant {
    fn ask(&self, _prompt: &str, _system_instruction: &str) -> Result<String, AssistantError> {
        Err(AssistantError::NotConfigured)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

pub struct ChatSession<A: Assistant> {
    assistant: A,
    messages: Vec<ChatMessage>,
}

impl<A: Assistant> ChatSession<A> {
    pub fn new(assistant: A) -> Self {
        Self {
            assistant,
            messages: vec![ChatMessage::new(ChatRole::Bot, GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sends `input` and returns the bot's reply. Blank input is ignored and
    /// yields `None`.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(ChatRole::User, input));
        let reply = match self.assistant.ask(input, SYSTEM_INSTRUCTION) {
            Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_string(),
            Ok(text) => text,
            Err(AssistantError::NotConfigured) => UNAVAILABLE_REPLY.to_string(),
            Err(err) => {
                warn!(%err, "assistant request failed");
                CONNECTION_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::new(ChatRole::Bot, reply));
        self.messages.last()
    }
}
