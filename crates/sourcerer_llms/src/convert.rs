//! Response-shape tolerance and request message assembly.

use serde_json::Value;

use sourcerer_core::Conversation;

use crate::error::{Error, Result};
use crate::types::ChatMessage;

/// Known locations of the assistant's text, checked in order. Gateways that
/// proxy different upstreams answer with any of these.
const CONTENT_PATHS: [&str; 3] = [
    "/choices/0/message/content",
    "/message/content",
    "/content",
];

/// Pull the assistant's text out of a response body, whatever its shape.
/// The first known path holding a string wins; none matching is
/// [`Error::UnexpectedResponseShape`].
pub fn extract_content(body: &Value) -> Result<String> {
    for path in CONTENT_PATHS {
        if let Some(text) = body.pointer(path).and_then(Value::as_str) {
            return Ok(text.to_string());
        }
    }
    Err(Error::UnexpectedResponseShape)
}

/// Best-effort human-readable message from an error response body: the
/// known error shapes in order, else the raw body.
pub fn api_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.pointer("/error/message").and_then(Value::as_str) {
            return message.to_string();
        }
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }
    body.to_string()
}

/// Assemble the outbound message list: the system prompt first, then the
/// conversation minus its final turn, then the final turn with the code
/// context appended when one is supplied.
pub fn build_messages(
    system_prompt: &str,
    history: &Conversation,
    code_context: &str,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::system(system_prompt)];

    let turns = history.turns();
    let Some((last, earlier)) = turns.split_last() else {
        return messages;
    };

    for turn in earlier {
        messages.push(ChatMessage::new(turn.role, turn.content.clone()));
    }

    let content = if code_context.trim().is_empty() {
        last.content.clone()
    } else {
        format!("{}\n\nCode Context:\n{}", last.content, code_context)
    };
    messages.push(ChatMessage::new(last.role, content));

    messages
}
