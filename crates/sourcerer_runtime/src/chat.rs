//! Chat-panel message flow.

use sourcerer_core::{prompts, Conversation};
use sourcerer_llms::{build_messages, ChatRequest, Provider};

use crate::error::Result;

/// Send one chat message on behalf of a conversation: record the user turn,
/// call the provider with the full history (code context attached to the
/// final turn when supplied), record the assistant's reply, and return it.
///
/// On failure the user turn stays in the history and the error propagates;
/// the caller owns the user-visible messaging.
pub async fn send_chat_message(
    provider: &dyn Provider,
    model: &str,
    conversation: &mut Conversation,
    text: impl Into<String>,
    code_context: &str,
) -> Result<String> {
    conversation.push_user(text);

    let messages = build_messages(prompts::GENERAL_CHAT_ASSISTANT, conversation, code_context);
    let reply = provider.chat(ChatRequest::new(model, messages)).await?;

    conversation.push_assistant(reply.clone());
    Ok(reply)
}
