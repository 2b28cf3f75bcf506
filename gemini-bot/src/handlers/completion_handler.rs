//! Sends the message text to the completion client and turns whatever comes back into a reply.
//!
//! This is the error boundary for a message: request failures and odd response shapes are
//! logged here and become reply text, so the handler always returns `Reply`.

use async_trait::async_trait;
use gemini_client::{classify, CompletionClient, CompletionOutcome};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::core::{Handler, HandlerResponse, Message, Result};
use crate::reply::{reply_text, REQUEST_FAILED_REPLY};

pub struct CompletionHandler {
    client: Arc<dyn CompletionClient>,
}

impl CompletionHandler {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Handler for CompletionHandler {
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let reply = match self.client.generate_content(&message.content).await {
            Ok(result) => {
                let outcome = classify(&result);
                log_outcome(message, &outcome);
                reply_text(&outcome)
            }
            Err(e) => {
                error!(user_id = message.user.id, error = %e, "Error generating content");
                REQUEST_FAILED_REPLY.to_string()
            }
        };
        Ok(HandlerResponse::Reply(reply))
    }
}

fn log_outcome(message: &Message, outcome: &CompletionOutcome) {
    let user_id = message.user.id;
    match outcome {
        CompletionOutcome::Text(text) => {
            info!(user_id = user_id, reply_len = text.len(), "Generated text")
        }
        CompletionOutcome::NonStringContent(value) => {
            error!(user_id = user_id, value = %value, "Generated content is not a string")
        }
        CompletionOutcome::EmptyParts(parts) => {
            error!(user_id = user_id, parts = %to_json(parts), "No valid text found in parts")
        }
        CompletionOutcome::MissingContent(candidate) => {
            error!(
                user_id = user_id,
                candidate = %to_json(candidate),
                "No valid content found in candidate"
            )
        }
        CompletionOutcome::Blocked(reason) => {
            warn!(user_id = user_id, block_reason = %reason, "Prompt blocked")
        }
        CompletionOutcome::Unexpected(result) => {
            error!(
                user_id = user_id,
                response = %to_json(result),
                "Unexpected response from Gemini"
            )
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}
