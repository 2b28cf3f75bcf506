//! User-facing reply text for each completion outcome.

use gemini_client::CompletionOutcome;

/// Sent for the `/start` command.
pub const START_GREETING: &str = "puch le jo tujhe puchna hai ";

pub const NON_STRING_CONTENT_REPLY: &str = "Error: The generated content is not a string.";
pub const EMPTY_PARTS_REPLY: &str = "Error: No valid text content found in the parts.";
pub const MISSING_CONTENT_REPLY: &str = "Error: No valid content found in the response.";
pub const UNEXPECTED_RESPONSE_REPLY: &str =
    "Sorry, I couldn't generate a response. The response from the model was unexpected.";
/// Sent when the completion request itself fails, or the message could not be processed.
pub const REQUEST_FAILED_REPLY: &str = "Error: Something went wrong while generating content.";

/// Maps an outcome to the text sent back to the user. Only the block reason is surfaced verbatim
/// from the service; other failure details stay in the logs.
pub fn reply_text(outcome: &CompletionOutcome) -> String {
    match outcome {
        CompletionOutcome::Text(text) => text.clone(),
        CompletionOutcome::NonStringContent(_) => NON_STRING_CONTENT_REPLY.to_string(),
        CompletionOutcome::EmptyParts(_) => EMPTY_PARTS_REPLY.to_string(),
        CompletionOutcome::MissingContent(_) => MISSING_CONTENT_REPLY.to_string(),
        CompletionOutcome::Blocked(reason) => format!("Your prompt was blocked due to: {}", reason),
        CompletionOutcome::Unexpected(_) => UNEXPECTED_RESPONSE_REPLY.to_string(),
    }
}
