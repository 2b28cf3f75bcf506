/// Handler result for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain without a reply.
    Stop,
    /// Stop the chain; the text is sent back to the chat once the chain finishes.
    Reply(String),
}
