//! Chain handlers: logging, `/start` greeting, and the Gemini completion.

mod completion_handler;
mod logging_handler;
mod start_handler;

pub use completion_handler::CompletionHandler;
pub use logging_handler::LoggingHandler;
pub use start_handler::StartCommandHandler;
