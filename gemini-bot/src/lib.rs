//! # Gemini Telegram bot
//!
//! Relays each Telegram text message to Gemini `generateContent` and replies with the generated
//! text (or an error description). `/start` gets a fixed greeting. No state is kept between
//! messages.

pub mod chain;
pub mod components;
pub mod config;
pub mod core;
pub mod handlers;
pub mod reply;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use components::{build_bot_components, build_http_client, BotComponents};
pub use config::BotConfig;
pub use core::{
    init_tracing, Bot, Chat, DbotError, Handler, HandlerResponse, Message, Result, ToCoreMessage,
    ToCoreUser, User,
};
pub use handlers::{CompletionHandler, LoggingHandler, StartCommandHandler};
pub use runner::{run_bot, GeminiBot};
pub use telegram::{
    run_repl, Command, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper,
};
