//! Telegram transport: teloxide adapters, Bot implementation, bot commands, REPL runner.

mod adapters;
mod bot_adapter;
mod command;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use command::Command;
pub use runner::run_repl;
