use gemini_client::CompletionClient;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, instrument, warn};

use crate::chain::HandlerChain;
use crate::components::build_bot_components;
use crate::config::BotConfig;
use crate::core::{init_tracing, Bot, HandlerResponse, Message, Result};
use crate::handlers::{CompletionHandler, LoggingHandler, StartCommandHandler};
use crate::reply::REQUEST_FAILED_REPLY;
use crate::telegram::run_repl;

/// The bot service: one handler chain and one outbound [`Bot`], shared by every message task.
pub struct GeminiBot {
    bot: Arc<dyn Bot>,
    handler_chain: HandlerChain,
}

impl GeminiBot {
    /// Builds the chain `LoggingHandler → StartCommandHandler → CompletionHandler`.
    pub fn new(
        bot: Arc<dyn Bot>,
        completion_client: Arc<dyn CompletionClient>,
        bot_username: Arc<RwLock<Option<String>>>,
    ) -> Self {
        let handler_chain = HandlerChain::new()
            .add_handler(Arc::new(LoggingHandler))
            .add_handler(Arc::new(StartCommandHandler::new(bot_username)))
            .add_handler(Arc::new(CompletionHandler::new(completion_client)));
        Self::with_chain(bot, handler_chain)
    }

    /// Uses a prebuilt chain instead of the default one.
    pub fn with_chain(bot: Arc<dyn Bot>, handler_chain: HandlerChain) -> Self {
        Self { bot, handler_chain }
    }

    /// Runs the chain for one message and sends exactly one reply. If the chain fails or ends
    /// without a reply, the generic failure text is sent instead. Only the send can fail.
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    pub async fn handle_core_message(&self, message: &Message) -> Result<()> {
        let reply = match self.handler_chain.handle(message).await {
            Ok(HandlerResponse::Reply(text)) => text,
            Ok(other) => {
                warn!(
                    user_id = message.user.id,
                    response = ?other,
                    "Handler chain ended without a reply"
                );
                REQUEST_FAILED_REPLY.to_string()
            }
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "Handler chain failed");
                REQUEST_FAILED_REPLY.to_string()
            }
        };

        self.bot.reply_to(message, &reply).await
    }
}

/// Main entry: init logging, build components, then run the REPL until terminated.
/// Expects a config that already passed [`BotConfig::validate`].
pub async fn run_bot(config: BotConfig) -> anyhow::Result<()> {
    init_tracing(&config.log_file)?;

    let components = build_bot_components(&config)?;
    let app = Arc::new(GeminiBot::new(
        components.bot.clone(),
        components.completion_client.clone(),
        components.bot_username.clone(),
    ));

    run_repl(components.teloxide_bot, app, components.bot_username).await;

    Ok(())
}
