use teloxide::utils::command::BotCommands;

/// Commands the bot answers itself; any other text goes to the model.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the greeting.
    Start,
}
