use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use aichef::bot;
use aichef::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file before anything reads them
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting AI Chef Bot");

    // Missing token is the one fatal configuration fault: nothing useful
    // can run without it.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Configuration error");
            std::process::exit(1);
        }
    };

    info!(
        proxy_api_configured = config.proxy_api_key.is_some(),
        admin_count = config.admin_ids.len(),
        "Configuration loaded"
    );

    let bot = Bot::new(&config.bot_token);

    if let Err(e) = run(bot, &config).await {
        error!(error = %e, "Fatal error during startup");
        return Err(e);
    }

    Ok(())
}

async fn run(bot: Bot, config: &Config) -> Result<()> {
    // Commands surfaced in the Telegram client menu. Only /start has a
    // dedicated handler; the rest resolve through the free-text path.
    bot.set_my_commands(vec![
        BotCommand::new("start", "🏠 Главное меню"),
        BotCommand::new("recipe", "🍳 Новый рецепт"),
        BotCommand::new("profile", "👤 Мой профиль"),
        BotCommand::new("premium", "⭐ Премиум подписка"),
        BotCommand::new("help", "❓ Помощь"),
    ])
    .await?;

    let me = bot.get_me().await?;
    info!(
        username = me.username(),
        bot_id = %me.user.id,
        name = %me.user.first_name,
        "Bot started"
    );

    notify_admins(&bot, config, me.username()).await;

    info!("Bot is ready to accept messages");

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(bot::message_handler))
        .branch(Update::filter_callback_query().endpoint(bot::callback_handler));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Send the fixed startup notice to every configured admin. An unreachable
/// admin is a warning, never a startup failure.
async fn notify_admins(bot: &Bot, config: &Config, bot_username: &str) {
    let notice = format!(
        "🚀 <b>AI Chef Bot запущен!</b>\n\
         \n\
         🤖 @{bot_username}\n\
         ✅ Все системы готовы к работе!"
    );

    for &admin_id in &config.admin_ids {
        match bot
            .send_message(ChatId(admin_id), notice.clone())
            .parse_mode(ParseMode::Html)
            .await
        {
            Ok(_) => info!(admin_id, "Startup notice sent to admin"),
            Err(e) => warn!(admin_id, error = %e, "Failed to notify admin"),
        }
    }
}
