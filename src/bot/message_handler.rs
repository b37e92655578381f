//! Message Handler module for processing incoming Telegram messages.
//!
//! Two paths: the `/start` command renders the main menu, and any other
//! text is treated as a product list feeding the simulated recipe
//! generation. Non-text messages are ignored.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::menu::is_start_command;
use crate::recipe::{
    is_product_text_long_enough, parse_products, render_recipe, ANALYZING_TEXT, FINAL_DELAY,
    PROGRESS_STEPS,
};

use super::ui_builder::{main_menu_screen, recipe_keyboard, too_short_text};

pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    if is_start_command(text) {
        handle_start(&bot, &msg).await
    } else {
        handle_products(&bot, &msg, text).await
    }
}

/// `/start`: greet the user by first name and show the main menu.
async fn handle_start(bot: &Bot, msg: &Message) -> Result<()> {
    let user = msg.from.as_ref();
    let first_name = user.map_or("друг", |u| u.first_name.as_str());

    if let Some(user) = user {
        info!(
            user_id = %user.id,
            username = user.username.as_deref().unwrap_or("-"),
            "New user started the bot"
        );
    }

    let screen = main_menu_screen(first_name);
    let mut request = bot
        .send_message(msg.chat.id, screen.text)
        .parse_mode(ParseMode::Html);
    if let Some(keyboard) = screen.keyboard {
        request = request.reply_markup(keyboard);
    }
    request.await?;

    Ok(())
}

/// Free text: run the simulated generation flow over the product list.
///
/// The initial "analyzing" message is the edit target for every later step,
/// so the whole flow is a strictly ordered sequence owned by this task.
async fn handle_products(bot: &Bot, msg: &Message, text: &str) -> Result<()> {
    if !is_product_text_long_enough(text) {
        bot.send_message(msg.chat.id, too_short_text())
            .parse_mode(ParseMode::Html)
            .await?;
        return Ok(());
    }

    let user_id = msg.from.as_ref().map(|u| u.id.0).unwrap_or_default();
    let preview: String = text.chars().take(50).collect();
    info!(user_id, request = %preview, "Recipe requested");

    let loading = bot.send_message(msg.chat.id, ANALYZING_TEXT).await?;

    for step in PROGRESS_STEPS {
        sleep(step.delay).await;
        bot.edit_message_text(msg.chat.id, loading.id, step.text)
            .await?;
    }
    sleep(FINAL_DELAY).await;

    let products = parse_products(text);
    bot.edit_message_text(msg.chat.id, loading.id, render_recipe(&products))
        .parse_mode(ParseMode::Html)
        .reply_markup(recipe_keyboard())
        .await?;

    info!(user_id, products = products.len(), "Recipe delivered");

    Ok(())
}
