//! Callback Handler module for processing inline keyboard callback queries.
//!
//! A handled identifier edits the triggering message into its screen and
//! acknowledges the query; anything else is answered with a transient
//! alert and no edit.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ParseMode};
use tracing::debug;

use crate::menu::{fallback_alert, MenuAction};

use super::ui_builder::{screen_for, UserView};

pub async fn callback_handler(bot: Bot, q: CallbackQuery) -> Result<()> {
    let data = q.data.as_deref().unwrap_or("");
    debug!(user_id = %q.from.id, data, "Received callback query");

    let Some(action) = MenuAction::parse(data) else {
        // Unknown identifier: transient alert only, the message stays put.
        bot.answer_callback_query(q.id)
            .text(fallback_alert(data))
            .show_alert(true)
            .await?;
        return Ok(());
    };

    if let Some(msg) = &q.message {
        let user = UserView {
            id: q.from.id.0,
            first_name: q.from.first_name.clone(),
            username: q.from.username.clone(),
        };

        let screen = screen_for(action, &user);
        let request = bot
            .edit_message_text(msg.chat().id, msg.id(), screen.text)
            .parse_mode(ParseMode::Html);
        match screen.keyboard {
            Some(keyboard) => request.reply_markup(keyboard).await?,
            None => request.await?,
        };
    }

    // Clears the client-side loading spinner on the pressed button.
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
