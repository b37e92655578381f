//! Menu action identifiers and the callback dispatch table.
//!
//! Every inline button carries an opaque callback-data string. The handled
//! identifiers form the closed [`MenuAction`] enum; anything else falls
//! through to [`fallback_alert`], which maps the not-yet-wired identifiers
//! to a short transient alert and templates a default for identifiers it
//! has never heard of.

/// A callback identifier with a dedicated screen handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Open the "how do you want to add products" chooser.
    NewRecipe,
    /// Prompt the user to type a product list.
    WriteList,
    /// Saved-recipes screen (static zeroed stats in this version).
    MyRecipes,
    /// Profile screen with the user's id/handle/name interpolated.
    Profile,
    /// Premium subscription offer.
    Premium,
    /// Help screen.
    Help,
    /// Return to the main menu.
    BackMenu,
}

impl MenuAction {
    /// Parse callback data into a handled action. Returns `None` for any
    /// identifier outside the fixed set, routing it to the alert fallback.
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "new_recipe" => Some(Self::NewRecipe),
            "write_list" => Some(Self::WriteList),
            "my_recipes" => Some(Self::MyRecipes),
            "profile" => Some(Self::Profile),
            "premium" => Some(Self::Premium),
            "help" => Some(Self::Help),
            "back_menu" => Some(Self::BackMenu),
            _ => None,
        }
    }

    /// The wire identifier attached to buttons for this action.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NewRecipe => "new_recipe",
            Self::WriteList => "write_list",
            Self::MyRecipes => "my_recipes",
            Self::Profile => "profile",
            Self::Premium => "premium",
            Self::Help => "help",
            Self::BackMenu => "back_menu",
        }
    }
}

/// Match the `/start` command in all its wire forms: bare, with the bot
/// username suffix Telegram appends in group chats, and with a deep-link
/// payload.
pub fn is_start_command(text: &str) -> bool {
    text == "/start" || text.starts_with("/start ") || text.starts_with("/start@")
}

/// Alert text for callback identifiers without a screen handler.
///
/// Known-but-unwired identifiers get a fixed string; the default arm covers
/// identifiers that are not in any shipped keyboard yet, so adding a button
/// before its handler never breaks the bot.
pub fn fallback_alert(data: &str) -> String {
    match data {
        "voice_input" => "🎤 Голосовой ввод будет доступен в Premium версии!".to_string(),
        "photo_input" => "📸 Распознавание фото будет доступно в Premium версии!".to_string(),
        "receipt_input" => "🧾 Распознавание чеков будет доступно в Premium версии!".to_string(),
        "start_cooking" => "👨‍🍳 Функция пошагового приготовления в разработке!".to_string(),
        "add_favorite" => "⭐ Рецепт добавлен в избранное!".to_string(),
        "share_recipe" => "📤 Функция публикации рецептов в разработке!".to_string(),
        "shopping_list" => "🛒 Генерация списков покупок будет в Premium!".to_string(),
        "buy_premium" => "💳 Интеграция платежей в разработке. Пишите в поддержку!".to_string(),
        "promo" => "🎁 Введение промокодов будет доступно позже!".to_string(),
        "support" => "📞 Поддержка: @aichef_support или напишите в чат".to_string(),
        other => format!("Функция '{other}' в разработке! 🛠"),
    }
}
