//! Recipe-response flow: product-list tokenization, the simulated
//! "generation" progress steps, and the final recipe template.
//!
//! The flow is deterministic for a given input text; the delays are tuning
//! knobs, not behavior. Nothing here touches the network — the handlers in
//! [`crate::bot`] own the send/edit calls.

use std::time::Duration;

use teloxide::utils::html::escape;

/// Minimum raw character count for a product-list message. Anything shorter
/// gets the "need more input" reply instead of the generation flow.
pub const MIN_PRODUCTS_TEXT_CHARS: usize = 5;

/// How many products from the user's list make it into the recipe.
pub const MAX_PRODUCTS: usize = 5;

/// Text of the initial message that becomes the edit target of the flow.
pub const ANALYZING_TEXT: &str = "⏳ Анализирую ваши продукты и создаю рецепт...";

/// One simulated generation step: wait `delay`, then replace the progress
/// message text with `text`.
#[derive(Debug, Clone, Copy)]
pub struct ProgressStep {
    pub delay: Duration,
    pub text: &'static str,
}

/// Intermediate progress edits, executed in order by the task that owns the
/// progress message.
pub const PROGRESS_STEPS: [ProgressStep; 2] = [
    ProgressStep {
        delay: Duration::from_secs(2),
        text: "👨‍🍳 Подбираю идеальное сочетание...",
    },
    ProgressStep {
        delay: Duration::from_secs(2),
        text: "📝 Составляю пошаговый рецепт...",
    },
];

/// Pause between the last progress edit and the final recipe render.
pub const FINAL_DELAY: Duration = Duration::from_secs(1);

/// Whether free text is long enough to feed the generation flow.
///
/// Counts characters, not bytes, so a short Cyrillic word like "борщ"
/// (4 chars, 8 bytes) is still rejected.
pub fn is_product_text_long_enough(text: &str) -> bool {
    text.chars().count() >= MIN_PRODUCTS_TEXT_CHARS
}

/// Extract the product list from free text.
///
/// Splits on commas and newlines, trims each token, drops empty tokens,
/// lower-cases, and keeps the first [`MAX_PRODUCTS`] entries in their
/// original order.
pub fn parse_products(text: &str) -> Vec<String> {
    text.split([',', '\n'])
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .take(MAX_PRODUCTS)
        .collect()
}

/// Render the final recipe text (HTML parse mode) for a product list.
///
/// The structure and all numbers are fixed demo copy; only the product
/// string varies. User-sourced tokens are HTML-escaped before
/// interpolation.
pub fn render_recipe(products: &[String]) -> String {
    let products_str = escape(&products.join(", "));

    format!(
        "🍽 <b>Ароматное блюдо из ваших продуктов</b>\n\
         \n\
         <i>Сбалансированное и вкусное блюдо с использованием: {products_str}</i>\n\
         \n\
         ⏱ <b>Время приготовления:</b> 35 минут\n\
         👥 <b>Порций:</b> 4\n\
         📊 <b>Сложность:</b> Легко\n\
         💰 <b>Стоимость:</b> ~280₽\n\
         \n\
         <b>🔥 Питательная ценность (на порцию):</b>\n\
         • Калории: 340 ккал\n\
         • Белки: 26г | Жиры: 14г | Углеводы: 32г\n\
         \n\
         <b>📝 Ингредиенты:</b>\n\
         • Ваши продукты: {products_str}\n\
         • Соль, черный перец - по вкусу\n\
         • Растительное масло - 2 ст.л.\n\
         • Вода - 200 мл\n\
         \n\
         <b>👨‍🍳 Пошаговое приготовление:</b>\n\
         \n\
         <b>Шаг 1:</b> Подготовка (5 мин)\n\
         Помойте и нарежьте все продукты удобными кусочками. Подготовьте специи.\n\
         \n\
         <b>Шаг 2:</b> Обжарка (10 мин)\n\
         Разогрейте сковороду с маслом на среднем огне. Обжарьте основные ингредиенты до золотистого цвета.\n\
         \n\
         <b>Шаг 3:</b> Тушение (20 мин)\n\
         Добавьте воду, приправы. Накройте крышкой и тушите на медленном огне до готовности.\n\
         \n\
         <b>Шаг 4:</b> Финиш\n\
         Попробуйте на соль, добавьте зелень. Подавайте горячим!\n\
         \n\
         💡 <b>Совет от шефа:</b> За 5 минут до готовности добавьте любимые специи - это сделает вкус ярче!\n\
         \n\
         <b>🏷 Теги:</b> #домашнее #быстро #из_остатков #экономно\n\
         \n\
         <b>💰 Экономия:</b> Вместо заказа еды (~800₽) вы потратили ~280₽\n\
         <b>✅ Ваша выгода: 520₽!</b>"
    )
}
