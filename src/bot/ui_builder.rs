//! UI Builder module: screen texts and inline keyboard layouts.
//!
//! Every screen is a pure function from its trigger data to a [`Screen`];
//! the handlers decide whether the result is sent as a new message or
//! edited into the triggering one. Keeping rendering side-effect free is
//! what lets the tests assert on layouts without a live bot.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};
use teloxide::utils::html::escape;

use crate::menu::MenuAction;

/// A rendered view: HTML-formatted text plus an optional inline keyboard.
#[derive(Debug, Clone)]
pub struct Screen {
    pub text: String,
    pub keyboard: Option<InlineKeyboardMarkup>,
}

/// The slice of the triggering user that screens interpolate. Built from
/// the inbound event so render functions stay testable without teloxide
/// fixtures.
#[derive(Debug, Clone)]
pub struct UserView {
    pub id: u64,
    pub first_name: String,
    pub username: Option<String>,
}

/// Render the screen mapped to a handled menu action.
pub fn screen_for(action: MenuAction, user: &UserView) -> Screen {
    match action {
        MenuAction::NewRecipe => new_recipe_screen(),
        MenuAction::WriteList => write_list_screen(),
        MenuAction::MyRecipes => my_recipes_screen(),
        MenuAction::Profile => profile_screen(user),
        MenuAction::Premium => premium_screen(),
        MenuAction::Help => help_screen(),
        MenuAction::BackMenu => back_menu_screen(),
    }
}

/// Main menu keyboard: 6 buttons in 3 rows.
pub fn main_menu_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("🍳 Новый рецепт", MenuAction::NewRecipe.as_str()),
            InlineKeyboardButton::callback("📚 Мои рецепты", MenuAction::MyRecipes.as_str()),
        ],
        vec![
            InlineKeyboardButton::callback("👤 Профиль", MenuAction::Profile.as_str()),
            InlineKeyboardButton::callback("⭐️ Премиум", MenuAction::Premium.as_str()),
        ],
        vec![
            InlineKeyboardButton::callback("❓ Помощь", MenuAction::Help.as_str()),
            InlineKeyboardButton::callback("📞 Поддержка", "support"),
        ],
    ])
}

/// Post-recipe action keyboard: 6 buttons in 3 rows.
pub fn recipe_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("👨‍🍳 Начать готовить", "start_cooking"),
            InlineKeyboardButton::callback("⭐ В избранное", "add_favorite"),
        ],
        vec![
            InlineKeyboardButton::callback("🔄 Другой рецепт", MenuAction::NewRecipe.as_str()),
            InlineKeyboardButton::callback("📤 Поделиться", "share_recipe"),
        ],
        vec![
            InlineKeyboardButton::callback("🛒 Список покупок", "shopping_list"),
            InlineKeyboardButton::callback("🏠 Главное меню", MenuAction::BackMenu.as_str()),
        ],
    ])
}

/// Greeting screen for `/start`, with the sender's name in the welcome line.
pub fn main_menu_screen(first_name: &str) -> Screen {
    let text = format!(
        "🎉 <b>Добро пожаловать в AI Chef Bot!</b>\n\
         \n\
         Привет, {name}! 👋\n\
         \n\
         Я - ваш персональный ИИ-повар, который поможет:\n\
         \n\
         🔸 <b>Создавать рецепты</b> из ваших продуктов\n\
         🔸 <b>Экономить деньги</b> - до 30.000₽ в год!\n\
         🔸 <b>Избегать выбрасывания</b> продуктов\n\
         🔸 <b>Готовить вкусно</b> каждый день\n\
         \n\
         <b>🎁 Как это работает:</b>\n\
         1️⃣ Отправьте список продуктов из холодильника\n\
         2️⃣ Получите персональный рецепт за 30 секунд\n\
         3️⃣ Готовьте и наслаждайтесь результатом!\n\
         \n\
         <b>📊 Статистика экономии:</b>\n\
         • Средняя российская семья выбрасывает продуктов на 30.000₽ в год\n\
         • С нашим ботом вы сократите это на 80%\n\
         • Это значит экономия ~24.000₽ в год!\n\
         \n\
         <i>💡 Совет: начните с простого списка из 4-5 продуктов</i>\n\
         \n\
         Что будем готовить сегодня? 👨‍🍳",
        name = escape(first_name)
    );

    Screen {
        text,
        keyboard: Some(main_menu_keyboard()),
    }
}

/// Short main-menu render used when navigating back from a submenu.
pub fn back_menu_screen() -> Screen {
    Screen {
        text: "🏠 <b>Главное меню</b>\n\nВыберите действие:".to_string(),
        keyboard: Some(main_menu_keyboard()),
    }
}

/// Method chooser for adding products: 5 buttons in 3 rows.
pub fn new_recipe_screen() -> Screen {
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("✏️ Написать список", MenuAction::WriteList.as_str()),
            InlineKeyboardButton::callback("🎤 Голосом", "voice_input"),
        ],
        vec![
            InlineKeyboardButton::callback("📸 Сфотографировать", "photo_input"),
            InlineKeyboardButton::callback("🧾 Загрузить чек", "receipt_input"),
        ],
        vec![InlineKeyboardButton::callback(
            "◀️ Назад",
            MenuAction::BackMenu.as_str(),
        )],
    ]);

    let text = "📦 <b>Добавление продуктов</b>\n\
                \n\
                Выберите способ добавления продуктов для создания рецепта:\n\
                \n\
                🔸 <b>Написать список</b> - самый быстрый способ\n\
                🔸 <b>Голосом</b> - удобно когда руки заняты\n\
                🔸 <b>Сфотографировать</b> - ИИ распознает продукты\n\
                🔸 <b>Чек из магазина</b> - что купили, то и приготовим\n\
                \n\
                <i>💡 Для начала рекомендуем написать список текстом</i>"
        .to_string();

    Screen {
        text,
        keyboard: Some(keyboard),
    }
}

/// Prompt asking the user to type their product list. No keyboard: the next
/// step is a plain text message.
pub fn write_list_screen() -> Screen {
    let text = "✏️ <b>Напишите список продуктов</b>\n\
                \n\
                Перечислите продукты, которые у вас есть:\n\
                \n\
                <b>Примеры:</b>\n\
                • <i>Курица, картофель, морковь, лук, сметана</i>\n\
                • <i>Фарш говяжий, макароны, помидоры, сыр</i>\n\
                • <i>Рыба, рис, брокколи, лимон</i>\n\
                \n\
                📝 Просто напишите через запятую или каждый продукт с новой строки.\n\
                \n\
                <i>⚡ Чем больше продуктов укажете, тем интереснее получится рецепт!</i>"
        .to_string();

    Screen {
        text,
        keyboard: None,
    }
}

/// Saved-recipes screen. Stats are fixed zeroes: nothing is persisted yet.
pub fn my_recipes_screen() -> Screen {
    let text = "📚 <b>Ваши рецепты</b>\n\
                \n\
                📊 <b>Статистика:</b>\n\
                • Рецептов создано: <b>0</b>\n\
                • Денег сэкономлено: <b>~0₽</b>\n\
                • Продуктов использовано: <b>0</b>\n\
                \n\
                🎯 <b>У вас пока нет сохранённых рецептов</b>\n\
                \n\
                Создайте первый рецепт - это займёт всего 30 секунд! 🚀\n\
                \n\
                <i>💡 Каждый рецепт экономит в среднем 200-400₽</i>"
        .to_string();

    Screen {
        text,
        keyboard: Some(main_menu_keyboard()),
    }
}

/// Profile screen with the user's identity fields and fixed trial-period
/// stats.
pub fn profile_screen(user: &UserView) -> Screen {
    let username = user.username.as_deref().unwrap_or("не указан");
    let text = format!(
        "👤 <b>Ваш профиль</b>\n\
         \n\
         <b>Основная информация:</b>\n\
         • Имя: <b>{first_name}</b>\n\
         • Username: <b>@{username}</b>\n\
         • ID: <code>{id}</code>\n\
         • Статус: <b>🎁 Пробный период</b>\n\
         \n\
         <b>📊 Статистика использования:</b>\n\
         • Рецептов создано: <b>0</b>\n\
         • Денег сэкономлено: <b>~0₽</b>\n\
         • Продуктов переработано: <b>0</b>\n\
         • Дней с нами: <b>1</b>\n\
         \n\
         <b>🎯 Ваш уровень:</b> Начинающий повар 👶\n\
         \n\
         <i>💡 Создавайте рецепты каждый день чтобы повысить уровень!</i>",
        first_name = escape(&user.first_name),
        username = escape(username),
        id = user.id,
    );

    Screen {
        text,
        keyboard: Some(main_menu_keyboard()),
    }
}

/// Premium offer: fixed pricing copy plus buy/promo/back buttons.
pub fn premium_screen() -> Screen {
    let keyboard = InlineKeyboardMarkup::new(vec![
        vec![
            InlineKeyboardButton::callback("💳 Оформить за 299₽", "buy_premium"),
            InlineKeyboardButton::callback("🎁 Промокод", "promo"),
        ],
        vec![InlineKeyboardButton::callback(
            "◀️ Назад",
            MenuAction::BackMenu.as_str(),
        )],
    ]);

    let text = "⭐️ <b>AI Chef Premium</b>\n\
                \n\
                <b>💰 Цена: всего 299₽ в месяц!</b>\n\
                \n\
                <b>🎁 Что получаете:</b>\n\
                ✅ <b>50 рецептов в день</b> (вместо 2)\n\
                ✅ <b>GPT-4</b> для лучшего качества рецептов\n\
                ✅ <b>Распознавание фото</b> продуктов и чеков\n\
                ✅ <b>Голосовой ввод</b> продуктов\n\
                ✅ <b>Планирование меню</b> на неделю\n\
                ✅ <b>Списки покупок</b> с оптимизацией\n\
                ✅ <b>Калькулятор калорий</b> и БЖУ\n\
                ✅ <b>Персональные диеты</b> и ограничения\n\
                ✅ <b>Приоритетная поддержка</b>\n\
                \n\
                <b>💡 Это дешевле чем:</b>\n\
                • 1 поход в ресторан\n\
                • 3 чашки кофе в кафе\n\
                • Продукты, которые вы выбросите за 1 день\n\
                \n\
                <b>🎯 ROI: экономия 24.000₽ при стоимости 3.588₽ в год</b>\n\
                \n\
                <i>🔥 Первые 7 дней бесплатно!</i>"
        .to_string();

    Screen {
        text,
        keyboard: Some(keyboard),
    }
}

/// Help screen listing the happy path and the registered commands.
pub fn help_screen() -> Screen {
    let text = "❓ <b>Помощь по AI Chef Bot</b>\n\
                \n\
                <b>🔸 Как создать рецепт:</b>\n\
                1. Нажмите '🍳 Новый рецепт'\n\
                2. Выберите способ ввода продуктов\n\
                3. Укажите что у вас есть дома\n\
                4. Получите персональный рецепт за 30 сек\n\
                \n\
                <b>🔸 Советы для лучших рецептов:</b>\n\
                • Указывайте 4-8 основных продуктов\n\
                • Добавляйте специи и приправы\n\
                • Уточняйте тип блюда (обед, ужин, завтрак)\n\
                • Указывайте диетические ограничения\n\
                \n\
                <b>🔸 Популярные команды:</b>\n\
                • /start - перезапустить бота\n\
                • /profile - ваш профиль и статистика\n\
                • /premium - информация о подписке\n\
                \n\
                <b>🔸 Проблемы и вопросы:</b>\n\
                Если что-то не работает - нажмите 'Поддержка'"
        .to_string();

    Screen {
        text,
        keyboard: Some(main_menu_keyboard()),
    }
}

/// Reply for free text too short to be a product list.
pub fn too_short_text() -> String {
    "🤔 Слишком мало информации!\n\
     \n\
     Пожалуйста, напишите больше продуктов для создания рецепта.\n\
     \n\
     <i>Например: курица, картофель, морковь, лук</i>"
        .to_string()
}
