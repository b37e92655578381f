//! # Screen Rendering Tests
//!
//! Tests for screen texts and keyboard layouts. Screens are pure functions,
//! so everything here runs without a live bot.

use aichef::bot::ui_builder::{
    back_menu_screen, help_screen, main_menu_screen, my_recipes_screen, new_recipe_screen,
    premium_screen, profile_screen, recipe_keyboard, screen_for, write_list_screen, Screen,
    UserView,
};
use aichef::menu::{fallback_alert, MenuAction};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardButtonKind, InlineKeyboardMarkup};

#[cfg(test)]
mod tests {
    use super::*;

    fn callback_data(button: &InlineKeyboardButton) -> &str {
        match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data,
            other => panic!("expected a callback button, got {other:?}"),
        }
    }

    fn row_sizes(keyboard: &InlineKeyboardMarkup) -> Vec<usize> {
        keyboard.inline_keyboard.iter().map(Vec::len).collect()
    }

    fn all_callback_data(keyboard: &InlineKeyboardMarkup) -> Vec<&str> {
        keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(callback_data)
            .collect()
    }

    fn test_user() -> UserView {
        UserView {
            id: 123456,
            first_name: "Anna".to_string(),
            username: Some("anna_cooks".to_string()),
        }
    }

    #[test]
    fn test_main_menu_greets_user_by_name() {
        let screen = main_menu_screen("Anna");

        assert!(screen.text.contains("Anna"));
        assert!(screen.text.contains("Добро пожаловать"));
    }

    #[test]
    fn test_main_menu_has_six_buttons_in_three_rows() {
        let screen = main_menu_screen("Anna");
        let keyboard = screen.keyboard.expect("main menu must carry a keyboard");

        assert_eq!(row_sizes(&keyboard), vec![2, 2, 2]);
        assert_eq!(
            all_callback_data(&keyboard),
            vec![
                "new_recipe",
                "my_recipes",
                "profile",
                "premium",
                "help",
                "support"
            ]
        );
    }

    #[test]
    fn test_main_menu_escapes_html_in_name() {
        let screen = main_menu_screen("<Anna>");

        assert!(screen.text.contains("&lt;Anna&gt;"));
    }

    #[test]
    fn test_premium_screen_price_and_layout() {
        let screen = premium_screen();
        let keyboard = screen.keyboard.expect("premium must carry a keyboard");

        assert!(screen.text.contains("299₽"));
        assert_eq!(row_sizes(&keyboard), vec![2, 1]);
        assert_eq!(
            all_callback_data(&keyboard),
            vec!["buy_premium", "promo", "back_menu"]
        );
    }

    #[test]
    fn test_new_recipe_screen_method_chooser_layout() {
        let screen = new_recipe_screen();
        let keyboard = screen.keyboard.expect("chooser must carry a keyboard");

        assert_eq!(row_sizes(&keyboard), vec![2, 2, 1]);
        assert_eq!(
            all_callback_data(&keyboard),
            vec![
                "write_list",
                "voice_input",
                "photo_input",
                "receipt_input",
                "back_menu"
            ]
        );
    }

    #[test]
    fn test_write_list_prompt_has_no_keyboard() {
        let screen = write_list_screen();

        assert!(screen.keyboard.is_none());
        assert!(screen.text.contains("Напишите список продуктов"));
    }

    #[test]
    fn test_profile_interpolates_identity_fields() {
        let screen = profile_screen(&test_user());

        assert!(screen.text.contains("Anna"));
        assert!(screen.text.contains("@anna_cooks"));
        assert!(screen.text.contains("123456"));
    }

    #[test]
    fn test_profile_without_username_shows_placeholder() {
        let user = UserView {
            username: None,
            ..test_user()
        };
        let screen = profile_screen(&user);

        assert!(screen.text.contains("не указан"));
    }

    #[test]
    fn test_static_screens_return_to_main_menu_keyboard() {
        let main = main_menu_screen("Anna").keyboard.unwrap();
        for screen in [my_recipes_screen(), help_screen(), back_menu_screen()] {
            let keyboard = screen.keyboard.expect("screen must carry a keyboard");
            assert_eq!(all_callback_data(&keyboard), all_callback_data(&main));
        }
    }

    #[test]
    fn test_screen_for_maps_every_action() {
        let user = test_user();
        let cases: [(MenuAction, Screen); 7] = [
            (MenuAction::NewRecipe, new_recipe_screen()),
            (MenuAction::WriteList, write_list_screen()),
            (MenuAction::MyRecipes, my_recipes_screen()),
            (MenuAction::Profile, profile_screen(&user)),
            (MenuAction::Premium, premium_screen()),
            (MenuAction::Help, help_screen()),
            (MenuAction::BackMenu, back_menu_screen()),
        ];

        for (action, expected) in cases {
            assert_eq!(screen_for(action, &user).text, expected.text);
        }
    }

    #[test]
    fn test_recipe_keyboard_layout() {
        let keyboard = recipe_keyboard();

        assert_eq!(row_sizes(&keyboard), vec![2, 2, 2]);
        assert_eq!(
            all_callback_data(&keyboard),
            vec![
                "start_cooking",
                "add_favorite",
                "new_recipe",
                "share_recipe",
                "shopping_list",
                "back_menu"
            ]
        );
    }

    #[test]
    fn test_every_shipped_button_resolves_somewhere() {
        // Any id we actually put on a button must either have a screen
        // handler or a dedicated alert string; the templated default arm is
        // a safety net for ids not shipped yet.
        let user = test_user();
        let mut keyboards = vec![recipe_keyboard()];
        for action in [
            MenuAction::NewRecipe,
            MenuAction::WriteList,
            MenuAction::MyRecipes,
            MenuAction::Profile,
            MenuAction::Premium,
            MenuAction::Help,
            MenuAction::BackMenu,
        ] {
            if let Some(keyboard) = screen_for(action, &user).keyboard {
                keyboards.push(keyboard);
            }
        }
        keyboards.push(main_menu_screen("Anna").keyboard.unwrap());

        for keyboard in &keyboards {
            for data in all_callback_data(keyboard) {
                let handled = MenuAction::parse(data).is_some();
                let default_alert = format!("Функция '{data}' в разработке! 🛠");
                assert!(
                    handled || fallback_alert(data) != default_alert,
                    "button id '{data}' resolves only through the default arm"
                );
            }
        }
    }
}
