//! # Menu Dispatch Tests
//!
//! Tests for the closed action enumeration and the alert fallback table.

use aichef::menu::{fallback_alert, is_start_command, MenuAction};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_handled_identifier_parses() {
        let cases = [
            ("new_recipe", MenuAction::NewRecipe),
            ("write_list", MenuAction::WriteList),
            ("my_recipes", MenuAction::MyRecipes),
            ("profile", MenuAction::Profile),
            ("premium", MenuAction::Premium),
            ("help", MenuAction::Help),
            ("back_menu", MenuAction::BackMenu),
        ];

        for (data, expected) in cases {
            assert_eq!(MenuAction::parse(data), Some(expected));
        }
    }

    #[test]
    fn test_parse_round_trips_through_as_str() {
        let actions = [
            MenuAction::NewRecipe,
            MenuAction::WriteList,
            MenuAction::MyRecipes,
            MenuAction::Profile,
            MenuAction::Premium,
            MenuAction::Help,
            MenuAction::BackMenu,
        ];

        for action in actions {
            assert_eq!(MenuAction::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_unknown_identifiers_do_not_parse() {
        assert_eq!(MenuAction::parse("support"), None);
        assert_eq!(MenuAction::parse("voice_input"), None);
        assert_eq!(MenuAction::parse(""), None);
        assert_eq!(MenuAction::parse("NEW_RECIPE"), None);
    }

    #[test]
    fn test_start_command_matches_all_wire_forms() {
        assert!(is_start_command("/start"));
        assert!(is_start_command("/start@AIChefBot"));
        assert!(is_start_command("/start ref123"));
    }

    #[test]
    fn test_start_command_rejects_lookalikes_and_plain_text() {
        assert!(!is_start_command("/starting"));
        assert!(!is_start_command("start"));
        assert!(!is_start_command("курица, рис"));
    }

    #[test]
    fn test_fallback_alert_known_identifiers() {
        assert_eq!(
            fallback_alert("voice_input"),
            "🎤 Голосовой ввод будет доступен в Premium версии!"
        );
        assert_eq!(
            fallback_alert("add_favorite"),
            "⭐ Рецепт добавлен в избранное!"
        );
        assert_eq!(
            fallback_alert("buy_premium"),
            "💳 Интеграция платежей в разработке. Пишите в поддержку!"
        );
    }

    #[test]
    fn test_fallback_alert_default_interpolates_identifier() {
        let alert = fallback_alert("future_feature");

        assert!(alert.contains("future_feature"));
        assert!(alert.contains("в разработке"));
    }
}
