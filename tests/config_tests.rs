//! # Configuration Tests
//!
//! Tests for admin id parsing. `Config::from_env` itself is a thin wrapper
//! over `std::env` and is exercised at startup.

use aichef::config::parse_admin_ids;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_comma_separated_ids() {
        assert_eq!(parse_admin_ids("1001,2002,3003"), vec![1001, 2002, 3003]);
    }

    #[test]
    fn test_tolerates_whitespace_and_empty_segments() {
        assert_eq!(parse_admin_ids(" 1001 , ,2002,"), vec![1001, 2002]);
    }

    #[test]
    fn test_empty_input_yields_no_admins() {
        assert!(parse_admin_ids("").is_empty());
        assert!(parse_admin_ids(" , ,").is_empty());
    }

    #[test]
    fn test_skips_unparsable_entries() {
        assert_eq!(parse_admin_ids("1001,abc,2002"), vec![1001, 2002]);
    }

    #[test]
    fn test_negative_ids_are_valid_chat_ids() {
        // Group chats have negative ids; the admin list may point at one.
        assert_eq!(parse_admin_ids("-100123,42"), vec![-100123, 42]);
    }
}
