//! Bot module for handling Telegram interactions
//!
//! Split into submodules mirroring the update kinds the dispatcher feeds us:
//! - `message_handler`: the `/start` command and free-text product lists
//! - `callback_handler`: inline keyboard button presses
//! - `ui_builder`: screen texts and keyboard layouts

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export the endpoint functions wired into the dispatcher in main.rs.
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;
