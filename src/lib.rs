//! # AI Chef Telegram Bot
//!
//! A Telegram bot that simulates an AI recipe generator: it routes a fixed
//! set of inline-menu button presses to static screens and turns a free-text
//! product list into a templated recipe after a short simulated
//! "generation" sequence. Nothing is persisted; every update is handled
//! independently.

pub mod bot;
pub mod config;
pub mod menu;
pub mod recipe;
