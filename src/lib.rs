//! Inventory Dashboard Library
//!
//! A native GUI for browsing, searching and editing a product catalog held
//! in memory for the session.

pub mod app;
pub mod assets;
pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;

rust_i18n::i18n!("locales", fallback = "en");
