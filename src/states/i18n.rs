//! Internationalization Helpers
//!
//! Provides convenient functions for translating strings based on current locale.

use super::InventoryGlobalStore;
use gpui::{App, SharedString};
use rust_i18n::t;

/// Get translated string from "dashboard" namespace
pub fn i18n_dashboard(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<InventoryGlobalStore>().read(cx).locale();
    t!(format!("dashboard.{key}"), locale = locale).into()
}

/// Get translated string from "form" namespace
pub fn i18n_form(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<InventoryGlobalStore>().read(cx).locale();
    t!(format!("form.{key}"), locale = locale).into()
}

/// Get translated string from "settings" namespace
pub fn i18n_settings(cx: &App, key: &str) -> SharedString {
    let locale = cx.global::<InventoryGlobalStore>().read(cx).locale();
    t!(format!("settings.{key}"), locale = locale).into()
}

/// "Page X of Y" in the current locale
pub fn i18n_page_of(cx: &App, page: usize, count: usize) -> SharedString {
    let locale = cx.global::<InventoryGlobalStore>().read(cx).locale();
    t!("dashboard.page_of", locale = locale, page = page, count = count).into()
}
