//! Title Bar Component
//!
//! Custom title bar with branding and the settings menu.

use crate::states::{
    InventoryGlobalStore, LocaleAction, ThemeAction, i18n_dashboard, i18n_settings,
};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    IconName, Sizable, ThemeMode, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct InventoryTitleBar;

impl InventoryTitleBar {
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Language and theme choices, checked against the stored preferences
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let store = cx.global::<InventoryGlobalStore>().read(cx);
        let (locale, theme) = (store.locale(), store.theme());

        menu.label(i18n_settings(cx, "language"))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .separator()
            .label(i18n_settings(cx, "theme"))
            .menu_with_check(
                i18n_settings(cx, "light"),
                theme == Some(ThemeMode::Light),
                Box::new(ThemeAction::Light),
            )
            .menu_with_check(
                i18n_settings(cx, "dark"),
                theme == Some(ThemeMode::Dark),
                Box::new(ThemeAction::Dark),
            )
            .menu_with_check(
                i18n_settings(cx, "system"),
                theme.is_none(),
                Box::new(ThemeAction::System),
            )
    }
}

impl Render for InventoryTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_dashboard(cx, "brand")).text_sm()),
            )
            .child(
                h_flex()
                    .items_center()
                    .justify_end()
                    .px_2()
                    .gap_2()
                    .mr_2()
                    .child(
                        Button::new("settings")
                            .tooltip(i18n_settings(cx, "settings"))
                            .icon(IconName::Settings2)
                            .small()
                            .ghost()
                            .dropdown_menu(move |menu, window, cx| {
                                Self::render_settings_menu(menu, window, cx)
                            })
                            .anchor(Corner::TopRight),
                    ),
            )
    }
}
