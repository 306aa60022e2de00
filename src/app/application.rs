//! Application - App Initialization and Window Management
//!
//! Wires global state, action handlers and the main window.

use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions, Window,
    WindowBounds, WindowOptions, actions, px, size,
};
use gpui_component::{Root, Theme, ThemeMode};
use tracing::{error, info};

use crate::assets::Assets;
use crate::constants::{
    DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
};
use crate::states::{
    InventoryAppState, InventoryGlobalStore, LocaleAction, ThemeAction, ViewMode,
    ViewModeAction, save_app_state, update_app_state_and_save,
};
use crate::views::InventoryView;

actions!(inventory, [Quit]);

/// Apply a theme preference; `None` follows the OS appearance
pub fn apply_theme(theme: Option<ThemeMode>, window: Option<&mut Window>, cx: &mut App) {
    match theme {
        Some(mode) => Theme::change(mode, window, cx),
        None => Theme::sync_system_appearance(window, cx),
    }
}

/// Switch the dashboard layout and persist the choice
pub fn change_view_mode(view_mode: ViewMode, cx: &mut App) {
    let store = cx.global::<InventoryGlobalStore>().clone();
    let changed = store.dashboard().update(cx, |dashboard, cx| {
        let changed = dashboard.set_view_mode(view_mode);
        if changed {
            cx.notify();
        }
        changed
    });

    if changed {
        update_app_state_and_save(cx, "change_view_mode", move |state, _cx| {
            state.set_view_mode(view_mode);
        });
    }
}

fn register_actions(cx: &mut App) {
    cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let theme = match action {
            ThemeAction::Light => Some(ThemeMode::Light),
            ThemeAction::Dark => Some(ThemeMode::Dark),
            ThemeAction::System => None,
        };
        apply_theme(theme, None, cx);
        update_app_state_and_save(cx, "change_theme", move |state, _cx| {
            state.set_theme(theme);
        });
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let locale = match action {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        };
        update_app_state_and_save(cx, "change_locale", move |state, _cx| {
            state.set_locale(locale.to_string());
        });
    });

    cx.on_action(|action: &ViewModeAction, cx: &mut App| {
        change_view_mode((*action).into(), cx);
    });

    cx.bind_keys([
        KeyBinding::new("secondary-q", Quit, None),
        KeyBinding::new("secondary-1", ViewModeAction::Grid, None),
        KeyBinding::new("secondary-2", ViewModeAction::List, None),
    ]);
}

/// Run the inventory dashboard
pub fn run_app() {
    Application::new().with_assets(Assets).run(|cx: &mut App| {
        gpui_component::init(cx);
        register_actions(cx);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let app_state = InventoryAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load preferences, using defaults");
            InventoryAppState::new()
        });
        let theme = app_state.theme();
        let source = app_state.catalog_source();
        let saved_bounds = app_state.bounds().copied();

        let store = InventoryGlobalStore::init(app_state, cx);
        cx.set_global(store.clone());
        apply_theme(theme, None, cx);

        store
            .catalog()
            .update(cx, |catalog, cx| catalog.fetch(source, cx));

        let bounds = saved_bounds.unwrap_or_else(|| {
            Bounds::centered(
                None,
                size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
                cx,
            )
        });
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            window_min_size: Some(size(px(MIN_WINDOW_WIDTH), px(MIN_WINDOW_HEIGHT))),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Inventory Dashboard")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |window, cx| {
            window.on_window_should_close(cx, |window, cx| {
                let bounds = window.bounds();
                let store = cx.global::<InventoryGlobalStore>().clone();
                let state = store.update(cx, |state, _cx| {
                    state.set_bounds(bounds);
                    state.clone()
                });
                if let Err(e) = save_app_state(&state) {
                    error!(error = %e, "Failed to save window bounds");
                }
                true
            });

            let view = cx.new(|cx| InventoryView::new(window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        });

        match opened {
            Ok(_) => info!("Main window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open main window");
                cx.quit();
            }
        }

        cx.activate(true);
    });
}
