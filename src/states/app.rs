//! Application State
//!
//! Persisted preferences (theme, locale, view mode, catalog source, window
//! bounds) and the global store holding every entity the views share.

use crate::constants::CATALOG_SOURCE_ENV;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::services::CatalogSource;
use crate::states::{CatalogState, DashboardState, ViewMode};
use gpui::{Action, App, AppContext, Bounds, Context, Entity, Global, Pixels};
use gpui_component::ThemeMode;
use locale_config::Locale;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{error, info};

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
    System,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

// ==================== Persisted State ====================

const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";
const CONFIG_FILE: &str = "inventory-dashboard.toml";

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    let path = config_dir.join(CONFIG_FILE);
    if !path.exists() {
        std::fs::write(&path, "")?;
    }
    Ok(path)
}

/// Persisted application preferences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryAppState {
    locale: Option<String>,
    theme: Option<String>,
    view_mode: Option<ViewMode>,
    /// Catalog location: blank/`embedded`, a file path, or an http(s) URL
    catalog_source: Option<String>,
    bounds: Option<Bounds<Pixels>>,
}

impl InventoryAppState {
    /// Load preferences from the config file
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;

        let mut state = Self::from_toml(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;

        // Detect system locale if not set
        if state.locale.as_ref().is_none_or(|l| l.is_empty()) {
            if let Some((lang, _)) = Locale::current().to_string().split_once('-') {
                state.locale = Some(lang.to_string());
            }
        }

        Ok(state)
    }

    /// Parse preferences, treating a blank document as defaults
    pub fn from_toml(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::new());
        }
        Ok(toml::from_str(value)?)
    }

    /// Create new default state
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Getters ====================

    pub fn bounds(&self) -> Option<&Bounds<Pixels>> {
        self.bounds.as_ref()
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        match self.theme.as_deref() {
            Some(LIGHT_THEME_MODE) => Some(ThemeMode::Light),
            Some(DARK_THEME_MODE) => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn locale(&self) -> &str {
        match self.locale.as_deref() {
            Some("zh") => "zh",
            _ => "en",
        }
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode.unwrap_or_default()
    }

    /// Catalog source, with the environment override applied
    pub fn catalog_source(&self) -> CatalogSource {
        let from_env = std::env::var(CATALOG_SOURCE_ENV).ok();
        self.resolve_catalog_source(from_env.as_deref())
    }

    fn resolve_catalog_source(&self, override_source: Option<&str>) -> CatalogSource {
        let raw = override_source
            .filter(|s| !s.trim().is_empty())
            .or(self.catalog_source.as_deref())
            .unwrap_or_default();
        CatalogSource::parse(raw)
    }

    // ==================== Setters ====================

    pub fn set_bounds(&mut self, bounds: Bounds<Pixels>) {
        self.bounds = Some(bounds);
    }

    pub fn set_theme(&mut self, theme: Option<ThemeMode>) {
        self.theme = match theme {
            Some(ThemeMode::Light) => Some(LIGHT_THEME_MODE.to_string()),
            Some(ThemeMode::Dark) => Some(DARK_THEME_MODE.to_string()),
            _ => None,
        };
    }

    pub fn set_locale(&mut self, locale: String) {
        self.locale = Some(locale);
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = Some(view_mode);
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<InventoryGlobalStore>()`
#[derive(Clone)]
pub struct InventoryGlobalStore {
    app_state: Entity<InventoryAppState>,
    catalog: Entity<CatalogState>,
    dashboard: Entity<DashboardState>,
}

impl InventoryGlobalStore {
    /// Create every shared entity from the loaded preferences
    pub fn init(app_state: InventoryAppState, cx: &mut App) -> Self {
        let view_mode = app_state.view_mode();
        Self {
            app_state: cx.new(|_| app_state),
            catalog: cx.new(|_| CatalogState::new()),
            dashboard: cx.new(|_| DashboardState::new(view_mode)),
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<InventoryAppState> {
        self.app_state.clone()
    }

    /// Get the catalog (data store) entity
    pub fn catalog(&self) -> Entity<CatalogState> {
        self.catalog.clone()
    }

    /// Get the dashboard (UI control state) entity
    pub fn dashboard(&self) -> Entity<DashboardState> {
        self.dashboard.clone()
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a InventoryAppState {
        self.app_state.read(cx)
    }

    /// Update app state
    pub fn update<R, C: AppContext>(
        &self,
        cx: &mut C,
        update: impl FnOnce(&mut InventoryAppState, &mut Context<InventoryAppState>) -> R,
    ) -> C::Result<R> {
        self.app_state.update(cx, update)
    }
}

impl Global for InventoryGlobalStore {}

// ==================== Persistence ====================

/// Save app state to disk
pub fn save_app_state(state: &InventoryAppState) -> Result<()> {
    let path = get_config_path()?;
    let value = toml::to_string(state)?;
    std::fs::write(path, value)?;
    Ok(())
}

/// Update app state and save to disk asynchronously
pub fn update_app_state_and_save<F>(cx: &App, action_name: &'static str, mutation: F)
where
    F: FnOnce(&mut InventoryAppState, &App) + Send + 'static,
{
    let store = cx.global::<InventoryGlobalStore>().clone();

    cx.spawn(async move |cx| {
        // Step 1: Update global state
        let current_state = store.update(cx, |state, cx| {
            mutation(state, cx);
            state.clone()
        });

        // Step 2: Persist to disk in background
        if let Ok(state) = current_state {
            cx.background_executor()
                .spawn(async move {
                    if let Err(e) = save_app_state(&state) {
                        error!(error = %e, action = action_name, "Failed to save state");
                    } else {
                        info!(action = action_name, "State saved successfully");
                    }
                })
                .await;
        }

        // Step 3: Refresh windows
        cx.update(|cx| cx.refresh_windows()).ok();
    })
    .detach();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_yields_defaults() {
        let state = InventoryAppState::from_toml("  \n").unwrap();
        assert_eq!(state, InventoryAppState::default());
        assert_eq!(state.view_mode(), ViewMode::Grid);
        assert_eq!(state.locale(), "en");
        assert!(state.theme().is_none());
    }

    #[test]
    fn parses_saved_preferences() {
        let state = InventoryAppState::from_toml(
            r#"
            locale = "zh"
            theme = "dark"
            view_mode = "list"
            catalog_source = "https://example.com/products.json"
            "#,
        )
        .unwrap();

        assert_eq!(state.locale(), "zh");
        assert_eq!(state.theme(), Some(ThemeMode::Dark));
        assert_eq!(state.view_mode(), ViewMode::List);
        assert_eq!(
            state.resolve_catalog_source(None),
            CatalogSource::Url("https://example.com/products.json".to_string())
        );
    }

    #[test]
    fn preferences_round_trip_through_toml() {
        let mut state = InventoryAppState::new();
        state.set_view_mode(ViewMode::List);
        state.set_theme(Some(ThemeMode::Light));
        state.set_locale("zh".to_string());

        let text = toml::to_string(&state).unwrap();
        assert_eq!(InventoryAppState::from_toml(&text).unwrap(), state);
    }

    #[test]
    fn environment_override_wins() {
        let state = InventoryAppState::from_toml(r#"catalog_source = "catalog.json""#).unwrap();

        assert_eq!(
            state.resolve_catalog_source(None),
            CatalogSource::File(PathBuf::from("catalog.json"))
        );
        assert_eq!(state.resolve_catalog_source(Some("embedded")), CatalogSource::Embedded);
        assert_eq!(
            state.resolve_catalog_source(Some("  ")),
            CatalogSource::File(PathBuf::from("catalog.json"))
        );
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        let state = InventoryAppState::from_toml(r#"locale = "fr""#).unwrap();
        assert_eq!(state.locale(), "en");
    }
}
