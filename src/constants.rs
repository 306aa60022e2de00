//! UI Constants
//!
//! Centralized constants for the dashboard layout and derivation pipeline.

/// Products shown per page
pub const PAGE_SIZE: usize = 8;

/// Quiet period before a search query drives filtering
pub const SEARCH_DEBOUNCE_MS: u64 = 500;

/// Products with stock strictly below this count as low stock
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Currency symbol for prices and totals
pub const CURRENCY_SYMBOL: &str = "₹";

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;
pub const MIN_WINDOW_WIDTH: f32 = 900.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Product card width in grid mode
pub const PRODUCT_CARD_WIDTH: f32 = 260.0;

/// Modal form width
pub const FORM_MODAL_WIDTH: f32 = 460.0;

/// Environment variable overriding the persisted catalog source
pub const CATALOG_SOURCE_ENV: &str = "INVENTORY_CATALOG";
