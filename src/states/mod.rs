//! State Management Layer
//!
//! Centralized application state using GPUI's Entity system.
//! Follows a unidirectional data flow pattern:
//!
//! ```text
//! User Action → State Method → notify → derive_view(snapshot, controls) → UI Refresh
//! ```
//!
//! The catalog owns the product list; the dashboard owns ephemeral UI
//! controls. Every render recomputes the derived view from both.

mod app;
mod catalog;
mod dashboard;
mod debounce;
mod i18n;
mod pipeline;
mod product_form;

pub use app::*;
pub use catalog::*;
pub use dashboard::*;
pub use debounce::*;
pub use i18n::*;
pub use pipeline::*;
pub use product_form::*;
