//! View Components
//!
//! UI components for the inventory dashboard.
//!
//! ## Layout Structure
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        TitleBar                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, title, add product)                          │
//! │  SummaryCards                                                │
//! │  Search input             [Grid View] [List View]            │
//! │  ProductList (grid cards | table rows)                       │
//! │            First  Prev  Page X of Y  Next  Last              │
//! └─────────────────────────────────────────────────────────────┘
//!             ProductFormView (modal overlay, when open)
//! ```

mod inventory;
mod modal;
mod pagination;
mod product_form;
mod product_list;
mod summary_cards;
mod title_bar;

pub use inventory::*;
pub use modal::*;
pub use pagination::*;
pub use product_form::*;
pub use product_list::*;
pub use summary_cards::*;
pub use title_bar::*;
