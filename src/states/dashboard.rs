//! Dashboard State
//!
//! Ephemeral UI controls for the inventory view: raw and debounced search
//! query, view mode, current page and the form modal target. Rendering
//! derives everything else from this struct plus the catalog snapshot.

use crate::constants::{PAGE_SIZE, SEARCH_DEBOUNCE_MS};
use crate::domain::Product;
use crate::states::debounce::{DebounceTicket, Debouncer};
use crate::states::product_form::ProductDraft;
use crate::states::pipeline::{DerivedView, PageNav, PageWindow, derive_view};
use gpui::Action;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the visible products are laid out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Cards in a wrapping grid
    #[default]
    Grid,
    /// Table rows
    List,
}

/// View mode toggle action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ViewModeAction {
    Grid,
    List,
}

impl From<ViewModeAction> for ViewMode {
    fn from(action: ViewModeAction) -> Self {
        match action {
            ViewModeAction::Grid => ViewMode::Grid,
            ViewModeAction::List => ViewMode::List,
        }
    }
}

/// Form modal state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormModal {
    #[default]
    Closed,
    /// Open with no target product
    Create,
    /// Open on a transient copy of the product being edited
    Edit(Product),
}

impl FormModal {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormModal::Closed)
    }

    /// Product targeted for edit, `None` in create mode or when closed
    pub fn target(&self) -> Option<&Product> {
        match self {
            FormModal::Edit(product) => Some(product),
            _ => None,
        }
    }

    /// Fresh draft for the form this state shows, `None` when closed
    pub fn draft(&self) -> Option<ProductDraft> {
        self.is_open().then(|| ProductDraft::from_target(self.target()))
    }
}

/// UI control state owned by the dashboard view
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// Latest raw query and the debounced one driving the filter
    search: Debouncer<String>,
    view_mode: ViewMode,
    /// Requested page, 1-based
    page: usize,
    modal: FormModal,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl DashboardState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            search: Debouncer::new(String::new(), Duration::from_millis(SEARCH_DEBOUNCE_MS)),
            view_mode,
            page: 1,
            modal: FormModal::Closed,
        }
    }

    // ==================== Getters ====================

    pub fn debounced_query(&self) -> &str {
        self.search.settled()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.search.delay()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn modal(&self) -> &FormModal {
        &self.modal
    }

    // ==================== Setters ====================

    /// Update the raw query and go back to the first page
    ///
    /// The returned ticket must be passed to `settle_query` once the quiet
    /// period has elapsed.
    pub fn set_query(&mut self, query: impl Into<String>) -> DebounceTicket {
        self.page = 1;
        self.search.push(query.into())
    }

    /// Apply the debounced query if `ticket` is still current
    ///
    /// Returns whether the filter input changed.
    pub fn settle_query(&mut self, ticket: DebounceTicket) -> bool {
        match self.search.settle(ticket) {
            Some(query) => {
                tracing::debug!(query = %query, "Search query settled");
                self.page = 1;
                true
            }
            None => false,
        }
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> bool {
        if self.view_mode == view_mode {
            return false;
        }
        self.view_mode = view_mode;
        true
    }

    /// Move to the page reached by `nav` within `window`
    pub fn navigate(&mut self, nav: PageNav, window: &PageWindow) {
        if window.is_enabled(nav) {
            self.page = window.target(nav);
        }
    }

    pub fn open_create(&mut self) {
        self.modal = FormModal::Create;
    }

    pub fn open_edit(&mut self, product: Product) {
        self.modal = FormModal::Edit(product);
    }

    pub fn close_form(&mut self) {
        self.modal = FormModal::Closed;
    }

    // ==================== Derivation ====================

    /// Recompute summary, page window and visible products
    pub fn derive(&self, products: &[Product]) -> DerivedView {
        derive_view(products, self.debounced_query(), self.page, PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::states::product_form::FormMode;
    use crate::domain::ProductFields;

    fn catalog(count: u64) -> Vec<Product> {
        (1..=count)
            .map(|id| {
                Product::from_fields(
                    id,
                    ProductFields {
                        name: format!("Item {id}"),
                        price: 1.0,
                        stock: 10,
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn query_change_resets_page() {
        let products = catalog(20);
        let mut state = DashboardState::default();
        let window = state.derive(&products).window;
        state.navigate(PageNav::Last, &window);
        assert_eq!(state.page(), 3);

        state.set_query("item");
        assert_eq!(state.page(), 1);
        assert_eq!(state.debounced_query(), "");
    }

    #[test]
    fn filtering_waits_for_the_settled_query() {
        let products = catalog(20);
        let mut state = DashboardState::default();

        let stale = state.set_query("Item 1");
        let latest = state.set_query("Item 2");
        assert_eq!(state.derive(&products).window.total, 20);

        assert!(!state.settle_query(stale));
        assert!(state.settle_query(latest));
        assert_eq!(state.debounced_query(), "Item 2");
        // "Item 2" and "Item 20"
        assert_eq!(state.derive(&products).window.total, 2);
    }

    #[test]
    fn navigation_respects_boundaries() {
        let products = catalog(20);
        let mut state = DashboardState::default();

        let window = state.derive(&products).window;
        state.navigate(PageNav::Prev, &window);
        assert_eq!(state.page(), 1);

        state.navigate(PageNav::Next, &window);
        let window = state.derive(&products).window;
        assert_eq!(window.page, 2);
        state.navigate(PageNav::Next, &window);
        let window = state.derive(&products).window;
        state.navigate(PageNav::Next, &window);
        assert_eq!(state.page(), 3);

        let window = state.derive(&products).window;
        state.navigate(PageNav::First, &window);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn modal_targets() {
        let products = catalog(1);
        let mut state = DashboardState::default();
        assert!(!state.modal().is_open());

        state.open_create();
        assert!(state.modal().is_open());
        assert!(state.modal().target().is_none());

        state.open_edit(products[0].clone());
        assert_eq!(state.modal().target().map(|p| p.id), Some(1));

        state.close_form();
        assert_eq!(state.modal(), &FormModal::Closed);
    }

    #[test]
    fn modal_state_decides_the_form_draft() {
        let products = catalog(2);
        let mut state = DashboardState::default();
        assert!(state.modal().draft().is_none());

        state.open_create();
        let draft = state.modal().draft().unwrap();
        assert_eq!(draft.mode(), FormMode::Create);
        assert_eq!(draft, ProductDraft::new());

        state.open_edit(products[1].clone());
        let draft = state.modal().draft().unwrap();
        assert_eq!(draft.mode(), FormMode::Edit(2));
        assert_eq!(draft, ProductDraft::for_product(&products[1]));

        state.close_form();
        assert!(state.modal().draft().is_none());
    }

    #[test]
    fn view_mode_toggle() {
        let mut state = DashboardState::new(ViewMode::List);
        assert!(!state.set_view_mode(ViewMode::List));
        assert!(state.set_view_mode(ViewMode::Grid));
        assert_eq!(state.view_mode(), ViewMode::Grid);
    }
}
