//! Derivation Pipeline
//!
//! Pure functions recomputed from the current catalog snapshot on every
//! render: name filtering, the paginated window, and summary statistics.

use crate::constants::LOW_STOCK_THRESHOLD;
use crate::domain::Product;
use std::ops::Range;

/// Products whose name contains `query`, ignoring case
///
/// A blank query (after trimming) keeps every product.
pub fn filter_by_name<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let query = query.trim();
    if query.is_empty() {
        return products.iter().collect();
    }

    let query_lower = query.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&query_lower))
        .collect()
}

/// Pagination navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    First,
    Prev,
    Next,
    Last,
}

/// Visible slice of a filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Current page, 1-based, always within `1..=page_count`
    pub page: usize,
    /// Number of pages, at least 1
    pub page_count: usize,
    /// Items per page
    pub page_size: usize,
    /// Length of the filtered list
    pub total: usize,
}

impl PageWindow {
    /// Build the window for `page`, clamping it into range
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let page_count = total.div_ceil(page_size).max(1);
        Self {
            page: page.clamp(1, page_count),
            page_count,
            page_size,
            total,
        }
    }

    /// Index range of the visible items
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total);
        let end = (self.page * self.page_size).min(self.total);
        start..end
    }

    /// Visible items of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn can_go_back(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_forward(&self) -> bool {
        self.page < self.page_count
    }

    /// Whether the control for `nav` is enabled
    pub fn is_enabled(&self, nav: PageNav) -> bool {
        match nav {
            PageNav::First | PageNav::Prev => self.can_go_back(),
            PageNav::Next | PageNav::Last => self.can_go_forward(),
        }
    }

    /// Page reached by `nav`, staying put at the boundaries
    pub fn target(&self, nav: PageNav) -> usize {
        match nav {
            PageNav::First => 1,
            PageNav::Prev => self.page.saturating_sub(1).max(1),
            PageNav::Next => (self.page + 1).min(self.page_count),
            PageNav::Last => self.page_count,
        }
    }
}

/// Statistics over the whole, unfiltered catalog
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InventorySummary {
    pub total_products: usize,
    pub low_stock: usize,
    pub total_stock: i64,
    pub total_value: f64,
}

impl InventorySummary {
    pub fn from_products(products: &[Product]) -> Self {
        products.iter().fold(Self::default(), |mut acc, p| {
            acc.total_products += 1;
            if p.stock < LOW_STOCK_THRESHOLD {
                acc.low_stock += 1;
            }
            acc.total_stock = acc.total_stock.saturating_add(p.stock);
            acc.total_value += p.value();
            acc
        })
    }
}

/// Everything the dashboard renders, derived in one pass
#[derive(Debug, Clone)]
pub struct DerivedView {
    pub summary: InventorySummary,
    pub window: PageWindow,
    /// Products on the current page, in store order
    pub visible: Vec<Product>,
}

/// Recompute the dashboard view from a snapshot and the UI controls
pub fn derive_view(products: &[Product], query: &str, page: usize, page_size: usize) -> DerivedView {
    let filtered = filter_by_name(products, query);
    let window = PageWindow::new(filtered.len(), page, page_size);
    let visible = window.slice(&filtered).iter().map(|p| (*p).clone()).collect();

    DerivedView {
        summary: InventorySummary::from_products(products),
        window,
        visible,
    }
}
