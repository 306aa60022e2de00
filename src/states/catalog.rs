//! Catalog State
//!
//! The data store: an ordered product list published as immutable snapshots,
//! plus the id counter used for newly created products.

use crate::domain::{Product, ProductFields, ProductId, ProductRecord};
use crate::error::{InvalidSnafu, Result};
use crate::services::CatalogSource;
use crate::states::{FormMode, ProductSubmission};
use gpui::Context;
use snafu::OptionExt;
use std::sync::Arc;
use tracing::{error, info};

/// Owner of the product list for the session
#[derive(Debug, Clone)]
pub struct CatalogState {
    /// Current snapshot, replaced wholesale on every mutation
    products: Arc<[Product]>,
    /// Id handed to the next created product
    next_id: ProductId,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            next_id: 1,
        }
    }

    // ==================== Getters ====================

    /// Current immutable snapshot
    pub fn snapshot(&self) -> Arc<[Product]> {
        self.products.clone()
    }

    /// Find a product by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    // ==================== Loading ====================

    /// Load the catalog from `source` off the UI thread
    ///
    /// Fire-and-forget: a failed load is logged and leaves the store as it was.
    pub fn fetch(&mut self, source: CatalogSource, cx: &mut Context<Self>) {
        info!(source = %source, "Fetching catalog");

        cx.spawn(async move |handle, cx| {
            let label = source.to_string();
            let result = cx
                .background_executor()
                .spawn(async move { source.load() })
                .await;

            match result {
                Ok(records) => {
                    let _ = handle.update(cx, |this, cx| match this.load(records) {
                        Ok(()) => cx.notify(),
                        Err(e) => error!(error = %e, source = %label, "Rejected catalog"),
                    });
                }
                Err(e) => error!(error = %e, source = %label, "Failed to load catalog"),
            }
        })
        .detach();
    }

    // ==================== Mutations ====================

    /// Replace the whole list with loaded records
    ///
    /// The counter restarts at `max(present ids, 0) + 1`. Records that arrive
    /// without an id are numbered from there, in payload order. A payload
    /// whose ids leave no room for the counter is rejected and the store is
    /// left untouched.
    pub fn load(&mut self, records: Vec<ProductRecord>) -> Result<()> {
        let max_id = records.iter().filter_map(|r| r.id).max().unwrap_or(0);
        let mut next_id = successor(max_id)?;

        let mut products = Vec::with_capacity(records.len());
        for record in records {
            let (id, fields) = record.into_parts();
            let id = match id {
                Some(id) => id,
                None => {
                    let assigned = next_id;
                    next_id = successor(next_id)?;
                    assigned
                }
            };
            products.push(Product::from_fields(id, fields));
        }

        info!(count = products.len(), next_id, "Catalog loaded");
        self.products = products.into();
        self.next_id = next_id;
        Ok(())
    }

    /// Insert a new product at the front of the list and return its id
    pub fn create(&mut self, fields: ProductFields) -> Result<ProductId> {
        let id = self.next_id;
        self.next_id = successor(id)?;

        let mut products = Vec::with_capacity(self.products.len() + 1);
        products.push(Product::from_fields(id, fields));
        products.extend(self.products.iter().cloned());
        self.products = products.into();

        info!(id, "Product created");
        Ok(id)
    }

    /// Replace every field of the matching product except its id
    ///
    /// Returns `false` and leaves the store untouched when no product matches.
    pub fn update(&mut self, id: ProductId, fields: ProductFields) -> bool {
        let Some(index) = self.products.iter().position(|p| p.id == id) else {
            tracing::debug!(id, "Update ignored, no product with this id");
            return false;
        };

        let mut products = self.products.to_vec();
        products[index] = Product::from_fields(id, fields);
        self.products = products.into();

        info!(id, "Product updated");
        true
    }

    /// Commit a validated form: create in create mode, update in edit mode
    pub fn save(&mut self, submission: ProductSubmission) -> Result<ProductId> {
        match submission.mode {
            FormMode::Create => self.create(submission.fields),
            FormMode::Edit(id) => {
                self.update(id, submission.fields);
                Ok(id)
            }
        }
    }
}

/// Id following `id`, failing once the id space is exhausted
fn successor(id: ProductId) -> Result<ProductId> {
    id.checked_add(1).context(InvalidSnafu {
        message: format!("product id {id} leaves no room for new ids"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn record(id: Option<ProductId>, name: &str) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            price: 10.0,
            category: "General".to_string(),
            stock: 3,
            description: String::new(),
        }
    }

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            price: 1.0,
            category: "New".to_string(),
            stock: 2,
            description: "fresh".to_string(),
        }
    }

    fn loaded(records: Vec<ProductRecord>) -> CatalogState {
        let mut store = CatalogState::new();
        store.load(records).unwrap();
        store
    }

    fn ids(store: &CatalogState) -> Vec<ProductId> {
        store.snapshot().iter().map(|p| p.id).collect()
    }

    #[test]
    fn create_after_load_continues_from_max_id() {
        let mut store = loaded(vec![record(Some(3), "a"), record(Some(17), "b"), record(Some(5), "c")]);

        assert_eq!(store.create(fields("x")).unwrap(), 18);
        assert_eq!(store.create(fields("y")).unwrap(), 19);
    }

    #[test]
    fn create_on_empty_load_starts_at_one() {
        let mut store = loaded(Vec::new());
        assert_eq!(store.create(fields("first")).unwrap(), 1);
    }

    #[test]
    fn create_prepends() {
        let mut store = loaded(vec![record(Some(1), "old")]);
        store.create(fields("new")).unwrap();

        let names: Vec<_> = store.snapshot().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn missing_ids_are_assigned_after_max() {
        let mut store = loaded(vec![record(None, "a"), record(Some(4), "b"), record(None, "c")]);

        assert_eq!(ids(&store), vec![5, 4, 6]);
        assert_eq!(store.create(fields("d")).unwrap(), 7);
    }

    #[test]
    fn load_replaces_previous_list() {
        let mut store = loaded(vec![record(Some(40), "a")]);
        store.load(vec![record(Some(2), "b")]).unwrap();

        assert_eq!(ids(&store), vec![2]);
        assert_eq!(store.create(fields("c")).unwrap(), 3);
    }

    #[test]
    fn load_rejects_ids_without_a_successor() {
        let mut store = CatalogState::new();
        let result = store.load(vec![record(Some(0), "a"), record(Some(ProductId::MAX), "b")]);

        assert!(matches!(result, Err(Error::Invalid { .. })));
        assert!(store.snapshot().is_empty());
        assert_eq!(store.create(fields("c")).unwrap(), 1);
    }

    #[test]
    fn load_rejects_missing_id_past_the_top() {
        let mut store = loaded(vec![record(Some(1), "keep")]);
        let result = store.load(vec![record(Some(ProductId::MAX - 1), "a"), record(None, "b")]);

        assert!(result.is_err());
        assert_eq!(ids(&store), vec![1]);
    }

    #[test]
    fn create_fails_once_ids_run_out() {
        let mut store = loaded(vec![record(Some(ProductId::MAX - 2), "a")]);

        assert_eq!(store.create(fields("b")).unwrap(), ProductId::MAX - 1);
        assert!(store.create(fields("c")).is_err());
        assert_eq!(ids(&store), vec![ProductId::MAX - 1, ProductId::MAX - 2]);
    }

    #[test]
    fn update_changes_only_the_matching_record() {
        let mut store = loaded(vec![record(Some(1), "a"), record(Some(2), "b"), record(Some(3), "c")]);
        let before = store.snapshot();

        assert!(store.update(2, fields("renamed")));

        let after = store.snapshot();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, 2);
        assert_eq!(after[1].name, "renamed");
        assert_eq!(after[1].description, "fresh");
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let mut store = loaded(vec![record(Some(1), "a"), record(Some(2), "b")]);
        let before = store.snapshot();

        assert!(!store.update(99, fields("ghost")));
        assert_eq!(&*store.snapshot(), &*before);
        assert_eq!(store.create(fields("c")).unwrap(), 3);
    }

    #[test]
    fn earlier_snapshots_are_never_mutated() {
        let mut store = loaded(vec![record(Some(1), "a")]);
        let first = store.snapshot();

        store.update(1, fields("changed"));
        store.create(fields("added")).unwrap();

        assert_eq!(first.len(), 1);
        assert_eq!(first[0].name, "a");
    }

    #[test]
    fn save_dispatches_on_form_mode() {
        let mut store = loaded(vec![record(Some(1), "a")]);

        let created = store
            .save(ProductSubmission {
                mode: FormMode::Create,
                fields: fields("b"),
            })
            .unwrap();
        assert_eq!(created, 2);
        assert_eq!(store.snapshot().len(), 2);

        store
            .save(ProductSubmission {
                mode: FormMode::Edit(1),
                fields: fields("a2"),
            })
            .unwrap();
        assert_eq!(store.snapshot().len(), 2);
        assert_eq!(store.get(1).map(|p| p.name.as_str()), Some("a2"));
    }

    #[test]
    fn get_finds_by_id() {
        let store = loaded(vec![record(Some(8), "eight")]);
        assert_eq!(store.get(8).map(|p| p.name.as_str()), Some("eight"));
        assert!(store.get(9).is_none());
    }
}
