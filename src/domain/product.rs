//! Product - Catalog Record Types

use serde::{Deserialize, Serialize};

/// Store-assigned product identifier
pub type ProductId = u64;

/// A product owned by the catalog store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique ID, immutable once assigned
    pub id: ProductId,
    /// Display name (the only searchable field)
    pub name: String,
    /// Unit price, never negative
    pub price: f64,
    /// Free-form category label
    pub category: String,
    /// Units on hand, never negative
    pub stock: i64,
    /// Long description shown on grid cards
    pub description: String,
}

impl Product {
    /// Build a product from an id and a set of editable fields
    pub fn from_fields(id: ProductId, fields: ProductFields) -> Self {
        let fields = fields.sanitized();
        Self {
            id,
            name: fields.name,
            price: fields.price,
            category: fields.category,
            stock: fields.stock,
            description: fields.description,
        }
    }

    /// Copy of the editable fields
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            stock: self.stock,
            description: self.description.clone(),
        }
    }

    /// Stock value at the unit price
    pub fn value(&self) -> f64 {
        self.price * self.stock as f64
    }
}

/// Every field of a product except its id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    pub description: String,
}

impl ProductFields {
    /// Clamp numeric fields into their valid ranges
    pub fn sanitized(mut self) -> Self {
        if !self.price.is_finite() || self.price < 0.0 {
            self.price = 0.0;
        }
        self.stock = self.stock.max(0);
        self
    }
}

/// Product shape as found in a catalog payload
///
/// The id is optional and every other field falls back to its default when
/// missing, so partially filled records still load.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub id: Option<ProductId>,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub stock: i64,
    pub description: String,
}

impl ProductRecord {
    /// Split into the optional id and the editable fields
    pub fn into_parts(self) -> (Option<ProductId>, ProductFields) {
        let fields = ProductFields {
            name: self.name,
            price: self.price,
            category: self.category,
            stock: self.stock,
            description: self.description,
        };
        (self.id, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_fields() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"name": "Desk Lamp", "price": 12.5}"#).unwrap();
        let (id, fields) = record.into_parts();
        assert_eq!(id, None);
        assert_eq!(fields.name, "Desk Lamp");
        assert_eq!(fields.price, 12.5);
        assert_eq!(fields.stock, 0);
        assert!(fields.category.is_empty());
    }

    #[test]
    fn negative_numbers_are_clamped() {
        let product = Product::from_fields(
            1,
            ProductFields {
                name: "Broken".to_string(),
                price: -3.0,
                stock: -7,
                ..Default::default()
            },
        );
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn value_is_price_times_stock() {
        let product = Product::from_fields(
            4,
            ProductFields {
                price: 2.5,
                stock: 4,
                ..Default::default()
            },
        );
        assert_eq!(product.value(), 10.0);
    }
}
