//! Product Form State
//!
//! Staged edits for a single product. Nothing reaches the catalog until
//! `submit` validates the draft and coerces it into `ProductFields`.

use crate::domain::{Product, ProductFields, ProductId};
use std::collections::BTreeMap;

/// Editable fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Price,
    Category,
    Stock,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Price,
        FormField::Category,
        FormField::Stock,
        FormField::Description,
    ];

    /// Stable key used for element ids and translations
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Price => "price",
            FormField::Category => "category",
            FormField::Stock => "stock",
            FormField::Description => "description",
        }
    }

    /// Whether the label carries a required marker
    pub fn is_marked_required(self) -> bool {
        self != FormField::Description
    }

    /// Multi-line fields take Enter as a newline instead of a submit
    pub fn is_multi_line(self) -> bool {
        self == FormField::Description
    }
}

/// Per-field validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    Invalid,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "Required",
            FieldError::Invalid => "Invalid",
        }
    }

    /// Translation key for the message
    pub fn key(self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::Invalid => "invalid",
        }
    }
}

/// Errors recorded by the last submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<FormField, FieldError>);

impl FormErrors {
    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: FormField, error: FieldError) {
        self.0.insert(field, error);
    }
}

/// Whether the form creates a new product or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// Validated form output handed to the save callback
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSubmission {
    pub mode: FormMode,
    pub fields: ProductFields,
}

/// Form-local copy of a product's fields, kept as raw text
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    mode: FormMode,
    name: String,
    price: String,
    category: String,
    stock: String,
    description: String,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductDraft {
    /// Empty draft for a new product
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            name: String::new(),
            price: String::new(),
            category: String::new(),
            stock: "0".to_string(),
            description: String::new(),
        }
    }

    /// Draft pre-filled from an existing product
    pub fn for_product(product: &Product) -> Self {
        Self {
            mode: FormMode::Edit(product.id),
            name: product.name.clone(),
            price: product.price.to_string(),
            category: product.category.clone(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
        }
    }

    /// Draft for `target`, or an empty one when there is none
    pub fn from_target(target: Option<&Product>) -> Self {
        target.map(Self::for_product).unwrap_or_default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Category => &self.category,
            FormField::Stock => &self.stock,
            FormField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Price => self.price = value,
            FormField::Category => self.category = value,
            FormField::Stock => self.stock = value,
            FormField::Description => self.description = value,
        }
    }

    /// Check every rule and collect the failures
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, FieldError::Required);
        }
        if parse_price(&self.price).is_none() {
            errors.insert(FormField::Price, FieldError::Invalid);
        }
        if self.category.trim().is_empty() {
            errors.insert(FormField::Category, FieldError::Required);
        }

        errors
    }

    /// Validate and coerce the staged values
    pub fn submit(&self) -> Result<ProductSubmission, FormErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }

        let fields = ProductFields {
            name: self.name.clone(),
            price: parse_price(&self.price).unwrap_or_default(),
            category: self.category.clone(),
            stock: coerce_stock(&self.stock),
            description: self.description.clone(),
        };

        Ok(ProductSubmission {
            mode: self.mode,
            fields,
        })
    }
}

/// Parse a staged price
///
/// Only the empty string and non-numbers are rejected. Whitespace around a
/// number is ignored and a whitespace-only value reads as 0.
fn parse_price(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Lenient stock coercion: anything unparseable becomes 0
fn coerce_stock(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| {
            raw.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductDraft {
        let mut draft = ProductDraft::new();
        draft.set(FormField::Name, "X");
        draft.set(FormField::Price, "5");
        draft.set(FormField::Category, "Y");
        draft
    }

    #[test]
    fn empty_name_is_required() {
        let mut draft = filled();
        draft.set(FormField::Name, "");

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.get(FormField::Name), Some(FieldError::Required));
        assert_eq!(errors.get(FormField::Name).map(FieldError::message), Some("Required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn whitespace_name_and_category_are_required() {
        let mut draft = filled();
        draft.set(FormField::Name, "   ");
        draft.set(FormField::Category, "\t");

        let errors = draft.validate();
        assert_eq!(errors.get(FormField::Name), Some(FieldError::Required));
        assert_eq!(errors.get(FormField::Category), Some(FieldError::Required));
    }

    #[test]
    fn non_numeric_price_is_invalid() {
        let mut draft = filled();
        draft.set(FormField::Price, "abc");

        let errors = draft.submit().unwrap_err();
        assert_eq!(errors.get(FormField::Price).map(FieldError::message), Some("Invalid"));
    }

    #[test]
    fn empty_price_is_invalid() {
        let mut draft = filled();
        draft.set(FormField::Price, "");
        assert_eq!(draft.validate().get(FormField::Price), Some(FieldError::Invalid));

        draft.set(FormField::Price, "NaN");
        assert_eq!(draft.validate().get(FormField::Price), Some(FieldError::Invalid));
    }

    #[test]
    fn whitespace_price_reads_as_zero() {
        let mut draft = filled();
        draft.set(FormField::Price, "   ");
        assert_eq!(draft.submit().unwrap().fields.price, 0.0);

        draft.set(FormField::Price, " 12.75 ");
        assert_eq!(draft.submit().unwrap().fields.price, 12.75);
    }

    #[test]
    fn valid_draft_coerces_numbers() {
        let submission = filled().submit().unwrap();
        assert_eq!(submission.mode, FormMode::Create);
        assert_eq!(submission.fields.name, "X");
        assert_eq!(submission.fields.price, 5.0);
        assert_eq!(submission.fields.category, "Y");
        assert_eq!(submission.fields.stock, 0);
    }

    #[test]
    fn stock_is_never_an_error() {
        let mut draft = filled();
        draft.set(FormField::Stock, "lots");
        let submission = draft.submit().unwrap();
        assert_eq!(submission.fields.stock, 0);

        draft.set(FormField::Stock, " 12 ");
        assert_eq!(draft.submit().unwrap().fields.stock, 12);

        draft.set(FormField::Stock, "");
        assert_eq!(draft.submit().unwrap().fields.stock, 0);
    }

    #[test]
    fn edit_draft_is_prefilled() {
        let product = Product::from_fields(
            42,
            ProductFields {
                name: "Kettle".to_string(),
                price: 19.5,
                category: "Kitchen".to_string(),
                stock: 7,
                description: "Steel".to_string(),
            },
        );
        let draft = ProductDraft::for_product(&product);

        assert!(draft.is_edit());
        assert_eq!(draft.value(FormField::Price), "19.5");
        assert_eq!(draft.value(FormField::Stock), "7");

        let submission = draft.submit().unwrap();
        assert_eq!(submission.mode, FormMode::Edit(42));
        assert_eq!(submission.fields, product.fields());
    }

    #[test]
    fn only_description_is_multi_line() {
        let multi: Vec<_> = FormField::ALL
            .into_iter()
            .filter(|field| field.is_multi_line())
            .collect();
        assert_eq!(multi, vec![FormField::Description]);
        assert!(!FormField::Description.is_marked_required());
    }

    #[test]
    fn create_draft_defaults() {
        let draft = ProductDraft::from_target(None);
        assert_eq!(draft.mode(), FormMode::Create);
        assert_eq!(draft.value(FormField::Stock), "0");
        assert_eq!(draft.validate().len(), 3);
    }
}
