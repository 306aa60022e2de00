//! Catalog Source
//!
//! Where the startup product list comes from: the bundled sample, a local
//! JSON file, or an HTTP(S) URL. Every variant yields the same payload, a
//! JSON array of product records.

use crate::assets::{Assets, SAMPLE_CATALOG};
use crate::domain::ProductRecord;
use crate::error::{AssetSnafu, HttpSnafu, Result};
use snafu::{OptionExt, ResultExt};
use std::fmt;
use std::path::PathBuf;

/// Source of the startup catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    /// Sample catalog compiled into the binary
    #[default]
    Embedded,
    /// JSON file on disk
    File(PathBuf),
    /// JSON served over HTTP(S)
    Url(String),
}

impl CatalogSource {
    /// Interpret a configured source string
    ///
    /// Blank or `embedded` selects the bundled sample, `http://` and
    /// `https://` prefixes select a URL, anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("embedded") {
            CatalogSource::Embedded
        } else if raw.starts_with("http://") || raw.starts_with("https://") {
            CatalogSource::Url(raw.to_string())
        } else {
            CatalogSource::File(PathBuf::from(raw))
        }
    }

    /// Fetch and decode the catalog
    pub fn load(&self) -> Result<Vec<ProductRecord>> {
        let bytes = match self {
            CatalogSource::Embedded => Assets::get(SAMPLE_CATALOG)
                .context(AssetSnafu {
                    path: SAMPLE_CATALOG,
                })?
                .data
                .into_owned(),
            CatalogSource::File(path) => std::fs::read(path)?,
            CatalogSource::Url(url) => fetch(url)?,
        };
        parse_catalog(&bytes)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => write!(f, "embedded sample"),
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => write!(f, "{url}"),
        }
    }
}

/// GET the catalog body
fn fetch(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .context(HttpSnafu { url })?;
    let body = response.bytes().context(HttpSnafu { url })?;
    Ok(body.to_vec())
}

/// Decode a JSON array of product records
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<ProductRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn parse_source_kinds() {
        assert_eq!(CatalogSource::parse(""), CatalogSource::Embedded);
        assert_eq!(CatalogSource::parse(" Embedded "), CatalogSource::Embedded);
        assert_eq!(
            CatalogSource::parse("https://example.com/products.json"),
            CatalogSource::Url("https://example.com/products.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse("data/products.json"),
            CatalogSource::File(PathBuf::from("data/products.json"))
        );
    }

    #[test]
    fn parse_catalog_accepts_optional_ids() {
        let records = parse_catalog(
            br#"[
                {"id": 7, "name": "Lamp", "price": 10, "category": "Home", "stock": 2, "description": ""},
                {"name": "Rug", "price": 99.5, "category": "Home", "stock": 1}
            ]"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, Some(7));
        assert_eq!(records[1].id, None);
        assert_eq!(records[1].price, 99.5);
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(matches!(parse_catalog(b"{\"not\": \"an array\"}"), Err(Error::Json { .. })));
        assert!(parse_catalog(b"").is_err());
    }

    #[test]
    fn embedded_sample_loads() {
        let records = CatalogSource::Embedded.load().unwrap();
        assert!(records.len() > crate::constants::PAGE_SIZE);
        assert!(records.iter().all(|r| r.id.is_some()));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let source = CatalogSource::File(PathBuf::from("/definitely/not/here/products.json"));
        assert!(matches!(source.load(), Err(Error::Io { .. })));
    }

    #[test]
    fn file_source_reads_json() {
        let path = std::env::temp_dir().join(format!(
            "inventory-dashboard-catalog-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"id": 1, "name": "Stool", "price": 5, "stock": 9}]"#).unwrap();

        let records = CatalogSource::File(path.clone()).load().unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Stool");
        assert_eq!(records[0].stock, 9);
    }
}
